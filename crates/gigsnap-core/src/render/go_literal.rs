//! Go literal encoding.
//!
//! Strings are JSON-escaped; every JSON escape is also a valid escape in a Go
//! interpreted string literal.

use serde_json::Value;
use std::fmt::Display;

/// Double-quoted Go string literal
pub fn go_string(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// `[]int{a, b, c}`
pub fn go_int_slice<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[]int{{{}}}", items.join(", "))
}

/// `[]string{"a", "b"}`
pub fn go_string_slice<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    let items: Vec<String> = values.into_iter().map(|v| go_string(v)).collect();
    format!("[]string{{{}}}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_go_string_escapes_quotes_and_backslashes() {
        assert_eq!(go_string("Queen"), "\"Queen\"");
        assert_eq!(go_string("Guns \"N\" Roses"), r#""Guns \"N\" Roses""#);
        assert_eq!(go_string("AC\\DC"), r#""AC\\DC""#);
        assert_eq!(go_string("line\nbreak"), r#""line\nbreak""#);
    }

    #[test]
    fn test_go_string_keeps_unicode() {
        assert_eq!(go_string("Mötley Crüe"), "\"Mötley Crüe\"");
    }

    #[test]
    fn test_go_slices() {
        assert_eq!(go_int_slice([2019, 2020]), "[]int{2019, 2020}");
        assert_eq!(go_int_slice(Vec::<i32>::new()), "[]int{}");
        let locations = vec!["paris-france".to_string(), "x\"y".to_string()];
        assert_eq!(
            go_string_slice(&locations),
            r#"[]string{"paris-france", "x\"y"}"#
        );
    }
}
