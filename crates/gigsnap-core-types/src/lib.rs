//! Core types shared across gigsnap facilities
//!
//! - **Schema constants**: canonical field keys and event names used by the
//!   logging facility and by tests asserting on captured events

pub mod schema;
