//! Emitter: render a snapshot as Go source for the downstream server.
//!
//! Rendering is pure. The same snapshot always renders to byte-identical
//! text, and nothing here touches stdout; the CLI writes the result.

mod go_literal;
pub mod static_data;
pub mod stats_handler;

pub use go_literal::{go_int_slice, go_string, go_string_slice};
pub use static_data::render_static_data;
pub use stats_handler::render_stats_handler;

use crate::snapshot::Snapshot;

/// Which Go function the snapshot is rendered into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputVariant {
    /// `serveStaticData`: full records with years, locations and
    /// `availableYears`
    #[default]
    StaticData,
    /// `StatsHandler`: id, name, image and concert count only
    StatsHandler,
}

impl OutputVariant {
    /// Whether this variant needs per-artist relation lookups
    pub fn needs_locations(&self) -> bool {
        matches!(self, OutputVariant::StaticData)
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputVariant::StaticData => "static-data",
            OutputVariant::StatsHandler => "stats-handler",
        }
    }
}

impl std::fmt::Display for OutputVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `snapshot` in the given variant
pub fn render(snapshot: &Snapshot, variant: OutputVariant) -> String {
    match variant {
        OutputVariant::StaticData => render_static_data(snapshot),
        OutputVariant::StatsHandler => render_stats_handler(snapshot),
    }
}
