//! Generate command
//!
//! Usage: gigsnap [--variant <VARIANT>] [--source-dir <DIR>] [--workers <N>]

use clap::{Args, ValueEnum};
use gigsnap_client::{DirCatalog, HttpCatalog, HttpCatalogConfig, DEFAULT_API_BASE};
use gigsnap_core::join::DEFAULT_IMAGE_BASE;
use gigsnap_core::logging_facility::{init, Profile};
use gigsnap_core::{CatalogSource, OutputVariant};
use gigsnap_engine::{generate, GenerateConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// serveStaticData with years, locations and availableYears
    StaticData,
    /// StatsHandler with CORS headers and concert counts
    StatsHandler,
}

impl From<VariantArg> for OutputVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::StaticData => OutputVariant::StaticData,
            VariantArg::StatsHandler => OutputVariant::StatsHandler,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Go function to emit
    #[arg(long, value_enum, default_value_t = VariantArg::StaticData)]
    pub variant: VariantArg,

    /// Catalog API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Root of the emitted image references
    #[arg(long, default_value = DEFAULT_IMAGE_BASE)]
    pub image_base: String,

    /// Read catalog documents from <DIR>/<resource>.json instead of the API
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Parallel relation lookups
    #[arg(long, default_value_t = 1)]
    pub workers: usize,

    /// HTTP timeout per request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Log format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Execute generate command
pub fn execute(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    init(match args.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let source: Box<dyn CatalogSource> = match &args.source_dir {
        Some(dir) => Box::new(DirCatalog::new(dir.clone())),
        None => Box::new(HttpCatalog::new(HttpCatalogConfig {
            base_url: args.api_base.clone(),
            timeout: Duration::from_secs(args.timeout_secs),
        })?),
    };

    let config = GenerateConfig {
        variant: args.variant.into(),
        image_base: args.image_base,
        workers: args.workers,
    };

    let outcome = generate(source.as_ref(), &config)?;
    print!("{}", outcome.rendered);

    Ok(())
}
