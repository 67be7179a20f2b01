use clap::{Args, Parser, Subcommand, ValueEnum};
use fra_core::models::FilterCriteria;
use std::path::PathBuf;

/// FRA - Forest Rights Act claim analytics
#[derive(Parser, Debug)]
#[command(name = "fra")]
#[command(about = "Query and summarize Forest Rights Act claims", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Claim FeatureCollection (GeoJSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub claims_file: Option<PathBuf>,

    /// Precomputed analytics (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub analytics_file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List claims matching the filters
    Claims(ClaimsArgs),

    /// Show a single claim
    Claim(ClaimArgs),

    /// Roll claims up by state or tribal community
    Summary(SummaryArgs),

    /// Show submissions per year and per month
    Timeline(TimelineArgs),

    /// Show approval, pending and verification rates
    Performance,

    /// List the distinct values of every filterable attribute
    Options,

    /// Print the precomputed analytics
    Analytics,

    /// Export matching claims as GeoJSON with export metadata
    Export(ExportArgs),

    /// Show the effective configuration and where each value comes from
    Config,
}

/// Attribute filters shared by `claims` and `export`
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub district: Option<String>,

    #[arg(long)]
    pub village: Option<String>,

    /// Rights category (IFR, CFR, CR)
    #[arg(long)]
    pub fra_type: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub tribal_community: Option<String>,

    /// Minimum claim area in hectares (inclusive)
    #[arg(long, value_name = "HA")]
    pub claim_area_min: Option<String>,

    /// Maximum claim area in hectares (inclusive)
    #[arg(long, value_name = "HA")]
    pub claim_area_max: Option<String>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            state: args.state,
            district: args.district,
            village: args.village,
            fra_type: args.fra_type,
            status: args.status,
            tribal_community: args.tribal_community,
            claim_area_min: args.claim_area_min,
            claim_area_max: args.claim_area_max,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ClaimsArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Show at most this many rows (human output only)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct ClaimArgs {
    /// Claim identifier
    pub claim_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    State,
    Tribal,
}

#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Grouping attribute
    #[arg(long, value_enum, default_value = "state")]
    pub by: GroupBy,
}

#[derive(Parser, Debug)]
pub struct TimelineArgs {
    /// Year for the monthly breakdown (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Write the export here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}
