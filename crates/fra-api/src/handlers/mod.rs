mod analytics;
mod claims;
mod health;
mod options;

pub use analytics::{get_analytics, performance, state_summary, timeline, tribal_analysis};
pub use claims::{export_claims, get_claim, list_claims};
pub use health::health_check;
pub use options::filter_options;
