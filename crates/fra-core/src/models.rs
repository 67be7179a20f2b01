pub mod claim;
pub mod collection;
pub mod filter;
pub mod summary;

pub use claim::{status, ClaimDetails, ClaimField, ClaimRecord};
pub use collection::{ClaimCollection, ClaimFeature, CollectionProperties, ExportInfo};
pub use filter::{ClaimFilter, FilterCriteria};
pub use summary::{
    Analytics, ClaimCounts, FilterOptions, GroupSummary, MonthSummary, PerformanceMetrics,
    SimplifiedAnalytics, Timeline, YearSummary,
};
