//! Readers for the two input files: the claim FeatureCollection and the
//! precomputed statistics blob.

pub mod geojson;
pub mod non_finite;
pub mod statistics;
pub mod validation;

pub use self::geojson::{parse_claims, read_claims, ClaimsFile};
pub use self::non_finite::null_non_finite;
pub use self::statistics::read_statistics;
pub use self::validation::{FileValidation, FileValidator};
