mod response;

pub use response::HealthResponse;
