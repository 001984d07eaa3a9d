pub mod errors;

pub use errors::{ConfigError, ProbeError};
