pub mod color;
pub mod probe;

pub use color::{color_status, StatusColor};
pub use probe::{HealthProbe, HttpProbe, ProbeOutcome, PROBE_ERROR_TEXT};
