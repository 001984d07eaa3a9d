use crate::status::probe::{HealthProbe, ProbeOutcome};

pub const SUCCESS_COLOR: u32 = 0x57F287;
pub const FAILURE_COLOR: u32 = 0xFF0000;
pub const INFO_COLOR: u32 = 0xADD8E6;

/// Accent color attached to a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Success,
    Failure,
    Info,
}

impl StatusColor {
    pub fn value(self) -> u32 {
        match self {
            StatusColor::Success => SUCCESS_COLOR,
            StatusColor::Failure => FAILURE_COLOR,
            StatusColor::Info => INFO_COLOR,
        }
    }

    /// Success only for an exact HTTP 200
    pub fn from_outcome(outcome: &ProbeOutcome) -> Self {
        if outcome.is_success() {
            StatusColor::Success
        } else {
            StatusColor::Failure
        }
    }

    /// Marker shown in front of a rendered reply title
    pub fn marker(self) -> &'static str {
        match self {
            StatusColor::Success => "🟢",
            StatusColor::Failure => "🔴",
            StatusColor::Info => "🔵",
        }
    }
}

/// Probe the server now and map the result to a color. Nothing is cached, every
/// call hits the network once. The `serverstatus` command instead maps its
/// own single probe through `from_outcome` so code and color always agree.
pub async fn color_status(probe: &dyn HealthProbe) -> StatusColor {
    StatusColor::from_outcome(&probe.probe().await)
}
