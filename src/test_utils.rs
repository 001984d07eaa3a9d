//! Shared doubles for unit tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::status::probe::{HealthProbe, ProbeOutcome};
use crate::util::errors::ProbeError;

/// Probe that answers with a fixed status code (or a timeout for `None`) and
/// counts how often it was asked
pub struct FixedProbe {
    code: Option<u16>,
    calls: AtomicUsize,
}

impl FixedProbe {
    pub fn responding(code: u16) -> Self {
        Self {
            code: Some(code),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            code: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthProbe for FixedProbe {
    async fn probe(&self) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.code {
            Some(code) => ProbeOutcome::Responded(code),
            None => ProbeOutcome::Failed(ProbeError::TimedOut(Duration::from_secs(5))),
        }
    }
}
