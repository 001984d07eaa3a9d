use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

use crate::config::ProbeConfig;
use crate::util::errors::ProbeError;

/// Text reported for any probe that did not get an HTTP response
pub const PROBE_ERROR_TEXT: &str = "error";

/// Result of a single health request against the game server
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The server answered; carries the HTTP status code
    Responded(u16),
    /// No response: bad address, network failure or timeout
    Failed(ProbeError),
}

impl ProbeOutcome {
    /// Exactly HTTP 200 counts as healthy
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Responded(200))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Responded(code) => Some(*code),
            ProbeOutcome::Failed(_) => None,
        }
    }
}

/// Decimal status code, or `error`
impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Responded(code) => write!(f, "{}", code),
            ProbeOutcome::Failed(_) => f.write_str(PROBE_ERROR_TEXT),
        }
    }
}

/// Health check against the managed server. Implementations make exactly one
/// attempt per call.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn probe(&self) -> ProbeOutcome;
}

/// Plain `GET http://{address}` with a fixed timeout and no retry
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .no_proxy()
            .build()
            .map_err(ProbeError::Client)?;

        Ok(Self {
            client,
            url: config.url(),
            timeout: config.timeout(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_status(&self) -> Result<u16, ProbeError> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|_| ProbeError::InvalidAddress(self.url.clone()))?;
        let request = self
            .client
            .get(url)
            .build()
            .map_err(ProbeError::Request)?;

        // Own deadline for the request, independent of whoever awaits us
        let response = tokio::time::timeout(self.timeout, self.client.execute(request))
            .await
            .map_err(|_| ProbeError::TimedOut(self.timeout))?
            .map_err(|e| {
                if e.is_timeout() {
                    ProbeError::TimedOut(self.timeout)
                } else {
                    ProbeError::Request(e)
                }
            })?;

        let status = response.status().as_u16();
        // Release the body and connection before reporting
        drop(response);
        Ok(status)
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn probe(&self) -> ProbeOutcome {
        tracing::info!("Fetching server information from {}", self.url);

        match self.fetch_status().await {
            Ok(code) => {
                tracing::debug!("Server answered with status {}", code);
                ProbeOutcome::Responded(code)
            }
            Err(e) => {
                tracing::error!("{}", e);
                ProbeOutcome::Failed(e)
            }
        }
    }
}
