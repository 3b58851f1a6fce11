//! Specs loader
//!
//! Fetches the computer specs once, writes them to the display sink on success and
//! reports failures on the diagnostic channel. Errors never leave the loader.

use std::time::Duration;

use tokio::time::{sleep, timeout};

use crate::specs::{
    DiagnosticChannel, DisplaySink, FetchState, LoadError, SpecsDisplay, SpecsProvider,
    SpecsResult,
};
use crate::storage::settings::AppSettings;

/// Bounds applied to the provider call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Per-attempt deadline
    pub timeout: Duration,
    /// Total attempts, including the first one
    pub max_attempts: u32,
    pub retry_backoff: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            max_attempts: 2,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl From<&AppSettings> for LoaderConfig {
    fn from(settings: &AppSettings) -> Self {
        Self {
            timeout: Duration::from_secs(settings.fetch_timeout_secs),
            max_attempts: settings.fetch_attempts.max(1),
            retry_backoff: Duration::from_millis(settings.retry_backoff_ms),
        }
    }
}

pub struct SpecsLoader {
    config: LoaderConfig,
    state: FetchState,
}

impl SpecsLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            state: FetchState::Pending,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Run the fetch and settle the state. Later calls return the settled state untouched.
    pub async fn load<P, S, D>(
        &mut self,
        provider: &P,
        sink: &mut S,
        diagnostics: &mut D,
    ) -> &FetchState
    where
        P: SpecsProvider + ?Sized,
        S: DisplaySink + ?Sized,
        D: DiagnosticChannel + ?Sized,
    {
        if !self.state.is_pending() {
            tracing::warn!("Specs already loaded for this session, ignoring repeated load");
            return &self.state;
        }

        match self.fetch(provider).await {
            Ok(specs) => {
                sink.present(SpecsDisplay::from(&specs));
                tracing::info!("Computer specs loaded: {} / {}", specs.os, specs.cpu);
                self.state = FetchState::Succeeded(specs);
            }
            Err(e) => {
                diagnostics.report(&format!("Failed to load computer specs: {}", e));
                self.state = FetchState::Failed(e.to_string());
            }
        }
        &self.state
    }

    async fn fetch<P>(&self, provider: &P) -> Result<SpecsResult, LoadError>
    where
        P: SpecsProvider + ?Sized,
    {
        let mut attempt = 1;
        loop {
            match self.fetch_once(provider).await {
                Ok(specs) => return Ok(specs),
                Err(e) if e.is_retryable() && attempt < self.config.max_attempts => {
                    tracing::warn!(
                        "Specs fetch attempt {}/{} failed: {}",
                        attempt,
                        self.config.max_attempts,
                        e
                    );
                    sleep(self.config.retry_backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once<P>(&self, provider: &P) -> Result<SpecsResult, LoadError>
    where
        P: SpecsProvider + ?Sized,
    {
        let payload = timeout(self.config.timeout, provider.get_computer_specs())
            .await
            .map_err(|_| LoadError::Timeout(self.config.timeout))?
            .map_err(|e| LoadError::ProviderUnavailable(e.to_string()))?;
        SpecsResult::from_payload(payload)
    }
}
