use serde::Deserialize;

use crate::args::{OutputFormat, PositiveUsize};
use crate::error::ValidationError;

/// Largest request count the outcome channel can buffer.
pub const MAX_TOTAL_REQUESTS: usize = usize::MAX >> 3;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub requests: Option<i64>,
    pub concurrency: Option<i64>,
    pub output_format: Option<OutputFormat>,
}

/// Validated inputs for one run. Only constructible through [`LoadTestConfig::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTestConfig {
    url: String,
    total_requests: PositiveUsize,
    concurrency: PositiveUsize,
}

impl LoadTestConfig {
    /// Validates raw run inputs.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty or either count is not positive.
    pub fn new(
        url: impl Into<String>,
        total_requests: i64,
        concurrency: i64,
    ) -> Result<Self, ValidationError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ValidationError::UrlEmpty);
        }
        let total_requests = PositiveUsize::try_from(total_requests).map_err(|err| match err {
            ValidationError::ValueTooSmall { .. } => ValidationError::RequestsNotPositive {
                value: total_requests,
            },
            other => other,
        })?;
        if total_requests.get() > MAX_TOTAL_REQUESTS {
            return Err(ValidationError::ValueTooLarge {
                value: i64::try_from(total_requests.get()).unwrap_or(i64::MAX),
            });
        }
        let concurrency = PositiveUsize::try_from(concurrency).map_err(|err| match err {
            ValidationError::ValueTooSmall { .. } => ValidationError::ConcurrencyNotPositive {
                value: concurrency,
            },
            other => other,
        })?;
        Ok(Self {
            url,
            total_requests,
            concurrency,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn total_requests(&self) -> PositiveUsize {
        self.total_requests
    }

    #[must_use]
    pub const fn concurrency(&self) -> PositiveUsize {
        self.concurrency
    }

    /// Requests issued by each worker (floor of total / concurrency).
    #[must_use]
    pub fn per_worker(&self) -> usize {
        self.total_requests
            .get()
            .checked_div(self.concurrency.get())
            .unwrap_or(0)
    }

    /// Requests left over by the floor division. These are never sent.
    #[must_use]
    pub fn dropped_requests(&self) -> usize {
        self.total_requests
            .get()
            .checked_rem(self.concurrency.get())
            .unwrap_or(0)
    }

    /// Number of outcomes a run will actually produce.
    #[must_use]
    pub fn effective_total(&self) -> usize {
        self.per_worker().saturating_mul(self.concurrency.get())
    }
}
