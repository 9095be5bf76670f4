use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Result of a single GET: the HTTP status code, or `0` when the request
/// never produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Outcome(u16);

impl Outcome {
    /// Sentinel for connection, DNS, timeout and protocol failures.
    pub const TRANSPORT_FAILURE: Self = Self(0);
    pub const OK: Self = Self(200);

    #[must_use]
    pub const fn from_status(code: u16) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == Self::OK.0
    }

    #[must_use]
    pub const fn is_transport_failure(self) -> bool {
        self.0 == Self::TRANSPORT_FAILURE.0
    }
}

impl From<reqwest::StatusCode> for Outcome {
    fn from(status: reqwest::StatusCode) -> Self {
        Self(status.as_u16())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Summary of one load-test run. Built once by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub(super) elapsed: Duration,
    pub(super) total: u64,
    pub(super) status_200: u64,
    pub(super) distribution: BTreeMap<Outcome, u64>,
}

impl Report {
    /// Wall-clock time from worker launch to the join.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn status_200(&self) -> u64 {
        self.status_200
    }

    /// Occurrences per observed outcome, including the transport-failure
    /// bucket. Only outcomes that were seen at least once are present.
    #[must_use]
    pub const fn distribution(&self) -> &BTreeMap<Outcome, u64> {
        &self.distribution
    }

    #[must_use]
    pub fn count_of(&self, outcome: Outcome) -> u64 {
        self.distribution.get(&outcome).copied().unwrap_or(0)
    }

    /// Same counts, ignoring elapsed time.
    #[must_use]
    pub fn same_counts(&self, other: &Self) -> bool {
        self.total == other.total
            && self.status_200 == other.status_200
            && self.distribution == other.distribution
    }
}
