use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc};

use tally_common::error::{TallyError, TallyResult};
use tally_core::source::ContributionSource;

/// Canned contribution source: a fixed creation date, one total for
/// the rolling last-12-months window and one per calendar-year window.
pub struct StubSource {
    pub created_at: DateTime<Utc>,
    pub last_year_total: u64,
    pub yearly_total: u64,
}

#[async_trait]
impl ContributionSource for StubSource {
    async fn account_created_at(&self, _login: &str) -> TallyResult<DateTime<Utc>> {
        Ok(self.created_at)
    }

    async fn contributions(
        &self,
        _login: &str,
        from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> TallyResult<u64> {
        // Calendar-year windows open at midnight on Jan 1; the rolling
        // window opens wherever `now` fell a year earlier.
        let yearly = from.month() == 1 && from.day() == 1 && from.num_seconds_from_midnight() == 0;
        if yearly {
            Ok(self.yearly_total)
        } else {
            Ok(self.last_year_total)
        }
    }
}

/// A source whose range queries always fail, for propagation tests.
pub struct UnreachableSource;

#[async_trait]
impl ContributionSource for UnreachableSource {
    async fn account_created_at(&self, _login: &str) -> TallyResult<DateTime<Utc>> {
        Err(TallyError::Network {
            reason: "connection refused".to_string(),
        })
    }

    async fn contributions(
        &self,
        _login: &str,
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> TallyResult<u64> {
        Err(TallyError::Network {
            reason: "connection refused".to_string(),
        })
    }
}
