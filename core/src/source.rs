//! The seam between the aggregation engine and the remote API.
//!
//! The engine depends on this abstraction rather than on the concrete
//! GraphQL client, so tests can substitute a canned source and the
//! whole flow runs without a network.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use tally_common::error::TallyResult;
use tally_github::GithubClient;

/// Anything that can answer the two questions the tally needs:
/// when the account was created, and how many contributions landed
/// in a date range.
#[async_trait]
pub trait ContributionSource {
    async fn account_created_at(&self, login: &str) -> TallyResult<DateTime<Utc>>;

    async fn contributions(
        &self,
        login: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> TallyResult<u64>;
}

#[async_trait]
impl ContributionSource for GithubClient {
    async fn account_created_at(&self, login: &str) -> TallyResult<DateTime<Utc>> {
        GithubClient::account_created_at(self, login).await
    }

    async fn contributions(
        &self,
        login: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> TallyResult<u64> {
        self.contributions_between(login, from, to).await
    }
}
