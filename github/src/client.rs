//! Authenticated access to the GitHub GraphQL API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use tally_common::error::{TallyError, TallyResult};

use crate::queries::{
    self, ContributionsData, CreatedAtData, GraphqlRequest, GraphqlResponse, LoginVars, RangeVars,
};

pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// A bearer-token client for the GitHub GraphQL endpoint.
///
/// One client per run; the underlying `reqwest::Client` reuses its
/// connection across the sequential aggregation calls.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: GITHUB_GRAPHQL_ENDPOINT.to_string(),
            token: token.into(),
        }
    }

    /// Points the client at a different endpoint. Tests use this to
    /// target a local stub server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Executes one GraphQL request and returns the typed `data`
    /// object.
    ///
    /// Failure mapping: the request itself failing is `Network`, a
    /// non-success HTTP status is `Transport` with the raw body, and a
    /// non-empty `errors` array or unusable `data` is `Api`.
    pub async fn execute<V, D>(&self, query: &str, variables: V) -> TallyResult<D>
    where
        V: Serialize,
        D: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint.as_str())
            .header(
                reqwest::header::AUTHORIZATION,
                format!("bearer {}", self.token),
            )
            // The GitHub API rejects requests without a user agent.
            .header(
                reqwest::header::USER_AGENT,
                concat!("tally/", env!("CARGO_PKG_VERSION")),
            )
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|e| TallyError::Network {
                reason: format!("request failed: {e}"),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| TallyError::Network {
            reason: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(TallyError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        parse_body(&body)
    }

    pub async fn account_created_at(&self, login: &str) -> TallyResult<DateTime<Utc>> {
        debug!(login, "fetching account creation date");
        let data: CreatedAtData = self
            .execute(queries::USER_CREATED_AT, LoginVars { login })
            .await?;
        Ok(data.user.created_at)
    }

    pub async fn contributions_between(
        &self,
        login: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> TallyResult<u64> {
        debug!(login, %from, %to, "fetching contribution total");
        let data: ContributionsData = self
            .execute(queries::CONTRIBUTIONS_IN_RANGE, RangeVars { login, from, to })
            .await?;
        Ok(data
            .user
            .contributions_collection
            .contribution_calendar
            .total_contributions)
    }
}

/// Splits the response envelope. The `errors` array is checked before
/// `data` is deserialized, so an API-reported failure never surfaces
/// as a shape mismatch.
fn parse_body<D: DeserializeOwned>(body: &str) -> TallyResult<D> {
    let envelope: GraphqlResponse<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| TallyError::Api {
            messages: vec![format!("malformed response: {e}")],
        })?;

    if !envelope.errors.is_empty() {
        return Err(TallyError::Api {
            messages: envelope.errors.into_iter().map(|e| e.message).collect(),
        });
    }

    let data = envelope
        .data
        .filter(|value| !value.is_null())
        .ok_or_else(|| TallyError::Api {
            messages: vec!["response carried no data".to_string()],
        })?;

    serde_json::from_value(data).map_err(|e| TallyError::Api {
        messages: vec![format!("unexpected response shape: {e}")],
    })
}
