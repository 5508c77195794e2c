//! GraphQL wire shapes: the two query documents, their variables, and
//! the typed slices of the response the tool actually reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fetches the account creation date.
pub const USER_CREATED_AT: &str = "\
query($login: String!) {
  user(login: $login) { createdAt }
}";

/// Fetches the contribution total for one date range.
pub const CONTRIBUTIONS_IN_RANGE: &str = "\
query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar { totalContributions }
    }
  }
}";

/// The `{query, variables}` request body.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

/// The `{data, errors}` response envelope. Any non-empty `errors`
/// array is fatal, even next to partial data.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginVars<'a> {
    pub login: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RangeVars<'a> {
    pub login: &'a str,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreatedAtData {
    pub user: CreatedAtUser,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAtUser {
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ContributionsData {
    pub user: ContributionsUser,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
}
