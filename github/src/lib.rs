pub mod client;
pub mod queries;

pub use client::{GITHUB_GRAPHQL_ENDPOINT, GithubClient};
