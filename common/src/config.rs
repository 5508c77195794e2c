use std::env;

use crate::error::{TallyError, TallyResult};

/// Environment variable naming the account to tally.
pub const LOGIN_VAR: &str = "GITHUB_USER";
/// Environment variable holding the API token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
/// Fallback token variable, checked when `GITHUB_TOKEN` is unset.
pub const TOKEN_FALLBACK_VAR: &str = "GH_TOKEN";

/// Resolved account credentials.
///
/// Resolution happens once at the CLI boundary; everything below it
/// receives the values as plain parameters and never touches the
/// process environment.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub token: String,
}

impl Credentials {
    /// Pure resolution from already-read inputs.
    ///
    /// The `--login` flag wins over `GITHUB_USER`; the token comes from
    /// `GITHUB_TOKEN`, else `GH_TOKEN`. Blank values count as unset.
    /// A missing login or token is a configuration error.
    pub fn from_parts(
        flag_login: Option<String>,
        env_login: Option<String>,
        env_token: Option<String>,
        env_token_fallback: Option<String>,
    ) -> TallyResult<Self> {
        let login = first_set([flag_login, env_login]).ok_or_else(|| TallyError::Config {
            reason: format!("no account login; pass --login or set {LOGIN_VAR}"),
        })?;

        let token =
            first_set([env_token, env_token_fallback]).ok_or_else(|| TallyError::Config {
                reason: format!("no API token; set {TOKEN_VAR} (or {TOKEN_FALLBACK_VAR})"),
            })?;

        Ok(Self { login, token })
    }

    /// Reads the process environment once and delegates to
    /// [`Credentials::from_parts`].
    pub fn resolve(flag_login: Option<String>) -> TallyResult<Self> {
        Self::from_parts(
            flag_login,
            env::var(LOGIN_VAR).ok(),
            env::var(TOKEN_VAR).ok(),
            env::var(TOKEN_FALLBACK_VAR).ok(),
        )
    }
}

fn first_set(candidates: [Option<String>; 2]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn flag_login_wins_over_env() {
        let creds =
            Credentials::from_parts(s("flagged"), s("enved"), s("token-a"), None).unwrap();
        assert_eq!(creds.login, "flagged");
        assert_eq!(creds.token, "token-a");
    }

    #[test]
    fn env_login_used_when_no_flag() {
        let creds = Credentials::from_parts(None, s("enved"), s("token-a"), None).unwrap();
        assert_eq!(creds.login, "enved");
    }

    #[test]
    fn token_falls_back_to_secondary_var() {
        let creds = Credentials::from_parts(s("me"), None, None, s("token-b")).unwrap();
        assert_eq!(creds.token, "token-b");
    }

    #[test]
    fn primary_token_wins_over_fallback() {
        let creds = Credentials::from_parts(s("me"), None, s("token-a"), s("token-b")).unwrap();
        assert_eq!(creds.token, "token-a");
    }

    #[test]
    fn blank_values_count_as_unset() {
        let creds = Credentials::from_parts(s("  "), s("enved"), s(""), s("token-b")).unwrap();
        assert_eq!(creds.login, "enved");
        assert_eq!(creds.token, "token-b");
    }

    #[test]
    fn missing_login_is_a_config_error() {
        let err = Credentials::from_parts(None, None, s("token-a"), None).unwrap_err();
        assert!(matches!(err, TallyError::Config { .. }));
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = Credentials::from_parts(s("me"), None, None, None).unwrap_err();
        assert!(matches!(err, TallyError::Config { .. }));
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }
}
