use crate::config::GithubConfig;
use crate::error::LookupError;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use ureq::http::StatusCode;
use ureq::Agent;

const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// A validated lookup submission. Construction trims the raw input and
/// rejects an empty username, so a request that exists is always sendable.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    username: String,
}

impl LookupRequest {
    pub fn new(raw: &str) -> Result<Self, LookupError> {
        let username = raw.trim();
        if username.is_empty() {
            return Err(LookupError::EmptyUsername);
        }
        Ok(Self {
            username: username.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Profile fields kept for display, mapped from the users endpoint payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub display_name: String,
    pub login: String,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub profile_url: String,
    /// Raw RFC 3339 creation timestamp; normalized by the caller for display.
    pub created_at: String,
}

/// Wire shape of `GET /users/{username}`, reduced to the fields we render.
#[derive(Debug, Deserialize)]
struct UserResponse {
    login: String,
    name: Option<String>,
    avatar_url: String,
    bio: Option<String>,
    html_url: String,
    created_at: Option<String>,
}

pub struct GithubClient {
    agent: Agent,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Self {
        // Non-2xx statuses must come back as responses, not errors: the 403
        // branch inspects the rate-limit header before classifying.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .build()
            .new_agent();

        Self {
            agent,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Fetch a user profile, classifying every failure into a [`LookupError`].
    ///
    /// Exactly one terminal outcome per call: either a `UserProfile` or a
    /// single classified error.
    pub fn fetch_user(&self, request: &LookupRequest) -> Result<UserProfile, LookupError> {
        let username = request.username();
        let url = format!("{}/users/{username}", self.api_base);

        let mut call = self.agent.get(&url).header("Accept", ACCEPT_HEADER);
        if let Some(ref token) = self.token {
            call = call.header("Authorization", &format!("token {token}"));
        }

        let response = match call.call() {
            Ok(response) => response,
            Err(err) => {
                warn!(username, error = %err, "GitHub request failed at transport level");
                return Err(LookupError::Network);
            }
        };

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(username, "GitHub user not found");
            return Err(LookupError::NotFound {
                username: username.to_string(),
            });
        }

        if status == StatusCode::FORBIDDEN {
            let remaining = response
                .headers()
                .get(RATE_LIMIT_REMAINING_HEADER)
                .and_then(|value| value.to_str().ok());

            return Err(if remaining == Some("0") {
                warn!(username, "GitHub API rate limit exhausted");
                LookupError::RateLimited
            } else {
                warn!(username, "GitHub API returned 403");
                LookupError::Forbidden
            });
        }

        if !status.is_success() {
            warn!(username, status = status.as_u16(), "Unexpected GitHub API status");
            return Err(LookupError::Api {
                status: status.as_u16(),
                text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body: UserResponse = match response.into_body().read_json() {
            Ok(body) => body,
            Err(err) => {
                warn!(username, error = %err, "Failed to decode GitHub user response");
                return Err(LookupError::MalformedResponse);
            }
        };

        let Some(created_at) = body.created_at else {
            warn!(username, "GitHub user response missing created_at");
            return Err(LookupError::MalformedResponse);
        };

        let display_name = match body.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => body.login.clone(),
        };

        debug!(username, created_at = %created_at, "GitHub user retrieved");

        Ok(UserProfile {
            display_name,
            login: body.login,
            avatar_url: body.avatar_url,
            bio: body.bio,
            profile_url: body.html_url,
            created_at,
        })
    }
}
