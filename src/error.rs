use std::error::Error;
use std::fmt;

/// Terminal failure classes for a single lookup attempt.
///
/// Every variant renders a ready-to-display message, so the view layer
/// never has to interpret error kinds beyond printing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Username was empty after trimming; no request was issued.
    EmptyUsername,
    /// HTTP 404 from the users endpoint.
    NotFound { username: String },
    /// HTTP 403 with `X-RateLimit-Remaining: 0`.
    RateLimited,
    /// HTTP 403 for any other reason.
    Forbidden,
    /// Any other non-success status.
    Api { status: u16, text: String },
    /// Transport-level failure (DNS, connect, timeout).
    Network,
    /// Success status but the body was unusable.
    MalformedResponse,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::EmptyUsername => {
                write!(f, "Please enter a GitHub username")
            }
            LookupError::NotFound { username } => {
                write!(f, "User \"{username}\" not found on GitHub")
            }
            LookupError::RateLimited => write!(
                f,
                "GitHub API rate limit exceeded. Please add a personal access token to the URL: ?token=YOUR_TOKEN"
            ),
            LookupError::Forbidden => write!(
                f,
                "Access forbidden. Please check your token or try again later."
            ),
            LookupError::Api { status, text } => {
                write!(f, "GitHub API error: {status} {text}")
            }
            LookupError::Network => {
                write!(f, "Network error: Please check your internet connection")
            }
            LookupError::MalformedResponse => {
                write!(f, "Invalid response from GitHub API: missing created_at field")
            }
        }
    }
}

impl Error for LookupError {}
