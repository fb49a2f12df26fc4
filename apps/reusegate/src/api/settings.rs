//! Server settings, read once at startup.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `REUSEGATE_API_KEY` | Bearer key required on every route but `/health` |
//! | `REUSEGATE_RATE_LIMIT` | Global requests per second, `0` disables |
//! | `REUSEGATE_CORS_ORIGINS` | `*` or a comma-separated origin list; unset means no CORS headers |

/// Requests per second when `REUSEGATE_RATE_LIMIT` is unset or unparsable.
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Security settings for the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub api_key: Option<String>,
    pub rate_limit: u32,
    pub cors_origins: Option<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            rate_limit: DEFAULT_RATE_LIMIT,
            cors_origins: None,
        }
    }
}

impl ServerSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let rate_limit = match read("REUSEGATE_RATE_LIMIT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Unparsable REUSEGATE_RATE_LIMIT, using default");
                DEFAULT_RATE_LIMIT
            }),
            None => DEFAULT_RATE_LIMIT,
        };

        Self {
            api_key: read("REUSEGATE_API_KEY"),
            rate_limit,
            cors_origins: read("REUSEGATE_CORS_ORIGINS"),
        }
    }

    /// Open settings for tests and local use: no key, no limiter, no CORS.
    #[must_use]
    pub fn open() -> Self {
        Self {
            rate_limit: 0,
            ..Self::default()
        }
    }
}
