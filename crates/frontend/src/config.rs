use crate::shared::api_utils::api_base;

/// How long the signup confirmation stays up before the form flips to login.
pub const SIGNUP_REDIRECT_DELAY_MS: u32 = 1500;

/// Lifetime of a success banner on the merchant dashboard.
pub const NOTICE_TTL_MS: u32 = 3000;

/// Ledger API base URL baked in at build time, e.g.
/// `TIPS_API_URL=https://api.example.com trunk build`
const COMPILED_API_URL: Option<&str> = option_env!("TIPS_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub signup_redirect_delay_ms: u32,
    pub notice_ttl_ms: u32,
}

impl ClientConfig {
    /// Load configuration for the running page
    ///
    /// Search order:
    /// 1. `TIPS_API_URL` captured at compile time
    /// 2. Current window host on port 3000
    pub fn load() -> Self {
        let config = Self::with_api_base(resolve_api_base(COMPILED_API_URL, api_base));
        log::info!("Ledger API at {}", config.api_base);
        config
    }

    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            signup_redirect_delay_ms: SIGNUP_REDIRECT_DELAY_MS,
            notice_ttl_ms: NOTICE_TTL_MS,
        }
    }
}

/// A blank compiled value counts as unset.
pub fn resolve_api_base(compiled: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    match compiled.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
        _ => fallback(),
    }
}
