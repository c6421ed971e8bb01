use crate::{AuthError, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Configuration for credential issuance rate limiting
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum issuance requests per window, per email
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 30,
            window_secs: 60,
        }
    }
}

/// Per-email limiter guarding `GET /jwt`
pub struct IssueRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
}

impl IssueRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));

        let quota = Quota::with_period(window / burst.get())
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    /// Check whether another credential may be issued for `email`
    #[track_caller]
    pub fn check(&self, email: &str) -> AuthErrorResult<()> {
        let key = email.trim().to_lowercase();
        self.limiter.check_key(&key).map_err(|_| {
            log::warn!("Credential issuance rate limited for {}", key);
            AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Drop keys whose window has fully elapsed
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
    }
}

impl Default for IssueRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
