//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer,
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
};

type ApiGovernorConfig = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>>;

/// Token bucket parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    /// Tokens refilled per second.
    pub per_second: u64,
    /// Bucket size.
    pub burst_size: u32,
}

impl RateLimitSettings {
    /// Time after which one token is returned to the bucket.
    ///
    /// `None` when `per_second` is zero or too large to express in nanoseconds.
    pub fn replenish_interval(&self) -> Option<Duration> {
        let nanos = 1_000_000_000u64.checked_div(self.per_second)?;
        (nanos > 0).then(|| Duration::from_nanos(nanos))
    }
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 100,
        }
    }
}

/// Creates a rate limiter for the API.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns `None` when either setting is zero.
///
/// # Example
///
/// ```rust,ignore
/// let api = Router::new()
///     .route("/airplane", get(list_airplanes_handler))
///     .layer(rate_limit::layer(RateLimitSettings::default()).unwrap());
/// ```
pub fn layer(
    settings: RateLimitSettings,
) -> Option<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = config(settings)?;

    Some(GovernorLayer::new(Arc::new(governor_conf)))
}

fn config(settings: RateLimitSettings) -> Option<ApiGovernorConfig> {
    // The builder's `per_second(n)` means one token every n seconds.
    GovernorConfigBuilder::default()
        .period(settings.replenish_interval()?)
        .burst_size(settings.burst_size)
        .finish()
}
