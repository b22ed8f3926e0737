//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// `replenish_secs` is the interval in seconds at which one quota slot is
/// restored.
fn build(replenish_secs: u64, burst_size: u32) -> IpGovernorLayer {
    // `finish` only fails on a zero period or burst.
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_secs)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for the public API.
///
/// # Limits
///
/// - **Rate**: one request every 2 seconds once the burst is spent
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/services", get(list_services_handler))
///     .layer(rate_limit::layer());
/// ```
pub fn layer() -> IpGovernorLayer {
    build(2, 100)
}

/// Creates a stricter rate limiter for writes an anonymous client can make.
///
/// # Limits
///
/// - **Rate**: one request per second once the burst is spent
/// - **Burst**: 10 requests
///
/// Used for `POST /api/auth/login` and `POST /api/appointments`.
pub fn strict_layer() -> IpGovernorLayer {
    build(1, 10)
}
