// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

use crate::config::RateLimitConfig;

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP limiter for the public inbox endpoints. `None` when limiting
/// is switched off or the figures cannot form a quota.
pub fn rate_limit_layer(config: RateLimitConfig) -> Option<RateLimitLayer> {
    if !config.enabled {
        return None;
    }

    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(config.per_second);
    builder.burst_size(config.burst);
    let governor = builder.key_extractor(SmartIpKeyExtractor).finish();
    if governor.is_none() {
        tracing::warn!(?config, "rate limit configuration rejected; limiter disabled");
    }
    governor.map(GovernorLayer::new)
}
