//! Validation for command bridge timing.

use crate::schema::PeekConfig;

use super::helpers::validate_range_ms;

/// Validate probe, settle, and delivery timings.
pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &PeekConfig) {
    let bridge = &config.bridge;
    validate_range_ms(
        errors,
        "bridge.probe_timeout_ms",
        bridge.probe_timeout_ms,
        10,
        30_000,
    );
    validate_range_ms(
        errors,
        "bridge.settle_delay_ms",
        bridge.settle_delay_ms,
        0,
        10_000,
    );
    validate_range_ms(
        errors,
        "bridge.delivery_timeout_ms",
        bridge.delivery_timeout_ms,
        10,
        60_000,
    );
}
