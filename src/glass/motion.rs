//! Reduced-motion preference probe
//!
//! Headless stand-in for the `prefers-reduced-motion` media query. Embedding
//! shells with access to the real OS setting should query it themselves and
//! pass the result to the surface builder; this probe only reads the
//! environment.

use std::env;

pub const REDUCED_MOTION_ENV: &str = "STORE_PORTAL_REDUCED_MOTION";

/// True when the environment asks for reduced motion
/// (`1`, `true`, or `reduce`).
pub fn prefers_reduced_motion() -> bool {
    env::var(REDUCED_MOTION_ENV)
        .map(|value| {
            value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("reduce")
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_reads_environment() {
        env::remove_var(REDUCED_MOTION_ENV);
        assert!(!prefers_reduced_motion());

        env::set_var(REDUCED_MOTION_ENV, "reduce");
        assert!(prefers_reduced_motion());

        env::set_var(REDUCED_MOTION_ENV, "0");
        assert!(!prefers_reduced_motion());

        env::remove_var(REDUCED_MOTION_ENV);
    }
}
