//! Shared numeric constants for the sounding-analysis pipeline.

/// Sentinel value standing in for absent or unmeasured data.
pub const MISSING: f64 = -9999.0;

/// Near-zero threshold below which computed magnitudes and directions snap
/// to exactly 0, suppressing trigonometric round-off noise.
pub const TOL: f64 = 1e-10;
