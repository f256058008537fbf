//! Synthetic lunar cycle: phases live in `[0, 30)`, shaders see `[0, 1]`.

use crate::math::{map_range, saturate};

/// Length of the decorative lunar cycle.
pub const PHASE_PERIOD: f32 = 30.0;

/// Phase spread across the row: the first moon sits half a cycle behind
/// the scrub phase, the last half a cycle ahead.
pub const PHASE_SPREAD: f32 = PHASE_PERIOD * 0.5;

/// Wrap any finite phase into `[0, 30)`.
///
/// Idempotent. Handles underflow and overflow of any magnitude.
pub fn wrap_phase(phase: f32) -> f32 {
    let wrapped = phase.rem_euclid(PHASE_PERIOD);
    // rem_euclid can round up to the period for tiny negative inputs
    if wrapped >= PHASE_PERIOD {
        0.0
    } else {
        wrapped
    }
}

/// Phase selected by the pointer: `x` mapped from `[0, width]` to `[0, 30]`.
///
/// `x` is clamped to the viewport first.
pub fn scrub_phase(pointer_x: f32, width: f32) -> f32 {
    let x = pointer_x.clamp(0.0, width.max(0.0));
    map_range(x, 0.0, width, 0.0, PHASE_PERIOD)
}

/// Per-index offset `lerp(-15, 15, i / (n - 1))`. A single moon gets no offset.
pub fn phase_offset(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    map_range(
        index as f32,
        0.0,
        (count - 1) as f32,
        -PHASE_SPREAD,
        PHASE_SPREAD,
    )
}

/// Normalized phase handed to the shader, clamped to `[0, 1]`.
pub fn shader_phase(phase: f32) -> f32 {
    saturate(phase / PHASE_PERIOD)
}

/// Fullness on the `[0, 30)` scale: 0 at the cycle ends, 1 at phase 15.
pub fn cycle_fullness(phase: f32) -> f32 {
    1.0 - (phase - PHASE_SPREAD).abs() / PHASE_SPREAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_phase_stays_in_range() {
        for p in [
            -1000.0, -45.0, -30.0, -15.5, -1e-7, 0.0, 14.9, 29.999, 30.0, 45.0, 61.0, 1e6,
        ] {
            let w = wrap_phase(p);
            assert!((0.0..PHASE_PERIOD).contains(&w), "wrap({p}) = {w}");
        }
    }

    #[test]
    fn wrap_phase_is_idempotent() {
        for p in [-73.2, -0.25, 0.0, 12.0, 30.0, 59.9, 301.7] {
            let once = wrap_phase(p);
            assert_eq!(wrap_phase(once), once);
        }
    }

    #[test]
    fn wrap_phase_handles_overflow_and_underflow() {
        assert!((wrap_phase(-5.0) - 25.0).abs() < 1e-5);
        assert!((wrap_phase(35.0) - 5.0).abs() < 1e-5);
        assert!((wrap_phase(95.0) - 5.0).abs() < 1e-4);
        assert_eq!(wrap_phase(30.0), 0.0);
    }

    #[test]
    fn scrub_phase_maps_and_clamps() {
        assert_eq!(scrub_phase(0.0, 1000.0), 0.0);
        assert!((scrub_phase(500.0, 1000.0) - 15.0).abs() < 1e-5);
        assert!((scrub_phase(1000.0, 1000.0) - 30.0).abs() < 1e-5);
        assert_eq!(scrub_phase(-200.0, 1000.0), 0.0);
        assert!((scrub_phase(5000.0, 1000.0) - 30.0).abs() < 1e-5);
    }

    #[test]
    fn scrub_phase_zero_width_is_mid_cycle() {
        assert_eq!(scrub_phase(10.0, 0.0), 15.0);
    }

    #[test]
    fn phase_offset_spans_half_cycle_each_way() {
        assert!((phase_offset(0, 17) + 15.0).abs() < 1e-5);
        assert!((phase_offset(16, 17) - 15.0).abs() < 1e-5);
        assert!(phase_offset(8, 17).abs() < 1e-5);
        assert!((phase_offset(0, 30) + 15.0).abs() < 1e-5);
        assert!((phase_offset(29, 30) - 15.0).abs() < 1e-5);
    }

    #[test]
    fn phase_offset_single_moon_is_zero() {
        assert_eq!(phase_offset(0, 1), 0.0);
    }

    #[test]
    fn cycle_fullness_peaks_mid_cycle() {
        assert!((cycle_fullness(15.0) - 1.0).abs() < 1e-6);
        assert!(cycle_fullness(0.0).abs() < 1e-6);
        assert!((cycle_fullness(7.5) - 0.5).abs() < 1e-6);
        for p in [0.0, 3.0, 10.0, 14.0, 16.0, 22.0, 29.9] {
            assert!(cycle_fullness(p) <= cycle_fullness(15.0));
        }
    }

    #[test]
    fn shader_phase_normalizes() {
        assert_eq!(shader_phase(0.0), 0.0);
        assert!((shader_phase(15.0) - 0.5).abs() < 1e-6);
        assert_eq!(shader_phase(45.0), 1.0);
    }
}
