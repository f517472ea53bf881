//! Motion profiles: map elapsed time to arc length along the trajectory.
//!
//! Helpers for driving the `length` position strategy with non-uniform
//! apparent speed. These are conveniences for calling animation loops, not
//! part of the evaluator contract.

use kin_math::ease::smoothstep;

/// Uniform motion: arc length grows linearly with time, capped at the
/// trajectory's total length.
pub fn constant_speed(total_length: f64, t: f64, duration: f64) -> f64 {
    (total_length * t / duration).min(total_length)
}

/// Smoothstep progress fraction over `[0, duration]`, for eased starts and
/// stops. Multiply by the total length to get an arc length.
pub fn s_curve(t: f64, duration: f64) -> f64 {
    smoothstep(t / duration)
}

/// Trapezoidal speed profile: accelerate at `a` to `v_max`, cruise, then
/// decelerate to rest exactly at the end of the trajectory.
///
/// Falls back to a triangular profile (no cruise phase) when the
/// trajectory is too short to reach `v_max`. The result is clamped to
/// `[0, total_length]`.
pub fn accel_decel(total_length: f64, t: f64, v_max: f64, a: f64) -> f64 {
    let t_acc = v_max / a;
    let s_acc = 0.5 * a * t_acc * t_acc;

    if 2.0 * s_acc >= total_length {
        // too short to reach v_max: triangular profile
        let t_peak = (total_length / a).sqrt();
        let v_peak = a * t_peak;
        let s = if t <= t_peak {
            0.5 * a * t * t
        } else {
            let dt = t - t_peak;
            0.5 * total_length + v_peak * dt - 0.5 * a * dt * dt
        };
        return s.clamp(0.0, total_length);
    }

    let s_cruise = total_length - 2.0 * s_acc;
    let t_cruise = s_cruise / v_max;

    let s = if t <= t_acc {
        0.5 * a * t * t
    } else if t <= t_acc + t_cruise {
        s_acc + v_max * (t - t_acc)
    } else {
        let dt = t - t_acc - t_cruise;
        s_acc + s_cruise + v_max * dt - 0.5 * a * dt * dt
    };
    s.clamp(0.0, total_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_speed() {
        assert_eq!(constant_speed(10.0, 0.0, 5.0), 0.0);
        assert_eq!(constant_speed(10.0, 2.5, 5.0), 5.0);
        assert_eq!(constant_speed(10.0, 5.0, 5.0), 10.0);
        // past the end: capped
        assert_eq!(constant_speed(10.0, 8.0, 5.0), 10.0);
    }

    #[test]
    fn test_s_curve_fraction() {
        assert_eq!(s_curve(0.0, 2.0), 0.0);
        assert_eq!(s_curve(1.0, 2.0), 0.5);
        assert_eq!(s_curve(2.0, 2.0), 1.0);
    }

    #[test]
    fn test_accel_decel_trapezoid_reaches_end() {
        let total = 10.0;
        let v_max = 1.0;
        let a = 1.0;
        // t_acc = 1, s_acc = 0.5, cruise = 9.0 over 9s, total time 11s
        assert!((accel_decel(total, 0.0, v_max, a)).abs() < 1e-12);
        assert!((accel_decel(total, 1.0, v_max, a) - 0.5).abs() < 1e-12);
        assert!((accel_decel(total, 10.0, v_max, a) - 9.5).abs() < 1e-12);
        assert!((accel_decel(total, 11.0, v_max, a) - 10.0).abs() < 1e-12);
        assert_eq!(accel_decel(total, 20.0, v_max, a), 10.0);
    }

    #[test]
    fn test_accel_decel_monotone() {
        let mut prev = 0.0;
        for i in 0..=110 {
            let t = i as f64 * 0.1;
            let s = accel_decel(10.0, t, 1.0, 1.0);
            assert!(s + 1e-12 >= prev, "not monotone at t = {t}");
            prev = s;
        }
    }

    #[test]
    fn test_accel_decel_triangular_short_trajectory() {
        // total 1.0 with v_max 10: never reaches cruise speed
        let total = 1.0;
        let t_peak = (total / 1.0_f64).sqrt();
        let half = accel_decel(total, t_peak, 10.0, 1.0);
        assert!((half - 0.5).abs() < 1e-12);
        let done = accel_decel(total, 2.0 * t_peak, 10.0, 1.0);
        assert!((done - total).abs() < 1e-12);
        assert_eq!(accel_decel(total, 100.0, 10.0, 1.0), total);
    }
}
