//! Per-frame kinematic state evaluation.

use kin_core::{KinError, Result, Tolerance};
use kin_math::{angles::yaw_degrees, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::frenet::FrenetFrame;
use crate::sample::{direction_table, SampleContext};
use crate::strategy::StrategyRegistry;
use crate::trajectory::{PolylineMetrics, Trajectory};

/// Kinematic state of a point on the trajectory.
///
/// `direction` is unit length. `yaw` is `atan2(direction.y, direction.x)`
/// in degrees, the planar heading convention of the consuming renderer;
/// the direction's z component does not contribute to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Point3,
    pub direction: Vector3,
    pub yaw: f64,
}

/// Evaluates the kinematic state along a fixed trajectory.
///
/// Construction precomputes the arc-length metrics, direction table, and
/// Frenet frame once; `evaluate` is a pure function over those immutable
/// tables, so an evaluator can be queried from multiple threads without
/// synchronization and repeated calls with identical arguments return
/// bitwise-identical states.
pub struct Evaluator {
    trajectory: Trajectory,
    metrics: PolylineMetrics,
    directions: Vec<Vector3>,
    frame: FrenetFrame,
    registry: StrategyRegistry,
    tolerance: Tolerance,
}

impl Evaluator {
    /// Build an evaluator with the built-in strategy registry.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        Self::with_registry(points, StrategyRegistry::with_builtins())
    }

    /// Build an evaluator with an injected registry.
    pub fn with_registry(points: Vec<Point3>, registry: StrategyRegistry) -> Result<Self> {
        let trajectory = Trajectory::new(points)?;
        let tolerance = Tolerance::default();
        let metrics = PolylineMetrics::of(&trajectory);
        let directions = direction_table(&trajectory, tolerance);
        let frame = FrenetFrame::of(&trajectory, &directions, tolerance);
        Ok(Self {
            trajectory,
            metrics,
            directions,
            frame,
            registry,
            tolerance,
        })
    }

    /// Evaluate the kinematic state at normalized progress `t`.
    ///
    /// `t` must be finite; values outside `[0, 1]` are clamped so per-frame
    /// sampling stays robust under floating-point drift. Strategy names are
    /// resolved through the registry; a lookup miss is an error, never a
    /// silent default. A resolved direction with near-zero magnitude is
    /// reported as [`KinError::DegenerateDirection`] so callers never
    /// receive a nonsensical yaw.
    pub fn evaluate(
        &self,
        t: f64,
        position_strategy: &str,
        orientation_strategy: &str,
    ) -> Result<KinematicState> {
        if !t.is_finite() {
            return Err(KinError::InvalidParameter(format!(
                "progress must be finite, got {t}"
            )));
        }
        let t = t.clamp(0.0, 1.0);

        let position_fn = self.registry.position_strategy(position_strategy)?;
        let orientation_fn = self.registry.orientation_strategy(orientation_strategy)?;

        let ctx = self.context();
        let position = position_fn(&ctx, t);
        let raw = orientation_fn(&ctx, t);

        let magnitude = raw.length();
        if self.tolerance.direction_is_degenerate(magnitude) {
            return Err(KinError::DegenerateDirection(format!(
                "strategy '{orientation_strategy}' produced |v| = {magnitude:.3e} at t = {t}"
            )));
        }
        let direction = raw / magnitude;

        Ok(KinematicState {
            position,
            direction,
            yaw: yaw_degrees(direction),
        })
    }

    /// Register a position strategy on this evaluator's registry.
    pub fn register_position_strategy<F>(&mut self, name: impl Into<String>, strategy: F)
    where
        F: Fn(&SampleContext<'_>, f64) -> Point3 + Send + Sync + 'static,
    {
        self.registry.register_position_strategy(name, strategy);
    }

    /// Register an orientation strategy on this evaluator's registry.
    pub fn register_orientation_strategy<F>(&mut self, name: impl Into<String>, strategy: F)
    where
        F: Fn(&SampleContext<'_>, f64) -> Vector3 + Send + Sync + 'static,
    {
        self.registry.register_orientation_strategy(name, strategy);
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn total_length(&self) -> f64 {
        self.metrics.total_length()
    }

    pub fn segment_lengths(&self) -> &[f64] {
        self.metrics.segment_lengths()
    }

    pub fn cumulative_lengths(&self) -> &[f64] {
        self.metrics.cumulative_lengths()
    }

    pub fn direction_table(&self) -> &[Vector3] {
        &self.directions
    }

    pub fn frenet_frame(&self) -> &FrenetFrame {
        &self.frame
    }

    pub fn curvature(&self) -> &[f64] {
        self.frame.curvature()
    }

    pub fn radius_of_curvature(&self) -> &[f64] {
        self.frame.radius_of_curvature()
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    fn context(&self) -> SampleContext<'_> {
        SampleContext {
            trajectory: &self.trajectory,
            metrics: &self.metrics,
            directions: &self.directions,
            frame: &self.frame,
            tolerance: self.tolerance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    fn zigzag() -> Evaluator {
        Evaluator::new(vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(0.5, 0.0, 0.0),
            dvec3(2.0, 0.0, 0.0),
            dvec3(2.0, 1.0, 0.0),
            dvec3(3.0, 1.0, 0.0),
            dvec3(3.0, 3.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_construction_rejects_short_trajectory() {
        match Evaluator::new(vec![dvec3(0.0, 0.0, 0.0)]) {
            Err(KinError::InvalidTrajectory(_)) => {}
            _ => panic!("expected InvalidTrajectory"),
        }
    }

    #[test]
    fn test_endpoints_for_both_position_strategies() {
        let eval = zigzag();
        for pos in ["index", "length"] {
            let start = eval.evaluate(0.0, pos, "index").unwrap();
            let end = eval.evaluate(1.0, pos, "index").unwrap();
            assert!((start.position - eval.trajectory().first()).length() < 1e-12);
            assert!((end.position - eval.trajectory().last()).length() < 1e-12);
        }
    }

    #[test]
    fn test_out_of_range_t_clamps() {
        let eval = zigzag();
        let below = eval.evaluate(-0.5, "length", "length").unwrap();
        let at_zero = eval.evaluate(0.0, "length", "length").unwrap();
        assert_eq!(below, at_zero);

        let above = eval.evaluate(1.5, "length", "length").unwrap();
        let at_one = eval.evaluate(1.0, "length", "length").unwrap();
        assert_eq!(above, at_one);
    }

    #[test]
    fn test_non_finite_t_rejected() {
        let eval = zigzag();
        for t in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            match eval.evaluate(t, "index", "index") {
                Err(KinError::InvalidParameter(_)) => {}
                _ => panic!("expected InvalidParameter for t = {t}"),
            }
        }
    }

    #[test]
    fn test_unknown_strategy_surfaced() {
        let eval = zigzag();
        match eval.evaluate(0.5, "spline", "index") {
            Err(KinError::UnknownStrategy(msg)) => assert!(msg.contains("spline")),
            _ => panic!("expected UnknownStrategy"),
        }
        match eval.evaluate(0.5, "index", "wobble") {
            Err(KinError::UnknownStrategy(msg)) => assert!(msg.contains("wobble")),
            _ => panic!("expected UnknownStrategy"),
        }
    }

    #[test]
    fn test_yaw_matches_direction() {
        let eval = Evaluator::new(vec![dvec3(0.0, 0.0, 0.0), dvec3(0.0, 2.0, 0.0)]).unwrap();
        let state = eval.evaluate(0.5, "index", "index").unwrap();
        assert!((state.yaw - 90.0).abs() < 1e-10);
        assert!((state.direction - dvec3(0.0, 1.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_direction_is_unit() {
        let eval = zigzag();
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let state = eval.evaluate(t, "length", "length").unwrap();
            assert!((state.direction.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_degenerate_direction_reported() {
        // all points coincident: no segment has a defined direction
        let eval = Evaluator::new(vec![
            dvec3(1.0, 1.0, 1.0),
            dvec3(1.0, 1.0, 1.0),
            dvec3(1.0, 1.0, 1.0),
        ])
        .unwrap();
        match eval.evaluate(0.5, "index", "index") {
            Err(KinError::DegenerateDirection(_)) => {}
            _ => panic!("expected DegenerateDirection"),
        }
    }

    #[test]
    fn test_equal_segments_index_matches_length() {
        // all segments unit length: both parametrizations coincide
        let eval = Evaluator::new(vec![
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 0.0, 0.0),
            dvec3(2.0, 0.0, 0.0),
            dvec3(3.0, 0.0, 0.0),
        ])
        .unwrap();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let by_index = eval.evaluate(t, "index", "index").unwrap();
            let by_length = eval.evaluate(t, "length", "index").unwrap();
            assert!(
                (by_index.position - by_length.position).length() < 1e-9,
                "diverged at t = {t}"
            );
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let eval = zigzag();
        let a = eval.evaluate(0.37, "length", "length").unwrap();
        let b = eval.evaluate(0.37, "length", "length").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.position.to_array(), b.position.to_array());
        assert_eq!(a.yaw.to_bits(), b.yaw.to_bits());
    }

    #[test]
    fn test_custom_strategy_registration() {
        let mut eval = zigzag();
        eval.register_orientation_strategy("reverse", |ctx: &SampleContext<'_>, t: f64| {
            let u = t * ctx.trajectory.max_index();
            -crate::sample::orientation_by_index(ctx.directions, u)
        });
        let state = eval.evaluate(0.0, "index", "reverse").unwrap();
        assert!((state.direction - dvec3(-1.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_diagnostic_accessors() {
        let eval = zigzag();
        assert!((eval.total_length() - 6.0).abs() < 1e-12);
        assert_eq!(eval.cumulative_lengths().len(), 6);
        assert_eq!(eval.segment_lengths().len(), 5);
        assert_eq!(eval.direction_table().len(), 6);
        assert_eq!(eval.curvature().len(), 6);
        assert_eq!(eval.radius_of_curvature().len(), 6);
        assert_eq!(eval.frenet_frame().tangents().len(), 6);
    }

    #[test]
    fn test_evaluator_shared_across_threads() {
        let eval = std::sync::Arc::new(zigzag());
        let reference = eval.evaluate(0.5, "length", "length").unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let eval = eval.clone();
                std::thread::spawn(move || eval.evaluate(0.5, "length", "length").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    }

    #[test]
    fn test_state_serializes() {
        let eval = zigzag();
        let state = eval.evaluate(0.5, "length", "length").unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: KinematicState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
