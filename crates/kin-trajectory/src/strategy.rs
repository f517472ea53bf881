//! Name-indexed registry of pluggable sampling strategies.
//!
//! A registry is an explicitly constructed table of named closures,
//! injected into an [`Evaluator`](crate::Evaluator). There is no global
//! mutable state: callers extend behavior by registering into their own
//! registry before handing it to an evaluator.

use std::collections::HashMap;
use std::sync::Arc;

use kin_core::{KinError, Result};
use kin_math::{Point3, Vector3};

use crate::sample::{
    orientation_by_index, orientation_by_length, position_by_index, position_by_length,
    tangent_velocity, SampleContext, TANGENT_STEP,
};

/// Position strategy: normalized progress `t` in `[0, 1]` to a point.
pub type PositionFn = dyn Fn(&SampleContext<'_>, f64) -> Point3 + Send + Sync;

/// Orientation strategy: normalized progress `t` in `[0, 1]` to a
/// direction vector. The result need not be normalized; the evaluator
/// checks for degeneracy and normalizes.
pub type OrientationFn = dyn Fn(&SampleContext<'_>, f64) -> Vector3 + Send + Sync;

/// Fallback direction used where a Frenet normal is undefined.
const UP: Vector3 = Vector3::Z;

/// Registry mapping strategy names to sampling closures.
///
/// Registration is additive and the last registration for a name wins.
/// Lookups fail with [`KinError::UnknownStrategy`]; no default is ever
/// silently substituted.
#[derive(Clone)]
pub struct StrategyRegistry {
    position: HashMap<String, Arc<PositionFn>>,
    orientation: HashMap<String, Arc<OrientationFn>>,
}

impl StrategyRegistry {
    /// A registry with no strategies registered.
    pub fn empty() -> Self {
        Self {
            position: HashMap::new(),
            orientation: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in strategies.
    ///
    /// Position: `index`, `length`. Orientation: `index`, `length`,
    /// `tangent_velocity`, `frenet_normal_index`, `frenet_normal_length`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();

        registry.register_position_strategy("index", |ctx: &SampleContext<'_>, t: f64| {
            position_by_index(ctx.trajectory, t * ctx.trajectory.max_index())
        });
        registry.register_position_strategy("length", |ctx: &SampleContext<'_>, t: f64| {
            let s = t * ctx.metrics.total_length();
            position_by_length(ctx.trajectory, ctx.metrics, s, ctx.tolerance)
        });

        registry.register_orientation_strategy("index", |ctx: &SampleContext<'_>, t: f64| {
            orientation_by_index(ctx.directions, t * ctx.trajectory.max_index())
        });
        registry.register_orientation_strategy("length", |ctx: &SampleContext<'_>, t: f64| {
            let s = t * ctx.metrics.total_length();
            orientation_by_length(ctx.metrics, ctx.directions, s, ctx.tolerance)
        });
        registry.register_orientation_strategy(
            "tangent_velocity",
            |ctx: &SampleContext<'_>, t: f64| {
                let s = t * ctx.metrics.total_length();
                tangent_velocity(ctx.trajectory, ctx.metrics, s, TANGENT_STEP, ctx.tolerance)
            },
        );
        registry.register_orientation_strategy(
            "frenet_normal_index",
            |ctx: &SampleContext<'_>, t: f64| {
                let u = t * ctx.trajectory.max_index();
                normal_or_up(ctx, ctx.frame.normal_by_index(u))
            },
        );
        registry.register_orientation_strategy(
            "frenet_normal_length",
            |ctx: &SampleContext<'_>, t: f64| {
                let s = t * ctx.metrics.total_length();
                let n = ctx.frame.normal_at_length(ctx.metrics, s, ctx.tolerance);
                normal_or_up(ctx, n)
            },
        );

        registry
    }

    pub fn register_position_strategy<F>(&mut self, name: impl Into<String>, strategy: F)
    where
        F: Fn(&SampleContext<'_>, f64) -> Point3 + Send + Sync + 'static,
    {
        self.position.insert(name.into(), Arc::new(strategy));
    }

    pub fn register_orientation_strategy<F>(&mut self, name: impl Into<String>, strategy: F)
    where
        F: Fn(&SampleContext<'_>, f64) -> Vector3 + Send + Sync + 'static,
    {
        self.orientation.insert(name.into(), Arc::new(strategy));
    }

    pub fn position_strategy(&self, name: &str) -> Result<Arc<PositionFn>> {
        self.position
            .get(name)
            .cloned()
            .ok_or_else(|| KinError::UnknownStrategy(format!("position strategy '{name}'")))
    }

    pub fn orientation_strategy(&self, name: &str) -> Result<Arc<OrientationFn>> {
        self.orientation
            .get(name)
            .cloned()
            .ok_or_else(|| KinError::UnknownStrategy(format!("orientation strategy '{name}'")))
    }

    /// Registered position strategy names, sorted.
    pub fn position_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.position.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered orientation strategy names, sorted.
    pub fn orientation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.orientation.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("position", &self.position_names())
            .field("orientation", &self.orientation_names())
            .finish()
    }
}

/// Normalize a Frenet normal, substituting the fixed up vector where the
/// normal is undefined (magnitude below the direction epsilon).
fn normal_or_up(ctx: &SampleContext<'_>, n: Vector3) -> Vector3 {
    let len = n.length();
    if ctx.tolerance.direction_is_degenerate(len) {
        UP
    } else {
        n / len
    }
}
