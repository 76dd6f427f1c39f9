//! Theory branches and the local propagation-speed model
//!
//! The two branches differ only in how the local speed of light is
//! computed near matter. Note that the live integrator and the analysis
//! curve use *different* variable-c formulas; both are part of current
//! behavior and are kept as separate functions.

use crate::constants::{
    C, CURVE_RADIUS_END, CURVE_RADIUS_START, CURVE_RADIUS_STEP, MIN_LOCAL_C, SPEED_SOFTENING,
};

/// Selectable theory branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Branch {
    /// Light speed is a fixed network limit; relativity is effective
    #[default]
    ConstantC,
    /// Light speed varies with local network stiffness
    VariableC,
}

impl Branch {
    pub fn label(self) -> &'static str {
        match self {
            Branch::ConstantC => "R-QNT-C",
            Branch::VariableC => "R-QNT-V",
        }
    }
}

/// Local speed modifier applied by the live integrator for a knot at
/// distance `d`: `max(0.1, 1 - 1/(d+1))` under Variable-C, 1.0 otherwise.
pub fn propagation_speed(branch: Branch, d: f64) -> f64 {
    match branch {
        Branch::ConstantC => C,
        Branch::VariableC => (C - C / (d + SPEED_SOFTENING)).max(MIN_LOCAL_C),
    }
}

/// Local speed at radius `r` for the analysis curve:
/// `sqrt(1 - 1/(r+1))` under Variable-C, 1.0 otherwise.
///
/// Deliberately not the same formula as [`propagation_speed`]; one is a
/// display curve, the other the live integrator modifier.
pub fn curve_speed(branch: Branch, r: f64) -> f64 {
    match branch {
        Branch::ConstantC => C,
        Branch::VariableC => (C - C / (r + SPEED_SOFTENING)).sqrt(),
    }
}

/// One sample of the local-c vs. radius profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisPoint {
    pub radius: f64,
    pub local_c: f64,
}

/// Sample [`curve_speed`] over the fixed radius domain (1.0 to 20.0
/// exclusive, step 0.5). Regenerated wholesale on every branch change;
/// callers replace their copy rather than patching it.
pub fn analysis_curve(branch: Branch) -> Vec<AnalysisPoint> {
    let mut points = Vec::new();
    let mut r = CURVE_RADIUS_START;
    while r < CURVE_RADIUS_END {
        points.push(AnalysisPoint {
            radius: r,
            local_c: curve_speed(branch, r),
        });
        r += CURVE_RADIUS_STEP;
    }
    points
}
