//! # Shaft Reaction & Bearing Sizing Calculation
//!
//! Analyzes a two-bearing transmission shaft and sizes a deep groove ball
//! bearing for each support.
//!
//! ## Assumptions
//!
//! - Shaft on two bearings; gear mounted between them
//! - Belt pulley overhung beyond bearing 2
//! - Gear radial force and pulley weight act vertically
//! - Gear tangential force and belt tensions act horizontally
//! - Forces in newtons, distances in millimetres
//! - Constant speed and load over the target life (basic L10 rating life)
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use bearing_core::calculations::shaft::{calculate, ShaftInput};
//!
//! let input = ShaftInput {
//!     speed_rpm: 1500.0,
//!     belt_tension_1_n: 100.0,
//!     belt_tension_2_n: 50.0,
//!     tangential_force_n: 200.0,
//!     radial_force_n: 100.0,
//!     pulley_weight_n: 50.0,
//!     life_factor: 1.2,
//!     life_hours: 20_000.0,
//!     bearing1_to_gear_mm: 100.0,
//!     gear_to_bearing2_mm: 150.0,
//!     bearing2_to_pulley_mm: 50.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("R1 = {:.4} N", result.resultant_load_1_n);
//! println!("C1 = {:.4} N", result.dynamic_capacity_1_n);
//! println!("Bearing 1: {}", result.bearing1_designation);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::DesignationTable;
use crate::errors::{CalcError, CalcResult};

/// Input parameters for the shaft reaction calculation.
///
/// All values are plain scalars in consistent units: newtons for forces,
/// millimetres for distances, rev/min for speed, hours for target life.
///
/// ## JSON Example
///
/// ```json
/// {
///   "speed_rpm": 1500.0,
///   "belt_tension_1_n": 100.0,
///   "belt_tension_2_n": 50.0,
///   "tangential_force_n": 200.0,
///   "radial_force_n": 100.0,
///   "pulley_weight_n": 50.0,
///   "life_factor": 1.2,
///   "life_hours": 20000.0,
///   "bearing1_to_gear_mm": 100.0,
///   "gear_to_bearing2_mm": 150.0,
///   "bearing2_to_pulley_mm": 50.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShaftInput {
    /// Shaft rotational speed (rev/min), must be positive
    pub speed_rpm: f64,

    /// Belt tension on the tight side (N)
    pub belt_tension_1_n: f64,

    /// Belt tension on the slack side (N)
    pub belt_tension_2_n: f64,

    /// Gear tangential force Pt (N), horizontal at the gear plane
    pub tangential_force_n: f64,

    /// Gear radial force Pr (N), vertical at the gear plane
    pub radial_force_n: f64,

    /// Pulley weight (N), vertical at the pulley plane
    pub pulley_weight_n: f64,

    /// Application life factor applied to the required dynamic rating
    pub life_factor: f64,

    /// Target rating life (hours), must be positive
    pub life_hours: f64,

    /// Distance from bearing 1 to the gear plane (mm)
    pub bearing1_to_gear_mm: f64,

    /// Distance from the gear plane to bearing 2 (mm)
    pub gear_to_bearing2_mm: f64,

    /// Overhang from bearing 2 to the pulley plane (mm)
    pub bearing2_to_pulley_mm: f64,
}

impl ShaftInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.speed_rpm <= 0.0 {
            return Err(CalcError::invalid_input(
                "speed_rpm",
                self.speed_rpm.to_string(),
                "Rotational speed must be positive",
            ));
        }
        if self.life_hours <= 0.0 {
            return Err(CalcError::invalid_input(
                "life_hours",
                self.life_hours.to_string(),
                "Target life must be positive",
            ));
        }
        if self.bearing_span_mm() <= 0.0 {
            return Err(CalcError::invalid_input(
                "bearing_span_mm",
                self.bearing_span_mm().to_string(),
                "Bearing span (bearing1_to_gear_mm + gear_to_bearing2_mm) must be positive",
            ));
        }
        Ok(())
    }

    /// Total horizontal belt force: sum of tight and slack side tensions (N)
    pub fn belt_force_total_n(&self) -> f64 {
        self.belt_tension_1_n + self.belt_tension_2_n
    }

    /// Span between the two bearings (mm)
    pub fn bearing_span_mm(&self) -> f64 {
        self.bearing1_to_gear_mm + self.gear_to_bearing2_mm
    }

    /// Distance from bearing 1 to the pulley plane (mm)
    pub fn pulley_offset_mm(&self) -> f64 {
        self.bearing1_to_gear_mm + self.gear_to_bearing2_mm + self.bearing2_to_pulley_mm
    }

    /// Revolutions over the target life, in millions
    ///
    /// L = 60 * n * Lh / 10^6, the life figure the L10 equation runs on.
    pub fn life_revolutions_millions(&self) -> f64 {
        60.0 * self.speed_rpm * self.life_hours / 1_000_000.0
    }
}

/// Results from the shaft reaction calculation.
///
/// Numeric fields carry full floating-point precision; use [`rounded`]
/// (or format with `{:.4}`) for presentation.
///
/// [`rounded`]: ReactionResult::rounded
///
/// ## JSON Example
///
/// ```json
/// {
///   "vertical_reaction_1_n": 50.0,
///   "vertical_reaction_2_n": 100.0,
///   "horizontal_reaction_1_n": -90.0,
///   "horizontal_reaction_2_n": 260.0,
///   "resultant_load_1_n": 102.9563,
///   "resultant_load_2_n": 278.5678,
///   "dynamic_capacity_1_n": 1502.8825,
///   "dynamic_capacity_2_n": 4066.333,
///   "bearing1_designation": "61800",
///   "bearing2_designation": "16404"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionResult {
    /// Vertical reaction at bearing 1 (N)
    pub vertical_reaction_1_n: f64,

    /// Vertical reaction at bearing 2 (N)
    pub vertical_reaction_2_n: f64,

    /// Horizontal reaction at bearing 1 (N)
    ///
    /// Negative when the belt pull past bearing 2 reverses the direction
    /// bearing 1 must push.
    pub horizontal_reaction_1_n: f64,

    /// Horizontal reaction at bearing 2 (N)
    pub horizontal_reaction_2_n: f64,

    /// Resultant load at bearing 1: sqrt(Rv1^2 + Rh1^2) (N)
    pub resultant_load_1_n: f64,

    /// Resultant load at bearing 2: sqrt(Rv2^2 + Rh2^2) (N)
    pub resultant_load_2_n: f64,

    /// Required dynamic load rating C1 for the target life (N)
    pub dynamic_capacity_1_n: f64,

    /// Required dynamic load rating C2 for the target life (N)
    pub dynamic_capacity_2_n: f64,

    /// Catalog designation selected for bearing 1
    pub bearing1_designation: String,

    /// Catalog designation selected for bearing 2
    pub bearing2_designation: String,
}

/// Round to 4 decimal places for presentation
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

impl ReactionResult {
    /// Copy of the result with all numeric fields rounded to 4 decimals.
    ///
    /// Rounding is presentation-only; it never feeds back into the
    /// calculation, so dependent formulas do not compound rounding error.
    pub fn rounded(&self) -> ReactionResult {
        ReactionResult {
            vertical_reaction_1_n: round4(self.vertical_reaction_1_n),
            vertical_reaction_2_n: round4(self.vertical_reaction_2_n),
            horizontal_reaction_1_n: round4(self.horizontal_reaction_1_n),
            horizontal_reaction_2_n: round4(self.horizontal_reaction_2_n),
            resultant_load_1_n: round4(self.resultant_load_1_n),
            resultant_load_2_n: round4(self.resultant_load_2_n),
            dynamic_capacity_1_n: round4(self.dynamic_capacity_1_n),
            dynamic_capacity_2_n: round4(self.dynamic_capacity_2_n),
            bearing1_designation: self.bearing1_designation.clone(),
            bearing2_designation: self.bearing2_designation.clone(),
        }
    }
}

/// Calculate bearing reactions, required dynamic ratings, and designations.
///
/// This is a pure function suitable for LLM invocation.
///
/// # Arguments
///
/// * `input` - Shaft loads, geometry, and operating parameters
///
/// # Returns
///
/// * `Ok(ReactionResult)` - Reactions, resultants, capacities, designations
/// * `Err(CalcError)` - Structured error if inputs are invalid
///
/// # Example
///
/// ```rust
/// use bearing_core::calculations::shaft::{calculate, ShaftInput};
///
/// let input = ShaftInput {
///     speed_rpm: 1500.0,
///     belt_tension_1_n: 100.0,
///     belt_tension_2_n: 50.0,
///     tangential_force_n: 200.0,
///     radial_force_n: 100.0,
///     pulley_weight_n: 50.0,
///     life_factor: 1.2,
///     life_hours: 20_000.0,
///     bearing1_to_gear_mm: 100.0,
///     gear_to_bearing2_mm: 150.0,
///     bearing2_to_pulley_mm: 50.0,
/// };
///
/// let result = calculate(&input).expect("Calculation should succeed");
/// assert_eq!(result.bearing2_designation, "16404");
/// ```
pub fn calculate(input: &ShaftInput) -> CalcResult<ReactionResult> {
    // Validate inputs
    input.validate()?;

    let belt_total = input.belt_force_total_n();
    let span = input.bearing_span_mm();
    let pulley_offset = input.pulley_offset_mm();

    // === Vertical Plane (gear radial force + pulley weight) ===

    // Moments about bearing 1: Rv2 * span = Pr * a + W * (a + b + c)
    let rv2 = (input.radial_force_n * input.bearing1_to_gear_mm
        + input.pulley_weight_n * pulley_offset)
        / span;

    // Force balance: Rv1 + Rv2 = Pr + W
    let rv1 = input.radial_force_n + input.pulley_weight_n - rv2;

    // === Horizontal Plane (gear tangential force + belt pull) ===

    // Moments about bearing 1: Rh2 * span = Pt * a + Ptotal * (a + b + c)
    let rh2 = (input.tangential_force_n * input.bearing1_to_gear_mm
        + belt_total * pulley_offset)
        / span;

    // Force balance: Rh2 = Rh1 + Pt + Ptotal
    let rh1 = rh2 - input.tangential_force_n - belt_total;

    // === Resultant Bearing Loads ===

    let r1 = (rv1.powi(2) + rh1.powi(2)).sqrt();
    let r2 = (rv2.powi(2) + rh2.powi(2)).sqrt();

    // === Required Dynamic Ratings ===

    // L10 = (C/P)^3 in millions of revolutions, solved for C
    let llr = input.life_revolutions_millions();
    let c1 = r1 * llr.cbrt() * input.life_factor;
    let c2 = r2 * llr.cbrt() * input.life_factor;

    // === Designation Lookup ===

    let bearing1_designation = DesignationTable::BEARING_1.classify(c1).to_string();
    let bearing2_designation = DesignationTable::BEARING_2.classify(c2).to_string();

    Ok(ReactionResult {
        vertical_reaction_1_n: rv1,
        vertical_reaction_2_n: rv2,
        horizontal_reaction_1_n: rh1,
        horizontal_reaction_2_n: rh2,
        resultant_load_1_n: r1,
        resultant_load_2_n: r2,
        dynamic_capacity_1_n: c1,
        dynamic_capacity_2_n: c2,
        bearing1_designation,
        bearing2_designation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference countershaft: gear at 100 mm, bearing 2 at 250 mm,
    /// pulley overhung 50 mm past bearing 2.
    fn test_shaft() -> ShaftInput {
        ShaftInput {
            speed_rpm: 1500.0,
            belt_tension_1_n: 100.0,
            belt_tension_2_n: 50.0,
            tangential_force_n: 200.0,
            radial_force_n: 100.0,
            pulley_weight_n: 50.0,
            life_factor: 1.2,
            life_hours: 20_000.0,
            bearing1_to_gear_mm: 100.0,
            gear_to_bearing2_mm: 150.0,
            bearing2_to_pulley_mm: 50.0,
        }
    }

    #[test]
    fn test_derived_geometry() {
        let input = test_shaft();
        assert_eq!(input.belt_force_total_n(), 150.0);
        assert_eq!(input.bearing_span_mm(), 250.0);
        assert_eq!(input.pulley_offset_mm(), 300.0);
        assert_eq!(input.life_revolutions_millions(), 1800.0);
    }

    #[test]
    fn test_reference_shaft_reactions() {
        let result = calculate(&test_shaft()).unwrap();

        // Rv2 = (100*100 + 50*300) / 250 = 100 N, Rv1 = 150 - 100 = 50 N
        assert!((result.vertical_reaction_1_n - 50.0).abs() < 1e-9);
        assert!((result.vertical_reaction_2_n - 100.0).abs() < 1e-9);

        // Rh2 = (200*100 + 150*300) / 250 = 260 N, Rh1 = 260 - 350 = -90 N
        assert!((result.horizontal_reaction_1_n - (-90.0)).abs() < 1e-9);
        assert!((result.horizontal_reaction_2_n - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_shaft_rounded_outputs() {
        let result = calculate(&test_shaft()).unwrap().rounded();

        assert_eq!(result.vertical_reaction_1_n, 50.0);
        assert_eq!(result.vertical_reaction_2_n, 100.0);
        assert_eq!(result.horizontal_reaction_1_n, -90.0);
        assert_eq!(result.horizontal_reaction_2_n, 260.0);
        assert_eq!(result.resultant_load_1_n, 102.9563);
        assert_eq!(result.resultant_load_2_n, 278.5678);
        assert_eq!(result.dynamic_capacity_1_n, 1502.8825);
        assert_eq!(result.dynamic_capacity_2_n, 4066.333);
        assert_eq!(result.bearing1_designation, "61800");
        assert_eq!(result.bearing2_designation, "16404");
    }

    #[test]
    fn test_unloaded_shaft_has_zero_reactions() {
        let input = ShaftInput {
            belt_tension_1_n: 0.0,
            belt_tension_2_n: 0.0,
            tangential_force_n: 0.0,
            radial_force_n: 0.0,
            pulley_weight_n: 0.0,
            ..test_shaft()
        };
        let result = calculate(&input).unwrap();

        assert_eq!(result.vertical_reaction_1_n, 0.0);
        assert_eq!(result.vertical_reaction_2_n, 0.0);
        assert_eq!(result.horizontal_reaction_1_n, 0.0);
        assert_eq!(result.horizontal_reaction_2_n, 0.0);
        assert_eq!(result.resultant_load_1_n, 0.0);
        assert_eq!(result.resultant_load_2_n, 0.0);
        assert_eq!(result.dynamic_capacity_1_n, 0.0);
        assert_eq!(result.dynamic_capacity_2_n, 0.0);
        // Zero requirement still selects the smallest catalog bearing
        assert_eq!(result.bearing1_designation, "6000");
        assert_eq!(result.bearing2_designation, "61805");
    }

    #[test]
    fn test_static_equilibrium() {
        let input = ShaftInput {
            speed_rpm: 960.0,
            belt_tension_1_n: 317.0,
            belt_tension_2_n: 122.5,
            tangential_force_n: 841.0,
            radial_force_n: 306.0,
            pulley_weight_n: 78.5,
            life_factor: 1.5,
            life_hours: 12_000.0,
            bearing1_to_gear_mm: 85.0,
            gear_to_bearing2_mm: 215.0,
            bearing2_to_pulley_mm: 65.0,
        };
        let result = calculate(&input).unwrap();

        // Sum of vertical forces: Rv1 + Rv2 = Pr + W
        let vertical_sum = result.vertical_reaction_1_n + result.vertical_reaction_2_n;
        assert!((vertical_sum - (input.radial_force_n + input.pulley_weight_n)).abs() < 1e-9);

        // Sum of horizontal forces: Rh2 - Rh1 = Pt + Ptotal
        let horizontal_diff = result.horizontal_reaction_2_n - result.horizontal_reaction_1_n;
        assert!(
            (horizontal_diff - (input.tangential_force_n + input.belt_force_total_n())).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_resultant_is_norm_of_components() {
        let result = calculate(&test_shaft()).unwrap();

        let r1 = (result.vertical_reaction_1_n.powi(2) + result.horizontal_reaction_1_n.powi(2))
            .sqrt();
        let r2 = (result.vertical_reaction_2_n.powi(2) + result.horizontal_reaction_2_n.powi(2))
            .sqrt();

        assert!((result.resultant_load_1_n - r1).abs() <= 1e-9 * r1.abs());
        assert!((result.resultant_load_2_n - r2).abs() <= 1e-9 * r2.abs());
    }

    #[test]
    fn test_capacity_non_negative() {
        let result = calculate(&test_shaft()).unwrap();
        assert!(result.dynamic_capacity_1_n >= 0.0);
        assert!(result.dynamic_capacity_2_n >= 0.0);
    }

    #[test]
    fn test_zero_span_is_invalid() {
        let input = ShaftInput {
            bearing1_to_gear_mm: 0.0,
            gear_to_bearing2_mm: 0.0,
            ..test_shaft()
        };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "bearing_span_mm"));
    }

    #[test]
    fn test_non_positive_speed_is_invalid() {
        let input = ShaftInput {
            speed_rpm: 0.0,
            ..test_shaft()
        };
        assert!(calculate(&input).is_err());

        let input = ShaftInput {
            speed_rpm: -1500.0,
            ..test_shaft()
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_non_positive_life_is_invalid() {
        let input = ShaftInput {
            life_hours: 0.0,
            ..test_shaft()
        };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "life_hours"));
    }

    #[test]
    fn test_rounding_is_presentation_only() {
        let result = calculate(&test_shaft()).unwrap();

        // Full precision survives in the returned result
        assert!((result.resultant_load_1_n - 10_600.0_f64.sqrt()).abs() < 1e-12);
        assert!((result.resultant_load_2_n - 77_600.0_f64.sqrt()).abs() < 1e-12);

        // rounded() is a copy; the full-precision result is untouched
        let rounded = result.rounded();
        assert_ne!(result.resultant_load_1_n, rounded.resultant_load_1_n);
        assert_eq!(rounded.bearing1_designation, result.bearing1_designation);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = test_shaft();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: ShaftInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.speed_rpm, roundtrip.speed_rpm);
        assert_eq!(input.bearing2_to_pulley_mm, roundtrip.bearing2_to_pulley_mm);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_shaft()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();

        assert!(json.contains("resultant_load_1_n"));
        assert!(json.contains("dynamic_capacity_2_n"));
        assert!(json.contains("bearing1_designation"));

        let roundtrip: ReactionResult = serde_json::from_str(&json).unwrap();
        assert!((result.dynamic_capacity_1_n - roundtrip.dynamic_capacity_1_n).abs() < 1e-9);
        assert_eq!(result.bearing2_designation, roundtrip.bearing2_designation);
    }
}
