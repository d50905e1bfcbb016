//! Land and climate conditions as entered by the user, plus the input
//! collection boundary: slider bounds, defaults, the enumerated soil types,
//! and validation.

pub mod soil;
pub mod validation;

pub use soil::{resolve_soil, SoilType, SOIL_TYPES};
pub use validation::validate_conditions;

/// pH slider bounds.
pub const PH_BOUNDS: (f64, f64) = (4.0, 9.0);
/// Annual rainfall slider bounds (mm/year).
pub const RAINFALL_BOUNDS: (u32, u32) = (0, 2000);
/// Average temperature slider bounds (°C).
pub const TEMPERATURE_BOUNDS: (u32, u32) = (0, 50);
/// Soil salinity slider bounds (dS/m).
pub const SALINITY_BOUNDS: (f64, f64) = (0.0, 10.0);

/// One set of conditions to evaluate the catalog against. Created fresh per
/// evaluation; the scorer treats it as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct LandConditions {
    /// Soil type, one of [`SOIL_TYPES`] when collected through the form;
    /// matched against crop soil descriptors by substring, so free text is
    /// tolerated downstream.
    pub soil: String,
    pub ph: f64,
    /// mm/year
    pub rainfall: u32,
    /// °C
    pub temperature: u32,
    /// dS/m
    pub salinity: f64,
}

impl Default for LandConditions {
    /// The form's initial values.
    fn default() -> Self {
        Self {
            soil: SOIL_TYPES[0].name.to_string(),
            ph: 7.0,
            rainfall: 150,
            temperature: 28,
            salinity: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        let conditions = LandConditions::default();
        assert!(conditions.ph >= PH_BOUNDS.0 && conditions.ph <= PH_BOUNDS.1);
        assert!(conditions.rainfall <= RAINFALL_BOUNDS.1);
        assert!(conditions.temperature <= TEMPERATURE_BOUNDS.1);
        assert!(conditions.salinity >= SALINITY_BOUNDS.0 && conditions.salinity <= SALINITY_BOUNDS.1);
    }

    #[test]
    fn test_default_soil_is_enumerated() {
        let conditions = LandConditions::default();
        assert!(resolve_soil(&conditions.soil).is_some());
    }

    #[test]
    fn test_default_values_match_form() {
        let conditions = LandConditions::default();
        assert_eq!(conditions.ph, 7.0);
        assert_eq!(conditions.rainfall, 150);
        assert_eq!(conditions.temperature, 28);
        assert_eq!(conditions.salinity, 2.0);
    }
}
