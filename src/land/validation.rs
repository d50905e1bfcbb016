//! Bounds checks applied at the input collection boundary.
//!
//! The scorer itself is total and never validates; anything that reaches it
//! is evaluated as-is. These checks run where values enter the program
//! (CLI flags, config defaults) and collect every violation so the user sees
//! all problems at once.

use super::{LandConditions, PH_BOUNDS, RAINFALL_BOUNDS, SALINITY_BOUNDS, TEMPERATURE_BOUNDS};

/// Validate one set of conditions against the declared slider bounds.
///
/// Returns `Ok(())` if everything is in range, or `Err` with one message per
/// violation. The soil string is not checked here: soil membership in the
/// enumerated set is enforced by the collectors that offer a choice.
pub fn validate_conditions(conditions: &LandConditions) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !(PH_BOUNDS.0..=PH_BOUNDS.1).contains(&conditions.ph) {
        errors.push(format!(
            "ph: {} out of range {}..{}",
            conditions.ph, PH_BOUNDS.0, PH_BOUNDS.1
        ));
    }

    if !(RAINFALL_BOUNDS.0..=RAINFALL_BOUNDS.1).contains(&conditions.rainfall) {
        errors.push(format!(
            "rainfall: {} mm out of range {}..{}",
            conditions.rainfall, RAINFALL_BOUNDS.0, RAINFALL_BOUNDS.1
        ));
    }

    if !(TEMPERATURE_BOUNDS.0..=TEMPERATURE_BOUNDS.1).contains(&conditions.temperature) {
        errors.push(format!(
            "temperature: {} °C out of range {}..{}",
            conditions.temperature, TEMPERATURE_BOUNDS.0, TEMPERATURE_BOUNDS.1
        ));
    }

    if !(SALINITY_BOUNDS.0..=SALINITY_BOUNDS.1).contains(&conditions.salinity) {
        errors.push(format!(
            "salinity: {} dS/m out of range {}..{}",
            conditions.salinity, SALINITY_BOUNDS.0, SALINITY_BOUNDS.1
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> LandConditions {
        LandConditions::default()
    }

    #[test]
    fn test_defaults_validate() {
        assert!(validate_conditions(&valid()).is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut conditions = valid();
        conditions.ph = 4.0;
        conditions.rainfall = 2000;
        conditions.temperature = 50;
        conditions.salinity = 0.0;
        assert!(validate_conditions(&conditions).is_ok());
    }

    #[test]
    fn test_ph_out_of_range() {
        let mut conditions = valid();
        conditions.ph = 3.9;
        let errors = validate_conditions(&conditions).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ph"));
    }

    #[test]
    fn test_collects_all_errors() {
        let conditions = LandConditions {
            soil: "رملية".to_string(),
            ph: 12.0,
            rainfall: 5000,
            temperature: 90,
            salinity: 20.0,
        };
        let errors = validate_conditions(&conditions).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_free_text_soil_accepted() {
        let mut conditions = valid();
        conditions.soil = "anything at all".to_string();
        assert!(validate_conditions(&conditions).is_ok());
    }
}
