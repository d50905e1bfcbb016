//! The suitability scorer.
//!
//! Five independent pass/fail criteria, 20 points each, summed. No partial
//! credit within a criterion and no weighting between them. The function is
//! total: values outside the slider bounds are evaluated against the same
//! predicates, never clamped or rejected.

use crate::catalog::CropProfile;
use crate::land::LandConditions;

/// Points contributed by each satisfied criterion.
pub const POINTS_PER_CRITERION: f64 = 20.0;

/// One criterion's outcome, kept for the breakdown views.
#[derive(Debug, Clone)]
pub struct CriterionCheck {
    pub label: &'static str,
    /// e.g. "pH 7.0 vs 6.5-7.8"
    pub detail: String,
    pub passed: bool,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    /// Multiple of 20 in [0, 100].
    pub suitability: f64,
    pub checks: Vec<CriterionCheck>,
}

impl ScoreResult {
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }
}

/// Case-insensitive bidirectional substring match between the user's soil
/// type and a crop's soil descriptor. "رملية" matches
/// "رملية طينية جيدة الصرف" and vice versa; exact equality is not required.
pub fn soil_matches(user_soil: &str, crop_soil: &str) -> bool {
    let user = user_soil.to_lowercase();
    let crop = crop_soil.to_lowercase();
    crop.contains(&user) || user.contains(&crop)
}

/// Score one crop profile against one set of conditions.
pub fn calculate_score(profile: &CropProfile, conditions: &LandConditions) -> ScoreResult {
    let checks = vec![
        CriterionCheck {
            label: "Soil",
            detail: format!("'{}' vs '{}'", conditions.soil, profile.soil),
            passed: soil_matches(&conditions.soil, profile.soil),
        },
        CriterionCheck {
            label: "pH",
            detail: format!("{} vs {}-{}", conditions.ph, profile.ph.min, profile.ph.max),
            passed: profile.ph.contains(conditions.ph),
        },
        CriterionCheck {
            label: "Rainfall",
            detail: format!(
                "{} mm vs {}-{} mm",
                conditions.rainfall, profile.rainfall.min, profile.rainfall.max
            ),
            passed: profile.rainfall.contains(conditions.rainfall),
        },
        CriterionCheck {
            label: "Temperature",
            detail: format!(
                "{} °C vs {}-{} °C",
                conditions.temperature, profile.temperature.min, profile.temperature.max
            ),
            passed: profile.temperature.contains(conditions.temperature),
        },
        CriterionCheck {
            label: "Salinity",
            detail: format!(
                "{} dS/m vs {}-{} dS/m",
                conditions.salinity, profile.salinity.min, profile.salinity.max
            ),
            passed: profile.salinity.contains(conditions.salinity),
        },
    ];

    let passed = checks.iter().filter(|c| c.passed).count();
    ScoreResult {
        suitability: passed as f64 * POINTS_PER_CRITERION,
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn crop(name_en: &str) -> &'static CropProfile {
        CATALOG
            .iter()
            .find(|c| c.name_en == name_en)
            .expect("crop in catalog")
    }

    #[test]
    fn test_soil_match_substring_forward() {
        // User string contained in the descriptor
        assert!(soil_matches("رملية طينية", "رملية طينية جيدة الصرف"));
    }

    #[test]
    fn test_soil_match_substring_reverse() {
        // Descriptor contained in the user string
        assert!(soil_matches("رملية طينية جيدة الصرف وعميقة", "رملية طينية جيدة الصرف"));
    }

    #[test]
    fn test_soil_match_symmetric() {
        let pairs = [
            ("رملية", "رملية طينية جيدة الصرف"),
            ("طينية", "جيدة الصرف"),
            ("well-drained", "Well-Drained loam"),
            ("", "anything"),
        ];
        for (a, b) in pairs {
            assert_eq!(soil_matches(a, b), soil_matches(b, a), "asymmetric for {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_soil_match_case_insensitive() {
        assert!(soil_matches("SANDY", "sandy loam, deep"));
    }

    #[test]
    fn test_soil_no_match_without_overlap() {
        // "رملية" shares no substring relation with wheat's "طينية جيدة الصرف"
        assert!(!soil_matches("رملية", "طينية جيدة الصرف"));
    }

    #[test]
    fn test_wheat_scenario_scores_sixty() {
        // Soil fails, rain fails, pH/temp/salinity pass
        let conditions = LandConditions {
            soil: "رملية".to_string(),
            ph: 7.0,
            rainfall: 150,
            temperature: 28,
            salinity: 2.0,
        };
        let result = calculate_score(crop("wheat"), &conditions);
        assert_eq!(result.suitability, 60.0);
        assert_eq!(result.passed_count(), 3);
    }

    #[test]
    fn test_palm_scenario_scores_eighty() {
        // Only pH fails
        let conditions = LandConditions {
            soil: "رملية طينية".to_string(),
            ph: 6.2,
            rainfall: 80,
            temperature: 40,
            salinity: 7.0,
        };
        let result = calculate_score(crop("date palm"), &conditions);
        assert_eq!(result.suitability, 80.0);
        let ph_check = result.checks.iter().find(|c| c.label == "pH").unwrap();
        assert!(!ph_check.passed);
    }

    #[test]
    fn test_score_is_multiple_of_twenty_in_range() {
        let probes = [
            LandConditions::default(),
            LandConditions {
                soil: "unmatched-string".to_string(),
                ph: 4.0,
                rainfall: 0,
                temperature: 0,
                salinity: 0.0,
            },
            LandConditions {
                soil: "جيدة الصرف".to_string(),
                ph: 9.0,
                rainfall: 2000,
                temperature: 50,
                salinity: 10.0,
            },
        ];
        for conditions in &probes {
            for profile in &CATALOG {
                let result = calculate_score(profile, conditions);
                assert!(result.suitability >= 0.0 && result.suitability <= 100.0);
                assert_eq!(result.suitability % POINTS_PER_CRITERION, 0.0);
                assert_eq!(result.checks.len(), 5);
            }
        }
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let wheat = crop("wheat");
        let mut conditions = LandConditions {
            soil: "طينية جيدة الصرف".to_string(),
            ph: 6.5,
            rainfall: 200,
            temperature: 10,
            salinity: 6.0,
        };
        // Every value sits exactly on a bound
        assert_eq!(calculate_score(wheat, &conditions).suitability, 100.0);

        conditions.ph = 7.8;
        conditions.rainfall = 600;
        conditions.temperature = 30;
        conditions.salinity = 0.0;
        assert_eq!(calculate_score(wheat, &conditions).suitability, 100.0);
    }

    #[test]
    fn test_out_of_slider_range_values_still_evaluate() {
        // The scorer does not know about slider bounds; it just evaluates.
        let conditions = LandConditions {
            soil: "طينية".to_string(),
            ph: 12.0,
            rainfall: 9999,
            temperature: 200,
            salinity: 50.0,
        };
        let result = calculate_score(crop("wheat"), &conditions);
        assert_eq!(result.suitability, 20.0); // soil only
    }
}
