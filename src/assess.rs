//! Assessment pipeline: score the whole catalog against one set of
//! conditions, derive expected yields, filter and rank recommendations,
//! and classify the overall verdict.

use crate::catalog::{CropProfile, CATALOG};
use crate::land::LandConditions;
use crate::scoring::{calculate_score, ScoreResult, Verdict};

/// Crops scoring below this suitability are left out of the
/// recommendation table.
pub const RECOMMEND_THRESHOLD: f64 = 50.0;

/// One catalog row evaluated against the conditions.
#[derive(Debug, Clone)]
pub struct CropEvaluation {
    pub crop: &'static CropProfile,
    /// Rounded to 1 decimal.
    pub suitability: f64,
    /// average_yield * suitability / 100, rounded to 2 decimals (ton/feddan).
    pub expected_yield: f64,
    pub score: ScoreResult,
}

/// The complete result of one evaluation.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// All ten crops, in catalog order, unfiltered.
    pub all: Vec<CropEvaluation>,
    /// Crops at or above [`RECOMMEND_THRESHOLD`], best first. Ties keep
    /// catalog order. May be empty; that is a normal outcome.
    pub recommended: Vec<CropEvaluation>,
    /// Best suitability over the *unfiltered* catalog.
    pub max_suitability: f64,
    pub verdict: Verdict,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Evaluate the full catalog. Pure: same conditions, same result.
pub fn assess(conditions: &LandConditions) -> Assessment {
    let all: Vec<CropEvaluation> = CATALOG
        .iter()
        .map(|crop| {
            let score = calculate_score(crop, conditions);
            let suitability = round1(score.suitability);
            CropEvaluation {
                crop,
                suitability,
                expected_yield: round2(crop.average_yield * suitability / 100.0),
                score,
            }
        })
        .collect();

    // The verdict looks at every crop, not just the recommended ones.
    let max_suitability = all
        .iter()
        .map(|e| e.suitability)
        .fold(0.0_f64, f64::max);

    let mut recommended: Vec<CropEvaluation> = all
        .iter()
        .filter(|e| e.suitability >= RECOMMEND_THRESHOLD)
        .cloned()
        .collect();

    // Stable sort: equal scores keep catalog order.
    recommended.sort_by(|a, b| {
        b.suitability
            .partial_cmp(&a.suitability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Assessment {
        verdict: Verdict::classify(max_suitability),
        all,
        recommended,
        max_suitability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conditions(soil: &str, ph: f64, rainfall: u32, temperature: u32, salinity: f64) -> LandConditions {
        LandConditions {
            soil: soil.to_string(),
            ph,
            rainfall,
            temperature,
            salinity,
        }
    }

    #[test]
    fn test_all_rows_present_in_catalog_order() {
        let assessment = assess(&LandConditions::default());
        assert_eq!(assessment.all.len(), 10);
        assert_eq!(assessment.all[0].crop.name_en, "wheat");
        assert_eq!(assessment.all[9].crop.name_en, "garlic");
    }

    #[test]
    fn test_recommended_never_below_threshold() {
        let probes = [
            LandConditions::default(),
            conditions("رملية", 7.0, 150, 28, 2.0),
            conditions("unmatched", 4.0, 0, 0, 0.0),
        ];
        for probe in &probes {
            for eval in &assess(probe).recommended {
                assert!(eval.suitability >= RECOMMEND_THRESHOLD);
            }
        }
    }

    #[test]
    fn test_recommended_sorted_non_increasing() {
        let assessment = assess(&LandConditions::default());
        for pair in assessment.recommended.windows(2) {
            assert!(pair[0].suitability >= pair[1].suitability);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Onion and garlic share identical tolerance ranges and soil, so
        // they always tie; onion precedes garlic in the catalog.
        let assessment = assess(&conditions("طينية رملية خصبة جيدة الصرف", 7.0, 300, 20, 2.0));
        let onion = assessment
            .recommended
            .iter()
            .position(|e| e.crop.name_en == "onion")
            .unwrap();
        let garlic = assessment
            .recommended
            .iter()
            .position(|e| e.crop.name_en == "garlic")
            .unwrap();
        assert!(onion < garlic);
    }

    #[test]
    fn test_max_suitability_covers_unfiltered_catalog() {
        // Extreme-low inputs: date palm scores 40 (rainfall + salinity) but
        // nothing reaches the threshold, so the max must come from the
        // unfiltered list.
        let assessment = assess(&conditions("unmatched-string", 4.0, 0, 0, 0.0));
        assert!(assessment.recommended.is_empty());
        assert_eq!(assessment.max_suitability, 40.0);
        assert_eq!(assessment.verdict, Verdict::Unsuitable);
    }

    #[test]
    fn test_max_at_least_best_recommended() {
        let assessment = assess(&LandConditions::default());
        if let Some(best) = assessment.recommended.first() {
            assert_eq!(assessment.max_suitability, best.suitability);
        }
    }

    #[test]
    fn test_expected_yield_scales_with_suitability() {
        // Default conditions: wheat passes soil, pH, temperature, salinity
        // but not rainfall (150 < 200), so 80% of 3.5 = 2.8.
        let assessment = assess(&LandConditions::default());
        let wheat = &assessment.all[0];
        assert_eq!(wheat.suitability, 80.0);
        assert_eq!(wheat.expected_yield, 2.8);
    }

    #[test]
    fn test_palm_yield_at_eighty_percent() {
        let assessment = assess(&conditions("رملية طينية", 6.2, 80, 40, 7.0));
        let palm = assessment
            .all
            .iter()
            .find(|e| e.crop.name_en == "date palm")
            .unwrap();
        assert_eq!(palm.suitability, 80.0);
        assert_eq!(palm.expected_yield, 1.6); // 2.0 * 0.8
    }

    #[test]
    fn test_assess_is_deterministic() {
        let probe = conditions("رملية طينية", 6.8, 90, 30, 3.0);
        let first = assess(&probe);
        let second = assess(&probe);
        assert_eq!(first.max_suitability, second.max_suitability);
        assert_eq!(first.recommended.len(), second.recommended.len());
        for (a, b) in first.recommended.iter().zip(&second.recommended) {
            assert_eq!(a.crop.name, b.crop.name);
            assert_eq!(a.suitability, b.suitability);
            assert_eq!(a.expected_yield, b.expected_yield);
        }
    }

    #[test]
    fn test_verdict_tracks_best_crop() {
        // Conditions tailored to date palm: all five criteria pass.
        let assessment = assess(&conditions("رملية طينية", 7.0, 50, 30, 2.0));
        assert_eq!(assessment.max_suitability, 100.0);
        assert_eq!(assessment.verdict, Verdict::Excellent);
        assert_eq!(assessment.recommended[0].crop.name_en, "date palm");
    }
}
