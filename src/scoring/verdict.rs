//! Overall verdict for a piece of land, classified from the best
//! suitability score across the whole catalog.

use crate::config::Lang;

/// The four verdict tiers. Thresholds are checked in descending order,
/// first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// max suitability >= 90
    Excellent,
    /// max suitability >= 70
    Suitable,
    /// max suitability >= 50
    Marginal,
    /// everything below
    Unsuitable,
}

impl Verdict {
    pub fn classify(max_suitability: f64) -> Self {
        if max_suitability >= 90.0 {
            Verdict::Excellent
        } else if max_suitability >= 70.0 {
            Verdict::Suitable
        } else if max_suitability >= 50.0 {
            Verdict::Marginal
        } else {
            Verdict::Unsuitable
        }
    }

    /// Stable machine-readable tier name, for the JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Excellent => "excellent",
            Verdict::Suitable => "suitable",
            Verdict::Marginal => "marginal",
            Verdict::Unsuitable => "unsuitable",
        }
    }

    /// The fixed banner label, localized.
    pub fn label(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Ar => match self {
                Verdict::Excellent => "🌟 ممتازة جدًا للزراعة",
                Verdict::Suitable => "✅ مناسبة للزراعة",
                Verdict::Marginal => "⚠️ مقبولة ولكن بها بعض التحديات",
                Verdict::Unsuitable => "❌ غير مناسبة حاليًا للزراعة",
            },
            Lang::En => match self {
                Verdict::Excellent => "Excellent for cultivation",
                Verdict::Suitable => "Suitable for cultivation",
                Verdict::Marginal => "Workable, with some challenges",
                Verdict::Unsuitable => "Currently unsuitable for cultivation",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(Verdict::classify(100.0), Verdict::Excellent);
        assert_eq!(Verdict::classify(90.0), Verdict::Excellent);
        assert_eq!(Verdict::classify(89.9), Verdict::Suitable);
        assert_eq!(Verdict::classify(70.0), Verdict::Suitable);
        assert_eq!(Verdict::classify(69.9), Verdict::Marginal);
        assert_eq!(Verdict::classify(50.0), Verdict::Marginal);
        assert_eq!(Verdict::classify(49.9), Verdict::Unsuitable);
        assert_eq!(Verdict::classify(0.0), Verdict::Unsuitable);
    }

    #[test]
    fn test_labels_differ_per_tier() {
        for lang in [Lang::Ar, Lang::En] {
            let labels = [
                Verdict::Excellent.label(lang),
                Verdict::Suitable.label(lang),
                Verdict::Marginal.label(lang),
                Verdict::Unsuitable.label(lang),
            ];
            for (i, a) in labels.iter().enumerate() {
                for b in &labels[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }
}
