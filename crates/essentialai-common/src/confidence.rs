/// Confidence banding and the interpretation text shown next to results.

use serde::{Deserialize, Serialize};

use crate::entities::PredictionResult;

/// Lower edge (inclusive) of the high band, in percent.
pub const HIGH_THRESHOLD: f64 = 70.0;
/// Lower edge (inclusive) of the moderate band, in percent.
pub const MODERATE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    High,
    Moderate,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= HIGH_THRESHOLD {
            ConfidenceBand::High
        } else if confidence >= MODERATE_THRESHOLD {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }

    /// Display tier colour.
    pub fn color(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "emerald",
            ConfidenceBand::Moderate => "yellow",
            ConfidenceBand::Low => "gray",
        }
    }

    /// One-line caption rendered under each result row.
    pub fn caption(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "High confidence - Strong indication of activity",
            ConfidenceBand::Moderate => "Moderate confidence - Potential activity",
            ConfidenceBand::Low => "Low confidence - Limited indication of activity",
        }
    }

    /// Legend entry for the confidence-levels card.
    pub fn legend(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "≥70% - High Confidence",
            ConfidenceBand::Moderate => "50-69% - Moderate",
            ConfidenceBand::Low => "<50% - Low Confidence",
        }
    }

    pub const ALL: [ConfidenceBand; 3] = [ConfidenceBand::High, ConfidenceBand::Moderate, ConfidenceBand::Low];
}

/// Summary, description and recommendation for a set of predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub band: ConfidenceBand,
    pub summary: String,
    pub description: String,
    pub recommendation: String,
}

/// Pick the interpretation for a prediction set.
///
/// Any high-confidence result wins and every high label is listed; otherwise
/// any moderate result yields the moderate text listing the moderate labels;
/// everything else, including an empty set, is a low activity profile.
pub fn interpret(predictions: &[PredictionResult]) -> Interpretation {
    let labels_in = |band: ConfidenceBand| -> Vec<&str> {
        predictions
            .iter()
            .filter(|p| p.band() == band)
            .map(|p| p.label.as_str())
            .collect()
    };

    let high = labels_in(ConfidenceBand::High);
    if !high.is_empty() {
        return Interpretation {
            band: ConfidenceBand::High,
            summary: "Strong Activity Profile".to_string(),
            description: format!(
                "The model shows high confidence (≥70%) for {} activities. This suggests significant therapeutic potential.",
                high.join(", ")
            ),
            recommendation: "These results indicate promising biological activities. Consider further laboratory validation and exploration of therapeutic applications.".to_string(),
        };
    }

    let moderate = labels_in(ConfidenceBand::Moderate);
    if !moderate.is_empty() {
        return Interpretation {
            band: ConfidenceBand::Moderate,
            summary: "Moderate Activity Profile".to_string(),
            description: format!(
                "The model shows moderate confidence for {} activities.",
                moderate.join(", ")
            ),
            recommendation: "Results suggest potential biological activities that warrant further investigation through experimental validation.".to_string(),
        };
    }

    Interpretation {
        band: ConfidenceBand::Low,
        summary: "Low Activity Profile".to_string(),
        description: "The model predicts low biological activity across all tested categories. This essential oil may have limited therapeutic applications based on the analyzed properties.".to_string(),
        recommendation: "Consider testing with different extraction methods or exploring other biological activities not covered in this model.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preds(items: &[(&str, f64)]) -> Vec<PredictionResult> {
        items.iter().map(|(l, c)| PredictionResult::new(*l, *c)).collect()
    }

    #[test]
    fn test_band_edges_are_inclusive_on_lower_bound() {
        assert_eq!(ConfidenceBand::from_confidence(70.0), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from_confidence(69.999), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(50.0), ConfidenceBand::Moderate);
        assert_eq!(ConfidenceBand::from_confidence(49.999), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(0.0), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from_confidence(100.0), ConfidenceBand::High);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(ConfidenceBand::High.color(), "emerald");
        assert_eq!(ConfidenceBand::Moderate.color(), "yellow");
        assert_eq!(ConfidenceBand::Low.color(), "gray");
    }

    #[test]
    fn test_strong_profile_lists_only_high_labels() {
        let p = preds(&[
            ("antimicrobial", 85.6),
            ("antioxidant", 72.3),
            ("anti-inflammatory", 68.9),
            ("antifungal", 45.2),
            ("analgesic", 32.1),
        ]);
        let i = interpret(&p);
        assert_eq!(i.band, ConfidenceBand::High);
        assert_eq!(i.summary, "Strong Activity Profile");
        assert!(i.description.contains("for antimicrobial, antioxidant activities."));
        assert!(!i.description.contains("anti-inflammatory"));
    }

    #[test]
    fn test_moderate_profile_when_no_high() {
        let p = preds(&[("antifungal", 50.0), ("analgesic", 12.0), ("antioxidant", 69.0)]);
        let i = interpret(&p);
        assert_eq!(i.summary, "Moderate Activity Profile");
        assert_eq!(
            i.description,
            "The model shows moderate confidence for antifungal, antioxidant activities."
        );
    }

    #[test]
    fn test_low_profile() {
        let i = interpret(&preds(&[("analgesic", 49.9)]));
        assert_eq!(i.summary, "Low Activity Profile");
        assert_eq!(i.band, ConfidenceBand::Low);
    }

    #[test]
    fn test_empty_set_is_low_profile() {
        assert_eq!(interpret(&[]).band, ConfidenceBand::Low);
    }

    #[test]
    fn test_exactly_seventy_is_strong() {
        let i = interpret(&preds(&[("antioxidant", 70.0)]));
        assert_eq!(i.summary, "Strong Activity Profile");
    }
}
