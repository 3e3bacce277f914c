use serde::{Deserialize, Serialize};

/// Upper bound of the score gauge shown to callers. Scores above it are
/// possible in principle but the survey weights cap out at 50.
pub const SCORE_DISPLAY_MAX: f64 = 50.0;

/// Ordered severity band assigned from the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

/// Rendering cue a caller maps to a color or alert style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTone {
    Success,
    Warning,
    Error,
}

/// Static legend entry describing one severity band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityBand {
    pub severity: Severity,
    pub range: String,
    pub description: String,
}

impl Severity {
    /// Classifies a score into its band.
    ///
    /// The boundary comparisons are deliberately asymmetric and match the
    /// published survey: 20 itself is Low, 30 is the first High value, 40 the
    /// first VeryHigh value.
    pub fn from_score(score: f64) -> Self {
        if score <= 20.0 {
            Severity::Low
        } else if score < 30.0 {
            Severity::Moderate
        } else if score < 40.0 {
            Severity::High
        } else {
            Severity::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low Risk",
            Severity::Moderate => "Moderate Risk",
            Severity::High => "High Risk",
            Severity::VeryHigh => "Very High Risk",
        }
    }

    pub fn tone(&self) -> DisplayTone {
        match self {
            Severity::Low => DisplayTone::Success,
            Severity::Moderate => DisplayTone::Warning,
            Severity::High | Severity::VeryHigh => DisplayTone::Error,
        }
    }

    /// VeryHigh shares the error tone with High but warrants urgent styling.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Severity::VeryHigh)
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Severity::Low => "Great! Maintain your healthy smartphone habits.",
            Severity::Moderate => "Consider reducing daily usage and setting boundaries.",
            Severity::High => "You should take steps to reduce smartphone dependency.",
            Severity::VeryHigh => {
                "Seek help! Consider professional support or digital detox programs."
            }
        }
    }

    /// The four reference legend entries callers render alongside a score.
    pub fn bands() -> Vec<SeverityBand> {
        vec![
            band(Severity::Low, "0-20", "Healthy habits"),
            band(Severity::Moderate, "20-30", "Some concerns"),
            band(Severity::High, "30-40", "Significant signs"),
            band(Severity::VeryHigh, "40+", "Severe dependence"),
        ]
    }
}

fn band(severity: Severity, range: &str, description: &str) -> SeverityBand {
    SeverityBand {
        severity,
        range: range.to_string(),
        description: description.to_string(),
    }
}
