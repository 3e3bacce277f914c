use serde::{Deserialize, Serialize};

/// Weight tables mapping the survey's categorical answers to score points.
///
/// Lookups are fail-soft by contract: a value missing from its table
/// contributes zero instead of raising. Answers are carried as free strings
/// for the same reason; the tables define the recognized vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringTable {
    pub age: Vec<(String, i32)>,
    pub gender: Vec<(String, i32)>,
    pub daily_usage: Vec<(String, i32)>,
    pub symptoms: Vec<(String, i32)>,
    pub responses: Vec<(String, i32)>,
}

impl ScoringTable {
    /// The published weight system of the MJPRU student survey.
    pub fn standard() -> Self {
        Self {
            age: owned(&[
                ("15-17 Years", 5),
                ("18-22 Years", 4),
                ("23-25 Years", 3),
                ("25 and Above", 1),
            ]),
            gender: owned(&[("Male", 3), ("Female", 3)]),
            daily_usage: owned(&[
                ("0-2 hours", 1),
                ("3-4 hours", 2),
                ("5-7 hours", 3),
                ("8-10 hours", 4),
                ("10-13 hours", 5),
                ("14 and above", 6),
            ]),
            symptoms: owned(&[
                ("Fever", 3),
                ("Headache", 3),
                ("Eye Problem", 3),
                ("Frustrated", 3),
                ("Anxiety", 3),
                ("Others", 3),
            ]),
            responses: owned(&[
                ("Strongly Agree", 3),
                ("Agree", 2),
                ("Neutral", 1),
                ("Disagree", 0),
                ("Strongly Disagree", -1),
            ]),
        }
    }

    pub fn age_weight(&self, value: &str) -> i32 {
        lookup(&self.age, value)
    }

    pub fn gender_weight(&self, value: &str) -> i32 {
        lookup(&self.gender, value)
    }

    pub fn usage_weight(&self, value: &str) -> i32 {
        lookup(&self.daily_usage, value)
    }

    pub fn symptom_weight(&self, value: &str) -> i32 {
        lookup(&self.symptoms, value)
    }

    pub fn response_weight(&self, value: &str) -> i32 {
        lookup(&self.responses, value)
    }
}

fn owned(entries: &[(&str, i32)]) -> Vec<(String, i32)> {
    entries
        .iter()
        .map(|(value, weight)| (value.to_string(), *weight))
        .collect()
}

// Exact match only; callers trim at the ingestion edge where the source
// survey did (symptom tokens, CSV cells).
fn lookup(entries: &[(String, i32)], value: &str) -> i32 {
    entries
        .iter()
        .find(|(candidate, _)| candidate == value)
        .map(|(_, weight)| *weight)
        .unwrap_or(0)
}
