use super::severity::Severity;
use super::table::ScoringTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One respondent's answers to the survey form.
///
/// Every field is a free string (or list of them) so malformed input degrades
/// to a zero contribution instead of failing deserialization. Missing fields
/// default to empty, which scores as zero for the same reason.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub daily_usage: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub responses: LikertResponses,
}

/// Agreement ratings for the six fixed behavioral statements, keyed the way
/// the survey form names them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LikertResponses {
    /// "I find it essential to check social media frequently"
    #[serde(default)]
    pub check_social: String,
    /// "I find my studies boring due to smartphone use"
    #[serde(default)]
    pub boring_studies: String,
    /// "I don't get fun with family/friends anymore"
    #[serde(default)]
    pub no_fun: String,
    /// "I skip eating/exercising/studying for phone"
    #[serde(default)]
    pub skip_activities: String,
    /// "I have memory problems related to phone use"
    #[serde(default)]
    pub forgetful: String,
    /// "I deprive myself of sleep for phone use"
    #[serde(default)]
    pub deprive_sleep: String,
}

impl LikertResponses {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("check_social", self.check_social.as_str()),
            ("boring_studies", self.boring_studies.as_str()),
            ("no_fun", self.no_fun.as_str()),
            ("skip_activities", self.skip_activities.as_str()),
            ("forgetful", self.forgetful.as_str()),
            ("deprive_sleep", self.deprive_sleep.as_str()),
        ]
    }
}

/// Survey section a score component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreSection {
    Age,
    Gender,
    DailyUsage,
    Symptoms,
    Responses,
}

/// Discrete contribution to a score, allowing transparent display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub section: ScoreSection,
    pub points: i32,
    pub notes: String,
}

/// Scoring output: the composite score, its band, and the contribution trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: f64,
    pub severity: Severity,
    pub components: Vec<ScoreComponent>,
}

/// Stateless scorer applying the weight tables to a set of answers.
pub struct ScoreEngine {
    table: ScoringTable,
}

impl ScoreEngine {
    pub fn new(table: ScoringTable) -> Self {
        Self { table }
    }

    pub fn standard() -> Self {
        Self::new(ScoringTable::standard())
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Computes the composite score. Pure and infallible: unrecognized
    /// values contribute zero by contract.
    pub fn score(&self, answers: &Answers) -> ScoreReport {
        let mut components = Vec::new();
        let mut total: i32 = 0;

        let age_points = self.table.age_weight(&answers.age);
        components.push(ScoreComponent {
            section: ScoreSection::Age,
            points: age_points,
            notes: format!("age group '{}'", answers.age.trim()),
        });
        total += age_points;

        let gender_points = self.table.gender_weight(&answers.gender);
        components.push(ScoreComponent {
            section: ScoreSection::Gender,
            points: gender_points,
            notes: format!("gender '{}'", answers.gender.trim()),
        });
        total += gender_points;

        let usage_points = self.table.usage_weight(&answers.daily_usage);
        components.push(ScoreComponent {
            section: ScoreSection::DailyUsage,
            points: usage_points,
            notes: format!("daily usage '{}'", answers.daily_usage.trim()),
        });
        total += usage_points;

        // Duplicate symptom selections must not double-count.
        let distinct: BTreeSet<&str> = answers
            .symptoms
            .iter()
            .map(|symptom| symptom.trim())
            .filter(|symptom| !symptom.is_empty())
            .collect();
        let symptom_points: i32 = distinct
            .iter()
            .map(|symptom| self.table.symptom_weight(symptom))
            .sum();
        components.push(ScoreComponent {
            section: ScoreSection::Symptoms,
            points: symptom_points,
            notes: format!("{} distinct symptom(s)", distinct.len()),
        });
        total += symptom_points;

        let mut response_points = 0;
        for (statement, response) in answers.responses.entries() {
            let points = self.table.response_weight(response);
            response_points += points;
            if points != 0 {
                components.push(ScoreComponent {
                    section: ScoreSection::Responses,
                    points,
                    notes: format!("{statement}: '{}'", response.trim()),
                });
            }
        }
        total += response_points;

        let score = f64::from(total);
        ScoreReport {
            score,
            severity: Severity::from_score(score),
            components,
        }
    }
}
