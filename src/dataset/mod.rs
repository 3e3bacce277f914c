//! Optional ingestion of historical survey exports.
//!
//! The scoring core never depends on this module; it exists so operators can
//! sanity-check the live weight tables against collected responses.

mod parser;

use crate::scoring::{Severity, ScoringTable};
use parser::SurveyRow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read survey dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid survey CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("no recognizable survey columns in the dataset header")]
    NoScoringColumns,
    #[error("no survey dataset configured")]
    NotConfigured,
}

/// A parsed historical survey export.
pub struct SurveyDataset {
    rows: Vec<SurveyRow>,
}

impl SurveyDataset {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        Ok(Self {
            rows: parser::parse_rows(reader)?,
        })
    }

    pub fn respondents(&self) -> usize {
        self.rows.len()
    }

    /// Scores every respondent with the given tables and aggregates the
    /// distribution. Unknown cells score zero, matching the live engine.
    pub fn summarize(&self, table: &ScoringTable) -> DatasetSummary {
        let mut band_counts = [0usize; 4];
        let mut total = 0.0;
        let mut min_score = f64::INFINITY;
        let mut max_score = f64::NEG_INFINITY;

        for row in &self.rows {
            let score = score_row(row, table);
            total += score;
            min_score = min_score.min(score);
            max_score = max_score.max(score);
            band_counts[band_index(Severity::from_score(score))] += 1;
        }

        let respondents = self.rows.len();
        let mean_score = if respondents == 0 {
            0.0
        } else {
            total / respondents as f64
        };
        if respondents == 0 {
            min_score = 0.0;
            max_score = 0.0;
        }

        DatasetSummary {
            respondents,
            mean_score,
            min_score,
            max_score,
            bands: ORDERED_SEVERITIES
                .iter()
                .map(|&severity| BandCount {
                    severity,
                    respondents: band_counts[band_index(severity)],
                })
                .collect(),
        }
    }
}

const ORDERED_SEVERITIES: [Severity; 4] = [
    Severity::Low,
    Severity::Moderate,
    Severity::High,
    Severity::VeryHigh,
];

fn band_index(severity: Severity) -> usize {
    match severity {
        Severity::Low => 0,
        Severity::Moderate => 1,
        Severity::High => 2,
        Severity::VeryHigh => 3,
    }
}

fn score_row(row: &SurveyRow, table: &ScoringTable) -> f64 {
    let mut total = table.age_weight(&row.age)
        + table.gender_weight(&row.gender)
        + table.usage_weight(&row.daily_usage);

    let distinct: BTreeSet<&str> = row.symptoms.iter().map(String::as_str).collect();
    total += distinct
        .iter()
        .map(|symptom| table.symptom_weight(symptom))
        .sum::<i32>();

    total += row
        .responses
        .iter()
        .map(|response| table.response_weight(response))
        .sum::<i32>();

    f64::from(total)
}

/// Aggregate view over a scored dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub respondents: usize,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    pub bands: Vec<BandCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandCount {
    pub severity: Severity,
    pub respondents: usize,
}
