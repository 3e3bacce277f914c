use super::DatasetError;
use std::io::Read;

/// One historical survey response, reduced to the cells the scoring tables
/// understand. Cells keep their raw text; weighting stays fail-soft.
#[derive(Debug, Clone)]
pub(crate) struct SurveyRow {
    pub(crate) age: String,
    pub(crate) gender: String,
    pub(crate) daily_usage: String,
    pub(crate) symptoms: Vec<String>,
    pub(crate) responses: Vec<String>,
}

/// Header keywords identifying Likert statement columns in the export.
const RESPONSE_KEYWORDS: &[&str] = &[
    "check",
    "boring",
    "fun",
    "skip",
    "forget",
    "deprive",
    "anxiety",
    "fail",
    "fear",
    "trouble",
    "waste",
    "mobile calculator",
    "selfies",
];

#[derive(Debug, Default)]
struct ColumnMap {
    age: Option<usize>,
    gender: Option<usize>,
    daily_usage: Option<usize>,
    symptoms: Option<usize>,
    responses: Vec<usize>,
}

impl ColumnMap {
    fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.daily_usage.is_none()
            && self.symptoms.is_none()
            && self.responses.is_empty()
    }
}

/// Survey exports vary their headers between collection rounds, so columns
/// are located by substring rather than exact name.
fn map_columns(headers: &csv::StringRecord) -> ColumnMap {
    let mut map = ColumnMap::default();

    for (index, header) in headers.iter().enumerate() {
        let name = header.trim().to_ascii_lowercase();
        if name == "age" || name == "age range" {
            map.age.get_or_insert(index);
        } else if name == "gender" {
            map.gender.get_or_insert(index);
        } else if name.contains("time") && name.contains("smartphone") {
            map.daily_usage.get_or_insert(index);
        } else if name.contains("physical") && name.contains("psychological") {
            map.symptoms.get_or_insert(index);
        }
    }

    let claimed = [map.age, map.gender, map.daily_usage, map.symptoms];
    for (index, header) in headers.iter().enumerate() {
        if claimed.contains(&Some(index)) {
            continue;
        }
        let name = header.trim().to_ascii_lowercase();
        if RESPONSE_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
        {
            map.responses.push(index);
        }
    }

    map
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<SurveyRow>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let map = map_columns(csv_reader.headers()?);
    if map.is_empty() {
        return Err(DatasetError::NoScoringColumns);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(SurveyRow {
            age: cell(&record, map.age),
            gender: cell(&record, map.gender),
            daily_usage: cell(&record, map.daily_usage),
            symptoms: split_symptoms(&cell(&record, map.symptoms)),
            responses: map
                .responses
                .iter()
                .map(|&index| cell(&record, Some(index)))
                .collect(),
        });
    }

    Ok(rows)
}

fn cell(record: &csv::StringRecord, index: Option<usize>) -> String {
    index
        .and_then(|index| record.get(index))
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn split_symptoms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}
