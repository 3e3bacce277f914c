//! Integration specifications for the nomophobia scoring workflow.
//!
//! Scenarios exercise the public library facade end to end: the weight
//! tables, the scoring engine, severity classification, and the optional
//! dataset collaborator, without reaching into private modules.

mod common {
    use nomoscore::scoring::{Answers, LikertResponses};

    pub(super) fn all_responses(value: &str) -> LikertResponses {
        LikertResponses {
            check_social: value.to_string(),
            boring_studies: value.to_string(),
            no_fun: value.to_string(),
            skip_activities: value.to_string(),
            forgetful: value.to_string(),
            deprive_sleep: value.to_string(),
        }
    }

    pub(super) fn moderate_answers() -> Answers {
        Answers {
            age: "18-22 Years".to_string(),
            gender: "Male".to_string(),
            daily_usage: "5-7 hours".to_string(),
            symptoms: vec!["Anxiety".to_string()],
            responses: all_responses("Agree"),
        }
    }
}

use common::{all_responses, moderate_answers};
use nomoscore::dataset::SurveyDataset;
use nomoscore::scoring::{Answers, ScoreEngine, ScoringTable, Severity};
use std::io::Cursor;

#[test]
fn moderate_scenario_scores_twenty_five() {
    let engine = ScoreEngine::standard();
    let report = engine.score(&moderate_answers());

    assert_eq!(report.score, 25.0);
    assert_eq!(report.severity, Severity::Moderate);
    assert_eq!(report.severity.label(), "Moderate Risk");
}

#[test]
fn minimum_scenario_scores_negative_one() {
    let engine = ScoreEngine::standard();
    let answers = Answers {
        age: "25 and Above".to_string(),
        gender: "Female".to_string(),
        daily_usage: "0-2 hours".to_string(),
        symptoms: Vec::new(),
        responses: all_responses("Strongly Disagree"),
    };

    let report = engine.score(&answers);

    assert_eq!(report.score, -1.0);
    assert_eq!(report.severity, Severity::Low);
}

#[test]
fn maximum_scenario_scores_fifty() {
    let engine = ScoreEngine::standard();
    let answers = Answers {
        age: "15-17 Years".to_string(),
        gender: "Male".to_string(),
        daily_usage: "14 and above".to_string(),
        symptoms: [
            "Fever",
            "Headache",
            "Eye Problem",
            "Frustrated",
            "Anxiety",
            "Others",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        responses: all_responses("Strongly Agree"),
    };

    let report = engine.score(&answers);

    assert_eq!(report.score, 50.0);
    assert_eq!(report.severity, Severity::VeryHigh);
    assert!(report.severity.is_urgent());
}

#[test]
fn scoring_is_deterministic_across_engine_instances() {
    let answers = moderate_answers();
    let first = ScoreEngine::new(ScoringTable::standard()).score(&answers);
    let second = ScoreEngine::new(ScoringTable::standard()).score(&answers);
    assert_eq!(first, second);
}

#[test]
fn malformed_json_answers_degrade_to_zero_contributions() {
    let answers: Answers = serde_json::from_str(
        r#"{
            "age": "18-22 Years",
            "gender": "prefer not to say",
            "daily_usage": "a lot",
            "symptoms": ["Insomnia", "Anxiety", "Anxiety"],
            "responses": { "check_social": "Sometimes" }
        }"#,
    )
    .expect("permissive payload parses");

    let report = ScoreEngine::standard().score(&answers);

    // Only the age group (4) and one recognized symptom (3) carry weight.
    assert_eq!(report.score, 7.0);
    assert_eq!(report.severity, Severity::Low);
}

#[test]
fn dataset_summary_agrees_with_the_live_engine() {
    let csv = "\
Age Range,Gender,Daily time on smartphone,Physical and Psychological symptoms,I check social media frequently,Studies feel boring,No fun with family,I skip activities for my phone,I forget things easily,I deprive myself of sleep
18-22 Years,Male,5-7 hours,Anxiety,Agree,Agree,Agree,Agree,Agree,Agree
";
    let dataset = SurveyDataset::from_reader(Cursor::new(csv)).expect("export parses");
    let summary = dataset.summarize(&ScoringTable::standard());

    let report = ScoreEngine::standard().score(&moderate_answers());

    assert_eq!(summary.respondents, 1);
    assert_eq!(summary.mean_score, report.score);
    assert_eq!(summary.min_score, summary.max_score);
    assert_eq!(summary.bands[1].respondents, 1);
}
