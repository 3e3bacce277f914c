use clap::Args;
use nomoscore::dataset::SurveyDataset;
use nomoscore::error::AppError;
use nomoscore::scoring::{
    Answers, LikertResponses, ScoreEngine, ScoreReport, Severity, ScoringTable, SCORE_DISPLAY_MAX,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// Age group (e.g. "18-22 Years")
    #[arg(long)]
    pub(crate) age: Option<String>,
    /// Gender ("Male" or "Female")
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// Daily smartphone usage band (e.g. "5-7 hours")
    #[arg(long)]
    pub(crate) usage: Option<String>,
    /// Physical/psychological symptom; repeat the flag for several
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<String>,
    /// "I find it essential to check social media frequently"
    #[arg(long)]
    pub(crate) check_social: Option<String>,
    /// "I find my studies boring due to smartphone use"
    #[arg(long)]
    pub(crate) boring_studies: Option<String>,
    /// "I don't get fun with family/friends anymore"
    #[arg(long)]
    pub(crate) no_fun: Option<String>,
    /// "I skip eating/exercising/studying for phone"
    #[arg(long)]
    pub(crate) skip_activities: Option<String>,
    /// "I have memory problems related to phone use"
    #[arg(long)]
    pub(crate) forgetful: Option<String>,
    /// "I deprive myself of sleep for phone use"
    #[arg(long)]
    pub(crate) deprive_sleep: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct DatasetSummaryArgs {
    /// Path to the survey CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

impl ScoreArgs {
    fn into_answers(self) -> Answers {
        Answers {
            age: self.age.unwrap_or_default(),
            gender: self.gender.unwrap_or_default(),
            daily_usage: self.usage.unwrap_or_default(),
            symptoms: self.symptoms,
            responses: LikertResponses {
                check_social: self.check_social.unwrap_or_default(),
                boring_studies: self.boring_studies.unwrap_or_default(),
                no_fun: self.no_fun.unwrap_or_default(),
                skip_activities: self.skip_activities.unwrap_or_default(),
                forgetful: self.forgetful.unwrap_or_default(),
                deprive_sleep: self.deprive_sleep.unwrap_or_default(),
            },
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = ScoreEngine::standard();
    let report = engine.score(&args.into_answers());
    render_score_report(&report);
    Ok(())
}

pub(crate) fn run_dataset_summary(args: DatasetSummaryArgs) -> Result<(), AppError> {
    let dataset = SurveyDataset::from_path(&args.csv).map_err(AppError::from)?;
    let summary = dataset.summarize(&ScoringTable::standard());

    println!("Survey dataset summary");
    println!("Respondents: {}", summary.respondents);
    println!(
        "Scores: mean {:.1}, min {:.1}, max {:.1}",
        summary.mean_score, summary.min_score, summary.max_score
    );
    println!("\nSeverity distribution");
    for band in &summary.bands {
        println!(
            "- {}: {} respondent(s)",
            band.severity.label(),
            band.respondents
        );
    }

    Ok(())
}

fn render_score_report(report: &ScoreReport) {
    println!("Nomophobia score: {:.1}", report.score);
    println!("Severity: {}", report.severity.label());
    println!("\n{}", gauge_line(report.score));

    println!("\nContributions");
    for component in &report.components {
        println!(
            "- {:?}: {:+} ({})",
            component.section, component.points, component.notes
        );
    }

    println!("\nScore interpretation");
    for band in Severity::bands() {
        println!(
            "- {} ({}): {}",
            band.severity.label(),
            band.range,
            band.description
        );
    }

    println!("\n{}", report.severity.recommendation());
}

fn gauge_line(score: f64) -> String {
    let width = SCORE_DISPLAY_MAX as usize;
    let filled = score.clamp(0.0, SCORE_DISPLAY_MAX).round() as usize;
    format!(
        "[{}{}] {:.1} / {:.0}",
        "#".repeat(filled),
        ".".repeat(width - filled),
        score,
        SCORE_DISPLAY_MAX
    )
}
