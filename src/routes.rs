use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use nomoscore::dataset::{DatasetError, DatasetSummary};
use nomoscore::error::AppError;
use nomoscore::scoring::{
    Answers, DisplayTone, ScoreComponent, ScoreEngine, Severity, SeverityBand, SCORE_DISPLAY_MAX,
};
use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<ScoreEngine>,
    pub(crate) dataset: Option<Arc<DatasetSummary>>,
}

/// Everything a form or chart renderer needs to display one result.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) score: f64,
    pub(crate) severity: Severity,
    pub(crate) label: &'static str,
    pub(crate) tone: DisplayTone,
    pub(crate) urgent: bool,
    pub(crate) recommendation: &'static str,
    pub(crate) display_max: f64,
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) bands: Vec<SeverityBand>,
    pub(crate) evaluated_at: DateTime<Utc>,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/score", post(score_endpoint))
        .route("/api/v1/score/bands", get(bands_endpoint))
        .route("/api/v1/dataset/summary", get(dataset_summary_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Scoring never fails: unrecognized answers score zero by contract, and
/// missing request fields deserialize to empty strings.
pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(answers): Json<Answers>,
) -> Json<ScoreResponse> {
    let report = state.engine.score(&answers);

    Json(ScoreResponse {
        score: report.score,
        severity: report.severity,
        label: report.severity.label(),
        tone: report.severity.tone(),
        urgent: report.severity.is_urgent(),
        recommendation: report.severity.recommendation(),
        display_max: SCORE_DISPLAY_MAX,
        components: report.components,
        bands: Severity::bands(),
        evaluated_at: Utc::now(),
    })
}

pub(crate) async fn bands_endpoint() -> Json<Vec<SeverityBand>> {
    Json(Severity::bands())
}

pub(crate) async fn dataset_summary_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<DatasetSummary>, AppError> {
    let summary = state.dataset.ok_or(DatasetError::NotConfigured)?;
    Ok(Json(summary.as_ref().clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use nomoscore::dataset::SurveyDataset;
    use nomoscore::scoring::LikertResponses;
    use std::io::Cursor;
    use std::sync::OnceLock;
    use tower::ServiceExt;

    fn metrics_handle() -> Arc<PrometheusHandle> {
        static HANDLE: OnceLock<Arc<PrometheusHandle>> = OnceLock::new();
        HANDLE
            .get_or_init(|| {
                let (_, handle) = axum_prometheus::PrometheusMetricLayer::pair();
                Arc::new(handle)
            })
            .clone()
    }

    fn test_state(dataset: Option<Arc<DatasetSummary>>) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: metrics_handle(),
            engine: Arc::new(ScoreEngine::standard()),
            dataset,
        }
    }

    fn moderate_answers() -> Answers {
        Answers {
            age: "18-22 Years".to_string(),
            gender: "Male".to_string(),
            daily_usage: "5-7 hours".to_string(),
            symptoms: vec!["Anxiety".to_string()],
            responses: LikertResponses {
                check_social: "Agree".to_string(),
                boring_studies: "Agree".to_string(),
                no_fun: "Agree".to_string(),
                skip_activities: "Agree".to_string(),
                forgetful: "Agree".to_string(),
                deprive_sleep: "Agree".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn score_endpoint_returns_report_and_legend() {
        let Json(body) =
            score_endpoint(Extension(test_state(None)), Json(moderate_answers())).await;

        assert_eq!(body.score, 25.0);
        assert_eq!(body.severity, Severity::Moderate);
        assert_eq!(body.label, "Moderate Risk");
        assert_eq!(body.tone, DisplayTone::Warning);
        assert!(!body.urgent);
        assert_eq!(body.bands.len(), 4);
        assert_eq!(body.display_max, 50.0);
    }

    #[tokio::test]
    async fn score_endpoint_accepts_sparse_payloads() {
        let answers: Answers =
            serde_json::from_value(json!({ "age": "18-22 Years" })).expect("sparse body parses");

        let Json(body) = score_endpoint(Extension(test_state(None)), Json(answers)).await;

        assert_eq!(body.score, 4.0);
        assert_eq!(body.severity, Severity::Low);
    }

    #[tokio::test]
    async fn bands_endpoint_lists_the_legend() {
        let Json(bands) = bands_endpoint().await;
        assert_eq!(bands.len(), 4);
        assert_eq!(bands[3].range, "40+");
    }

    #[tokio::test]
    async fn dataset_summary_endpoint_requires_a_dataset() {
        let err = dataset_summary_endpoint(Extension(test_state(None)))
            .await
            .expect_err("no dataset configured");

        assert!(matches!(
            err,
            AppError::Dataset(DatasetError::NotConfigured)
        ));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn dataset_summary_endpoint_serves_loaded_summary() {
        let csv = "Age Range,Gender,I check social media frequently\n\
                   18-22 Years,Male,Agree\n";
        let dataset = SurveyDataset::from_reader(Cursor::new(csv)).expect("dataset parses");
        let engine = ScoreEngine::standard();
        let summary = Arc::new(dataset.summarize(engine.table()));

        let Json(body) = dataset_summary_endpoint(Extension(test_state(Some(summary))))
            .await
            .expect("summary serves");
        assert_eq!(body.respondents, 1);
    }

    #[tokio::test]
    async fn router_maps_missing_dataset_to_not_found() {
        let app = router().layer(Extension(test_state(None)));

        let request = Request::builder()
            .uri("/api/v1/dataset/summary")
            .body(Body::empty())
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn router_scores_over_http() {
        let app = router().layer(Extension(test_state(None)));

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&moderate_answers()).expect("answers serialize"),
            ))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        assert_eq!(body["score"], json!(25.0));
        assert_eq!(body["severity"], json!("moderate"));
    }

    #[tokio::test]
    async fn router_reports_health() {
        let app = router().layer(Extension(test_state(None)));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
