use crate::cli::ServeArgs;
use crate::routes::{self, AppState};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nomoscore::config::AppConfig;
use nomoscore::dataset::SurveyDataset;
use nomoscore::error::AppError;
use nomoscore::scoring::{ScoreEngine, ScoringTable};
use nomoscore::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let engine = Arc::new(ScoreEngine::new(ScoringTable::standard()));

    // The historical export is advisory; scoring must work without it.
    let dataset = match &config.dataset.path {
        Some(path) => match SurveyDataset::from_path(path) {
            Ok(dataset) => {
                let summary = dataset.summarize(engine.table());
                info!(respondents = summary.respondents, "survey dataset loaded");
                Some(Arc::new(summary))
            }
            Err(err) => {
                warn!(
                    %err,
                    path = %path.display(),
                    "survey dataset unavailable; scoring continues without it"
                );
                None
            }
        },
        None => None,
    };

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine,
        dataset,
    };

    let app = routes::router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "nomophobia scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
