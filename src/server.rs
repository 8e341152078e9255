use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::{
    ApiAnalyzeRequest, ApiAnalyzeResponse, ApiCompareEntry, ApiCompareRequest, ApiPredictRequest,
    ApiPredictResponse,
};
use engage_sim::config::PredictorConfig;
use engage_sim::{
    compare_all_post_types, predict_from_metadata, predict_from_text, ModelContext, PredictorError,
};

#[derive(Clone)]
struct AppState {
    model: Arc<ModelContext>,
}

pub async fn serve(args: crate::ServeArgs, config: PredictorConfig) -> Result<(), PredictorError> {
    let model = ModelContext::load(&config.model.bundle_path)?;
    let state = AppState {
        model: Arc::new(model),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/predict", post(predict_handler))
        .route("/api/compare", post(compare_handler))
        .route("/api/analyze", post(analyze_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| PredictorError::validation(format!("invalid bind address: {}", err)))?;

    info!(%addr, "starting engagement predictor server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(PredictorError::Io)?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPredictRequest>,
) -> Result<Json<ApiPredictResponse>, (StatusCode, String)> {
    let metadata = request.into_metadata().map_err(error_response)?;
    let result = predict_from_metadata(&state.model, &metadata).map_err(error_response)?;
    Ok(Json(ApiPredictResponse::from_result(result)))
}

async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiCompareRequest>,
) -> Result<Json<Vec<ApiCompareEntry>>, (StatusCode, String)> {
    let month = request.month();
    let comparison = compare_all_post_types(
        &state.model,
        month,
        request.impressions.unwrap_or(1000),
        request.reach.unwrap_or(1200),
        request.clicks.unwrap_or(100),
    )
    .map_err(error_response)?;

    Ok(Json(
        comparison
            .into_iter()
            .map(ApiCompareEntry::from_comparison)
            .collect(),
    ))
}

async fn analyze_handler(
    Json(request): Json<ApiAnalyzeRequest>,
) -> Result<Json<ApiAnalyzeResponse>, (StatusCode, String)> {
    let (text, post_type) = request.into_parts().map_err(error_response)?;
    let result = predict_from_text(&text, post_type).map_err(error_response)?;
    Ok(Json(ApiAnalyzeResponse::from_result(result)))
}

fn error_response(err: PredictorError) -> (StatusCode, String) {
    let status = match err {
        PredictorError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
