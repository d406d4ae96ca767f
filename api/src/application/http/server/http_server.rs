use std::sync::Arc;

use crate::application::http::{
    analysis::router::analysis_routes, health::health_routes, index::index_routes,
    server::{app_state::AppState, openapi::api_doc},
};
use crate::args::{Args, ServerArgs};

use anyhow::Context;
use axum::Router;
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info, info_span};
use utoipa_scalar::{Scalar, Servable};

pub fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let http_client = reqwest::Client::builder()
        .user_agent(concat!("product-safe/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build HTTP client")?;

    Ok(AppState::new(args, http_client))
}

/// Returns the [`Router`] of this application, without the metrics layer.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin: {origin}"))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let root_path = state.args.server.root_path.clone();

    let mut openapi = api_doc();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", root_path), item))
        .collect();
    openapi.paths = paths;

    let spec = openapi.clone();
    let router = axum::Router::new()
        .merge(Scalar::with_url(format!("{}/scalar", root_path), openapi))
        .route(
            &format!("{}/api-docs/openapi.json", root_path),
            get(|| async move { axum::Json(spec) }),
        )
        .merge(analysis_routes(state.clone()))
        .merge(health_routes(&root_path))
        .merge(index_routes(&root_path))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);
    Ok(router)
}

/// Adds `/metrics` and serves until the process is stopped.
///
/// The Prometheus recorder is process-global, so it is installed here once
/// rather than in [`router`].
pub async fn serve(router: Router, args: &ServerArgs) -> Result<(), anyhow::Error> {
    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let app = router
        .route(
            &format!("{}/metrics", args.root_path),
            get(|| async move { metric_handle.render() }),
        )
        .layer(prometheus_layer);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("ProductSafe listening on http://{}{}/", addr, args.root_path);
    axum::serve(listener, app).await?;
    Ok(())
}
