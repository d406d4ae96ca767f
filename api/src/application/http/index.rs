use axum::{
    Router,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::application::http::server::app_state::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const SCRIPT_JS: &str = include_str!("../../../static/script.js");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn script() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/javascript; charset=utf-8")], SCRIPT_JS)
}

/// Upload form served at the root path.
pub fn index_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/", root_path), get(index))
        .route(&format!("{}/static/script.js", root_path), get(script))
}
