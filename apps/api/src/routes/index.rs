use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET /
/// The single-page advisor UI.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
