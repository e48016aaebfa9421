use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::SearchResponse;
use crate::random;
use crate::unsplash::UnsplashClient;
use crate::view::{self, RenderContext};

pub struct AppState {
    pub client: UnsplashClient,
}

pub fn router(state: Arc<AppState>, public_dir: &str) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/random", post(random_photo))
        .route("/search", post(search_photo))
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves until the process is stopped.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        client: UnsplashClient::new(&config),
    });
    let app = router(state, &config.public_dir);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn home() -> Html<String> {
    Html(view::render(&RenderContext::empty()))
}

async fn random_photo(State(state): State<Arc<AppState>>) -> Html<String> {
    let result = state.client.random_photo().await;
    Html(view::render(&RenderContext::from_photo_result(result)))
}

#[derive(Debug, Deserialize)]
struct SearchForm {
    // missing field renders the same as an empty query
    #[serde(default)]
    search: String,
}

async fn search_photo(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let result = state.client.search_photos(&form.search).await;
    Html(view::render(&search_context(&form.search, result)))
}

/// Folds a search outcome into a render context: zero matches become a
/// user-facing error routed through the same presentation path as
/// transport failures, anything else picks one result at random.
fn search_context(query: &str, result: AppResult<SearchResponse>) -> RenderContext {
    match result {
        Ok(response) if response.total == 0 => RenderContext::failure(&AppError::NoResults {
            query: query.to_string(),
        }),
        Ok(response) => match random::choice(&response.results) {
            Ok(photo) => RenderContext::photo(photo),
            Err(error) => RenderContext::failure(&error),
        },
        Err(error) => RenderContext::failure(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Photo, PhotoUrls};
    use serde_json::json;

    fn photo(url: &str, description: &str) -> Photo {
        Photo {
            urls: PhotoUrls {
                regular: url.to_string(),
            },
            alt_description: Some(description.to_string()),
        }
    }

    #[test]
    fn test_search_two_results_picks_one_with_matching_description() {
        let response = SearchResponse {
            total: 2,
            results: vec![photo("A", "x"), photo("B", "y")],
        };
        let ctx = search_context("cats", Ok(response));

        let url = ctx.url.as_deref().expect("a photo should be rendered");
        let description = ctx.description.as_deref();
        assert!(
            (url == "A" && description == Some("x"))
                || (url == "B" && description == Some("y")),
            "unexpected pick: {:?}",
            ctx
        );
        assert!(ctx.error.is_none());
    }

    #[test]
    fn test_search_zero_total_renders_exact_error() {
        let response = SearchResponse {
            total: 0,
            results: vec![],
        };
        let ctx = search_context("zzzzqqqq", Ok(response));
        assert_eq!(
            ctx.error.as_deref(),
            Some("No search results found for \"zzzzqqqq\".")
        );
        assert!(ctx.url.is_none());
    }

    #[test]
    fn test_search_transport_failure_renders_description() {
        let ctx = search_context("cats", Err(AppError::Transport("connection refused".into())));
        assert_eq!(ctx.error.as_deref(), Some("connection refused"));
        assert!(ctx.url.is_none());
    }

    #[test]
    fn test_search_upstream_payload_renders_serialized() {
        let err = AppError::Upstream(json!({"errors": ["Rate Limit Exceeded"]}));
        let ctx = search_context("cats", Err(err));
        assert_eq!(
            ctx.error.as_deref(),
            Some(r#"{"errors":["Rate Limit Exceeded"]}"#)
        );
    }

    #[test]
    fn test_search_positive_total_with_empty_results_is_an_error() {
        // total > 0 with an empty results array is out of contract for
        // the API; the selector reports it instead of panicking.
        let response = SearchResponse {
            total: 3,
            results: vec![],
        };
        let ctx = search_context("cats", Ok(response));
        assert!(ctx.url.is_none());
        assert!(ctx.error.is_some());
    }
}
