mod assets;
mod config;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::{response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use trip_map_shared::config::{PAGE_DESCRIPTION, PAGE_TITLE};

use config::ServerConfig;

#[derive(Clone)]
struct AppState {
    dist_dir: PathBuf,
}

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(config: &ServerConfig) -> Router {
    let static_files = Router::new()
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest("/icons", cached_static_router(&config.icons_dir(), CACHE_1DAY))
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_dir.join("assets"), CACHE_IMMUTABLE),
        );

    let state = Arc::new(AppState {
        dist_dir: config.dist_dir.clone(),
    });

    Router::new()
        .route("/", get(serve_index))
        .route("/trips", get(serve_index))
        .with_state(state)
        .merge(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // Refuse to serve a dataset the page would render with broken markers
    let loaded = match assets::Assets::load(&config.dataset_path()) {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(error = %e, "Dataset validation failed");
            return Err(e.into());
        }
    };

    let app = build_app(&config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        locations = loaded.locations.len(),
        "Server running at http://localhost:{}/trips",
        config.port
    );

    axum::serve(listener, app).await?;
    Ok(())
}

async fn serve_index(State(state): State<Arc<AppState>>) -> Html<String> {
    // Serve the built frontend, or a placeholder page while it is not built
    match tokio::fs::read_to_string(state.dist_dir.join("index.html")).await {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::warn!(error = %e, "Frontend bundle missing, serving placeholder");
            Html(placeholder_index())
        }
    }
}

fn placeholder_index() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>{PAGE_TITLE}</title>
<meta name="description" content="{PAGE_DESCRIPTION}">
</head>
<body>
<h2>Trip Locations</h2>
<p>Frontend not built yet. The dataset is available at <a href="/static/temples.json">/static/temples.json</a>.</p>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    /// Create a temp dir with a test file and return the dir path.
    fn temp_dir_with_file(file_name: &str, content: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        dir
    }

    fn test_config(assets_dir: &Path, dist_dir: &Path) -> ServerConfig {
        ServerConfig {
            assets_dir: assets_dir.to_path_buf(),
            dist_dir: dist_dir.to_path_buf(),
            ..ServerConfig::default()
        }
    }

    async fn get_uri(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_dataset_has_1day_cache() {
        let assets_dir = temp_dir_with_file("temples.json", "[]");
        let dist_dir = temp_dir_with_file("index.html", "<html></html>");
        let app = build_app(&test_config(assets_dir.path(), dist_dir.path()));

        let resp = get_uri(app, "/static/temples.json").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "public, max-age=86400, must-revalidate"
        );
        assert_eq!(body_string(resp).await, "[]");
    }

    #[tokio::test]
    async fn test_icons_served_from_icons_dir() {
        let assets_dir = temp_dir_with_file("icons/krishna-visited.png", "png");
        let dist_dir = temp_dir_with_file("index.html", "<html></html>");
        let app = build_app(&test_config(assets_dir.path(), dist_dir.path()));

        let resp = get_uri(app, "/icons/krishna-visited.png").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "public, max-age=86400, must-revalidate"
        );
    }

    #[tokio::test]
    async fn test_dist_assets_have_immutable_cache() {
        let assets_dir = temp_dir_with_file("temples.json", "[]");
        let dist_dir = temp_dir_with_file("assets/trip-map-abc123.wasm", "wasm");
        let app = build_app(&test_config(assets_dir.path(), dist_dir.path()));

        let resp = get_uri(app, "/assets/trip-map-abc123.wasm").await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "public, max-age=31536000, immutable"
        );
    }

    #[tokio::test]
    async fn test_missing_icon_returns_404() {
        let assets_dir = temp_dir_with_file("temples.json", "[]");
        let dist_dir = temp_dir_with_file("index.html", "<html></html>");
        let app = build_app(&test_config(assets_dir.path(), dist_dir.path()));

        let resp = get_uri(app, "/icons/unknown.png").await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_trips_route_serves_built_index() {
        let assets_dir = temp_dir_with_file("temples.json", "[]");
        let dist_dir = temp_dir_with_file("index.html", "<html>bundle</html>");
        let app = build_app(&test_config(assets_dir.path(), dist_dir.path()));

        let root = get_uri(app.clone(), "/").await;
        let trips = get_uri(app, "/trips").await;

        assert_eq!(root.status(), StatusCode::OK);
        assert_eq!(trips.status(), StatusCode::OK);
        assert_eq!(body_string(trips).await, "<html>bundle</html>");
    }

    #[tokio::test]
    async fn test_index_placeholder_carries_page_metadata() {
        let assets_dir = temp_dir_with_file("temples.json", "[]");
        let dist_dir = tempfile::tempdir().unwrap();
        let app = build_app(&test_config(assets_dir.path(), dist_dir.path()));

        let resp = get_uri(app, "/trips").await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        assert!(body.contains("<title>Trip Page | OpenStreetMap with Pins</title>"));
        assert!(body.contains(PAGE_DESCRIPTION));
    }
}
