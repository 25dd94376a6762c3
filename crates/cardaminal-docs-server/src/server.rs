//! Server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use cardaminal_docs_config::SiteConfig;
use cardaminal_docs_static::assets::AssetPipeline;
use cardaminal_docs_static::{render_page, Page, TemplateEngine};

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Directory served under the base URL for paths without a route
    pub public_dir: Option<PathBuf>,

    /// Minify the served stylesheet
    pub minify: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            host: "127.0.0.1".to_string(),
            open: true,
            public_dir: None,
            minify: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    AddrError(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("Server error: {0}")]
    ServeError(String),
}

/// Shared, read-only server state.
struct ServerState {
    site: Arc<SiteConfig>,
    templates: TemplateEngine,
    css: String,
    js: String,
    public_dir: Option<PathBuf>,
}

/// Preview server.
pub struct DocsServer {
    config: ServerConfig,
    state: Arc<ServerState>,
}

impl DocsServer {
    /// Create a new server for a loaded site configuration.
    pub fn new(config: ServerConfig, site: Arc<SiteConfig>) -> Self {
        let state = Arc::new(ServerState {
            site,
            templates: TemplateEngine::new(),
            css: AssetPipeline::stylesheet(config.minify),
            js: AssetPipeline::generate_js(),
            public_dir: config.public_dir.clone(),
        });

        Self { config, state }
    }

    /// Build the router.
    ///
    /// Pages and assets are mounted under the configured base URL, matching
    /// the links the page shell emits.
    pub fn router(&self) -> Router {
        let base = self.state.site.build().base_url.as_str();

        let mut router = Router::new()
            .route(base, get(index_handler))
            .route(&format!("{}assets/main.css", base), get(css_handler))
            .route(&format!("{}assets/main.js", base), get(js_handler));

        // "/docs" as well as "/docs/"
        let bare = base.trim_end_matches('/');
        if !bare.is_empty() {
            router = router.route(bare, get(index_handler));
        }

        router
            .fallback(fallback_handler)
            .with_state(Arc::clone(&self.state))
    }

    /// Start the server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ServerError::AddrError(
                    format!("{}:{}", self.config.host, self.config.port),
                    e.to_string(),
                )
            })?;

        let app = self.router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        tracing::info!("Serving docs at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Failed to open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        Ok(())
    }
}

/// Render a page, mapping template failures to a 500.
fn render(state: &ServerState, page: Page, status: StatusCode) -> Response {
    match render_page(&state.templates, &state.site, page) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", page.output_file(), e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Render error").into_response()
        }
    }
}

/// Handler for the landing page.
async fn index_handler(State(state): State<Arc<ServerState>>) -> Response {
    render(&state, Page::Landing, StatusCode::OK)
}

/// Serve a file from the public directory, with the base URL stripped.
async fn fallback_handler(State(state): State<Arc<ServerState>>, req: Request) -> Response {
    let Some(dir) = &state.public_dir else {
        return render(&state, Page::NotFound, StatusCode::NOT_FOUND);
    };

    let base = state.site.build().base_url.as_str();
    let Some(rest) = req.uri().path().strip_prefix(base).map(str::to_string) else {
        return render(&state, Page::NotFound, StatusCode::NOT_FOUND);
    };

    let (mut parts, body) = req.into_parts();
    parts.uri = match format!("/{}", rest).parse::<Uri>() {
        Ok(uri) => uri,
        Err(_) => return render(&state, Page::NotFound, StatusCode::NOT_FOUND),
    };

    match ServeDir::new(dir)
        .try_call(Request::from_parts(parts, body))
        .await
    {
        Ok(response) if response.status() != StatusCode::NOT_FOUND => response.into_response(),
        Ok(_) => render(&state, Page::NotFound, StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::warn!("Failed to serve {}: {}", rest, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Read error").into_response()
        }
    }
}

async fn css_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], state.css.clone())
}

async fn js_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        state.js.clone(),
    )
}
