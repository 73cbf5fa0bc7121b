//! HTTP entry point.
//!
//! One `GET` route streams the records below `?path=` as newline-delimited
//! JSON. Traversal is synchronous, so it runs on the blocking pool and hands
//! chunks to the response body through a bounded channel: a slow client
//! slows the traversal down, a disconnected one stops it.

use async_stream::stream;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use refscan_crawl::error::{Error as CrawlError, ErrorKind as CrawlErrorKind};
use refscan_crawl::{Crawler, resolve_root};
use refscan_extract::ExtractOptions;
use refscan_repository::RepositoryHandle;
use serde::Deserialize;
use std::io::{Error as IoError, ErrorKind as IoErrorKind, Write};
use std::mem;
use std::sync::Arc;
use tokio::sync::mpsc::{self, Sender};

pub const CONTENT_TYPE_NDJSON: &str = "application/x-ndjson";
/// Chunks (one per visited node with records) buffered ahead of the client.
const CHANNEL_CAPACITY: usize = 64;

type Chunk = Result<Bytes, IoError>;

#[derive(Clone)]
pub struct AppState {
    pub repository: RepositoryHandle,
    pub options: Arc<ExtractOptions>,
    pub default_path: Arc<str>,
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    path: Option<String>,
}

pub fn router(state: AppState, route: &str) -> Router {
    Router::new().route(route, get(extract)).with_state(state)
}

async fn extract(State(state): State<AppState>, Query(query): Query<ExtractQuery>) -> Response {
    let root = match resolve_root(state.repository.as_ref(), query.path.as_deref(), &state.default_path) {
        Ok(root) => root,
        Err(err) => return error_response(&err),
    };
    let (sender, mut receiver) = mpsc::channel::<Chunk>(CHANNEL_CAPACITY);
    let traversal = tokio::task::spawn_blocking(move || {
        let failed = sender.clone();
        let mut crawler = Crawler::new(state.repository.as_ref(), &state.options, ChannelWriter::new(sender));
        match crawler.traverse(&root) {
            Ok(stats) => tracing::debug!(nodes = stats.nodes, records = stats.records(), "Response complete"),
            // Already logged by the crawler. The response has started, so the
            // only way left to signal failure is to break the body.
            Err(err) => {
                let _ = failed.blocking_send(Err(IoError::other(err.to_string())));
            },
        }
    });
    let body = Body::from_stream(stream! {
        while let Some(chunk) = receiver.recv().await {
            yield chunk;
        }
        // The channel also closes when the traversal panics.
        if let Err(err) = traversal.await {
            tracing::error!(error = %err, "Extraction task failed");
            yield Err(IoError::other(err.to_string()));
        }
    });
    ([(CONTENT_TYPE, CONTENT_TYPE_NDJSON)], body).into_response()
}

fn error_response(err: &CrawlError) -> Response {
    let status = match &**err {
        CrawlErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
        CrawlErrorKind::InvalidPath(_) => StatusCode::BAD_REQUEST,
        _ => {
            tracing::error!(error = ?err, "Failed to resolve extraction root");
            StatusCode::INTERNAL_SERVER_ERROR
        },
    };
    (status, err.to_string()).into_response()
}

/// Buffers writes and sends them as one chunk per flush.
struct ChannelWriter {
    sender: Sender<Chunk>,
    buffer: Vec<u8>,
}
impl ChannelWriter {
    fn new(sender: Sender<Chunk>) -> Self {
        Self {
            sender,
            buffer: Vec::new(),
        }
    }
}
impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let chunk = Bytes::from(mem::take(&mut self.buffer));
        self.sender
            .blocking_send(Ok(chunk))
            .map_err(|_| IoError::new(IoErrorKind::BrokenPipe, "response body dropped"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::Request;
    use refscan_repository::error::Result as RepositoryResult;
    use refscan_repository::{MemoryRepository, Node, NodeIter, Properties, Repository};
    use serde_json::Value;
    use tower::ServiceExt;

    const ROUTE: &str = "/bin/data-extract.json";

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().copied().collect()
    }

    fn app(repository: impl Repository + 'static) -> Router {
        let state = AppState {
            repository: Arc::new(repository),
            options: Arc::new(ExtractOptions::default()),
            default_path: Arc::from("/content"),
        };
        router(state, ROUTE)
    }

    fn site() -> MemoryRepository {
        MemoryRepository::default().with_nodes([
            ("/apps/foo/bar", props(&[("jcr:primaryType", "cq:Component"), ("jcr:title", "Bar")])),
            ("/content/site/a", props(&[("sling:resourceType", "foo/bar"), ("asset", "/content/dam/a.png")])),
            ("/content/site/b", props(&[("asset", "/content/dam/b.png")])),
            ("/content/other/c", props(&[("asset", "/content/dam/c.png")])),
        ])
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap()
    }

    fn references(body: &[u8]) -> Vec<String> {
        std::str::from_utf8(body)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap())
            .filter_map(|record| record["fileReference"].as_str().map(str::to_string))
            .collect()
    }

    #[tokio::test]
    async fn test_streams_ndjson() {
        let response = get(app(site()), "/bin/data-extract.json?path=/content/site").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_NDJSON);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let lines: Vec<Value> = std::str::from_utf8(&body)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["fileReference"], "/content/dam/a.png");
        assert_eq!(lines[1]["resourceType"], "foo/bar");
        assert_eq!(lines[1]["component"]["title"], "Bar");
        assert_eq!(lines[2]["path"], "/content/site/b");
    }

    #[tokio::test]
    async fn test_default_path() {
        for uri in [ROUTE, "/bin/data-extract.json?path=", "/bin/data-extract.json?path=%20"] {
            let response = get(app(site()), uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(references(&body), vec!["/content/dam/a.png", "/content/dam/b.png", "/content/dam/c.png"]);
        }
    }

    #[tokio::test]
    async fn test_missing_root_is_not_found() {
        let response = get(app(site()), "/bin/data-extract.json?path=/content/missing").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_root_is_bad_request() {
        let response = get(app(site()), "/bin/data-extract.json?path=content").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_other_routes_are_not_served() {
        let response = get(app(site()), "/bin/other.json").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_failure_breaks_the_body() {
        let repository = site().fail_on_read("/content/other");
        let response = get(app(repository), ROUTE).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(to_bytes(response.into_body(), usize::MAX).await.is_err());
    }

    /// Resolves nodes like the wrapped repository but panics when asked for children.
    struct PanickingRepository(MemoryRepository);
    impl Repository for PanickingRepository {
        fn name(&self) -> &str {
            self.0.name()
        }

        fn resolve(&self, path: &str) -> RepositoryResult<Option<Node>> {
            self.0.resolve(path)
        }

        fn children<'a>(&'a self, node: &Node) -> NodeIter<'a> {
            panic!("children of {} requested", node.path());
        }
    }

    #[tokio::test]
    async fn test_panicking_traversal_breaks_the_body() {
        let response = get(app(PanickingRepository(site())), "/bin/data-extract.json?path=/content/site").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(to_bytes(response.into_body(), usize::MAX).await.is_err());
    }
}
