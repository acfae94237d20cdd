//! An in-process stand-in for the chess.com API used by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::header::{CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use reqwest::Url;
use tokio::task::JoinHandle;

use crate::config::{ClientConfig, RetryPolicy};

/// One scripted response.
#[derive(Debug, Clone)]
pub(crate) struct Reply {
    status: StatusCode,
    retry_after: Option<&'static str>,
    body: String,
    delay: Duration,
}

impl Reply {
    pub(crate) fn json(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            retry_after: None,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).expect("valid status code"),
            retry_after: None,
            body: r#"{"code":0,"message":"scripted failure"}"#.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn rate_limited(retry_after: Option<&'static str>) -> Self {
        Self {
            retry_after,
            ..Self::status(429)
        }
    }

    /// Hold the response back for `delay` before answering.
    pub(crate) fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, VecDeque<Reply>>,
    user_agents: HashMap<String, Vec<String>>,
}

type Shared = Arc<Mutex<Script>>;

/// A scripted HTTP server on an ephemeral localhost port. Each path answers
/// with its queued replies in order and repeats the last one forever;
/// unscripted paths answer 404.
pub(crate) struct MockApi {
    pub(crate) base_url: Url,
    script: Shared,
    server: JoinHandle<()>,
}

impl MockApi {
    pub(crate) async fn start() -> Self {
        let script = Shared::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        let app = Router::new().fallback(respond).with_state(script.clone());
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock api server");
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/pub")).expect("mock api url"),
            script,
            server,
        }
    }

    pub(crate) fn script(&self, path: &str, replies: Vec<Reply>) {
        let mut script = self.script.lock().expect("script lock");
        script.replies.insert(path.to_string(), replies.into());
    }

    pub(crate) fn hits(&self, path: &str) -> usize {
        self.user_agents(path).len()
    }

    pub(crate) fn user_agents(&self, path: &str) -> Vec<String> {
        let script = self.script.lock().expect("script lock");
        script.user_agents.get(path).cloned().unwrap_or_default()
    }

    /// Client settings aimed at this server, with millisecond backoff.
    pub(crate) fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(5))
            .with_retry(RetryPolicy {
                max_attempts: 3,
                base_delay: Duration::from_millis(5),
            })
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn respond(State(script): State<Shared>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    let reply = {
        let mut script = script.lock().expect("script lock");
        let agent = headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        script
            .user_agents
            .entry(path.clone())
            .or_default()
            .push(agent);
        match script.replies.get_mut(&path) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        }
    };
    let reply = reply.unwrap_or_else(|| Reply::status(404));

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(retry_after) = reply.retry_after {
        response_headers.insert(RETRY_AFTER, HeaderValue::from_static(retry_after));
    }
    (reply.status, response_headers, reply.body).into_response()
}

/// A localhost listener that accepts each connection and closes it before
/// reading a byte, so every request fails in transport.
pub(crate) struct HangUpServer {
    pub(crate) base_url: Url,
    accepts: Arc<AtomicUsize>,
    server: JoinHandle<()>,
}

impl HangUpServer {
    pub(crate) async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind hang-up server");
        let addr = listener.local_addr().expect("hang-up server address");
        let accepts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&accepts);
        let server = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                drop(stream);
            }
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}/pub")).expect("hang-up server url"),
            accepts,
            server,
        }
    }

    /// Connections accepted so far.
    pub(crate) fn accepts(&self) -> usize {
        self.accepts.load(Ordering::SeqCst)
    }
}

impl Drop for HangUpServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}
