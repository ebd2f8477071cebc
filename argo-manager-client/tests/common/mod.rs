//! 共享测试工具：进程内的 /argo 后端模拟

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use argo_manager_client::{Application, ArgoApiClient, CreateApplicationRequest};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tokio::sync::Mutex;

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 模拟后端的共享状态
#[derive(Default)]
pub struct BackendState {
    pub applications: Mutex<Vec<Application>>,
    pub list_calls: AtomicUsize,
    /// 前 N 次 list 请求返回 503
    pub fail_list_times: AtomicUsize,
}

impl BackendState {
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

/// 运行中的模拟后端
pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<BackendState>,
}

impl MockBackend {
    /// 在 127.0.0.1 的随机端口上启动
    pub async fn start() -> Self {
        Self::start_with(Vec::new()).await
    }

    pub async fn start_with(applications: Vec<Application>) -> Self {
        let state = Arc::new(BackendState {
            applications: Mutex::new(applications),
            ..BackendState::default()
        });

        let router = Router::new()
            .route("/argo/list", get(list))
            .route("/argo/create", post(create))
            .route("/argo/delete/{name}", delete(remove))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap_or_else(|e| panic!("bind failed: {e}"));
        let addr = listener
            .local_addr()
            .unwrap_or_else(|e| panic!("local_addr failed: {e}"));

        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ArgoApiClient {
        ArgoApiClient::builder(self.base_url())
            .build()
            .unwrap_or_else(|e| panic!("client build failed: {e}"))
    }
}

pub fn application(name: &str, status: &str) -> Application {
    Application {
        name: name.to_string(),
        status: status.to_string(),
        created_at: Some("2024-05-01T10:00:00Z".to_string()),
    }
}

pub fn demo_request() -> CreateApplicationRequest {
    CreateApplicationRequest::new(
        "demo",
        "https://example.com/repo.git",
        "https://cluster.example.com",
        "manifests/demo",
    )
}

async fn list(State(state): State<Arc<BackendState>>) -> impl IntoResponse {
    state.list_calls.fetch_add(1, Ordering::SeqCst);

    let remaining = state.fail_list_times.load(Ordering::SeqCst);
    if remaining > 0 {
        state.fail_list_times.store(remaining - 1, Ordering::SeqCst);
        return (StatusCode::SERVICE_UNAVAILABLE, "try again").into_response();
    }

    Json(state.applications.lock().await.clone()).into_response()
}

async fn create(
    State(state): State<Arc<BackendState>>,
    Json(req): Json<CreateApplicationRequest>,
) -> impl IntoResponse {
    // 与真实后端相同的校验顺序与文案
    let missing = [
        (&req.application_name, "application name is missing"),
        (&req.repository_url, "repository url is missing"),
        (&req.cluster_url, "cluster url is missing"),
        (&req.path, "path is missing"),
    ]
    .into_iter()
    .find(|(value, _)| value.is_empty());

    if let Some((_, message)) = missing {
        return (StatusCode::BAD_REQUEST, message).into_response();
    }

    state.applications.lock().await.push(Application {
        name: req.application_name,
        status: "Progressing".to_string(),
        created_at: Some("2024-05-01T10:00:00Z".to_string()),
    });
    StatusCode::OK.into_response()
}

async fn remove(
    State(state): State<Arc<BackendState>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let mut apps = state.applications.lock().await;
    let before = apps.len();
    apps.retain(|a| a.name != name);
    if apps.len() == before {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("applications.argoproj.io \"{name}\" not found"),
        )
            .into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}
