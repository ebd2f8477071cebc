//! 请求执行服务
//!
//! UI 主循环是同步的；ApiService 持有一个 tokio 运行时，
//! 把 Update 层产生的 `Command` 派发为异步任务，结果经由 channel 回送。
//!
//! 视图销毁（`shutdown()` 或 Drop）时取消 `CancellationToken`：
//! 在途请求被放弃，之后不会再有任何结果被投递。

use std::sync::Arc;

use anyhow::Result;
use argo_manager_client::ApplicationApi;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use super::Command;
use crate::message::BackendMessage;

/// 请求执行服务
pub struct ApiService {
    runtime: Runtime,
    api: Arc<dyn ApplicationApi>,
    tx: UnboundedSender<BackendMessage>,
    rx: UnboundedReceiver<BackendMessage>,
    cancel: CancellationToken,
}

impl ApiService {
    /// 创建服务实例（启动后台运行时）
    pub fn new(api: Arc<dyn ApplicationApi>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("argo-manager-io")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            api,
            tx,
            rx,
            cancel: CancellationToken::new(),
        })
    }

    /// 派发命令，立即返回
    pub fn dispatch(&self, command: Command) {
        if self.cancel.is_cancelled() {
            log::debug!("Service shut down, dropping {command:?}");
            return;
        }

        log::debug!("Dispatching {command:?}");
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        let cancel = self.cancel.clone();

        self.runtime.spawn(async move {
            let message = tokio::select! {
                () = cancel.cancelled() => {
                    log::debug!("Request abandoned on shutdown");
                    return;
                }
                message = execute(api.as_ref(), command) => message,
            };

            // 异步边界之后再确认一次视图仍然存在
            if cancel.is_cancelled() {
                return;
            }
            if tx.send(message).is_err() {
                log::debug!("Result receiver dropped");
            }
        });
    }

    /// 非阻塞地取出一条已完成的结果
    pub fn try_recv(&mut self) -> Option<BackendMessage> {
        self.rx.try_recv().ok()
    }

    /// 取消所有在途请求，之后不再投递结果
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

impl Drop for ApiService {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// 执行单个命令并转换为结果消息
async fn execute(api: &dyn ApplicationApi, command: Command) -> BackendMessage {
    match command {
        Command::Load { version } => BackendMessage::Loaded {
            version,
            result: api.list_applications().await,
        },
        Command::Create(request) => {
            let result = api.create_application(&request).await;
            BackendMessage::Created {
                name: request.application_name,
                result,
            }
        }
        Command::Delete { name } => {
            let result = api.delete_application(&name).await;
            BackendMessage::Deleted { name, result }
        }
    }
}
