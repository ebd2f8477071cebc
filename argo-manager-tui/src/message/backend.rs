//! Backend 层返回的消息
//!
//! 每个 `Command` 执行完毕后都会回送一条 `BackendMessage`，
//! 由主循环交给 Update 层处理。

use argo_manager_client::{ApiError, Application};

/// 请求结果消息
#[derive(Debug, Clone)]
pub enum BackendMessage {
    /// 列表加载完成（携带发出时的刷新版本）
    Loaded {
        version: u64,
        result: Result<Vec<Application>, ApiError>,
    },
    /// 创建完成
    Created {
        name: String,
        result: Result<(), ApiError>,
    },
    /// 删除完成
    Deleted {
        name: String,
        result: Result<(), ApiError>,
    },
}
