//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化与恢复，以及文件日志。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing-subscriber）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     终端：
//!         pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         init_terminal()         启用原始模式、进入备用屏幕、安装 panic hook
//!         restore_terminal()      禁用原始模式、离开备用屏幕、显示光标
//!
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal，
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         init_logging(&config)   以 config.log_level（可被 ARGO_MANAGER_LOG 覆盖）
//!                                 为过滤器，把日志追加写入 config.log_file_path()
//!
//!         UI 占用了终端，因此日志永远不写 stdout / stderr。
//!         argo-manager-client 通过 `log` 门面输出的请求日志也会汇入同一文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
