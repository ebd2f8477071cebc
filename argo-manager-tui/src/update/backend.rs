//! 请求结果处理
//!
//! 创建/删除成功后才请求刷新；失败只写入内联错误。

use argo_manager_client::ApiError;

use crate::message::BackendMessage;
use crate::model::App;

/// 处理请求结果消息
pub fn update(app: &mut App, msg: BackendMessage) {
    match msg {
        BackendMessage::Loaded { version, result } => match result {
            Ok(records) => {
                let count = records.len();
                if app.applications.apply_loaded(version, records) {
                    log::debug!("Loaded {count} applications (version {version})");
                    if app.status_message.as_deref() == Some("Refreshing...") {
                        app.clear_status();
                    }
                } else {
                    log::debug!("Discarded stale load result (version {version})");
                }
            }
            Err(e) => {
                log_failure("list applications", &e);
                if !app.applications.apply_load_failed(version, e.to_string()) {
                    log::debug!("Discarded stale load failure (version {version})");
                }
            }
        },

        BackendMessage::Created { name, result } => {
            app.applications.creating = false;
            match result {
                Ok(()) => {
                    app.applications.create_error = None;
                    app.applications.request_refresh();
                    app.set_status(format!("Created application \"{name}\""));
                }
                Err(e) => {
                    log_failure("create application", &e);
                    app.applications.create_error = Some(e.to_string());
                    app.set_status(format!("Failed to create \"{name}\""));
                }
            }
        }

        BackendMessage::Deleted { name, result } => {
            app.applications.deleting = None;
            match result {
                Ok(()) => {
                    app.applications.delete_error = None;
                    app.applications.request_refresh();
                    app.set_status(format!("Deleted application \"{name}\""));
                }
                Err(e) => {
                    log_failure("delete application", &e);
                    app.applications.delete_error = Some(e.to_string());
                    app.set_status(format!("Failed to delete \"{name}\""));
                }
            }
        }
    }
}

/// 预期内的失败（4xx）记为 warn，其余记为 error
fn log_failure(operation: &str, error: &ApiError) {
    if error.is_expected() {
        log::warn!("Failed to {operation}: {error}");
    } else {
        log::error!("Failed to {operation}: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argo_manager_client::Application;

    fn record(name: &str) -> Application {
        Application {
            name: name.to_string(),
            status: "Healthy".to_string(),
            created_at: None,
        }
    }

    fn bad_request() -> ApiError {
        ApiError::Status {
            status: 400,
            message: "application name is missing".to_string(),
        }
    }

    #[test]
    fn successful_create_requests_one_refresh() {
        let mut app = App::new();
        app.applications.take_pending_load();
        app.applications.creating = true;

        update(
            &mut app,
            BackendMessage::Created {
                name: "demo".to_string(),
                result: Ok(()),
            },
        );
        assert!(!app.applications.creating);
        assert_eq!(app.applications.take_pending_load(), Some(2));
        assert_eq!(app.applications.take_pending_load(), None);
    }

    #[test]
    fn failed_create_sets_error_without_refresh() {
        let mut app = App::new();
        app.applications.take_pending_load();
        app.applications.creating = true;

        update(
            &mut app,
            BackendMessage::Created {
                name: String::new(),
                result: Err(bad_request()),
            },
        );
        assert!(!app.applications.creating);
        assert_eq!(
            app.applications.create_error.as_deref(),
            Some("HTTP 400: application name is missing")
        );
        assert_eq!(app.applications.take_pending_load(), None);
    }

    #[test]
    fn successful_delete_requests_exactly_one_refresh() {
        let mut app = App::new();
        app.applications.take_pending_load();
        app.applications.deleting = Some("demo".to_string());

        update(
            &mut app,
            BackendMessage::Deleted {
                name: "demo".to_string(),
                result: Ok(()),
            },
        );
        assert!(app.applications.deleting.is_none());
        assert_eq!(app.applications.refresh_version(), 2);
        assert_eq!(app.applications.take_pending_load(), Some(2));
    }

    #[test]
    fn failed_delete_sets_error_without_refresh() {
        let mut app = App::new();
        app.applications.take_pending_load();
        app.applications.deleting = Some("ghost".to_string());

        update(
            &mut app,
            BackendMessage::Deleted {
                name: "ghost".to_string(),
                result: Err(ApiError::Status {
                    status: 500,
                    message: "application ghost not found".to_string(),
                }),
            },
        );
        assert!(app.applications.delete_error.is_some());
        assert_eq!(app.applications.take_pending_load(), None);
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut app = App::new();
        let first = app.applications.take_pending_load().unwrap();
        app.applications.request_refresh();
        let second = app.applications.take_pending_load().unwrap();

        update(
            &mut app,
            BackendMessage::Loaded {
                version: second,
                result: Ok(vec![record("new")]),
            },
        );
        update(
            &mut app,
            BackendMessage::Loaded {
                version: first,
                result: Ok(vec![record("old")]),
            },
        );

        let names: Vec<_> = app
            .applications
            .records
            .as_ref()
            .unwrap()
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["new"]);
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        let mut app = App::new();
        let first = app.applications.take_pending_load().unwrap();
        update(
            &mut app,
            BackendMessage::Loaded {
                version: first,
                result: Ok(vec![record("a")]),
            },
        );

        app.applications.request_refresh();
        let second = app.applications.take_pending_load().unwrap();
        update(
            &mut app,
            BackendMessage::Loaded {
                version: second,
                result: Err(ApiError::Network {
                    detail: "connection refused".to_string(),
                }),
            },
        );

        assert_eq!(app.applications.len(), 1);
        assert!(!app.applications.loading);
        assert_eq!(
            app.applications.load_error.as_deref(),
            Some("Network error: connection refused")
        );
    }
}
