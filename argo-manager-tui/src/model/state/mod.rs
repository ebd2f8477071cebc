//! 页面状态模块
//!
//! 定义应用列表、创建表单与弹窗的状态数据结构

mod applications;
mod form;
mod modal;

pub use applications::ApplicationsState;
pub use form::{CreateFormState, FormField};
pub use modal::{Modal, ModalState};
