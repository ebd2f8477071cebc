//! 可复用组件

pub mod form;
pub mod modal;
pub mod statusbar;
