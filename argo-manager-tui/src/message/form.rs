//! 创建表单消息

/// 创建表单消息
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// 输入字符
    Input(char),
    /// 删除字符（Backspace）
    Backspace,
    /// 提交表单
    Submit,
}
