//! 创建表单状态

use argo_manager_client::CreateApplicationRequest;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    ApplicationName,
    RepositoryUrl,
    ClusterUrl,
    Path,
}

impl FormField {
    /// 按显示顺序排列的全部字段
    pub const ALL: [FormField; 4] = [
        FormField::ApplicationName,
        FormField::RepositoryUrl,
        FormField::ClusterUrl,
        FormField::Path,
    ];

    /// 输入框占位符
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::ApplicationName => "Application Name",
            FormField::RepositoryUrl => "Repo URL",
            FormField::ClusterUrl => "Cluster URL",
            FormField::Path => "Path",
        }
    }

    /// 下一个字段；最后一个字段返回 None
    pub fn next(self) -> Option<FormField> {
        match self {
            FormField::ApplicationName => Some(FormField::RepositoryUrl),
            FormField::RepositoryUrl => Some(FormField::ClusterUrl),
            FormField::ClusterUrl => Some(FormField::Path),
            FormField::Path => None,
        }
    }

    /// 上一个字段；第一个字段返回 None
    pub fn prev(self) -> Option<FormField> {
        match self {
            FormField::ApplicationName => None,
            FormField::RepositoryUrl => Some(FormField::ApplicationName),
            FormField::ClusterUrl => Some(FormField::RepositoryUrl),
            FormField::Path => Some(FormField::ClusterUrl),
        }
    }
}

/// 创建表单状态
///
/// 保存四个原始输入值，提交时不校验、不清空。
#[derive(Debug, Default)]
pub struct CreateFormState {
    pub application_name: String,
    pub repository_url: String,
    pub cluster_url: String,
    pub path: String,
    /// 当前输入焦点
    pub focused: FormField,
}

impl CreateFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::ApplicationName => &self.application_name,
            FormField::RepositoryUrl => &self.repository_url,
            FormField::ClusterUrl => &self.cluster_url,
            FormField::Path => &self.path,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::ApplicationName => &mut self.application_name,
            FormField::RepositoryUrl => &mut self.repository_url,
            FormField::ClusterUrl => &mut self.cluster_url,
            FormField::Path => &mut self.path,
        }
    }

    /// 在当前字段末尾追加字符
    pub fn input(&mut self, c: char) {
        let field = self.focused;
        self.value_mut(field).push(c);
    }

    /// 删除当前字段最后一个字符
    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// 以提交时刻的值构造请求
    pub fn to_request(&self) -> CreateApplicationRequest {
        CreateApplicationRequest::new(
            self.application_name.clone(),
            self.repository_url.clone(),
            self.cluster_url.clone(),
            self.path.clone(),
        )
    }
}
