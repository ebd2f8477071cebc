//! 应用列表页面状态
//!
//! 刷新采用单调递增的版本号：
//!     - `request_refresh()` 只递增 `refresh_version`；
//!     - 主循环每轮调用 `take_pending_load()`，当版本号大于已发出的版本时发出一次加载；
//!     - 加载结果带着发出时的版本号返回，旧版本的结果直接丢弃。
//!
//! 两次刷新请求之间若还没来得及发出加载，只会合并为一次最新版本的加载，
//! 不会出现 “翻转两次等于没翻转” 的情况。

use argo_manager_client::Application;

/// 应用列表页面状态
#[derive(Debug)]
pub struct ApplicationsState {
    /// 应用列表；None 表示尚未加载完成
    pub records: Option<Vec<Application>>,
    /// 当前选中的索引
    pub selected: usize,
    /// 是否有加载请求在途
    pub loading: bool,
    /// 是否有创建请求在途
    pub creating: bool,
    /// 正在删除的应用名
    pub deleting: Option<String>,
    /// 最近一次加载失败的原因
    pub load_error: Option<String>,
    /// 最近一次创建失败的原因
    pub create_error: Option<String>,
    /// 最近一次删除失败的原因
    pub delete_error: Option<String>,
    /// 最新请求的刷新版本
    refresh_version: u64,
    /// 已发出加载请求的版本
    issued_version: u64,
}

impl Default for ApplicationsState {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationsState {
    /// 创建新的状态；版本 1 尚未发出，首轮主循环即会加载
    pub fn new() -> Self {
        Self {
            records: None,
            selected: 0,
            loading: false,
            creating: false,
            deleting: None,
            load_error: None,
            create_error: None,
            delete_error: None,
            refresh_version: 1,
            issued_version: 0,
        }
    }

    /// 请求一次刷新，返回新的版本号
    pub fn request_refresh(&mut self) -> u64 {
        self.refresh_version += 1;
        self.refresh_version
    }

    /// 最新请求的刷新版本
    #[cfg(test)]
    pub fn refresh_version(&self) -> u64 {
        self.refresh_version
    }

    /// 取出待发出的加载版本（每个版本只会取出一次）
    pub fn take_pending_load(&mut self) -> Option<u64> {
        if self.refresh_version > self.issued_version {
            self.issued_version = self.refresh_version;
            self.loading = true;
            Some(self.refresh_version)
        } else {
            None
        }
    }

    /// 应用加载结果，整体替换列表。旧版本结果返回 false 并被忽略
    pub fn apply_loaded(&mut self, version: u64, records: Vec<Application>) -> bool {
        if version < self.refresh_version {
            return false;
        }
        if self.selected >= records.len() {
            self.selected = records.len().saturating_sub(1);
        }
        self.records = Some(records);
        self.loading = false;
        self.load_error = None;
        true
    }

    /// 应用加载失败，保留原有列表。旧版本结果返回 false 并被忽略
    pub fn apply_load_failed(&mut self, version: u64, error: String) -> bool {
        if version < self.refresh_version {
            return false;
        }
        self.loading = false;
        self.load_error = Some(error);
        true
    }

    /// 已加载的应用数量
    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len() {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.len().saturating_sub(1);
    }

    /// 获取当前选中的应用
    pub fn selected_application(&self) -> Option<&Application> {
        self.records.as_ref()?.get(self.selected)
    }
}
