//! 错误类型定义

use std::io;

use thiserror::Error;

/// 应用层错误
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("TOML 解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("TOML 序列化失败: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 菜单内容不合法（空菜单、价格非法等）
    #[error("菜单数据无效: {0}")]
    InvalidMenu(String),

    #[error("无法获取用户目录: {0}")]
    MissingDir(&'static str),
}

/// 导航历史（journal）错误
///
/// 历史记录只是增强功能，调用方捕获后记录日志即可，不影响视图切换。
#[allow(dead_code)] // 由具体的历史实现返回
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JournalError {
    /// 当前环境不支持历史记录
    #[error("navigation history is unavailable")]
    Unavailable,

    /// 历史记录拒绝了本次操作
    #[error("navigation history rejected the update: {0}")]
    Rejected(String),
}
