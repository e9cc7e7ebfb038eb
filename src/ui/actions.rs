//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionLeft,
    MoveSelectionRight,

    // 导航
    Open,           // 打开当前高亮的分类
    Back,           // 返回按钮
    Home,           // 点击 logo 回到首页
    ToggleLanguage,

    // 平台历史（浏览器的后退/前进）
    HistoryBack,
    HistoryForward,

    // 手势，参数为横坐标（像素）
    TouchStart(i32),
    TouchEnd(i32),
}
