//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体及其导航状态
//! - View (view/): 纯函数，将 State 映射为 Screen 描述，再由渲染器画到终端
//! - Intent (actions.rs): 按键、鼠标手势转化为明确的语义化 Action

pub mod actions;
pub mod gesture;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use view::{describe, render};
