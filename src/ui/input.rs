//! 输入事件映射 (Input -> Action)
//!
//! 将按键和鼠标事件转换为 Action

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::{App, NavigationState};

/// 终端一格大约对应的像素宽度，用于把列号换算成手势坐标
pub const CELL_WIDTH_PX: i32 = 8;

/// 根据当前视图和按键获取对应的 Action
pub fn get_action(nav: &NavigationState, key: KeyCode) -> Option<Action> {
    // 两个视图共用的按键
    match key {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('t') => return Some(Action::ToggleLanguage),
        KeyCode::Char('g') | KeyCode::Home => return Some(Action::Home),
        KeyCode::Char('[') => return Some(Action::HistoryBack),
        KeyCode::Char(']') => return Some(Action::HistoryForward),
        _ => {}
    }

    if nav.in_items_view() {
        match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::Back),
            _ => None,
        }
    } else {
        match key {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveSelectionLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveSelectionRight),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Open),
            _ => None,
        }
    }
}

/// 鼠标左键按下/松开视为一次触摸手势
pub fn get_mouse_action(event: &MouseEvent) -> Option<Action> {
    let x = i32::from(event.column) * CELL_WIDTH_PX;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::TouchStart(x)),
        MouseEventKind::Up(MouseButton::Left) => Some(Action::TouchEnd(x)),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(&app.nav, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, event: &MouseEvent) {
    if let Some(action) = get_mouse_action(event) {
        app.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_keys_depend_on_view() {
        let categories = NavigationState::default();
        let items = NavigationState {
            selected_category: Some("Juice".to_string()),
            ..NavigationState::default()
        };

        assert_eq!(get_action(&categories, KeyCode::Enter), Some(Action::Open));
        assert_eq!(get_action(&items, KeyCode::Enter), None);
        assert_eq!(get_action(&items, KeyCode::Esc), Some(Action::Back));
        assert_eq!(get_action(&categories, KeyCode::Esc), None);
        assert_eq!(get_action(&items, KeyCode::Char('t')), Some(Action::ToggleLanguage));
        assert_eq!(get_action(&categories, KeyCode::Char('[')), Some(Action::HistoryBack));
    }

    #[test]
    fn test_mouse_drag_maps_to_touch() {
        assert_eq!(
            get_mouse_action(&mouse(MouseEventKind::Down(MouseButton::Left), 25)),
            Some(Action::TouchStart(200))
        );
        assert_eq!(
            get_mouse_action(&mouse(MouseEventKind::Up(MouseButton::Left), 12)),
            Some(Action::TouchEnd(96))
        );
        assert_eq!(get_mouse_action(&mouse(MouseEventKind::Moved, 3)), None);
    }
}
