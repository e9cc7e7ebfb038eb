//! 业务逻辑处理 (Update/Dispatch)
//!
//! 视图切换、历史记录同步、语言切换。历史记录的任何失败都只记日志，
//! 视图切换照常进行。

use super::actions::Action;
use super::state::App;
use crate::error::JournalError;
use crate::journal::{HistoryEntry, ViewKind};

/// 记录历史操作失败，不向上传播
fn log_journal_failure(op: &str, result: Result<(), JournalError>) {
    if let Err(err) = result {
        tracing::warn!(op, %err, "navigation history update failed");
    }
}

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::MoveSelectionLeft => self.move_left(),
            Action::MoveSelectionRight => self.move_right(),

            Action::Open => {
                if let Some(category) = self.highlighted_category() {
                    self.navigate_to_category(category.key);
                }
            }
            Action::Back => self.go_back(),
            Action::Home => self.go_home(),
            Action::ToggleLanguage => self.toggle_language(),

            Action::HistoryBack => self.history_back(),
            Action::HistoryForward => self.history_forward(),

            Action::TouchStart(x) => self.gesture.begin(x),
            Action::TouchEnd(x) => {
                if self.gesture.finish(x) && self.nav.in_items_view() {
                    tracing::debug!("swipe back");
                    self.go_back();
                }
            }
        }
        false
    }

    // ============ 启动 ============

    /// 首次进入：把当前历史条目标记为分类页，然后显示分类列表
    pub fn start(&mut self) {
        log_journal_failure("replace", self.journal.replace(HistoryEntry::categories()));
        self.show_category_view();
    }

    // ============ 视图切换 ============

    /// 显示分类列表
    pub fn show_category_view(&mut self) {
        self.nav.selected_category = None;
        self.selected_index = 0;
        tracing::debug!(lang = self.nav.language.tag(), "category view");
    }

    /// 显示某分类下的条目
    pub fn show_items_view(&mut self, category_key: String) {
        tracing::debug!(
            category = %category_key,
            lang = self.nav.language.tag(),
            "items view"
        );
        self.nav.selected_category = Some(category_key);
        self.selected_index = 0;
    }

    /// 用户选择分类：切换视图并写入历史
    pub fn navigate_to_category(&mut self, category_key: String) {
        self.show_items_view(category_key.clone());
        log_journal_failure("push", self.journal.push(HistoryEntry::items(category_key)));
    }

    /// 返回按钮 / 左滑
    ///
    /// 当前历史条目是条目列表时走历史后退，否则直接切回分类列表。
    pub fn go_back(&mut self) {
        let on_items_entry = self
            .journal
            .current()
            .is_some_and(|entry| entry.view == ViewKind::Items);

        if on_items_entry {
            match self.journal.back() {
                Ok(Some(entry)) => {
                    self.restore(Some(entry));
                    return;
                }
                Ok(None) => {}
                Err(err) => tracing::warn!(%err, "history back failed, navigating directly"),
            }
        }

        self.show_category_view();
    }

    /// 点击 logo 回到首页
    pub fn go_home(&mut self) {
        self.show_category_view();
        log_journal_failure("push", self.journal.push(HistoryEntry::categories()));
    }

    /// 历史条目被恢复（后退/前进）后同步视图，不再写入历史
    ///
    /// 条目缺失或无效时回到分类列表。
    pub fn restore(&mut self, entry: Option<HistoryEntry>) {
        match entry.as_ref().and_then(HistoryEntry::item_category) {
            Some(key) => self.show_items_view(key.to_string()),
            None => self.show_category_view(),
        }
    }

    /// 平台后退
    pub fn history_back(&mut self) {
        match self.journal.back() {
            Ok(Some(entry)) => self.restore(Some(entry)),
            Ok(None) => tracing::debug!("history back: no earlier entry"),
            Err(err) => tracing::warn!(%err, "history back failed"),
        }
    }

    /// 平台前进
    pub fn history_forward(&mut self) {
        match self.journal.forward() {
            Ok(Some(entry)) => self.restore(Some(entry)),
            Ok(None) => tracing::debug!("history forward: no later entry"),
            Err(err) => tracing::warn!(%err, "history forward failed"),
        }
    }

    // ============ 语言 ============

    /// 切换语言并重新进入当前视图，不改变所选分类、不写历史
    pub fn toggle_language(&mut self) {
        self.nav.language = self.nav.language.toggle();
        tracing::info!(lang = self.nav.language.tag(), "language switched");

        match self.nav.selected_category.clone() {
            Some(key) => self.show_items_view(key),
            None => self.show_category_view(),
        }
    }

    // ============ 高亮移动 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        let step = if self.nav.in_items_view() { 1 } else { self.columns };
        if self.selected_index >= step {
            self.selected_index -= step;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        let step = if self.nav.in_items_view() { 1 } else { self.columns };
        if self.selected_index + step < self.visible_len() {
            self.selected_index += step;
        }
    }

    /// 向左移动；从右向左排版时方向相反
    pub fn move_left(&mut self) {
        if self.nav.language.is_rtl() {
            self.step_forward();
        } else {
            self.step_backward();
        }
    }

    /// 向右移动；从右向左排版时方向相反
    pub fn move_right(&mut self) {
        if self.nav.language.is_rtl() {
            self.step_backward();
        } else {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) {
        if !self.nav.in_items_view() && self.selected_index + 1 < self.visible_len() {
            self.selected_index += 1;
        }
    }

    fn step_backward(&mut self) {
        if !self.nav.in_items_view() && self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }
}
