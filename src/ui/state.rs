//! App 状态定义 (Model)
//!
//! 包含导航状态及控制器本身

use crate::config::{Config, HeroQuote};
use crate::journal::NavigationJournal;
use crate::models::{Category, ItemRow, Language, Menu};

use super::gesture::SwipeTracker;
use super::view::layouts::grid_columns;

/// 导航状态
///
/// `selected_category` 为 None 时显示分类列表，否则显示该分类下的条目。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub language: Language,
    pub selected_category: Option<String>,
}

impl NavigationState {
    pub fn in_items_view(&self) -> bool {
        self.selected_category.is_some()
    }
}

/// 应用状态（视图控制器）
pub struct App {
    pub menu: Menu,
    pub nav: NavigationState,
    pub journal: Box<dyn NavigationJournal>,
    pub gesture: SwipeTracker,
    pub hero_quote: Option<HeroQuote>,
    pub selected_index: usize, // 当前高亮的卡片/行，进入视图时归零
    pub columns: usize,        // 分类网格的列数，随终端宽度变化
}

impl App {
    /// 创建新的应用实例
    pub fn new(menu: Menu, journal: Box<dyn NavigationJournal>, config: &Config) -> Self {
        Self {
            menu,
            nav: NavigationState {
                language: config.language,
                selected_category: None,
            },
            journal,
            gesture: SwipeTracker::new(config.swipe_threshold),
            hero_quote: config.hero_quote.clone(),
            selected_index: 0,
            columns: 1,
        }
    }

    /// 根据终端宽度更新网格列数
    pub fn set_viewport(&mut self, width: u16) {
        self.columns = grid_columns(width);
        if let Some(last) = self.visible_len().checked_sub(1) {
            self.selected_index = self.selected_index.min(last);
        }
    }

    /// 当前语言下的分类（每次重新推导）
    pub fn categories(&self) -> Vec<Category> {
        self.menu.categories_for(self.nav.language)
    }

    /// 当前分类下的条目；分类列表视图时为空
    pub fn items(&self) -> Vec<ItemRow> {
        match &self.nav.selected_category {
            Some(key) => self.menu.items_for(key, self.nav.language),
            None => Vec::new(),
        }
    }

    /// 当前视图中可选中的元素数量
    pub fn visible_len(&self) -> usize {
        if self.nav.in_items_view() {
            self.items().len()
        } else {
            self.categories().len()
        }
    }

    /// 区块标题
    pub fn section_title(&self) -> String {
        match &self.nav.selected_category {
            Some(key) => self.menu.display_name(key, self.nav.language),
            None => crate::i18n::texts(self.nav.language).menu_title.to_string(),
        }
    }

    /// 当前高亮的分类
    pub fn highlighted_category(&self) -> Option<Category> {
        if self.nav.in_items_view() {
            return None;
        }
        self.categories().into_iter().nth(self.selected_index)
    }
}
