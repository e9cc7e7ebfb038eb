use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::MenuError;

/// 显示语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// 切换到另一种语言
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// 文档语言标记
    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// 是否从右向左排版
    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }
}

/// 菜单条目（来自数据文件，只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub category_key_en: String,
    pub category_name_en: String,
    pub category_name_ar: String,
    pub name_en: String,
    pub name_ar: String,
    pub price: f64,
}

impl MenuItem {
    pub fn name(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.name_en,
            Language::Ar => &self.name_ar,
        }
    }

    pub fn category_name(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.category_name_en,
            Language::Ar => &self.category_name_ar,
        }
    }
}

/// 分类（由条目推导）
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub key: String,
    pub display_name: String,
}

/// 分类下的一行条目（由条目推导）
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub name: String,
    pub price: f64,
}

/// TOML文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuData {
    pub meta: MenuMeta,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuMeta {
    pub name: String,
    pub updated_at: DateTime<Local>,
}

/// 运行时菜单，整个会话内不变
#[derive(Debug, Clone)]
pub struct Menu {
    pub meta: MenuMeta,
    items: Vec<MenuItem>,
}

impl Menu {
    /// 校验并构建菜单
    pub fn from_data(data: MenuData) -> Result<Self, MenuError> {
        if data.items.is_empty() {
            return Err(MenuError::InvalidMenu("菜单中没有任何条目".to_string()));
        }

        for item in &data.items {
            if item.category_key_en.trim().is_empty() {
                return Err(MenuError::InvalidMenu(format!(
                    "条目 '{}' 缺少分类",
                    item.name_en
                )));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(MenuError::InvalidMenu(format!(
                    "条目 '{}' 的价格无效: {}",
                    item.name_en, item.price
                )));
            }
        }

        Ok(Self {
            meta: data.meta,
            items: data.items,
        })
    }

    pub fn to_data(&self) -> MenuData {
        MenuData {
            meta: self.meta.clone(),
            items: self.items.clone(),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// 按首次出现顺序列出分类，每个 key 只出现一次
    pub fn categories_for(&self, lang: Language) -> Vec<Category> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut categories = Vec::new();

        for item in &self.items {
            if seen.insert(&item.category_key_en) {
                categories.push(Category {
                    key: item.category_key_en.clone(),
                    display_name: item.category_name(lang).to_string(),
                });
            }
        }

        categories
    }

    /// 列出某分类下的条目，保持原始顺序，价格原样返回
    pub fn items_for(&self, category_key: &str, lang: Language) -> Vec<ItemRow> {
        self.items
            .iter()
            .filter(|item| item.category_key_en == category_key)
            .map(|item| ItemRow {
                name: item.name(lang).to_string(),
                price: item.price,
            })
            .collect()
    }

    /// 分类显示名；未知 key 直接返回原文
    pub fn display_name(&self, category_key: &str, lang: Language) -> String {
        self.categories_for(lang)
            .into_iter()
            .find(|c| c.key == category_key)
            .map(|c| c.display_name)
            .unwrap_or_else(|| category_key.to_string())
    }
}
