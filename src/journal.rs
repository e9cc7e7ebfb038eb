//! 导航历史（journal）
//!
//! 相当于浏览器的 history 栈：用户主动导航时 push，后退/前进时恢复条目。
//! 历史只是增强功能，所有调用都可能失败，调用方必须能在没有它的情况下继续导航。

use serde::{Deserialize, Serialize};

use crate::error::JournalError;

/// 历史条目对应的视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Categories,
    Items,
}

/// 历史条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub view: ViewKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl HistoryEntry {
    pub fn categories() -> Self {
        Self {
            view: ViewKind::Categories,
            category: None,
        }
    }

    pub fn items(category: impl Into<String>) -> Self {
        Self {
            view: ViewKind::Items,
            category: Some(category.into()),
        }
    }

    /// 解析出条目指向的分类；不是有效的条目列表条目时返回 None
    pub fn item_category(&self) -> Option<&str> {
        match (self.view, self.category.as_deref()) {
            (ViewKind::Items, Some(key)) if !key.trim().is_empty() => Some(key),
            _ => None,
        }
    }
}

/// 导航历史能力
pub trait NavigationJournal {
    /// 追加新条目，丢弃所有"前进"条目
    fn push(&mut self, entry: HistoryEntry) -> Result<(), JournalError>;

    /// 替换当前条目
    fn replace(&mut self, entry: HistoryEntry) -> Result<(), JournalError>;

    /// 当前条目
    fn current(&self) -> Option<&HistoryEntry>;

    /// 后退一步，返回后退后的当前条目
    fn back(&mut self) -> Result<Option<HistoryEntry>, JournalError>;

    /// 前进一步，返回前进后的当前条目
    fn forward(&mut self) -> Result<Option<HistoryEntry>, JournalError>;
}

/// 内存中的历史栈
#[derive(Debug, Default)]
pub struct MemoryJournal {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NavigationJournal for MemoryJournal {
    fn push(&mut self, entry: HistoryEntry) -> Result<(), JournalError> {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
        Ok(())
    }

    fn replace(&mut self, entry: HistoryEntry) -> Result<(), JournalError> {
        match self.entries.get_mut(self.cursor) {
            Some(current) => *current = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    fn back(&mut self) -> Result<Option<HistoryEntry>, JournalError> {
        if self.cursor == 0 {
            return Ok(None);
        }
        self.cursor -= 1;
        Ok(self.current().cloned())
    }

    fn forward(&mut self) -> Result<Option<HistoryEntry>, JournalError> {
        if self.cursor + 1 >= self.entries.len() {
            return Ok(None);
        }
        self.cursor += 1;
        Ok(self.current().cloned())
    }
}

/// 无历史环境下使用：所有操作成功但什么也不做
#[derive(Debug, Default)]
pub struct NoopJournal;

impl NavigationJournal for NoopJournal {
    fn push(&mut self, _entry: HistoryEntry) -> Result<(), JournalError> {
        Ok(())
    }

    fn replace(&mut self, _entry: HistoryEntry) -> Result<(), JournalError> {
        Ok(())
    }

    fn current(&self) -> Option<&HistoryEntry> {
        None
    }

    fn back(&mut self) -> Result<Option<HistoryEntry>, JournalError> {
        Ok(None)
    }

    fn forward(&mut self) -> Result<Option<HistoryEntry>, JournalError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut journal = MemoryJournal::new();
        journal.replace(HistoryEntry::categories()).unwrap();
        journal.push(HistoryEntry::items("Juice")).unwrap();
        assert_eq!(journal.current(), Some(&HistoryEntry::items("Juice")));

        assert_eq!(journal.back().unwrap(), Some(HistoryEntry::categories()));
        assert_eq!(journal.back().unwrap(), None);
        assert_eq!(journal.forward().unwrap(), Some(HistoryEntry::items("Juice")));
        assert_eq!(journal.forward().unwrap(), None);
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut journal = MemoryJournal::new();
        journal.replace(HistoryEntry::categories()).unwrap();
        journal.push(HistoryEntry::items("Juice")).unwrap();
        journal.back().unwrap();
        journal.push(HistoryEntry::items("Soups")).unwrap();

        assert_eq!(journal.current(), Some(&HistoryEntry::items("Soups")));
        assert_eq!(journal.forward().unwrap(), None);
        assert_eq!(journal.back().unwrap(), Some(HistoryEntry::categories()));
    }

    #[test]
    fn test_item_category_rejects_malformed_entries() {
        assert_eq!(HistoryEntry::items("Juice").item_category(), Some("Juice"));
        assert_eq!(HistoryEntry::categories().item_category(), None);

        let missing = HistoryEntry {
            view: ViewKind::Items,
            category: None,
        };
        assert_eq!(missing.item_category(), None);
        assert_eq!(HistoryEntry::items("  ").item_category(), None);
    }

    #[test]
    fn test_entry_toml_shape() {
        let entry: HistoryEntry = toml::from_str("view = \"items\"\ncategory = \"Rice Items\"").unwrap();
        assert_eq!(entry, HistoryEntry::items("Rice Items"));

        let entry: HistoryEntry = toml::from_str("view = \"categories\"").unwrap();
        assert_eq!(entry, HistoryEntry::categories());
    }

    #[test]
    fn test_noop_journal() {
        let mut journal = NoopJournal;
        journal.push(HistoryEntry::items("Juice")).unwrap();
        assert!(journal.current().is_none());
        assert_eq!(journal.back().unwrap(), None);
    }
}
