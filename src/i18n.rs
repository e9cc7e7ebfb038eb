//! 界面文案
//!
//! 菜单内容自带双语字段，这里只放界面外壳（标题、按钮、提示）的文字。

use crate::models::Language;

/// 界面外壳文案
pub struct Texts {
    /// 分类页标题
    pub menu_title: &'static str,
    /// 语言切换按钮（显示的是另一种语言的名字）
    pub toggle_label: &'static str,
    pub back_label: &'static str,
    pub empty_category: &'static str,
    pub category_hints: &'static str,
    pub item_hints: &'static str,
}

const EN: Texts = Texts {
    menu_title: "Our Menu",
    toggle_label: "العربية",
    back_label: "Back to Categories",
    empty_category: "No items in this category",
    category_hints: "[←↑↓→] Move  [Enter] Open  [t] العربية  [g] Home  [[/]] History  [q] Quit",
    item_hints: "[↑↓] Move  [Esc] Back  [t] العربية  [g] Home  [[/]] History  [q] Quit",
};

const AR: Texts = Texts {
    menu_title: "قائمتنا",
    toggle_label: "English",
    back_label: "العودة للقائمة",
    empty_category: "لا توجد أصناف في هذا القسم",
    category_hints: "[←↑↓→] تنقل  [Enter] فتح  [t] English  [g] الرئيسية  [[/]] السجل  [q] خروج",
    item_hints: "[↑↓] تنقل  [Esc] رجوع  [t] English  [g] الرئيسية  [[/]] السجل  [q] خروج",
};

/// 获取指定语言的文案
pub fn texts(lang: Language) -> &'static Texts {
    match lang {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}
