//! 分类图标

/// 未登记分类使用的默认图标
pub const DEFAULT_ICON: &str = "🍽️";

const CATEGORY_ICONS: [(&str, &str); 10] = [
    ("Juice", "🥤"),
    ("Hot Drinks", "☕"),
    ("Rice Items", "🍚"),
    ("Evening Snack", "🥟"),
    ("Bread Items", "🥐"),
    ("Tely Special", "⭐"),
    ("Vegetable Curry", "🥦"),
    ("Chicken Items", "🍗"),
    ("Beef Items", "🥩"),
    ("Soups", "🥣"),
];

/// 根据分类 key 查找图标
pub fn icon_for(category_key: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(key, _)| *key == category_key)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icons() {
        assert_eq!(icon_for("Juice"), "🥤");
        assert_eq!(icon_for("Soups"), "🥣");
        assert_eq!(icon_for("Tely Special"), "⭐");
    }

    #[test]
    fn test_unknown_key_uses_default() {
        assert_eq!(icon_for("Desserts"), DEFAULT_ICON);
        // key 区分大小写
        assert_eq!(icon_for("juice"), DEFAULT_ICON);
    }
}
