//! 配置文件 (~/.config/menu-board/config.toml)
//!
//! 所有字段都可省略，缺省值见 `Default`。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::Language;

/// 默认的滑动返回阈值（像素）
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 启动语言
    pub language: Language,
    /// 向左滑动超过该距离视为返回
    pub swipe_threshold: u16,
    /// 是否启用导航历史
    pub history: bool,
    /// 菜单文件路径，未设置时使用数据目录或内置菜单
    pub menu_path: Option<PathBuf>,
    /// 日志级别（可被 MENU_BOARD_LOG 环境变量覆盖）
    pub log_level: String,
    /// 页眉中的标语
    pub hero_quote: Option<HeroQuote>,
}

/// 双语标语
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroQuote {
    pub en: String,
    pub ar: String,
}

impl HeroQuote {
    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::En,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            history: true,
            menu_path: None,
            log_level: "info".to_string(),
            hero_quote: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.swipe_threshold, 60);
        assert!(config.history);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = toml::from_str(
            r#"
language = "ar"
history = false

[hero_quote]
en = "Taste of home"
ar = "طعم البيت"
"#,
        )
        .unwrap();

        assert_eq!(config.language, Language::Ar);
        assert!(!config.history);
        assert_eq!(config.swipe_threshold, DEFAULT_SWIPE_THRESHOLD);
        let quote = config.hero_quote.unwrap();
        assert_eq!(quote.text(Language::Ar), "طعم البيت");
        assert_eq!(quote.text(Language::En), "Taste of home");
    }
}
