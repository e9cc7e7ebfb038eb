use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::MenuError;
use crate::models::{Menu, MenuData};

/// 随程序打包的默认菜单
const BUNDLED_MENU: &str = include_str!("../data/menu.toml");

/// 解析菜单 TOML 文本
pub fn parse_menu(content: &str) -> Result<Menu, MenuError> {
    let data: MenuData = toml::from_str(content)?;
    Menu::from_data(data)
}

/// 内置菜单
pub fn bundled_menu() -> Result<Menu, MenuError> {
    parse_menu(BUNDLED_MENU)
}

/// 从TOML文件加载菜单，文件不存在时使用内置菜单
pub fn load_menu(path: &Path) -> Result<Menu, MenuError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "menu file not found, using bundled menu");
        return bundled_menu();
    }

    let content = fs::read_to_string(path)?;
    let menu = parse_menu(&content)?;
    tracing::info!(
        path = %path.display(),
        items = menu.items().len(),
        "menu loaded"
    );
    Ok(menu)
}

/// 保存菜单到TOML文件
pub fn save_menu(menu: &Menu, path: &Path) -> Result<(), MenuError> {
    let content = toml::to_string_pretty(&menu.to_data())?;
    fs::write(path, content)?;
    Ok(())
}

/// 首次运行时把内置菜单写到数据目录，方便用户修改
pub fn seed_menu(path: &Path) -> Result<(), MenuError> {
    if path.exists() {
        return Ok(());
    }

    save_menu(&bundled_menu()?, path)?;
    tracing::info!(path = %path.display(), "bundled menu written");
    Ok(())
}

/// 加载配置，文件不存在时使用默认配置
pub fn load_config(path: &Path) -> Result<Config, MenuError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
