mod config;
mod error;
mod i18n;
mod icons;
mod journal;
mod models;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::MenuError;
use crate::journal::{MemoryJournal, NavigationJournal, NoopJournal};
use crate::storage::{load_config, load_menu, seed_menu};
use crate::ui::{App, describe, render};

/// 获取数据目录路径 (~/.local/share/menu-board/)
fn get_data_dir() -> Result<PathBuf, MenuError> {
    let data_dir = dirs::data_dir()
        .ok_or(MenuError::MissingDir("data"))?
        .join("menu-board");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 获取配置目录路径 (~/.config/menu-board/)
fn get_config_dir() -> Result<PathBuf, MenuError> {
    Ok(dirs::config_dir()
        .ok_or(MenuError::MissingDir("config"))?
        .join("menu-board"))
}

/// 初始化日志：终端被 TUI 占用，日志写入数据目录下的文件
fn init_logging(data_dir: &Path, level: &str) -> WorkerGuard {
    let appender = tracing_appender::rolling::never(data_dir, "menu-board.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("MENU_BOARD_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .init();

    guard
}

fn main() -> Result<(), MenuError> {
    let data_dir = get_data_dir()?;
    let config = load_config(&get_config_dir()?.join("config.toml"))?;
    let _log_guard = init_logging(&data_dir, &config.log_level);

    // 菜单文件：配置指定的路径，否则数据目录下的 menu.toml
    let menu_path = match &config.menu_path {
        Some(path) => path.clone(),
        None => {
            let path = data_dir.join("menu.toml");
            if let Err(err) = seed_menu(&path) {
                tracing::warn!(%err, "failed to write bundled menu");
            }
            path
        }
    };
    let menu = load_menu(&menu_path)?;

    let journal: Box<dyn NavigationJournal> = if config.history {
        Box::new(MemoryJournal::new())
    } else {
        Box::new(NoopJournal)
    };

    // 创建应用状态
    let mut app = App::new(menu, journal, &config);
    app.start();

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(%err, "event loop failed");
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), MenuError> {
    loop {
        app.set_viewport(terminal.size()?.width);
        let screen = describe(app);
        terminal.draw(|f| render(f, &screen))?;

        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if ui::handle_key_event(app, key.code) {
                    break;
                }
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, &mouse),
            _ => {}
        }
    }
    Ok(())
}
