//! 视图层模块
//!
//! `describe` 把 App 状态映射为声明式的 `Screen`，`render` 只负责把 `Screen`
//! 画到终端上，两者互不依赖具体的输入处理。

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::state::App;
use crate::i18n::texts;
use crate::icons::icon_for;
use components::{alignment, format_price, render_category_card, render_header};
use layouts::{first_visible_row, grid_cells, visible_rows};

/// 分类卡片
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCard {
    pub icon: &'static str,
    pub name: String,
}

/// 条目行
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLine {
    pub name: String,
    pub price: String,
}

/// 主体区域：两个视图互斥
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Categories(Vec<CategoryCard>),
    Items(Vec<ItemLine>),
}

/// 一帧画面的完整描述
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub brand: String,
    pub updated: String,
    pub title: String,
    pub lang_tag: &'static str,
    pub rtl: bool,
    pub toggle_label: &'static str,
    pub back_label: Option<&'static str>, // 只在条目视图出现
    pub hero_quote: Option<String>,
    pub hints: &'static str,
    pub empty_text: &'static str,
    pub body: Body,
    pub selected: usize,
    pub columns: usize,
}

/// 将状态映射为画面描述
pub fn describe(app: &App) -> Screen {
    let lang = app.nav.language;
    let texts = texts(lang);

    let (body, back_label, hints) = match &app.nav.selected_category {
        Some(key) => {
            let lines = app
                .menu
                .items_for(key, lang)
                .into_iter()
                .map(|row| ItemLine {
                    name: row.name,
                    price: format_price(row.price),
                })
                .collect();
            (Body::Items(lines), Some(texts.back_label), texts.item_hints)
        }
        None => {
            let cards = app
                .categories()
                .into_iter()
                .map(|category| CategoryCard {
                    icon: icon_for(&category.key),
                    name: category.display_name,
                })
                .collect();
            (Body::Categories(cards), None, texts.category_hints)
        }
    };

    Screen {
        brand: app.menu.meta.name.clone(),
        updated: app.menu.meta.updated_at.format("%Y-%m-%d").to_string(),
        title: app.section_title(),
        lang_tag: lang.tag(),
        rtl: lang.is_rtl(),
        toggle_label: texts.toggle_label,
        back_label,
        hero_quote: app.hero_quote.as_ref().map(|q| q.text(lang).to_string()),
        hints,
        empty_text: texts.empty_category,
        body,
        selected: app.selected_index,
        columns: app.columns,
    }
}

/// 渲染 UI
pub fn render(frame: &mut Frame, screen: &Screen) {
    let header_height = if screen.hero_quote.is_some() { 4 } else { 3 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // 页眉
            Constraint::Length(3),             // 区块标题
            Constraint::Min(3),                // 网格/列表
            Constraint::Length(3),             // 帮助
        ])
        .split(frame.area());

    render_header(
        frame,
        chunks[0],
        &screen.brand,
        screen.toggle_label,
        screen.lang_tag,
        screen.hero_quote.as_deref(),
        screen.rtl,
    );
    render_title(frame, screen, chunks[1]);

    match &screen.body {
        Body::Categories(cards) => render_categories(frame, screen, cards, chunks[2]),
        Body::Items(lines) => render_items(frame, screen, lines, chunks[2]),
    }

    render_help(frame, screen, chunks[3]);
}

fn render_title(frame: &mut Frame, screen: &Screen, area: Rect) {
    let title = Span::styled(
        screen.title.clone(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let line = match screen.back_label {
        Some(back) => {
            let back = Span::styled(
                if screen.rtl {
                    format!("{} → [Esc]", back)
                } else {
                    format!("[Esc] ← {}", back)
                },
                Style::default().fg(Color::Gray),
            );
            if screen.rtl {
                Line::from(vec![title, Span::raw("   "), back])
            } else {
                Line::from(vec![back, Span::raw("   "), title])
            }
        }
        None => Line::from(title),
    };

    let widget = Paragraph::new(line)
        .alignment(alignment(screen.rtl))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_categories(frame: &mut Frame, screen: &Screen, cards: &[CategoryCard], area: Rect) {
    let rows = visible_rows(area.height);
    let first_row = first_visible_row(screen.selected, screen.columns, rows);

    for (index, cell) in grid_cells(area, cards.len(), screen.columns, first_row, screen.rtl) {
        let card = &cards[index];
        render_category_card(
            frame,
            cell,
            card.icon,
            &card.name,
            index == screen.selected,
            screen.rtl,
        );
    }
}

fn render_items(frame: &mut Frame, screen: &Screen, lines: &[ItemLine], area: Rect) {
    let block = Block::default().borders(Borders::ALL);

    if lines.is_empty() {
        let empty = Paragraph::new(screen.empty_text)
            .style(Style::default().fg(Color::Gray))
            .alignment(alignment(screen.rtl))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let align = alignment(screen.rtl);
    let rows: Vec<Row> = lines
        .iter()
        .map(|line| {
            let name = Cell::from(Text::from(line.name.clone()).alignment(align));
            let price = Cell::from(Text::from(line.price.clone()).alignment(align))
                .style(Style::default().fg(Color::Green));
            if screen.rtl {
                Row::new(vec![price, name])
            } else {
                Row::new(vec![name, price])
            }
        })
        .collect();

    let widths = if screen.rtl {
        [Constraint::Length(12), Constraint::Min(10)]
    } else {
        [Constraint::Min(10), Constraint::Length(12)]
    };

    let table = Table::new(rows, widths).block(block).row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
    );

    let mut state = TableState::default();
    state.select(Some(screen.selected));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_help(frame: &mut Frame, screen: &Screen, area: Rect) {
    let text = format!("{}  |  {}", screen.hints, screen.updated);

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(alignment(screen.rtl))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, HeroQuote};
    use crate::journal::MemoryJournal;
    use crate::models::tests::sample_menu;
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let mut app = App::new(sample_menu(), Box::new(MemoryJournal::new()), &Config::default());
        app.start();
        app
    }

    fn draw(screen: &Screen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render(f, screen)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_describe_category_view() {
        let screen = describe(&app());

        assert_eq!(screen.title, "Our Menu");
        assert_eq!(screen.toggle_label, "العربية");
        assert_eq!(screen.back_label, None);
        assert!(!screen.rtl);
        assert_eq!(
            screen.body,
            Body::Categories(vec![
                CategoryCard {
                    icon: "🥤",
                    name: "Juice".to_string(),
                },
                CategoryCard {
                    icon: "🥣",
                    name: "Soups".to_string(),
                },
            ])
        );
    }

    #[test]
    fn test_describe_items_view_in_arabic() {
        let mut app = app();
        app.navigate_to_category("Soups".to_string());
        app.dispatch(Action::ToggleLanguage);
        let screen = describe(&app);

        assert_eq!(screen.title, "شوربات");
        assert_eq!(screen.lang_tag, "ar");
        assert!(screen.rtl);
        assert_eq!(screen.toggle_label, "English");
        assert_eq!(screen.back_label, Some("العودة للقائمة"));
        assert_eq!(
            screen.body,
            Body::Items(vec![
                ItemLine {
                    name: "شوربة عدس".to_string(),
                    price: "0.6 OMR".to_string(),
                },
                ItemLine {
                    name: "شوربة دجاج".to_string(),
                    price: "0.8 OMR".to_string(),
                },
            ])
        );
    }

    #[test]
    fn test_hero_quote_follows_language() {
        let config = Config {
            hero_quote: Some(HeroQuote {
                en: "Fresh every day".to_string(),
                ar: "طازج كل يوم".to_string(),
            }),
            ..Config::default()
        };
        let mut app = App::new(sample_menu(), Box::new(MemoryJournal::new()), &config);
        app.start();
        assert_eq!(describe(&app).hero_quote.as_deref(), Some("Fresh every day"));

        app.dispatch(Action::ToggleLanguage);
        assert_eq!(describe(&app).hero_quote.as_deref(), Some("طازج كل يوم"));
    }

    #[test]
    fn test_render_category_view() {
        let mut app = app();
        app.set_viewport(80);
        let output = draw(&describe(&app));

        assert!(output.contains("Our Menu"));
        assert!(output.contains("Juice"));
        assert!(output.contains("Soups"));
        assert!(output.contains("Test Kitchen"));
    }

    #[test]
    fn test_render_items_view() {
        let mut app = app();
        app.set_viewport(80);
        app.navigate_to_category("Juice".to_string());
        let output = draw(&describe(&app));

        assert!(output.contains("Mango Juice"));
        assert!(output.contains("0.7 OMR"));
        assert!(output.contains("Back to Categories"));
        assert!(!output.contains("Lentil Soup"));
    }
}
