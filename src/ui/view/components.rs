//! 通用 UI 组件
//!
//! 分类卡片、页眉等

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// 价格显示，货币单位固定为 OMR
pub fn format_price(price: f64) -> String {
    format!("{} OMR", price)
}

/// 按排版方向选择对齐方式
pub fn alignment(rtl: bool) -> Alignment {
    if rtl { Alignment::Right } else { Alignment::Left }
}

/// [组件] 分类卡片
pub fn render_category_card(
    frame: &mut Frame,
    area: Rect,
    icon: &str,
    name: &str,
    selected: bool,
    rtl: bool,
) {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let label = if rtl {
        format!("{} {}", name, icon)
    } else {
        format!("{} {}", icon, name)
    };

    let card = Paragraph::new(label)
        .style(style)
        .alignment(alignment(rtl))
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(card, area);
}

/// [组件] 页眉：logo、语言切换、标语
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    brand: &str,
    toggle_label: &str,
    lang_tag: &str,
    quote: Option<&str>,
    rtl: bool,
) {
    let logo = Span::styled(
        format!("🍽️ {}", brand),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let toggle = Span::styled(
        format!("[t] {} ({})", toggle_label, lang_tag),
        Style::default().fg(Color::Gray),
    );

    let first = if rtl {
        Line::from(vec![toggle, Span::raw("   "), logo])
    } else {
        Line::from(vec![logo, Span::raw("   "), toggle])
    };

    let mut lines = vec![first];
    if let Some(quote) = quote {
        lines.push(Line::from(Span::styled(
            quote.to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let header = Paragraph::new(lines)
        .alignment(alignment(rtl))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.5), "0.5 OMR");
        assert_eq!(format_price(1.0), "1 OMR");
        assert_eq!(format_price(1.25), "1.25 OMR");
    }
}
