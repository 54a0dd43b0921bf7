use chrono::Local;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 总高度：1 (上边框) + 1 (时钟行) + 1 (下边框)
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部时钟行
///
/// 事件轮询带 100ms 超时，每帧重取当前时间，秒针自然走动。
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(" sill ")
        .title_style(
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // "Wednesday, August 6, 2026  07:32:41"
    let now = Local::now();
    let line = now.format("%A, %B %-d, %Y  %H:%M:%S").to_string();

    let paragraph = Paragraph::new(line)
        .style(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
