//! 面板公共部件：统一的边框样式和占位文案

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 面板外框：圆角边框 + 点缀色标题
pub fn panel_block(title: &str, accent: Color, colors: &ThemeColors) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .title_style(Style::default().fg(accent))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

/// 居中占位文案（Loading / 错误 / 空状态共用）
pub fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    // 垂直方向尽量居中
    let offset = area.height.saturating_sub(1) / 2;
    let centered = Rect::new(area.x, area.y + offset, area.width, 1.min(area.height));

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}
