//! 主题选择器弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::{Theme, ThemeColors};

/// 渲染主题选择器（高亮当前选中项，上下键实时预览）
pub fn render(frame: &mut Frame, selected: usize, colors: &ThemeColors) {
    let area = frame.area();
    let themes = Theme::all();

    let popup_width = 28u16.min(area.width.saturating_sub(4));
    let popup_height = themes.len() as u16 + 2;

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Theme ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            if i == selected {
                Line::from(Span::styled(
                    format!(" ▸ {}", theme.label()),
                    Style::default()
                        .fg(colors.highlight)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    format!("   {}", theme.label()),
                    Style::default().fg(colors.text),
                ))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner_area);
}
