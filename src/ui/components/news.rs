use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::fetch::news::Headline;
use crate::fetch::Snippet;
use crate::theme::ThemeColors;

use super::panel::{panel_block, render_placeholder};

/// 渲染头条面板
pub fn render(
    frame: &mut Frame,
    area: Rect,
    snippet: &Snippet<Vec<Headline>>,
    colors: &ThemeColors,
) {
    let block = panel_block(" Headlines ", colors.panel_accents[1], colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let headlines = match snippet {
        Snippet::Loading => {
            render_placeholder(frame, inner, "Loading…", colors.muted);
            return;
        }
        Snippet::Failed => {
            render_placeholder(frame, inner, "Failed to load news", colors.error);
            return;
        }
        Snippet::Ready(headlines) if headlines.is_empty() => {
            render_placeholder(frame, inner, "No headlines", colors.muted);
            return;
        }
        Snippet::Ready(headlines) => headlines,
    };

    // 每条头条两行：标题 + 来源
    let mut lines = Vec::with_capacity(headlines.len() * 2);
    for headline in headlines {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(colors.panel_accents[1])),
            Span::styled(headline.title.clone(), Style::default().fg(colors.text)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", headline.source),
            Style::default().fg(colors.muted),
        )));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
