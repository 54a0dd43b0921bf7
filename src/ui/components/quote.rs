use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::fetch::quote::Quote;
use crate::fetch::Snippet;
use crate::theme::ThemeColors;

use super::panel::{panel_block, render_placeholder};

/// 渲染名言面板
pub fn render(frame: &mut Frame, area: Rect, snippet: &Snippet<Quote>, colors: &ThemeColors) {
    let block = panel_block(" Quote of the Day ", colors.panel_accents[2], colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let quote = match snippet {
        Snippet::Loading => {
            render_placeholder(frame, inner, "Loading…", colors.muted);
            return;
        }
        Snippet::Failed => {
            render_placeholder(frame, inner, "Failed to load quote", colors.error);
            return;
        }
        Snippet::Ready(quote) => quote,
    };

    let lines = vec![
        Line::default(),
        Line::styled(
            format!("\u{201c}{}\u{201d}", quote.content),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::default(),
        Line::styled(
            format!("- {}", quote.author),
            Style::default().fg(colors.muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
