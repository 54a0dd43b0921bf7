use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::fetch::weather::WeatherReport;
use crate::fetch::Snippet;
use crate::theme::ThemeColors;

use super::panel::{panel_block, render_placeholder};

/// 渲染天气面板
pub fn render(frame: &mut Frame, area: Rect, snippet: &Snippet<WeatherReport>, colors: &ThemeColors) {
    let block = panel_block(" Weather ", colors.panel_accents[0], colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let report = match snippet {
        Snippet::Loading => {
            render_placeholder(frame, inner, "Loading…", colors.muted);
            return;
        }
        Snippet::Failed => {
            render_placeholder(frame, inner, "Failed to load weather", colors.error);
            return;
        }
        Snippet::Ready(report) => report,
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{}  {}°C", report.icon, report.temperature.round()),
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            report.description,
            Style::default().fg(colors.text),
        )),
        Line::from(Span::styled(
            report.city.clone(),
            Style::default().fg(colors.muted),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "💧 {}%   💨 {} km/h",
                report.humidity.round(),
                report.wind_speed
            ),
            Style::default().fg(colors.muted),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
