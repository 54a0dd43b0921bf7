use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    clock, footer, new_task_dialog, news, quote, tasks, theme_selector, toast, weather,
};

/// 渲染仪表盘页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, body_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(clock::HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 顶部时钟
    clock::render(frame, header_area, &colors);

    // 左列：天气 + 名言；右列：头条 + 任务
    let [left_area, right_area] = ratatui::layout::Layout::horizontal([
        Constraint::Percentage(42),
        Constraint::Fill(1),
    ])
    .areas(body_area);

    let [weather_area, quote_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .areas(left_area);

    let [news_area, tasks_area] = ratatui::layout::Layout::vertical([
        Constraint::Percentage(50),
        Constraint::Fill(1),
    ])
    .areas(right_area);

    weather::render(frame, weather_area, &app.weather, &colors);
    quote::render(frame, quote_area, &app.quote, &colors);
    news::render(frame, news_area, &app.news, &colors);
    tasks::render(frame, tasks_area, &app.tasks, &mut app.task_list, &colors);

    // 底部快捷键提示
    footer::render(frame, footer_area, !app.tasks.is_empty(), &colors);

    // 弹窗
    if app.show_new_task_dialog {
        new_task_dialog::render(frame, &app.new_task_input, &colors);
    }

    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, &colors);
    }

    // Toast 提示
    if let Some(t) = &app.toast {
        toast::render(frame, &t.message, &colors);
    }
}
