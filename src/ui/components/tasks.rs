use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::storage::tasks::Task;
use crate::theme::ThemeColors;

use super::panel::{panel_block, render_placeholder};

/// 渲染任务面板
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    state: &mut ListState,
    colors: &ThemeColors,
) {
    let open = tasks.iter().filter(|task| !task.completed).count();
    let title = format!(" Tasks ({} open) ", open);
    let block = panel_block(&title, colors.panel_accents[3], colors);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if tasks.is_empty() {
        render_placeholder(frame, inner, "No tasks yet. Press n to add one.", colors.muted);
        return;
    }

    let items: Vec<ListItem> = tasks.iter().map(|task| task_row(task, colors)).collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(colors.bg_secondary)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_stateful_widget(list, inner, state);
}

/// 单行任务：勾选框 + 文本，已完成的划掉并置灰
fn task_row<'a>(task: &'a Task, colors: &ThemeColors) -> ListItem<'a> {
    let (checkbox, text_style) = if task.completed {
        (
            "[x]",
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ]", Style::default().fg(colors.text))
    };

    ListItem::new(Line::from(vec![
        Span::styled(checkbox, Style::default().fg(colors.panel_accents[3])),
        Span::raw(" "),
        Span::styled(task.text.as_str(), text_style),
    ]))
}
