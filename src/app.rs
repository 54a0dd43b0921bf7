use std::sync::mpsc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::fetch::{self, FetchUpdate, Snippet};
use crate::fetch::news::Headline;
use crate::fetch::quote::Quote;
use crate::fetch::weather::WeatherReport;
use crate::storage::config::{self, Config};
use crate::storage::tasks::{Task, TaskStore};
use crate::storage::FileStorage;
use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};

/// Toast 显示时长
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 用户配置
    pub config: Config,
    /// 任务存储
    store: TaskStore<FileStorage>,
    /// 当前任务列表（每次变更后从 store 重新加载）
    pub tasks: Vec<Task>,
    /// 任务列表选择状态
    pub task_list: ListState,
    /// 天气面板数据
    pub weather: Snippet<WeatherReport>,
    /// 头条面板数据
    pub news: Snippet<Vec<Headline>>,
    /// 名言面板数据
    pub quote: Snippet<Quote>,
    /// 抓取结果通道
    fetch_tx: mpsc::Sender<FetchUpdate>,
    fetch_rx: mpsc::Receiver<FetchUpdate>,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
    /// 是否显示 New Task 弹窗
    pub show_new_task_dialog: bool,
    /// New Task 输入内容
    pub new_task_input: String,
}

impl App {
    pub fn new() -> Self {
        let config = config::load_config();
        let theme = Theme::from_name(&config.theme.name);
        let last_system_dark = detect_system_theme();
        let colors = get_theme_colors(theme);

        let store = TaskStore::open();
        let tasks = store.list();
        let mut task_list = ListState::default();
        if !tasks.is_empty() {
            task_list.select(Some(0));
        }

        let (fetch_tx, fetch_rx) = mpsc::channel();

        Self {
            should_quit: false,
            config,
            store,
            tasks,
            task_list,
            weather: Snippet::Loading,
            news: Snippet::Loading,
            quote: Snippet::Loading,
            fetch_tx,
            fetch_rx,
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            last_system_dark,
            show_new_task_dialog: false,
            new_task_input: String::new(),
        }
    }

    // ========== Snippets ==========

    /// 派发一轮后台抓取。已有内容保持显示，结果回来后整体替换。
    pub fn refresh_snippets(&mut self) {
        fetch::spawn_round(&self.config, &self.fetch_tx);
    }

    /// 轮询后台抓取结果（非阻塞，事件循环每帧调一次）
    pub fn poll_fetch_updates(&mut self) {
        while let Ok(update) = self.fetch_rx.try_recv() {
            match update {
                FetchUpdate::Weather(Ok(report)) => self.weather = Snippet::Ready(report),
                FetchUpdate::Weather(Err(_)) => self.weather = Snippet::Failed,
                FetchUpdate::News(Ok(headlines)) => self.news = Snippet::Ready(headlines),
                FetchUpdate::News(Err(_)) => self.news = Snippet::Failed,
                FetchUpdate::Quote(Ok(quote)) => self.quote = Snippet::Ready(quote),
                FetchUpdate::Quote(Err(_)) => self.quote = Snippet::Failed,
            }
        }
    }

    // ========== Tasks ==========

    /// 从 store 重新加载任务列表并校正选中项
    pub fn reload_tasks(&mut self) {
        self.tasks = self.store.list();
        self.ensure_selection();
    }

    /// 确保选中项落在列表范围内
    fn ensure_selection(&mut self) {
        if self.tasks.is_empty() {
            self.task_list.select(None);
            return;
        }
        match self.task_list.selected() {
            Some(index) if index >= self.tasks.len() => {
                self.task_list.select(Some(self.tasks.len() - 1));
            }
            None => self.task_list.select(Some(0)),
            _ => {}
        }
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        self.task_list.selected().and_then(|index| self.tasks.get(index))
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.task_list.selected().unwrap_or(0);
        self.task_list.select(Some((current + 1) % self.tasks.len()));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let current = self.task_list.selected().unwrap_or(0);
        let previous = if current == 0 {
            self.tasks.len() - 1
        } else {
            current - 1
        };
        self.task_list.select(Some(previous));
    }

    /// 翻转选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task().map(|task| task.id) else {
            return;
        };
        match self.store.toggle(id) {
            Ok(_) => self.reload_tasks(),
            Err(e) => self.show_toast(e.to_string()),
        }
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_task().map(|task| task.id) else {
            return;
        };
        match self.store.delete(id) {
            Ok(removed) => {
                self.reload_tasks();
                self.show_toast(format!("Deleted \"{}\"", removed.text));
            }
            Err(e) => self.show_toast(e.to_string()),
        }
    }

    // ========== New Task Dialog ==========

    /// 打开 New Task 弹窗
    pub fn open_new_task_dialog(&mut self) {
        self.new_task_input.clear();
        self.show_new_task_dialog = true;
    }

    /// 关闭 New Task 弹窗
    pub fn close_new_task_dialog(&mut self) {
        self.show_new_task_dialog = false;
        self.new_task_input.clear();
    }

    /// New Task 输入字符
    pub fn new_task_input_char(&mut self, c: char) {
        self.new_task_input.push(c);
    }

    /// New Task 删除字符
    pub fn new_task_input_backspace(&mut self) {
        self.new_task_input.pop();
    }

    /// 提交 New Task 弹窗内容。纯空白输入静默丢弃。
    pub fn submit_new_task(&mut self) {
        let input = std::mem::take(&mut self.new_task_input);
        self.show_new_task_dialog = false;

        match self.store.add(&input) {
            Ok(Some(task)) => {
                self.reload_tasks();
                self.show_toast(format!("Added \"{}\"", task.text));
            }
            Ok(None) => {}
            Err(e) => self.show_toast(e.to_string()),
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 提示
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清理过期 Toast
    pub fn update_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ========== Theme ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        self.theme_selector_index = (self.theme_selector_index + 1) % Theme::all().len();
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并持久化
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        self.config.theme.name = self.theme.label().to_string();
        if let Err(e) = config::save_config(&self.config) {
            self.show_toast(e.to_string());
        } else {
            self.show_toast(format!("Theme: {}", self.theme.label()));
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    /// Auto 模式下跟随系统深浅色变化
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }
        let is_dark = detect_system_theme();
        if is_dark != self.last_system_dark {
            self.last_system_dark = is_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("done", Duration::from_secs(60));
        assert!(!toast.is_expired());

        let toast = Toast::new("done", Duration::from_secs(0));
        assert!(toast.is_expired());
    }
}
