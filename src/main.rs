mod app;
mod cli;
mod error;
mod event;
mod fetch;
mod storage;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::Instant;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};

/// 启动 TUI 界面
fn run_tui() -> io::Result<()> {
    // 初始化终端
    let mut terminal = ratatui::init();

    // 创建应用
    let mut app = App::new();

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    result
}

fn main() -> io::Result<()> {
    // Enable backtraces by default so panics show call stacks
    if std::env::var("RUST_BACKTRACE").is_err() {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state
        ratatui::restore();
        // Call the original panic hook
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    // 统一调度
    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            run_tui()?;
        }
        Commands::Task { action } => {
            cli::task::execute(action);
        }
    }

    Ok(())
}

/// 主循环：定时刷新 → 收结果 → 渲染 → 处理事件
fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    // 启动先抓一轮
    app.refresh_snippets();
    let mut last_refresh = Instant::now();

    loop {
        // 定时自动刷新（默认 10 分钟）。不取消在途请求，到点直接重发。
        if last_refresh.elapsed().as_secs() >= app.config.widgets.refresh_secs {
            app.refresh_snippets();
            last_refresh = Instant::now();
        }

        // 收取后台抓取结果
        app.poll_fetch_updates();

        // 渲染界面
        terminal.draw(|frame| ui::dashboard::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
