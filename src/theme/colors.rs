//! 主题颜色定义

use ratatui::style::Color;

use super::{detect_system_theme, Theme, ThemeColors};

/// 深色主题（默认）
fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        error: Color::Rgb(255, 85, 85),   // 红色
        panel_accents: [
            Color::Rgb(120, 175, 225), // sky — weather
            Color::Rgb(240, 170, 115), // peach — news
            Color::Rgb(185, 148, 225), // lavender — quote
            Color::Rgb(130, 205, 145), // mint — tasks
        ],
    }
}

/// 浅色主题
fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        highlight: Color::Rgb(0, 128, 68),       // 深绿色
        text: Color::Rgb(30, 30, 30),            // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        error: Color::Rgb(200, 50, 50),
        panel_accents: [
            Color::Rgb(33, 120, 200),  // blue — weather
            Color::Rgb(200, 110, 30),  // amber — news
            Color::Rgb(130, 80, 190),  // violet — quote
            Color::Rgb(0, 140, 80),    // green — tasks
        ],
    }
}

/// Dracula 主题
fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        highlight: Color::Rgb(80, 250, 123),
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        error: Color::Rgb(255, 85, 85),
        panel_accents: [
            Color::Rgb(139, 233, 253), // cyan — weather
            Color::Rgb(255, 184, 108), // orange — news
            Color::Rgb(189, 147, 249), // purple — quote
            Color::Rgb(80, 250, 123),  // green — tasks
        ],
    }
}

/// Nord 主题
fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(216, 222, 233),
        muted: Color::Rgb(76, 86, 106),
        border: Color::Rgb(59, 66, 82),
        error: Color::Rgb(191, 97, 106),
        panel_accents: [
            Color::Rgb(129, 161, 193), // frost blue — weather
            Color::Rgb(208, 135, 112), // aurora orange — news
            Color::Rgb(180, 142, 173), // aurora purple — quote
            Color::Rgb(163, 190, 140), // aurora green — tasks
        ],
    }
}

/// 获取主题对应的颜色方案（Auto 跟随系统深浅色）
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
    }
}
