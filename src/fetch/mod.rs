//! Snippet 抓取层
//!
//! 三个面板（天气 / 头条 / 名言）各自独立抓取：任何一个失败都不影响
//! 其余两个。抓取在 worker 线程里同步执行，结果经 mpsc 通道送回 UI
//! 线程，事件循环逐帧轮询。

pub mod news;
pub mod quote;
pub mod weather;

use std::sync::mpsc;
use std::thread;

use crate::error::Result;
use crate::storage::config::Config;

use news::Headline;
use quote::Quote;
use weather::WeatherReport;

/// 单次 HTTP 请求超时（秒）
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// 单个面板的数据状态
#[derive(Debug, Clone)]
pub enum Snippet<T> {
    /// 首次结果尚未返回
    Loading,
    /// 最近一次抓取成功
    Ready(T),
    /// 最近一次抓取失败（面板显示固定的错误占位）
    Failed,
}

/// worker 线程送回的抓取结果
#[derive(Debug)]
pub enum FetchUpdate {
    Weather(Result<WeatherReport>),
    News(Result<Vec<Headline>>),
    Quote(Result<Quote>),
}

/// 派发一轮抓取：三个 snippet 各起一个线程。
///
/// 不做取消，到点重发即可，请求本身带超时；迟到的旧结果被新结果
/// 覆盖，顺序无所谓。
pub fn spawn_round(config: &Config, tx: &mpsc::Sender<FetchUpdate>) {
    let cfg = config.clone();
    let sender = tx.clone();
    thread::spawn(move || {
        let _ = sender.send(FetchUpdate::Weather(weather::fetch(&cfg)));
    });

    let cfg = config.clone();
    let sender = tx.clone();
    thread::spawn(move || {
        let _ = sender.send(FetchUpdate::News(news::fetch(&cfg)));
    });

    let cfg = config.clone();
    let sender = tx.clone();
    thread::spawn(move || {
        let _ = sender.send(FetchUpdate::Quote(quote::fetch(&cfg)));
    });
}
