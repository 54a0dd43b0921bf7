//! Sill 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。

use std::io;
use thiserror::Error;

/// Sill 错误类型
#[derive(Debug, Error)]
pub enum SillError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON 序列化/反序列化错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// HTTP 请求错误（网络失败、超时、响应体解析失败）
    #[error("HTTP error: {0}")]
    Http(String),

    /// 资源不存在
    #[error("Not found: {0}")]
    NotFound(String),

    /// 无效数据
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Sill Result 类型别名
pub type Result<T> = std::result::Result<T, SillError>;

impl SillError {
    /// 创建 HTTP 错误
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 创建 InvalidData 错误
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SillError::http("connection refused");
        assert_eq!(err.to_string(), "HTTP error: connection refused");

        let err = SillError::not_found("task 42");
        assert_eq!(err.to_string(), "Not found: task 42");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let sill_err: SillError = io_err.into();
        assert!(matches!(sill_err, SillError::Io(_)));
    }

    #[test]
    fn test_error_from_string() {
        let err = SillError::invalid_data("empty payload");
        assert!(err.to_string().contains("empty payload"));
    }
}
