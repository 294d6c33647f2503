// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求超时
    #[error("Request timed out")]
    Timeout,
    /// 非成功的HTTP状态码
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    /// 连接失败
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// 重试次数耗尽，携带最后一次失败原因
    #[error("Retries exhausted after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: Box<FetchError>,
    },
}

impl FetchError {
    /// 判断错误是否可重试
    ///
    /// 超时、连接失败、5xx 和 429 可重试；其余 4xx 不重试
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Timeout | FetchError::ConnectionFailed(_) => true,
            FetchError::HttpStatus(status) => *status == 429 || (500..600).contains(status),
            FetchError::Exhausted { .. } => false,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus(status.as_u16())
        } else {
            FetchError::ConnectionFailed(err.to_string())
        }
    }
}
