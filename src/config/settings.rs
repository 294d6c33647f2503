// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、抓取器和站点等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取器配置
    pub fetcher: FetcherSettings,
    /// 站点配置
    pub sites: SitesSettings,
}

/// 服务器配置设置
#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取器配置设置
#[derive(Debug, Deserialize)]
pub struct FetcherSettings {
    /// 单次请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 瞬时失败的最大重试次数
    pub max_retries: u32,
    /// 初始退避时间（毫秒）
    pub initial_backoff_ms: u64,
    /// 最大退避时间（秒）
    pub max_backoff_secs: u64,
    /// 全局并发请求上限
    pub max_concurrent_requests: usize,
    /// User-Agent 轮换池（可选，为空时使用内置池）
    pub user_agents: Option<Vec<String>>,
}

/// 站点配置设置
#[derive(Debug, Deserialize)]
pub struct SitesSettings {
    /// 启用的站点列表
    pub enabled: Vec<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default Fetcher settings
            .set_default("fetcher.request_timeout_secs", 30)?
            .set_default("fetcher.max_retries", 3)?
            .set_default("fetcher.initial_backoff_ms", 2000)?
            .set_default("fetcher.max_backoff_secs", 10)?
            .set_default("fetcher.max_concurrent_requests", 8)?
            // Default Sites settings
            .set_default(
                "sites.enabled",
                vec!["booking", "airbnb", "kayak", "expedia", "despegar"],
            )?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("TRAVELRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
