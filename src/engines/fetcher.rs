// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::identity::UserAgentPool;
use crate::engines::session::SiteSession;
use crate::engines::traits::FetchError;
use crate::utils::retry_policy::RetryPolicy;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// 抓取器配置
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// 单次请求超时时间
    pub request_timeout: Duration,
    /// 瞬时失败的最大重试次数
    pub max_retries: u32,
    /// 初始退避时间
    pub initial_backoff: Duration,
    /// 最大退避时间
    pub max_backoff: Duration,
    /// 全局并发请求上限
    pub max_concurrent_requests: usize,
    /// User-Agent 轮换池，为空时使用内置池
    pub user_agents: Vec<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_secs(2),
            max_backoff: Duration::from_secs(10),
            max_concurrent_requests: 8,
            user_agents: Vec::new(),
        }
    }
}

/// 页面抓取器
///
/// 所有站点适配器共享的HTTP抓取原语：按请求轮换客户端身份、
/// 信号量限制并发、瞬时失败按指数退避重试
pub struct PageFetcher {
    limiter: Semaphore,
    policy: RetryPolicy,
    timeout: Duration,
    agents: UserAgentPool,
}

impl PageFetcher {
    pub fn new(config: FetcherConfig) -> Self {
        let policy = RetryPolicy {
            max_retries: config.max_retries,
            initial_backoff: config.initial_backoff,
            max_backoff: config.max_backoff,
            ..RetryPolicy::default()
        };

        Self {
            limiter: Semaphore::new(config.max_concurrent_requests.max(1)),
            policy,
            timeout: config.request_timeout,
            agents: UserAgentPool::new(config.user_agents),
        }
    }

    /// 创建一个新的站点会话，连接复用以会话为界
    pub fn session(&self) -> SiteSession {
        SiteSession::new(self.timeout)
    }

    /// 抓取一个页面
    ///
    /// 超时、连接失败、5xx 和 429 会按退避策略重试；重试耗尽后返回
    /// `FetchError::Exhausted` 并携带最后一次失败原因
    pub async fn fetch(
        &self,
        session: &SiteSession,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String, FetchError> {
        let _permit = self
            .limiter
            .acquire()
            .await
            .map_err(|_| FetchError::ConnectionFailed("Fetch limiter closed".to_string()))?;

        let client = session.client()?;
        let mut retries: u32 = 0;

        loop {
            match self.try_fetch(&client, url, params).await {
                Ok(body) => return Ok(body),
                Err(err) => {
                    if !err.is_retryable() {
                        return Err(err);
                    }
                    if !self.policy.should_retry(retries) {
                        let attempts = retries + 1;
                        warn!("Fetch of {} exhausted after {} attempts: {}", url, attempts, err);
                        return Err(FetchError::Exhausted {
                            attempts,
                            source: Box::new(err),
                        });
                    }

                    retries += 1;
                    let backoff = self.policy.calculate_backoff(retries);
                    debug!(
                        "Fetch of {} failed ({}), retrying in {:?} (retry {}/{})",
                        url, err, backoff, retries, self.policy.max_retries
                    );
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    async fn try_fetch(
        &self,
        client: &reqwest::Client,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String, FetchError> {
        let response = client
            .get(url)
            .query(params)
            .header(reqwest::header::USER_AGENT, self.agents.random())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(FetchError::from_reqwest)
    }
}

#[cfg(test)]
#[path = "fetcher_test.rs"]
mod tests;
