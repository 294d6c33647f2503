// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use parking_lot::Mutex;
use std::time::Duration;

/// 站点HTTP会话
///
/// 每个适配器持有自己的会话；连接复用以适配器为界，一次搜索结束后
/// 必须显式释放（`release`），下次搜索会惰性重建客户端
pub struct SiteSession {
    client: Mutex<Option<reqwest::Client>>,
    timeout: Duration,
}

impl SiteSession {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Mutex::new(None),
            timeout,
        }
    }

    /// 获取会话客户端，首次调用时创建
    ///
    /// Cookie 存储和连接池都绑定在这个客户端上
    pub fn client(&self) -> Result<reqwest::Client, FetchError> {
        let mut slot = self.client.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .cookie_store(true)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| FetchError::ConnectionFailed(e.to_string()))?;

        *slot = Some(client.clone());
        Ok(client)
    }

    /// 释放会话，断开连接池
    pub fn release(&self) {
        *self.client.lock() = None;
    }

    /// 会话当前是否持有活动客户端
    pub fn is_active(&self) -> bool {
        self.client.lock().is_some()
    }
}
