// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::OfferRecord;
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("存储错误: {0}")]
    Storage(String),

    #[error("未找到数据")]
    NotFound,
}

/// 搜索仓库特质
///
/// 定义搜索及其结果的持久化接口；每次搜索在排名完成后调用一次
#[async_trait]
pub trait SearchRepository: Send + Sync {
    /// 保存搜索条件，返回搜索ID
    async fn save_search(
        &self,
        criteria: &SearchCriteria,
        user_id: Option<Uuid>,
    ) -> Result<Uuid, RepositoryError>;

    /// 保存一次搜索找到的全部报价
    async fn save_results(
        &self,
        search_id: Uuid,
        records: &[OfferRecord],
    ) -> Result<(), RepositoryError>;
}
