// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::OfferRecord;
use crate::domain::repositories::search_repository::{RepositoryError, SearchRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

/// 已保存的搜索条目
#[derive(Debug, Clone)]
pub struct StoredSearch {
    pub criteria: SearchCriteria,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// 内存搜索仓库
///
/// 进程内的仓库实现，服务于本地运行和测试；持久化数据库属于外部协作者
#[derive(Default)]
pub struct InMemorySearchRepository {
    searches: DashMap<Uuid, StoredSearch>,
    results: DashMap<Uuid, Vec<OfferRecord>>,
}

impl InMemorySearchRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查找一次搜索保存的报价
    pub fn results_for(&self, search_id: Uuid) -> Option<Vec<OfferRecord>> {
        self.results.get(&search_id).map(|entry| entry.value().clone())
    }

    /// 查找已保存的搜索
    pub fn search_for(&self, search_id: Uuid) -> Option<StoredSearch> {
        self.searches.get(&search_id).map(|entry| entry.value().clone())
    }

    /// 已保存的搜索数量
    pub fn search_count(&self) -> usize {
        self.searches.len()
    }
}

#[async_trait]
impl SearchRepository for InMemorySearchRepository {
    async fn save_search(
        &self,
        criteria: &SearchCriteria,
        user_id: Option<Uuid>,
    ) -> Result<Uuid, RepositoryError> {
        let id = Uuid::new_v4();
        self.searches.insert(
            id,
            StoredSearch {
                criteria: criteria.clone(),
                user_id,
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn save_results(
        &self,
        search_id: Uuid,
        records: &[OfferRecord],
    ) -> Result<(), RepositoryError> {
        if !self.searches.contains_key(&search_id) {
            return Err(RepositoryError::NotFound);
        }
        self.results.insert(search_id, records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::offer::OfferCategory;
    use chrono::TimeZone;

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            destination: "Salta".to_string(),
            start_date: Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 9, 5, 0, 0, 0).unwrap(),
            guests: 1,
            budget: 800.0,
            origin: None,
        }
    }

    #[tokio::test]
    async fn test_round_trip() {
        let repo = InMemorySearchRepository::new();
        let id = repo.save_search(&criteria(), None).await.unwrap();

        let records = vec![OfferRecord::new(
            "Booking.com",
            OfferCategory::Accommodation,
            110.0,
            "Hosteria del Cerro",
            "https://www.booking.com/h/1",
        )];
        repo.save_results(id, &records).await.unwrap();

        assert_eq!(repo.search_count(), 1);
        assert_eq!(repo.search_for(id).unwrap().criteria.destination, "Salta");
        assert_eq!(repo.results_for(id).unwrap(), records);
    }

    #[tokio::test]
    async fn test_results_for_unknown_search_are_rejected() {
        let repo = InMemorySearchRepository::new();
        let err = repo.save_results(Uuid::new_v4(), &[]).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
