// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::dto::search_request::{SearchRequestDto, SearchResponseDto},
    domain::{
        repositories::search_repository::SearchRepository,
        services::search_service::{SearchService, SearchServiceError},
    },
};
use validator::Validate;

/// 处理搜索请求
///
/// # 参数
///
/// * `service` - 搜索服务实例
/// * `payload` - 搜索请求数据
///
/// # 返回值
///
/// 返回实现了 `IntoResponse` 的响应，包含搜索结果或错误信息
///
/// # 错误
///
/// 可能在以下情况下返回错误响应：
/// - 搜索参数验证失败
/// - 搜索条件无效
pub async fn search<R>(
    Extension(service): Extension<Arc<SearchService<R>>>,
    Json(payload): Json<SearchRequestDto>,
) -> impl IntoResponse
where
    R: SearchRepository + 'static,
{
    if let Err(e) = payload.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response();
    }

    let (criteria, user_id) = payload.into_criteria();
    match service.execute(criteria, user_id).await {
        Ok(outcome) => {
            (StatusCode::OK, Json(SearchResponseDto::from(outcome))).into_response()
        }
        Err(e) => {
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<SearchServiceError> for (StatusCode, String) {
    fn from(err: SearchServiceError) -> Self {
        match err {
            SearchServiceError::InvalidCriteria(details) => {
                (StatusCode::BAD_REQUEST, details.to_string())
            }
        }
    }
}
