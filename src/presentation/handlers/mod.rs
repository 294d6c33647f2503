// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod search_handler;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// 健康检查处理器
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
