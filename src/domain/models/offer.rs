// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 报价类别
///
/// 每条报价要么是机票要么是住宿，排名只在同类报价之间进行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferCategory {
    Flight,
    Accommodation,
}

impl OfferCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Accommodation => "accommodation",
        }
    }
}

/// A single normalized listing as returned by a site adapter.
/// Never mutated after creation — only aggregated and scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferRecord {
    pub site: String,
    pub category: OfferCategory,
    pub price: f64,
    pub currency: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub rating: Option<f64>,
    pub review_count: Option<u32>,
    pub image_url: Option<String>,
    pub location: Option<String>,
}

impl OfferRecord {
    pub fn new(
        site: impl Into<String>,
        category: OfferCategory,
        price: f64,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            site: site.into(),
            category,
            price,
            currency: "USD".to_string(),
            description: title.clone(),
            title,
            link: link.into(),
            rating: None,
            review_count: None,
            image_url: None,
            location: None,
        }
    }
}
