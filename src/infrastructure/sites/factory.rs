// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::adapter::SourceAdapter;
use crate::engines::fetcher::PageFetcher;
use crate::infrastructure::sites::airbnb::AirbnbAdapter;
use crate::infrastructure::sites::booking::BookingAdapter;
use crate::infrastructure::sites::despegar::DespegarAdapter;
use crate::infrastructure::sites::expedia::ExpediaAdapter;
use crate::infrastructure::sites::kayak::KayakAdapter;
use std::sync::Arc;
use tracing::{info, warn};

/// 站点类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    /// Booking.com（仅住宿）
    Booking,
    /// Airbnb（仅住宿）
    Airbnb,
    /// Kayak（机票和住宿）
    Kayak,
    /// Expedia（机票和住宿）
    Expedia,
    /// Despegar（机票和住宿）
    Despegar,
}

impl SiteKind {
    /// 获取站点名称
    pub fn name(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Airbnb => "airbnb",
            Self::Kayak => "kayak",
            Self::Expedia => "expedia",
            Self::Despegar => "despegar",
        }
    }

    /// 从字符串解析站点类型
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "booking" | "booking.com" => Some(Self::Booking),
            "airbnb" => Some(Self::Airbnb),
            "kayak" => Some(Self::Kayak),
            "expedia" => Some(Self::Expedia),
            "despegar" => Some(Self::Despegar),
            _ => None,
        }
    }

    /// 创建该站点的适配器实例
    pub fn build(&self, fetcher: Arc<PageFetcher>) -> Arc<dyn SourceAdapter> {
        match self {
            Self::Booking => Arc::new(BookingAdapter::new(fetcher)),
            Self::Airbnb => Arc::new(AirbnbAdapter::new(fetcher)),
            Self::Kayak => Arc::new(KayakAdapter::new(fetcher)),
            Self::Expedia => Arc::new(ExpediaAdapter::new(fetcher)),
            Self::Despegar => Arc::new(DespegarAdapter::new(fetcher)),
        }
    }
}

/// 获取全部站点类型
pub fn available_site_kinds() -> Vec<SiteKind> {
    vec![
        SiteKind::Booking,
        SiteKind::Airbnb,
        SiteKind::Kayak,
        SiteKind::Expedia,
        SiteKind::Despegar,
    ]
}

/// 根据配置构建启用的站点适配器列表
///
/// 未知站点名会被跳过并记录警告，不影响其余站点
pub fn build_adapters(
    enabled: &[String],
    fetcher: &Arc<PageFetcher>,
) -> Vec<Arc<dyn SourceAdapter>> {
    let mut adapters = Vec::with_capacity(enabled.len());

    for name in enabled {
        match SiteKind::from_str(name) {
            Some(kind) => {
                adapters.push(kind.build(Arc::clone(fetcher)));
                info!("Site adapter {} registered", kind.name());
            }
            None => warn!("Unknown site {} in configuration, skipping", name),
        }
    }

    adapters
}
