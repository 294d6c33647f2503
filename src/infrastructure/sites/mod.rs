// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod aggregator;
pub mod airbnb;
pub mod booking;
pub mod despegar;
pub mod expedia;
pub mod factory;
pub mod kayak;

use crate::domain::models::offer::{OfferCategory, OfferRecord};
use crate::domain::search::adapter::AdapterError;
use crate::engines::traits::FetchError;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{info, warn};
use url::Url;

impl From<FetchError> for AdapterError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout => AdapterError::Timeout,
            FetchError::ConnectionFailed(cause) => AdapterError::NetworkError(cause),
            FetchError::HttpStatus(status) => {
                AdapterError::SiteError(format!("HTTP status {}", status))
            }
            FetchError::Exhausted { attempts, source } => AdapterError::RetriesExhausted(format!(
                "{} attempts, last error: {}",
                attempts, source
            )),
        }
    }
}

static PRICE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9][0-9.,]*").expect("Failed to compile price regex"));
static RATING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("Failed to compile rating regex"));

/// Collect an element's text, decode HTML entities and collapse
/// whitespace into single spaces.
pub(crate) fn element_text(element: &ElementRef) -> String {
    let raw: String = element.text().collect::<Vec<_>>().join(" ");
    let decoded = html_escape::decode_html_entities(&raw);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract a price from listing text like "$1,234", "US$ 89.99" or
/// "1.234,56". The last separator is the decimal point when followed by
/// one or two digits; every other separator is a thousands separator.
pub(crate) fn parse_price(text: &str) -> Option<f64> {
    let raw = PRICE_REGEX.find(text)?.as_str();

    let decimal_index = raw.rfind(['.', ',']).filter(|&idx| {
        let trailing = raw.len() - idx - 1;
        (1..=2).contains(&trailing)
    });

    let mut normalized = String::with_capacity(raw.len());
    for (i, ch) in raw.char_indices() {
        if ch.is_ascii_digit() {
            normalized.push(ch);
        } else if Some(i) == decimal_index {
            normalized.push('.');
        }
    }

    normalized.parse::<f64>().ok()
}

/// Extract a rating from text like "4.5/5", "Scored 8,6" or "4.7 stars"
pub(crate) fn parse_rating(text: &str) -> Option<f64> {
    let raw = RATING_REGEX.find(text)?.as_str().replace(',', ".");
    raw.parse::<f64>().ok()
}

/// Extract a review count from text like "1,234 reviews"
pub(crate) fn parse_review_count(text: &str) -> Option<u32> {
    let raw = PRICE_REGEX.find(text)?.as_str();
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().ok()
}

/// Resolve a possibly-relative listing href against the site base URL
pub(crate) fn absolutize(base: &str, href: &str) -> Option<String> {
    Url::parse(base).ok()?.join(href).ok().map(|u| u.to_string())
}

/// One fixture entry for the offline test-data mode
#[derive(Debug, Deserialize)]
pub struct FixtureOffer {
    pub category: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub link: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Parse a fixture document (site key -> offer list) and keep the
/// entries matching one site and category
pub(crate) fn parse_fixture_offers(
    yaml: &str,
    site_key: &str,
    site_name: &str,
    category: OfferCategory,
) -> Result<Vec<OfferRecord>, serde_yaml::Error> {
    let by_site: HashMap<String, Vec<FixtureOffer>> = serde_yaml::from_str(yaml)?;

    let offers = by_site
        .get(site_key)
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.category == category.as_str())
                .map(|entry| {
                    let mut record = OfferRecord::new(
                        site_name,
                        category,
                        entry.price,
                        entry.title.clone(),
                        entry.link.clone(),
                    );
                    record.currency = entry.currency.clone();
                    if let Some(description) = &entry.description {
                        record.description = description.clone();
                    }
                    record.rating = entry.rating;
                    record.review_count = entry.review_count;
                    record.image_url = entry.image_url.clone();
                    record.location = entry.location.clone();
                    record
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(offers)
}

/// Load canned offers when USE_TEST_DATA is set, so the whole pipeline
/// can run without network access
pub(crate) fn load_fixture_offers(
    site_key: &str,
    site_name: &str,
    category: OfferCategory,
) -> Option<Vec<OfferRecord>> {
    if std::env::var("USE_TEST_DATA").is_err() {
        return None;
    }

    let fixture_paths = ["test-data/sites/offers.yaml", "test-data/offers.yaml", "offers.yaml"];

    for path in &fixture_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            match parse_fixture_offers(&content, site_key, site_name, category) {
                Ok(offers) => {
                    info!("Loaded {} {} fixture offers from {}", offers.len(), site_key, path);
                    return Some(offers);
                }
                Err(e) => warn!("Ignoring malformed fixture file {}: {}", path, e),
            }
        }
    }

    None
}
