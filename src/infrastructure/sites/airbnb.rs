// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::criteria::SearchCriteria;
use crate::domain::models::offer::{OfferCategory, OfferRecord};
use crate::domain::search::adapter::{AdapterError, SourceAdapter};
use crate::engines::fetcher::PageFetcher;
use crate::engines::session::SiteSession;
use crate::infrastructure::sites;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::warn;

const SITE_NAME: &str = "Airbnb";
const BASE_URL: &str = "https://www.airbnb.com.ar";

/// Accommodation metasearch against Airbnb listing pages
pub struct AirbnbAdapter {
    fetcher: Arc<PageFetcher>,
    session: SiteSession,
    base_url: String,
}

impl AirbnbAdapter {
    pub fn new(fetcher: Arc<PageFetcher>) -> Self {
        Self::with_base_url(fetcher, BASE_URL)
    }

    pub fn with_base_url(fetcher: Arc<PageFetcher>, base_url: impl Into<String>) -> Self {
        let session = fetcher.session();
        Self {
            fetcher,
            session,
            base_url: base_url.into(),
        }
    }

    fn parse_accommodations(&self, html: &str) -> Vec<OfferRecord> {
        let document = Html::parse_document(html);
        let card_selector = Selector::parse(r#"[data-testid="card-container"]"#)
            .expect("Failed to compile listing card selector");

        let mut offers = Vec::new();
        for listing in document.select(&card_selector) {
            match self.parse_listing(&listing) {
                Some(offer) => offers.push(offer),
                None => warn!("Skipping unparseable Airbnb listing"),
            }
        }
        offers
    }

    fn parse_listing(&self, listing: &ElementRef) -> Option<OfferRecord> {
        let title_selector = Selector::parse(r#"[data-testid="listing-card-title"]"#)
            .expect("Failed to compile title selector");
        let price_selector = Selector::parse(r#"[data-testid="price-element"]"#)
            .expect("Failed to compile price selector");
        let rating_selector =
            Selector::parse(r#"[data-testid="rating"]"#).expect("Failed to compile rating selector");
        let image_selector = Selector::parse("img").expect("Failed to compile image selector");
        let link_selector = Selector::parse("a").expect("Failed to compile link selector");

        let title = sites::element_text(&listing.select(&title_selector).next()?);
        let price =
            sites::parse_price(&sites::element_text(&listing.select(&price_selector).next()?))?;
        let link = listing
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| sites::absolutize(&self.base_url, href))?;

        let mut offer = OfferRecord::new(SITE_NAME, OfferCategory::Accommodation, price, title, link);
        offer.image_url = listing
            .select(&image_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);
        offer.rating = listing
            .select(&rating_selector)
            .next()
            .and_then(|el| sites::parse_rating(&sites::element_text(&el)));
        Some(offer)
    }
}

#[async_trait]
impl SourceAdapter for AirbnbAdapter {
    async fn search_flights(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        // Airbnb doesn't offer flights
        Ok(Vec::new())
    }

    async fn search_accommodations(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        if let Some(offers) =
            sites::load_fixture_offers("airbnb", SITE_NAME, OfferCategory::Accommodation)
        {
            return Ok(offers);
        }

        let params = [
            ("query", criteria.destination.clone()),
            ("checkin", criteria.start_date_param()),
            ("checkout", criteria.end_date_param()),
            ("adults", criteria.guests.to_string()),
            ("price_max", criteria.budget.to_string()),
        ];

        let url = format!("{}/s/{}/homes", self.base_url, criteria.destination);
        let html = self.fetcher.fetch(&self.session, &url, &params).await?;
        Ok(self.parse_accommodations(&html))
    }

    async fn release(&self) {
        self.session.release();
    }

    fn name(&self) -> &'static str {
        SITE_NAME
    }
}
