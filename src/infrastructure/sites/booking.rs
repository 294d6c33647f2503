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

const SITE_NAME: &str = "Booking.com";
const BASE_URL: &str = "https://www.booking.com";

/// Accommodation metasearch against Booking.com search result pages
pub struct BookingAdapter {
    fetcher: Arc<PageFetcher>,
    session: SiteSession,
    base_url: String,
}

impl BookingAdapter {
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
        let card_selector = Selector::parse(r#"[data-testid="property-card"]"#)
            .expect("Failed to compile property card selector");

        let mut offers = Vec::new();
        for card in document.select(&card_selector) {
            match self.parse_property_card(&card) {
                Some(offer) => offers.push(offer),
                None => warn!("Skipping unparseable Booking.com property card"),
            }
        }
        offers
    }

    fn parse_property_card(&self, card: &ElementRef) -> Option<OfferRecord> {
        let title_selector = Selector::parse(r#"[data-testid="title"]"#)
            .expect("Failed to compile title selector");
        let price_selector = Selector::parse(r#"[data-testid="price-and-discounted-price"]"#)
            .expect("Failed to compile price selector");
        let rating_selector = Selector::parse(r#"[data-testid="rating-score"]"#)
            .expect("Failed to compile rating selector");
        let image_selector = Selector::parse("img").expect("Failed to compile image selector");
        let link_selector =
            Selector::parse(r#"a[href*="hotel"]"#).expect("Failed to compile link selector");

        let title = sites::element_text(&card.select(&title_selector).next()?);
        let price = sites::parse_price(&sites::element_text(&card.select(&price_selector).next()?))?;
        let link = card
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| sites::absolutize(&self.base_url, href))?;

        let mut offer = OfferRecord::new(SITE_NAME, OfferCategory::Accommodation, price, title, link);
        offer.image_url = card
            .select(&image_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string);
        offer.rating = card
            .select(&rating_selector)
            .next()
            .and_then(|el| sites::parse_rating(&sites::element_text(&el)));
        Some(offer)
    }
}

#[async_trait]
impl SourceAdapter for BookingAdapter {
    async fn search_flights(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        // Booking.com doesn't offer flights directly
        Ok(Vec::new())
    }

    async fn search_accommodations(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        if let Some(offers) =
            sites::load_fixture_offers("booking", SITE_NAME, OfferCategory::Accommodation)
        {
            return Ok(offers);
        }

        let params = [
            ("ss", criteria.destination.clone()),
            ("checkin", criteria.start_date_param()),
            ("checkout", criteria.end_date_param()),
            ("group_adults", criteria.guests.to_string()),
            ("no_rooms", "1".to_string()),
            ("nflt", format!("price=0-{}", criteria.budget)),
        ];

        let url = format!("{}/searchresults.html", self.base_url);
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
