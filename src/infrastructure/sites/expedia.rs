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

const SITE_NAME: &str = "Expedia";
const BASE_URL: &str = "https://www.expedia.com.ar";

/// Flight and accommodation metasearch against Expedia result pages
pub struct ExpediaAdapter {
    fetcher: Arc<PageFetcher>,
    session: SiteSession,
    base_url: String,
}

impl ExpediaAdapter {
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
        let listing_selector = Selector::parse(r#"[data-stid="property-listing"]"#)
            .expect("Failed to compile property listing selector");

        let mut offers = Vec::new();
        for listing in document.select(&listing_selector) {
            match self.parse_property(&listing) {
                Some(offer) => offers.push(offer),
                None => warn!("Skipping unparseable Expedia property listing"),
            }
        }
        offers
    }

    fn parse_property(&self, listing: &ElementRef) -> Option<OfferRecord> {
        let name_selector = Selector::parse(r#"[data-stid="property-name"]"#)
            .expect("Failed to compile property name selector");
        let price_selector = Selector::parse(r#"[data-stid="price-lockup"]"#)
            .expect("Failed to compile price selector");
        let rating_selector = Selector::parse(r#"[data-stid="property-rating"]"#)
            .expect("Failed to compile rating selector");
        let image_selector = Selector::parse("img").expect("Failed to compile image selector");
        let link_selector = Selector::parse(r#"a[data-stid="open-hotel-details"]"#)
            .expect("Failed to compile link selector");

        let title = sites::element_text(&listing.select(&name_selector).next()?);
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

    fn parse_flights(&self, html: &str) -> Vec<OfferRecord> {
        let document = Html::parse_document(html);
        let card_selector = Selector::parse(r#"[data-test-id="flight-card"]"#)
            .expect("Failed to compile flight card selector");

        let mut offers = Vec::new();
        for flight in document.select(&card_selector) {
            match self.parse_flight(&flight) {
                Some(offer) => offers.push(offer),
                None => warn!("Skipping unparseable Expedia flight card"),
            }
        }
        offers
    }

    fn parse_flight(&self, flight: &ElementRef) -> Option<OfferRecord> {
        let airline_selector = Selector::parse(r#"[data-test-id="airline-name"]"#)
            .expect("Failed to compile airline selector");
        let price_selector = Selector::parse(r#"[data-test-id="price-text"]"#)
            .expect("Failed to compile price selector");
        let duration_selector = Selector::parse(r#"[data-test-id="duration"]"#)
            .expect("Failed to compile duration selector");
        let stops_selector = Selector::parse(r#"[data-test-id="stops"]"#)
            .expect("Failed to compile stops selector");
        let link_selector = Selector::parse(r#"a[data-test-id="select-link"]"#)
            .expect("Failed to compile link selector");

        let airline = sites::element_text(&flight.select(&airline_selector).next()?);
        let price =
            sites::parse_price(&sites::element_text(&flight.select(&price_selector).next()?))?;
        let duration = sites::element_text(&flight.select(&duration_selector).next()?);
        let stops = sites::element_text(&flight.select(&stops_selector).next()?);
        let link = flight
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| sites::absolutize(&self.base_url, href))?;

        let mut offer = OfferRecord::new(
            SITE_NAME,
            OfferCategory::Flight,
            price,
            format!("{} - {}", airline, stops),
            link,
        );
        offer.description = format!("Duration: {}, Stops: {}", duration, stops);
        Some(offer)
    }
}

#[async_trait]
impl SourceAdapter for ExpediaAdapter {
    async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        // A valid flight query needs an origin
        let Some(origin) = criteria.origin.as_deref() else {
            return Ok(Vec::new());
        };

        if let Some(offers) =
            sites::load_fixture_offers("expedia", SITE_NAME, OfferCategory::Flight)
        {
            return Ok(offers);
        }

        let params = [
            ("from", origin.to_string()),
            ("to", criteria.destination.clone()),
            ("departing", criteria.start_date_param()),
            ("returning", criteria.end_date_param()),
            ("adults", criteria.guests.to_string()),
        ];

        let url = format!("{}/Flights-Search", self.base_url);
        let html = self.fetcher.fetch(&self.session, &url, &params).await?;
        Ok(self.parse_flights(&html))
    }

    async fn search_accommodations(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<OfferRecord>, AdapterError> {
        if let Some(offers) =
            sites::load_fixture_offers("expedia", SITE_NAME, OfferCategory::Accommodation)
        {
            return Ok(offers);
        }

        let params = [
            ("destination", criteria.destination.clone()),
            ("startDate", criteria.start_date_param()),
            ("endDate", criteria.end_date_param()),
            ("adults", criteria.guests.to_string()),
            ("maxPrice", criteria.budget.to_string()),
        ];

        let url = format!("{}/Hotel-Search", self.base_url);
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
