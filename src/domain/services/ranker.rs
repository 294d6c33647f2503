// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::offer::OfferRecord;

// Price is penalized (cheaper is better); rating and review volume are
// rewarded. Weights apply to min-max normalized values only.
const PRICE_WEIGHT: f64 = -0.5;
const RATING_WEIGHT: f64 = 0.3;
const REVIEWS_WEIGHT: f64 = 0.2;

/// One candidate with its composite score. Recomputed on every search,
/// never persisted.
#[derive(Debug, Clone, Copy)]
pub struct ScoredSelection<'a> {
    pub record: &'a OfferRecord,
    pub score: f64,
}

/// Score every record in the set against its peers.
///
/// Each of price, rating and review count is min-max normalized across
/// the given records; a field with no variance normalizes to 0.0 for
/// every record. Missing rating/review_count score as 0 — the stored
/// record keeps `None` for display.
pub fn score_records(records: &[OfferRecord]) -> Vec<ScoredSelection<'_>> {
    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    let ratings: Vec<f64> = records.iter().map(|r| r.rating.unwrap_or(0.0)).collect();
    let reviews: Vec<f64> = records
        .iter()
        .map(|r| f64::from(r.review_count.unwrap_or(0)))
        .collect();

    let prices = min_max_normalize(&prices);
    let ratings = min_max_normalize(&ratings);
    let reviews = min_max_normalize(&reviews);

    records
        .iter()
        .enumerate()
        .map(|(i, record)| ScoredSelection {
            record,
            score: PRICE_WEIGHT * prices[i]
                + RATING_WEIGHT * ratings[i]
                + REVIEWS_WEIGHT * reviews[i],
        })
        .collect()
}

/// Pick the best offer of one category.
///
/// Ties break toward the first-encountered record so identical inputs
/// always produce identical selections. Pure: no I/O, inputs untouched.
pub fn select_best(records: &[OfferRecord]) -> Option<&OfferRecord> {
    let scored = score_records(records);

    let mut best: Option<ScoredSelection> = None;
    for candidate in scored {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|s| s.record)
}

/// `(value - min) / (max - min)`, defined as 0.0 for every value when the
/// set has no variance (avoids division by zero on degenerate inputs).
fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if values.is_empty() || (max - min).abs() < f64::EPSILON {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| (v - min) / (max - min)).collect()
}
