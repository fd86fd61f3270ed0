use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{DealRecord, DisplayDeal};

/// Derives the ordered display list for `search_term` from `items`.
///
/// A blank term keeps every item. Otherwise an item is kept when its slug
/// contains the trimmed, lower-cased term. Arrival order is preserved.
pub fn project(items: &[DealRecord], search_term: &str) -> Vec<DisplayDeal> {
    let needle = normalize_term(search_term);
    items
        .iter()
        .filter(|deal| match needle.as_deref() {
            Some(needle) => slug_contains(deal, needle),
            None => true,
        })
        .map(display_deal)
        .collect()
}

/// Trimmed, lower-cased search term, or `None` when nothing is left to match.
pub fn normalize_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

pub fn matches(deal: &DealRecord, search_term: &str) -> bool {
    match normalize_term(search_term) {
        Some(needle) => slug_contains(deal, &needle),
        None => true,
    }
}

fn slug_contains(deal: &DealRecord, needle: &str) -> bool {
    deal.game_slug.to_lowercase().contains(needle)
}

/// Round half to even at two decimals, always rendered with two decimals.
///
/// Padding goes through `Display` precision, which appends zeros as text, so
/// values too wide to carry scale 2 (about 27 integer digits) still get them.
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    format!("{rounded:.2}")
}

/// Whole percent for the discount badge; midpoints round away from zero.
pub fn discount_badge(discount_pct: Decimal) -> Option<i64> {
    discount_pct
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

fn display_deal(deal: &DealRecord) -> DisplayDeal {
    DisplayDeal {
        title: deal.game_slug.replace('-', " "),
        formatted_price: format_price(deal.price),
        formatted_original_price: deal.original_price.map(format_price),
        discount_badge: deal.discount_pct.and_then(discount_badge),
        record: deal.clone(),
    }
}
