use std::str::FromStr;

use deals_core::{
    discount_badge, format_price, matches, normalize_term, project, DealRecord, Identifier,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn dec(raw: &str) -> Decimal {
    Decimal::from_str(raw).unwrap()
}

fn deal(id: i64, slug: &str, price: &str) -> DealRecord {
    DealRecord {
        id: id.into(),
        game_slug: slug.to_string(),
        store: Identifier::Number(1),
        price: dec(price),
        original_price: None,
        discount_pct: None,
        url: format!("https://store.example.com/{slug}"),
    }
}

fn catalog() -> Vec<DealRecord> {
    vec![
        deal(1, "dark-souls", "9.99"),
        deal(2, "elden-ring", "39.99"),
        deal(3, "dark-souls-ii", "14.99"),
        deal(4, "hollow-knight", "7.49"),
    ]
}

fn slugs(items: &[deals_core::DisplayDeal]) -> Vec<&str> {
    items.iter().map(|d| d.record.game_slug.as_str()).collect()
}

#[test]
fn search_term_keeps_only_matching_slugs() {
    let items = vec![deal(1, "dark-souls", "9.99"), deal(2, "elden-ring", "39.99")];

    let view = project(&items, "dark");

    assert_eq!(slugs(&view), vec!["dark-souls"]);
}

#[test]
fn blank_term_keeps_everything_in_arrival_order() {
    let items = catalog();

    for term in ["", "   ", "\t\n"] {
        let view = project(&items, term);
        assert_eq!(
            slugs(&view),
            vec!["dark-souls", "elden-ring", "dark-souls-ii", "hollow-knight"]
        );
    }
}

#[test]
fn term_is_trimmed_and_case_insensitive() {
    let items = catalog();

    let view = project(&items, "  DARK  ");

    assert_eq!(slugs(&view), vec!["dark-souls", "dark-souls-ii"]);
}

#[test]
fn slug_casing_does_not_affect_matching() {
    let items = vec![deal(1, "Hades-II", "29.99")];

    assert_eq!(project(&items, "hades").len(), 1);
    assert!(matches(&items[0], "ADES-i"));
}

#[test]
fn matching_is_a_plain_substring_test() {
    let items = catalog();

    // Hyphens are part of the slug, so a space does not stand in for one.
    assert!(project(&items, "dark souls").is_empty());
    assert_eq!(slugs(&project(&items, "s-ii")), vec!["dark-souls-ii"]);
}

#[test]
fn no_match_and_empty_items_yield_empty_views() {
    assert!(project(&catalog(), "zelda").is_empty());
    assert!(project(&[], "").is_empty());
    assert!(project(&[], "dark").is_empty());
}

#[test]
fn every_projected_slug_contains_the_normalized_term() {
    let items = catalog();

    for term in ["d", "Souls", " ring", "-", "knight ", "x"] {
        let needle = normalize_term(term).unwrap();
        for shown in project(&items, term) {
            assert!(shown.record.game_slug.to_lowercase().contains(&needle));
        }
    }
}

#[test]
fn projection_is_idempotent_and_order_preserving() {
    let items = catalog();

    let first = project(&items, "s");
    let second = project(&items, "s");
    assert_eq!(first, second);

    let positions: Vec<usize> = first
        .iter()
        .map(|shown| items.iter().position(|d| d == &shown.record).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn price_formatting_rounds_half_to_even() {
    assert_eq!(format_price(dec("19.999")), "20.00");
    assert_eq!(format_price(dec("0.125")), "0.12");
    assert_eq!(format_price(dec("0.135")), "0.14");
    assert_eq!(format_price(dec("2.675")), "2.68");
    assert_eq!(format_price(dec("5")), "5.00");
    assert_eq!(format_price(dec("7.5")), "7.50");
}

#[test]
fn widest_prices_still_get_two_decimals() {
    assert_eq!(format_price(Decimal::MAX), "79228162514264337593543950335.00");
    assert_eq!(
        format_price(dec("123456789012345678901234567.8")),
        "123456789012345678901234567.80"
    );
}

#[test]
fn discount_badge_rounds_to_nearest_percent() {
    assert_eq!(discount_badge(dec("33.4")), Some(33));
    assert_eq!(discount_badge(dec("66.6")), Some(67));
    assert_eq!(discount_badge(dec("12.5")), Some(13));
    assert_eq!(discount_badge(dec("100")), Some(100));
}

#[test]
fn optional_display_fields_follow_their_source_fields() {
    let mut full = deal(1, "celeste", "4.99");
    full.original_price = Some(dec("19.99"));
    full.discount_pct = Some(dec("75.04"));
    let bare = deal(2, "celeste-farewell", "0");

    let view = project(&[full, bare], "");

    assert_eq!(view[0].title, "celeste");
    assert_eq!(view[0].formatted_price, "4.99");
    assert_eq!(view[0].formatted_original_price.as_deref(), Some("19.99"));
    assert_eq!(view[0].discount_badge, Some(75));

    assert_eq!(view[1].title, "celeste farewell");
    assert_eq!(view[1].formatted_price, "0.00");
    assert_eq!(view[1].formatted_original_price, None);
    assert_eq!(view[1].discount_badge, None);
}

#[test]
fn inconsistent_prices_are_passed_through() {
    let mut odd = deal(1, "odd-deal", "30.00");
    odd.original_price = Some(dec("10.00"));
    odd.discount_pct = Some(dec("90"));

    let view = project(&[odd], "odd");

    assert_eq!(view[0].formatted_price, "30.00");
    assert_eq!(view[0].formatted_original_price.as_deref(), Some("10.00"));
    assert_eq!(view[0].discount_badge, Some(90));
}
