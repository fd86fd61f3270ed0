use deals_engine::{decode_deals, PayloadError};
use pretty_assertions::assert_eq;

#[test]
fn decodes_items_in_order() {
    let body = br#"{"items":[
        {"id":1,"game_slug":"dark-souls","store":1,"price":9.99,"url":"https://a.example.com"},
        {"id":2,"game_slug":"elden-ring","store":"gog","price":"39.99","original_price":59.99,"discount_pct":33.4,"url":"https://b.example.com"}
    ],"page":1}"#;

    let deals = decode_deals(body).unwrap();

    let slugs: Vec<_> = deals.iter().map(|d| d.game_slug.as_str()).collect();
    assert_eq!(slugs, vec!["dark-souls", "elden-ring"]);
    assert!(deals[1].discount_pct.is_some());
}

#[test]
fn missing_or_non_array_items_is_empty_page() {
    assert!(decode_deals(b"{}").unwrap().is_empty());
    assert!(decode_deals(br#"{"items":null}"#).unwrap().is_empty());
    assert!(decode_deals(br#"{"items":{"id":1}}"#).unwrap().is_empty());
    assert!(decode_deals(br#"{"items":"nope"}"#).unwrap().is_empty());
}

#[test]
fn garbled_entries_are_skipped() {
    let body = br#"{"items":[
        {"id":1,"game_slug":"celeste","store":1,"price":4.99,"url":"https://a.example.com"},
        {"id":2,"store":1,"price":4.99},
        42,
        {"id":3,"game_slug":"hades","store":1,"price":"free","url":"https://c.example.com"}
    ]}"#;

    let deals = decode_deals(body).unwrap();

    assert_eq!(deals.len(), 1);
    assert_eq!(deals[0].game_slug, "celeste");
}

#[test]
fn unusual_identifiers_do_not_drop_deals() {
    let body = br#"{"items":[
        {"id":18446744073709551615,"game_slug":"a","store":1,"price":1,"url":"https://a.example.com"},
        {"id":"b","game_slug":"b","store":1.0,"price":2,"url":"https://b.example.com"},
        {"id":"c","game_slug":"c","store":1,"price":0.1,"discount_pct":33.4,"url":"https://c.example.com"}
    ]}"#;

    let deals = decode_deals(body).unwrap();

    let slugs: Vec<_> = deals.iter().map(|d| d.game_slug.as_str()).collect();
    assert_eq!(slugs, vec!["a", "b", "c"]);
}

#[test]
fn non_json_and_non_object_bodies_are_malformed() {
    assert!(matches!(
        decode_deals(b"<html>oops</html>"),
        Err(PayloadError::InvalidJson(_))
    ));
    assert!(matches!(decode_deals(b""), Err(PayloadError::InvalidJson(_))));
    assert!(matches!(
        decode_deals(b"[]"),
        Err(PayloadError::NotAnObject("an array"))
    ));
    assert!(matches!(
        decode_deals(b"null"),
        Err(PayloadError::NotAnObject("null"))
    ));
}
