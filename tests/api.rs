// tests/api.rs
//
// Entry-surface behavior: source resolution, error shape, laziness.
//
use css_locator::{find, find_first, LocateError, Params};

const PAGE: &str = r#"<html><body>
    <div class="intro">
        <p class="info">alpha</p>
        <p class="info">alpha beta</p>
    </div>
    <p id="solo">gamma</p>
</body></html>"#;

fn with_html() -> Params {
    Params { html: Some(PAGE.into()), ..Params::new() }
}

#[test]
fn defaults_are_fuzzy_with_no_source() {
    let params = Params::new();
    assert!(params.fuzzy);
    assert!(params.html.is_none());
    assert!(params.url.is_none());
}

#[test]
fn no_source_is_a_configuration_error() {
    let err = find(&Params::new(), "alpha").err().expect("must fail");
    assert!(matches!(err, LocateError::NoSource));
}

#[test]
fn empty_strings_count_as_absent_sources() {
    let params = Params {
        html: Some(String::new()),
        url: Some(String::new()),
        fuzzy: true,
    };
    assert!(matches!(find(&params, "alpha"), Err(LocateError::NoSource)));
}

#[test]
fn find_yields_pairs_in_document_order() {
    let hits: Vec<_> = find(&with_html(), "alpha").unwrap().collect();
    assert_eq!(
        hits,
        [
            (String::from(".intro .info"), Some(0)),
            (String::from(".intro .info"), Some(1)),
        ]
    );
}

#[test]
fn find_first_takes_the_first_pair() {
    let hit = find_first(&with_html(), "alpha").unwrap();
    assert_eq!(hit, Some((String::from(".intro .info"), Some(0))));
}

#[test]
fn exact_mode_narrows_to_whole_text() {
    let params = Params { fuzzy: false, ..with_html() };
    let hits: Vec<_> = find(&params, "alpha").unwrap().collect();
    assert_eq!(hits, [(String::from(".intro .info"), Some(0))]);
}

#[test]
fn no_match_is_empty_not_error() {
    assert_eq!(find(&with_html(), "delta").unwrap().count(), 0);
    assert_eq!(find_first(&with_html(), "delta").unwrap(), None);
}

#[test]
fn each_call_returns_a_fresh_iterator() {
    let params = with_html();
    let mut first = find(&params, "alpha").unwrap();
    first.next();
    // a new call starts over regardless of the old iterator's position
    let replay: Vec<_> = find(&params, "alpha").unwrap().collect();
    assert_eq!(replay.len(), 2);
    assert_eq!(replay[0].1, Some(0));
}

#[test]
fn unique_id_short_circuits() {
    assert_eq!(
        find_first(&with_html(), "gamma").unwrap(),
        Some((String::from("#solo"), None))
    );
}
