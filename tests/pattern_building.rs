use filescan::{Pattern, PatternBuilder};

#[test]
fn hex_pattern() {
    assert!(
        // Valid hex pattern.
        PatternBuilder::from_hex_string("488b0500").is_ok()
    );

    assert!(
        // Invalid hex pattern (invalid byte).
        PatternBuilder::from_hex_string("488bZZ").is_err()
    );

    assert!(
        // Invalid hex pattern (odd length).
        PatternBuilder::from_hex_string("488b0").is_err()
    );

    assert!(
        // Invalid hex pattern (empty).
        PatternBuilder::from_hex_string("").is_err()
    );
}

#[test]
fn text_pattern() {
    let pattern = PatternBuilder::from_text("GET / HTTP/1.1").unwrap();
    assert_eq!(pattern.as_bytes(), b"GET / HTTP/1.1");
}

#[test]
fn direct_construction_rejects_empty_and_oversize() {
    assert!(Pattern::new(Vec::<u8>::new()).is_err());
    assert!(Pattern::new(vec![0u8; 4097]).is_err());
}
