use lipi::features::{ENABLED, is_enabled};

#[test]
fn normalization_is_always_enabled() {
    assert!(is_enabled("normalization"));
    assert!(!is_enabled("transliteration"));
    assert_eq!(ENABLED.contains(&"server"), cfg!(feature = "server"));
}

#[test]
fn facade_reaches_the_dispatcher() {
    let result = lipi::normalization::normalize("Hello, world!", "english", None).unwrap();
    assert_eq!(result.normalized_text, "hello world");
    assert_eq!(lipi::normalization::list_supported_languages().len(), 12);
}
