#![no_main]

use libfuzzer_sys::fuzz_target;
use slugmv_core::{slugify, PrefixPattern};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    let slug = slugify(&input);
    assert!(slug
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
    assert!(!slug.starts_with('-') && !slug.ends_with('-') && !slug.contains("--"));
    assert_eq!(slugify(&slug), slug);

    // first line doubles as a prefix pattern; most inputs are not valid regexes
    if let Some(pattern) = input.lines().next() {
        if let Ok(prefix) = PrefixPattern::new(pattern) {
            let _ = slugify(&prefix.strip(&input));
        }
    }
});
