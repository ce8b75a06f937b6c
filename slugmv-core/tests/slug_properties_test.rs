use proptest::prelude::*;
use regex::Regex;
use slugmv_core::{plan_rename, slugify, FileEntry, PrefixPattern, DEFAULT_PLACEHOLDER};
use std::path::Path;

fn slug_shape() -> Regex {
    Regex::new(r"^([a-z0-9]+(-[a-z0-9]+)*)?$").unwrap()
}

proptest! {
    #[test]
    fn slug_only_contains_allowed_chars(input in any::<String>()) {
        let slug = slugify(&input);
        prop_assert!(slug_shape().is_match(&slug), "bad slug {:?} from {:?}", slug, input);
    }

    #[test]
    fn slug_of_accented_text(input in "[a-zA-Zàáâãçéêíóôõúü !?.,_-]{0,40}") {
        let slug = slugify(&input);
        prop_assert!(slug_shape().is_match(&slug));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn slugify_is_idempotent(input in any::<String>()) {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn extension_is_lowercased_and_kept(
        stem in "[A-Za-z0-9 çÉ!]{1,20}",
        ext in "[A-Za-z0-9]{1,5}",
    ) {
        let path = format!("dir/{stem}.{ext}");
        let entry = FileEntry::new(&path);
        let prefix = PrefixPattern::disabled();

        let target = plan_rename(&entry, &prefix, DEFAULT_PLACEHOLDER)
            .map_or_else(|| Path::new(&path).to_path_buf(), |plan| plan.to);

        let expected = ext.to_lowercase();
        prop_assert_eq!(target.extension().and_then(|e| e.to_str()), Some(expected.as_str()));
        prop_assert_eq!(target.parent(), Some(Path::new("dir")));
    }
}
