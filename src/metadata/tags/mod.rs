//! The built-in tag catalog.
//!
//! Tags are grouped by where they may appear: [`ifd`] for any root directory, [`ifd0`] for
//! the first root directory only, [`exif_ifd`], [`gps_info`], and [`interoperability_ifd`]
//! for the respective child directories, [`sub_ifd`] for sub-image directories, and [`any`]
//! for tags with no placement requirement. The catalog is a curated subset of the tags in
//! common use, with exiv2-style alias keys where they exist; unknown wire tags decode fine
//! without a catalog entry, they just get an anonymous name and no behavior.

use std::sync::LazyLock;

use crate::metadata::provider::TagProvider;

macro_rules! define_tag {
    ($(#[$doc:meta])+ $name:ident = $ctor:expr) => {
        $(#[$doc])+
        pub static $name: std::sync::LazyLock<crate::metadata::tag::TagRef> =
            std::sync::LazyLock::new(|| $ctor.expect("tag catalog definitions are valid"));
    };
}

pub mod any;
pub mod exif_ifd;
pub mod gps_info;
pub mod ifd;
pub mod ifd0;
pub mod interoperability_ifd;
pub mod sub_ifd;

static BUILT_IN: LazyLock<TagProvider> = LazyLock::new(|| {
    let provider = TagProvider::new();
    ifd::register(&provider).expect("tag catalog registers cleanly");
    ifd0::register(&provider).expect("tag catalog registers cleanly");
    exif_ifd::register(&provider).expect("tag catalog registers cleanly");
    gps_info::register(&provider).expect("tag catalog registers cleanly");
    interoperability_ifd::register(&provider).expect("tag catalog registers cleanly");
    sub_ifd::register(&provider).expect("tag catalog registers cleanly");
    any::register(&provider).expect("tag catalog registers cleanly");
    provider.as_read_only()
});

/// The frozen provider holding the whole built-in catalog.
pub(crate) fn built_in() -> &'static TagProvider {
    &BUILT_IN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tag::{Tag, TagBehavior};

    #[test]
    fn built_in_is_frozen() {
        let provider = built_in();
        assert!(provider.is_read_only());
        assert!(provider.add(&ifd::X_RESOLUTION).is_err());
    }

    #[test]
    fn built_in_resolves_common_tags() {
        let provider = built_in();
        let matched = provider.match_tag(0x011A, Tag::root(), 0).unwrap();
        assert_eq!(matched.name(), "XResolution");

        let matched = provider.match_tag(0x8769, Tag::root(), 0).unwrap();
        assert_eq!(matched.behavior(), TagBehavior::IfdPointer);

        let matched = provider
            .match_tag(0x9003, &ifd0::EXIF_OFFSET, 0)
            .unwrap();
        assert_eq!(matched.name(), "DateTimeOriginal");
    }

    #[test]
    fn ifd0_tags_only_match_first_directory() {
        let provider = built_in();
        assert!(provider.match_tag(0x83BB, Tag::root(), 0).is_some());
        assert!(provider.match_tag(0x83BB, Tag::root(), 1).is_none());
    }

    #[test]
    fn mutable_copy_accepts_overrides() {
        let provider = built_in().to_mutable();
        let custom = Tag::cannot_round_trip(Some(Tag::root()), None, 0x011A, "Custom").unwrap();
        provider.add_or_update(&custom).unwrap();
        let matched = provider.match_tag(0x011A, Tag::root(), 0).unwrap();
        assert_eq!(matched.name(), "Custom");
    }
}
