//! Tags which may appear in the interoperability child image file directory.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
    tags::exif_ifd,
};

define_tag! {
    /// Interoperability rule identifier, such as `R98`.
    INTEROP_INDEX = Tag::new(Some(&exif_ifd::INTEROPERABILITY_IFD), None, 0x0001,
        Some("InteropIndex"), TagBehavior::StandardValue,
        &[("Exif.Iop.InteroperabilityIndex", "Iop")])
}

define_tag! {
    /// Interoperability version, as four ASCII digits.
    INTEROP_VERSION = Tag::new(Some(&exif_ifd::INTEROPERABILITY_IFD), None, 0x0002,
        Some("InteropVersion"), TagBehavior::StandardValue,
        &[("Exif.Iop.InteroperabilityVersion", "Iop")])
}

define_tag! {
    /// File format of the related image, such as `Exif JPEG Ver. 2.1`.
    RELATED_IMAGE_FILE_FORMAT = Tag::new(Some(&exif_ifd::INTEROPERABILITY_IFD), None, 0x1000,
        Some("RelatedImageFileFormat"), TagBehavior::StandardValue,
        &[("Exif.Iop.RelatedImageFileFormat", "Iop")])
}

define_tag! {
    /// Width of the related image in pixels.
    RELATED_IMAGE_WIDTH = Tag::new(Some(&exif_ifd::INTEROPERABILITY_IFD), None, 0x1001,
        Some("RelatedImageWidth"), TagBehavior::StandardValue,
        &[("Exif.Iop.RelatedImageWidth", "Iop")])
}

define_tag! {
    /// Height of the related image in pixels.
    RELATED_IMAGE_HEIGHT = Tag::new(Some(&exif_ifd::INTEROPERABILITY_IFD), None, 0x1002,
        Some("RelatedImageHeight"), TagBehavior::StandardValue,
        &[("Exif.Iop.RelatedImageLength", "Iop")])
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*INTEROP_INDEX,
        &*INTEROP_VERSION,
        &*RELATED_IMAGE_FILE_FORMAT,
        &*RELATED_IMAGE_WIDTH,
        &*RELATED_IMAGE_HEIGHT,
    ])
}
