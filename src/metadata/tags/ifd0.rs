//! Tags which may only appear in the first root image file directory (IFD0).
//!
//! Most of these are pinned to directory index 0. The two child directory pointers
//! ([`EXIF_OFFSET`] and [`GPS_INFO`]) are deliberately not pinned so they also resolve in
//! the root directories of sub-images.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
};

define_tag! {
    /// Name and version of the software used to process the image.
    PROCESSING_SOFTWARE = Tag::new(Some(Tag::root()), Some(0), 0x000B,
        Some("ProcessingSoftware"), TagBehavior::StandardValue,
        &[("Exif.Image.ProcessingSoftware", "Image")])
}

define_tag! {
    /// Kind of data in this subfile, such as a reduced-resolution version.
    SUBFILE_TYPE = Tag::new(Some(Tag::root()), Some(0), 0x00FE, Some("SubfileType"),
        TagBehavior::StandardValue, &[("Exif.Image.NewSubfileType", "Image")])
}

define_tag! {
    /// Name of the document the image was scanned from.
    DOCUMENT_NAME = Tag::new(Some(Tag::root()), Some(0), 0x010D, Some("DocumentName"),
        TagBehavior::StandardValue, &[("Exif.Image.DocumentName", "Image")])
}

define_tag! {
    /// Computer used to generate the image.
    HOST_COMPUTER = Tag::new(Some(Tag::root()), Some(0), 0x013C, Some("HostComputer"),
        TagBehavior::StandardValue, &[("Exif.Image.HostComputer", "Image")])
}

define_tag! {
    /// XMP metadata packet.
    APPLICATION_NOTES = Tag::new(Some(Tag::root()), Some(0), 0x02BC, Some("ApplicationNotes"),
        TagBehavior::StandardValue, &[("Exif.Image.XMLPacket", "Image")])
}

define_tag! {
    /// Image rating from 0 to 5.
    RATING = Tag::new(Some(Tag::root()), Some(0), 0x4746, Some("Rating"),
        TagBehavior::StandardValue, &[("Exif.Image.Rating", "Image")])
}

define_tag! {
    /// Image rating as a percentage.
    RATING_PERCENT = Tag::new(Some(Tag::root()), Some(0), 0x4749, Some("RatingPercent"),
        TagBehavior::StandardValue, &[("Exif.Image.RatingPercent", "Image")])
}

define_tag! {
    /// IPTC-NAA metadata block. Preserved as opaque bytes across a round trip.
    IPTC_NAA = Tag::preserve_data_block(Some(Tag::root()), Some(0), 0x83BB, "IPTC-NAA")
}

define_tag! {
    /// Photoshop image resource block.
    PHOTOSHOP_SETTINGS = Tag::new(Some(Tag::root()), Some(0), 0x8649, Some("PhotoshopSettings"),
        TagBehavior::StandardValue, &[("Exif.Image.ImageResources", "Image")])
}

define_tag! {
    /// Pointer to the EXIF child image file directory.
    EXIF_OFFSET = Tag::new(Some(Tag::root()), None, 0x8769, Some("ExifOffset"),
        TagBehavior::IfdPointer, &[("Exif.Image.ExifTag", "Image")])
}

define_tag! {
    /// Embedded ICC color profile.
    ICC_PROFILE = Tag::new(Some(Tag::root()), Some(0), 0x8773, Some("ICC_Profile"),
        TagBehavior::StandardValue, &[("Exif.Image.InterColorProfile", "Image")])
}

define_tag! {
    /// Pointer to the GPS child image file directory.
    GPS_INFO = Tag::new(Some(Tag::root()), None, 0x8825, Some("GPSInfo"),
        TagBehavior::IfdPointer, &[("Exif.Image.GPSTag", "Image")])
}

define_tag! {
    /// Print Image Matching metadata.
    PRINT_IM = Tag::new(Some(Tag::root()), Some(0), 0xC4A5, Some("PrintIM"),
        TagBehavior::StandardValue, &[("Exif.Image.PrintImageMatching", "Image")])
}

define_tag! {
    /// Extra camera profile block. Preserved as opaque bytes across a round trip.
    PROFILE_IFD = Tag::preserve_data_block(Some(Tag::root()), Some(0), 0xC6F5, "ProfileIFD")
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*PROCESSING_SOFTWARE,
        &*SUBFILE_TYPE,
        &*DOCUMENT_NAME,
        &*HOST_COMPUTER,
        &*APPLICATION_NOTES,
        &*RATING,
        &*RATING_PERCENT,
        &*IPTC_NAA,
        &*PHOTOSHOP_SETTINGS,
        &*EXIF_OFFSET,
        &*ICC_PROFILE,
        &*GPS_INFO,
        &*PRINT_IM,
        &*PROFILE_IFD,
    ])
}
