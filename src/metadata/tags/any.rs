//! Tags which may appear in any image file directory, root or child.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
};

define_tag! {
    /// Offsets to the strips of image data.
    STRIP_OFFSETS = Tag::new(None, None, 0x0111, Some("StripOffsets"),
        TagBehavior::StandardValue, &[("Exif.Image.StripOffsets", "Image")])
}

define_tag! {
    /// Byte counts of the strips of image data.
    STRIP_BYTE_COUNTS = Tag::new(None, None, 0x0117, Some("StripByteCounts"),
        TagBehavior::StandardValue, &[("Exif.Image.StripByteCounts", "Image")])
}

define_tag! {
    /// Pointer to one or more sub-image directories. Child directory offsets in the target
    /// are relative to the directory start rather than the buffer start.
    SUB_IFD = Tag::new(None, None, 0x014A, Some("SubIFD"),
        TagBehavior::ScopedIfdPointer, &[("Exif.Image.SubIFDs", "Image")])
}

define_tag! {
    /// JPEG quantization and Huffman tables.
    JPEG_TABLES = Tag::new(None, None, 0x015B, Some("JPEGTables"),
        TagBehavior::StandardValue, &[("Exif.Image.JPEGTables", "Image")])
}

define_tag! {
    /// Global parameters directory. Preserved as opaque bytes across a round trip.
    GLOBAL_PARAMETERS_IFD = Tag::preserve_data_block(None, None, 0x0190, "GlobalParametersIFD")
}

define_tag! {
    /// Kodak maker directory. Preserved as opaque bytes across a round trip.
    KODAK_IFD = Tag::preserve_data_block(None, None, 0x8290, "KodakIFD")
}

define_tag! {
    /// AFCP IPTC metadata block. Preserved as opaque bytes across a round trip.
    AFCP_IPTC = Tag::preserve_data_block(None, None, 0x8568, "AFCP_IPTC")
}

define_tag! {
    /// Leaf sub-image directory. Preserved as opaque bytes across a round trip.
    LEAF_SUB_IFD = Tag::preserve_data_block(None, None, 0x888A, "LeafSubIFD")
}

define_tag! {
    /// Offset to Samsung raw pointer data, paired with `SamsungRawPointersLength`.
    SAMSUNG_RAW_POINTERS_OFFSET = Tag::offset_and_length_pair(None, None,
        0xA010, "SamsungRawPointersOffset", 0xA011, "SamsungRawPointersLength", &[])
}

define_tag! {
    /// Offset to the image data, paired with `ImageByteCount`.
    IMAGE_OFFSET = Tag::offset_and_length_pair(None, None,
        0xBCC0, "ImageOffset", 0xBCC1, "ImageByteCount", &[])
}

define_tag! {
    /// Offset to the alpha channel data, paired with `AlphaByteCount`.
    ALPHA_OFFSET = Tag::offset_and_length_pair(None, None,
        0xBCC2, "AlphaOffset", 0xBCC3, "AlphaByteCount", &[])
}

define_tag! {
    /// Kodak KDC directory. Preserved as opaque bytes across a round trip.
    KDC_IFD = Tag::preserve_data_block(None, None, 0xFE00, "KDC_IFD")
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*STRIP_OFFSETS,
        &*STRIP_BYTE_COUNTS,
        &*SUB_IFD,
        &*JPEG_TABLES,
        &*GLOBAL_PARAMETERS_IFD,
        &*KODAK_IFD,
        &*AFCP_IPTC,
        &*LEAF_SUB_IFD,
        &*SAMSUNG_RAW_POINTERS_OFFSET,
        &*IMAGE_OFFSET,
        &*ALPHA_OFFSET,
        &*KDC_IFD,
    ])
}
