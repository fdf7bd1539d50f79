//! Tags which may appear in sub-image directories reached through `SubIFD`.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
    tags::any,
};

define_tag! {
    /// How to interpret each pixel sample.
    SAMPLE_FORMAT = Tag::new(Some(&any::SUB_IFD), None, 0x0153, Some("SampleFormat"),
        TagBehavior::StandardValue, &[("Exif.Image.SampleFormat", "Image")])
}

define_tag! {
    /// Offset to the JPEG compressed preview, paired with `PreviewImageLength`.
    PREVIEW_IMAGE_START = Tag::offset_and_length_pair(Some(&any::SUB_IFD), None,
        0x0201, "PreviewImageStart", 0x0202, "PreviewImageLength", &[])
}

define_tag! {
    /// Number of rows and columns in the repeating CFA pattern.
    CFA_REPEAT_PATTERN_DIM = Tag::new(Some(&any::SUB_IFD), None, 0x828D,
        Some("CFARepeatPatternDim"), TagBehavior::StandardValue,
        &[("Exif.Image.CFARepeatPatternDim", "Image")])
}

define_tag! {
    /// Color filter array geometric pattern.
    CFA_PATTERN2 = Tag::new(Some(&any::SUB_IFD), None, 0x828E, Some("CFAPattern2"),
        TagBehavior::StandardValue, &[("Exif.Image.CFAPattern", "Image")])
}

define_tag! {
    /// Zero-light encoded level for each sample.
    BLACK_LEVEL = Tag::new(Some(&any::SUB_IFD), None, 0xC61A, Some("BlackLevel"),
        TagBehavior::StandardValue, &[("Exif.Image.BlackLevel", "Image")])
}

define_tag! {
    /// Fully saturated encoded level for each sample.
    WHITE_LEVEL = Tag::new(Some(&any::SUB_IFD), None, 0xC61D, Some("WhiteLevel"),
        TagBehavior::StandardValue, &[("Exif.Image.WhiteLevel", "Image")])
}

define_tag! {
    /// Origin of the final image area within the raw image.
    DEFAULT_CROP_ORIGIN = Tag::new(Some(&any::SUB_IFD), None, 0xC61F,
        Some("DefaultCropOrigin"), TagBehavior::StandardValue,
        &[("Exif.Image.DefaultCropOrigin", "Image")])
}

define_tag! {
    /// Size of the final image area within the raw image.
    DEFAULT_CROP_SIZE = Tag::new(Some(&any::SUB_IFD), None, 0xC620, Some("DefaultCropSize"),
        TagBehavior::StandardValue, &[("Exif.Image.DefaultCropSize", "Image")])
}

define_tag! {
    /// Rectangle of the sensor area with meaningful image data.
    ACTIVE_AREA = Tag::new(Some(&any::SUB_IFD), None, 0xC68D, Some("ActiveArea"),
        TagBehavior::StandardValue, &[("Exif.Image.ActiveArea", "Image")])
}

define_tag! {
    /// Opcodes applied to the raw image after reading.
    OPCODE_LIST1 = Tag::new(Some(&any::SUB_IFD), None, 0xC740, Some("OpcodeList1"),
        TagBehavior::StandardValue, &[("Exif.Image.OpcodeList1", "Image")])
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*SAMPLE_FORMAT,
        &*PREVIEW_IMAGE_START,
        &*CFA_REPEAT_PATTERN_DIM,
        &*CFA_PATTERN2,
        &*BLACK_LEVEL,
        &*WHITE_LEVEL,
        &*DEFAULT_CROP_ORIGIN,
        &*DEFAULT_CROP_SIZE,
        &*ACTIVE_AREA,
        &*OPCODE_LIST1,
    ])
}
