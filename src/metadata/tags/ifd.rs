//! Tags which may appear in any root image file directory.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
};

define_tag! {
    /// Width of the image in pixels.
    IMAGE_WIDTH = Tag::new(Some(Tag::root()), None, 0x0100, Some("ImageWidth"),
        TagBehavior::StandardValue, &[("Exif.Image.ImageWidth", "Image")])
}

define_tag! {
    /// Height of the image in pixels.
    IMAGE_HEIGHT = Tag::new(Some(Tag::root()), None, 0x0101, Some("ImageHeight"),
        TagBehavior::StandardValue, &[("Exif.Image.ImageLength", "Image")])
}

define_tag! {
    /// Number of bits per image component.
    BITS_PER_SAMPLE = Tag::new(Some(Tag::root()), None, 0x0102, Some("BitsPerSample"),
        TagBehavior::StandardValue, &[("Exif.Image.BitsPerSample", "Image")])
}

define_tag! {
    /// Compression scheme of the image data. 1 is uncompressed, 6 is JPEG (thumbnails).
    COMPRESSION = Tag::new(Some(Tag::root()), None, 0x0103, Some("Compression"),
        TagBehavior::StandardValue, &[("Exif.Image.Compression", "Image")])
}

define_tag! {
    /// Pixel composition of the image data.
    PHOTOMETRIC_INTERPRETATION = Tag::new(Some(Tag::root()), None, 0x0106,
        Some("PhotometricInterpretation"), TagBehavior::StandardValue,
        &[("Exif.Image.PhotometricInterpretation", "Image")])
}

define_tag! {
    /// A title or caption for the image.
    IMAGE_DESCRIPTION = Tag::new(Some(Tag::root()), None, 0x010E, Some("ImageDescription"),
        TagBehavior::StandardValue, &[("Exif.Image.ImageDescription", "Image")])
}

define_tag! {
    /// Manufacturer of the recording equipment.
    MAKE = Tag::new(Some(Tag::root()), None, 0x010F, Some("Make"),
        TagBehavior::StandardValue, &[("Exif.Image.Make", "Image")])
}

define_tag! {
    /// Model name or number of the recording equipment.
    MODEL = Tag::new(Some(Tag::root()), None, 0x0110, Some("Model"),
        TagBehavior::StandardValue, &[("Exif.Image.Model", "Image")])
}

define_tag! {
    /// Orientation of the image with respect to rows and columns.
    ORIENTATION = Tag::new(Some(Tag::root()), None, 0x0112, Some("Orientation"),
        TagBehavior::StandardValue, &[("Exif.Image.Orientation", "Image")])
}

define_tag! {
    /// Number of components per pixel.
    SAMPLES_PER_PIXEL = Tag::new(Some(Tag::root()), None, 0x0115, Some("SamplesPerPixel"),
        TagBehavior::StandardValue, &[("Exif.Image.SamplesPerPixel", "Image")])
}

define_tag! {
    /// Number of rows per strip of image data.
    ROWS_PER_STRIP = Tag::new(Some(Tag::root()), None, 0x0116, Some("RowsPerStrip"),
        TagBehavior::StandardValue, &[("Exif.Image.RowsPerStrip", "Image")])
}

define_tag! {
    /// Pixels per resolution unit in the image width direction.
    X_RESOLUTION = Tag::new(Some(Tag::root()), None, 0x011A, Some("XResolution"),
        TagBehavior::StandardValue, &[("Exif.Image.XResolution", "Image")])
}

define_tag! {
    /// Pixels per resolution unit in the image height direction.
    Y_RESOLUTION = Tag::new(Some(Tag::root()), None, 0x011B, Some("YResolution"),
        TagBehavior::StandardValue, &[("Exif.Image.YResolution", "Image")])
}

define_tag! {
    /// Whether pixel components are recorded chunky or planar.
    PLANAR_CONFIGURATION = Tag::new(Some(Tag::root()), None, 0x011C, Some("PlanarConfiguration"),
        TagBehavior::StandardValue, &[("Exif.Image.PlanarConfiguration", "Image")])
}

define_tag! {
    /// Unit for `XResolution` and `YResolution`. 2 means inches.
    RESOLUTION_UNIT = Tag::new(Some(Tag::root()), None, 0x0128, Some("ResolutionUnit"),
        TagBehavior::StandardValue, &[("Exif.Image.ResolutionUnit", "Image")])
}

define_tag! {
    /// Name and version of the software used to generate the image.
    SOFTWARE = Tag::new(Some(Tag::root()), None, 0x0131, Some("Software"),
        TagBehavior::StandardValue, &[("Exif.Image.Software", "Image")])
}

define_tag! {
    /// Date and time the file was last changed, as `YYYY:MM:DD HH:MM:SS`.
    MODIFY_DATE = Tag::new(Some(Tag::root()), None, 0x0132, Some("ModifyDate"),
        TagBehavior::StandardValue, &[("Exif.Image.DateTime", "Image")])
}

define_tag! {
    /// Name of the camera owner, photographer, or image creator.
    ARTIST = Tag::new(Some(Tag::root()), None, 0x013B, Some("Artist"),
        TagBehavior::StandardValue, &[("Exif.Image.Artist", "Image")])
}

define_tag! {
    /// Chromaticity of the white point of the image.
    WHITE_POINT = Tag::new(Some(Tag::root()), None, 0x013E, Some("WhitePoint"),
        TagBehavior::StandardValue, &[("Exif.Image.WhitePoint", "Image")])
}

define_tag! {
    /// Chromaticity of the three primary colors of the image.
    PRIMARY_CHROMATICITIES = Tag::new(Some(Tag::root()), None, 0x013F,
        Some("PrimaryChromaticities"), TagBehavior::StandardValue,
        &[("Exif.Image.PrimaryChromaticities", "Image")])
}

define_tag! {
    /// Offset to the JPEG compressed thumbnail, paired with `ThumbnailLength`.
    THUMBNAIL_OFFSET = Tag::offset_and_length_pair(Some(Tag::root()), None,
        0x0201, "ThumbnailOffset", 0x0202, "ThumbnailLength",
        &[("Exif.Image.JPEGInterchangeFormat", "Image")])
}

define_tag! {
    /// Matrix coefficients for RGB to YCbCr transformation.
    Y_CB_CR_COEFFICIENTS = Tag::new(Some(Tag::root()), None, 0x0211, Some("YCbCrCoefficients"),
        TagBehavior::StandardValue, &[("Exif.Image.YCbCrCoefficients", "Image")])
}

define_tag! {
    /// Sampling ratio of chrominance to luminance components.
    Y_CB_CR_SUB_SAMPLING = Tag::new(Some(Tag::root()), None, 0x0212, Some("YCbCrSubSampling"),
        TagBehavior::StandardValue, &[("Exif.Image.YCbCrSubSampling", "Image")])
}

define_tag! {
    /// Position of chrominance components relative to luminance.
    Y_CB_CR_POSITIONING = Tag::new(Some(Tag::root()), None, 0x0213, Some("YCbCrPositioning"),
        TagBehavior::StandardValue, &[("Exif.Image.YCbCrPositioning", "Image")])
}

define_tag! {
    /// Reference black and white point values.
    REFERENCE_BLACK_WHITE = Tag::new(Some(Tag::root()), None, 0x0214,
        Some("ReferenceBlackWhite"), TagBehavior::StandardValue,
        &[("Exif.Image.ReferenceBlackWhite", "Image")])
}

define_tag! {
    /// Copyright notice of the person or organization claiming rights to the image.
    COPYRIGHT = Tag::new(Some(Tag::root()), None, 0x8298, Some("Copyright"),
        TagBehavior::StandardValue, &[("Exif.Image.Copyright", "Image")])
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*IMAGE_WIDTH,
        &*IMAGE_HEIGHT,
        &*BITS_PER_SAMPLE,
        &*COMPRESSION,
        &*PHOTOMETRIC_INTERPRETATION,
        &*IMAGE_DESCRIPTION,
        &*MAKE,
        &*MODEL,
        &*ORIENTATION,
        &*SAMPLES_PER_PIXEL,
        &*ROWS_PER_STRIP,
        &*X_RESOLUTION,
        &*Y_RESOLUTION,
        &*PLANAR_CONFIGURATION,
        &*RESOLUTION_UNIT,
        &*SOFTWARE,
        &*MODIFY_DATE,
        &*ARTIST,
        &*WHITE_POINT,
        &*PRIMARY_CHROMATICITIES,
        &*THUMBNAIL_OFFSET,
        &*Y_CB_CR_COEFFICIENTS,
        &*Y_CB_CR_SUB_SAMPLING,
        &*Y_CB_CR_POSITIONING,
        &*REFERENCE_BLACK_WHITE,
        &*COPYRIGHT,
    ])
}
