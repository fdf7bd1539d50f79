//! Tags which may appear in the EXIF child image file directory.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
    tags::ifd0,
};

define_tag! {
    /// Exposure time in seconds.
    EXPOSURE_TIME = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x829A, Some("ExposureTime"),
        TagBehavior::StandardValue,
        &[("Exif.Image.ExposureTime", "Image"), ("Exif.Photo.ExposureTime", "Photo")])
}

define_tag! {
    /// The F number.
    F_NUMBER = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x829D, Some("FNumber"),
        TagBehavior::StandardValue,
        &[("Exif.Image.FNumber", "Image"), ("Exif.Photo.FNumber", "Photo")])
}

define_tag! {
    /// Class of the exposure program used by the camera.
    EXPOSURE_PROGRAM = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x8822, Some("ExposureProgram"),
        TagBehavior::StandardValue,
        &[("Exif.Image.ExposureProgram", "Image"), ("Exif.Photo.ExposureProgram", "Photo")])
}

define_tag! {
    /// ISO speed rating.
    ISO = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x8827, Some("ISO"),
        TagBehavior::StandardValue,
        &[("Exif.Image.ISOSpeedRatings", "Image"), ("Exif.Photo.ISOSpeedRatings", "Photo")])
}

define_tag! {
    /// Version of the supported EXIF standard, as four ASCII digits.
    EXIF_VERSION = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9000, Some("ExifVersion"),
        TagBehavior::StandardValue, &[("Exif.Photo.ExifVersion", "Photo")])
}

define_tag! {
    /// Date and time the original image data was generated.
    DATE_TIME_ORIGINAL = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9003,
        Some("DateTimeOriginal"), TagBehavior::StandardValue,
        &[("Exif.Image.DateTimeOriginal", "Image"), ("Exif.Photo.DateTimeOriginal", "Photo")])
}

define_tag! {
    /// Date and time the image was stored as digital data.
    CREATE_DATE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9004, Some("CreateDate"),
        TagBehavior::StandardValue, &[("Exif.Photo.DateTimeDigitized", "Photo")])
}

define_tag! {
    /// Time zone offset of `ModifyDate`.
    OFFSET_TIME = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9010, Some("OffsetTime"),
        TagBehavior::StandardValue, &[("Exif.Photo.OffsetTime", "Photo")])
}

define_tag! {
    /// Meaning of each image data component.
    COMPONENTS_CONFIGURATION = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9101,
        Some("ComponentsConfiguration"), TagBehavior::StandardValue,
        &[("Exif.Photo.ComponentsConfiguration", "Photo")])
}

define_tag! {
    /// Shutter speed as an APEX value.
    SHUTTER_SPEED_VALUE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9201,
        Some("ShutterSpeedValue"), TagBehavior::StandardValue,
        &[("Exif.Image.ShutterSpeedValue", "Image"), ("Exif.Photo.ShutterSpeedValue", "Photo")])
}

define_tag! {
    /// Lens aperture as an APEX value.
    APERTURE_VALUE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9202, Some("ApertureValue"),
        TagBehavior::StandardValue,
        &[("Exif.Image.ApertureValue", "Image"), ("Exif.Photo.ApertureValue", "Photo")])
}

define_tag! {
    /// Exposure bias as an APEX value.
    EXPOSURE_COMPENSATION = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9204,
        Some("ExposureCompensation"), TagBehavior::StandardValue,
        &[("Exif.Image.ExposureBiasValue", "Image"), ("Exif.Photo.ExposureBiasValue", "Photo")])
}

define_tag! {
    /// Metering mode.
    METERING_MODE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9207, Some("MeteringMode"),
        TagBehavior::StandardValue,
        &[("Exif.Image.MeteringMode", "Image"), ("Exif.Photo.MeteringMode", "Photo")])
}

define_tag! {
    /// Light source kind.
    LIGHT_SOURCE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9208, Some("LightSource"),
        TagBehavior::StandardValue,
        &[("Exif.Image.LightSource", "Image"), ("Exif.Photo.LightSource", "Photo")])
}

define_tag! {
    /// Flash status when the image was shot.
    FLASH = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9209, Some("Flash"),
        TagBehavior::StandardValue,
        &[("Exif.Image.Flash", "Image"), ("Exif.Photo.Flash", "Photo")])
}

define_tag! {
    /// Actual focal length of the lens, in millimeters.
    FOCAL_LENGTH = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x920A, Some("FocalLength"),
        TagBehavior::StandardValue,
        &[("Exif.Image.FocalLength", "Image"), ("Exif.Photo.FocalLength", "Photo")])
}

define_tag! {
    /// Manufacturer-specific maker note data.
    MAKER_NOTE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x927C, Some("MakerNote"),
        TagBehavior::StandardValue, &[("Exif.Photo.MakerNote", "Photo")])
}

define_tag! {
    /// Keywords or comments on the image.
    USER_COMMENT = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9286, Some("UserComment"),
        TagBehavior::StandardValue, &[("Exif.Photo.UserComment", "Photo")])
}

define_tag! {
    /// Fractional seconds of `DateTimeOriginal`.
    SUB_SEC_TIME_ORIGINAL = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0x9291,
        Some("SubSecTimeOriginal"), TagBehavior::StandardValue,
        &[("Exif.Photo.SubSecTimeOriginal", "Photo")])
}

define_tag! {
    /// Version of the supported Flashpix format.
    FLASHPIX_VERSION = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA000, Some("FlashpixVersion"),
        TagBehavior::StandardValue, &[("Exif.Photo.FlashpixVersion", "Photo")])
}

define_tag! {
    /// Color space information. 1 is sRGB.
    COLOR_SPACE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA001, Some("ColorSpace"),
        TagBehavior::StandardValue, &[("Exif.Photo.ColorSpace", "Photo")])
}

define_tag! {
    /// Valid image width of the meaningful image data.
    EXIF_IMAGE_WIDTH = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA002, Some("ExifImageWidth"),
        TagBehavior::StandardValue, &[("Exif.Photo.PixelXDimension", "Photo")])
}

define_tag! {
    /// Valid image height of the meaningful image data.
    EXIF_IMAGE_HEIGHT = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA003,
        Some("ExifImageHeight"), TagBehavior::StandardValue,
        &[("Exif.Photo.PixelYDimension", "Photo")])
}

define_tag! {
    /// Pointer to the interoperability child image file directory.
    INTEROPERABILITY_IFD = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA005,
        Some("InteroperabilityIFD"), TagBehavior::IfdPointer,
        &[("Exif.Photo.InteroperabilityTag", "Photo")])
}

define_tag! {
    /// Image sensor type on the camera.
    SENSING_METHOD = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA217, Some("SensingMethod"),
        TagBehavior::StandardValue, &[("Exif.Photo.SensingMethod", "Photo")])
}

define_tag! {
    /// Use of special processing on image data.
    CUSTOM_RENDERED = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA401, Some("CustomRendered"),
        TagBehavior::StandardValue, &[("Exif.Photo.CustomRendered", "Photo")])
}

define_tag! {
    /// Exposure mode set when the image was shot.
    EXPOSURE_MODE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA402, Some("ExposureMode"),
        TagBehavior::StandardValue, &[("Exif.Photo.ExposureMode", "Photo")])
}

define_tag! {
    /// White balance mode set when the image was shot.
    WHITE_BALANCE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA403, Some("WhiteBalance"),
        TagBehavior::StandardValue, &[("Exif.Photo.WhiteBalance", "Photo")])
}

define_tag! {
    /// Digital zoom ratio when the image was shot.
    DIGITAL_ZOOM_RATIO = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA404,
        Some("DigitalZoomRatio"), TagBehavior::StandardValue,
        &[("Exif.Photo.DigitalZoomRatio", "Photo")])
}

define_tag! {
    /// Equivalent focal length on a 35mm film camera.
    FOCAL_LENGTH_IN_35MM_FORMAT = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA405,
        Some("FocalLengthIn35mmFormat"), TagBehavior::StandardValue,
        &[("Exif.Photo.FocalLengthIn35mmFilm", "Photo")])
}

define_tag! {
    /// Scene type that was shot.
    SCENE_CAPTURE_TYPE = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA406,
        Some("SceneCaptureType"), TagBehavior::StandardValue,
        &[("Exif.Photo.SceneCaptureType", "Photo")])
}

define_tag! {
    /// Identifier uniquely assigned to the image.
    IMAGE_UNIQUE_ID = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA420, Some("ImageUniqueID"),
        TagBehavior::StandardValue, &[("Exif.Photo.ImageUniqueID", "Photo")])
}

define_tag! {
    /// Camera owner name.
    OWNER_NAME = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA430, Some("OwnerName"),
        TagBehavior::StandardValue, &[("Exif.Photo.CameraOwnerName", "Photo")])
}

define_tag! {
    /// Camera body serial number.
    SERIAL_NUMBER = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA431, Some("SerialNumber"),
        TagBehavior::StandardValue, &[("Exif.Photo.BodySerialNumber", "Photo")])
}

define_tag! {
    /// Lens specification: focal length range and aperture range.
    LENS_INFO = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA432, Some("LensInfo"),
        TagBehavior::StandardValue, &[("Exif.Photo.LensSpecification", "Photo")])
}

define_tag! {
    /// Lens model name.
    LENS_MODEL = Tag::new(Some(&ifd0::EXIF_OFFSET), None, 0xA434, Some("LensModel"),
        TagBehavior::StandardValue, &[("Exif.Photo.LensModel", "Photo")])
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*EXPOSURE_TIME,
        &*F_NUMBER,
        &*EXPOSURE_PROGRAM,
        &*ISO,
        &*EXIF_VERSION,
        &*DATE_TIME_ORIGINAL,
        &*CREATE_DATE,
        &*OFFSET_TIME,
        &*COMPONENTS_CONFIGURATION,
        &*SHUTTER_SPEED_VALUE,
        &*APERTURE_VALUE,
        &*EXPOSURE_COMPENSATION,
        &*METERING_MODE,
        &*LIGHT_SOURCE,
        &*FLASH,
        &*FOCAL_LENGTH,
        &*MAKER_NOTE,
        &*USER_COMMENT,
        &*SUB_SEC_TIME_ORIGINAL,
        &*FLASHPIX_VERSION,
        &*COLOR_SPACE,
        &*EXIF_IMAGE_WIDTH,
        &*EXIF_IMAGE_HEIGHT,
        &*INTEROPERABILITY_IFD,
        &*SENSING_METHOD,
        &*CUSTOM_RENDERED,
        &*EXPOSURE_MODE,
        &*WHITE_BALANCE,
        &*DIGITAL_ZOOM_RATIO,
        &*FOCAL_LENGTH_IN_35MM_FORMAT,
        &*SCENE_CAPTURE_TYPE,
        &*IMAGE_UNIQUE_ID,
        &*OWNER_NAME,
        &*SERIAL_NUMBER,
        &*LENS_INFO,
        &*LENS_MODEL,
    ])
}
