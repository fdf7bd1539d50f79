//! Tags which may appear in the GPS child image file directory.

use crate::metadata::{
    provider::TagProvider,
    tag::{Tag, TagBehavior},
    tags::ifd0,
};

define_tag! {
    /// GPS tag version, as four bytes.
    GPS_VERSION_ID = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0000, Some("GPSVersionID"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSVersionID", "GPSInfo")])
}

define_tag! {
    /// Whether the latitude is north or south, as `N` or `S`.
    GPS_LATITUDE_REF = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0001, Some("GPSLatitudeRef"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSLatitudeRef", "GPSInfo")])
}

define_tag! {
    /// Latitude as three rationals: degrees, minutes, and seconds.
    GPS_LATITUDE = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0002, Some("GPSLatitude"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSLatitude", "GPSInfo")])
}

define_tag! {
    /// Whether the longitude is east or west, as `E` or `W`.
    GPS_LONGITUDE_REF = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0003, Some("GPSLongitudeRef"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSLongitudeRef", "GPSInfo")])
}

define_tag! {
    /// Longitude as three rationals: degrees, minutes, and seconds.
    GPS_LONGITUDE = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0004, Some("GPSLongitude"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSLongitude", "GPSInfo")])
}

define_tag! {
    /// Whether the altitude is above or below sea level.
    GPS_ALTITUDE_REF = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0005, Some("GPSAltitudeRef"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSAltitudeRef", "GPSInfo")])
}

define_tag! {
    /// Altitude in meters relative to the reference.
    GPS_ALTITUDE = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0006, Some("GPSAltitude"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSAltitude", "GPSInfo")])
}

define_tag! {
    /// UTC time as three rationals: hours, minutes, and seconds.
    GPS_TIME_STAMP = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0007, Some("GPSTimeStamp"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSTimeStamp", "GPSInfo")])
}

define_tag! {
    /// Satellites used for measurement.
    GPS_SATELLITES = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0008, Some("GPSSatellites"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSSatellites", "GPSInfo")])
}

define_tag! {
    /// Status of the GPS receiver when the image was recorded.
    GPS_STATUS = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0009, Some("GPSStatus"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSStatus", "GPSInfo")])
}

define_tag! {
    /// GPS measurement mode, 2D or 3D.
    GPS_MEASURE_MODE = Tag::new(Some(&ifd0::GPS_INFO), None, 0x000A, Some("GPSMeasureMode"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSMeasureMode", "GPSInfo")])
}

define_tag! {
    /// Data degree of precision.
    GPS_DOP = Tag::new(Some(&ifd0::GPS_INFO), None, 0x000B, Some("GPSDOP"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSDOP", "GPSInfo")])
}

define_tag! {
    /// Unit of the receiver movement speed.
    GPS_SPEED_REF = Tag::new(Some(&ifd0::GPS_INFO), None, 0x000C, Some("GPSSpeedRef"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSSpeedRef", "GPSInfo")])
}

define_tag! {
    /// Movement speed of the GPS receiver.
    GPS_SPEED = Tag::new(Some(&ifd0::GPS_INFO), None, 0x000D, Some("GPSSpeed"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSSpeed", "GPSInfo")])
}

define_tag! {
    /// Reference for the direction of movement.
    GPS_TRACK_REF = Tag::new(Some(&ifd0::GPS_INFO), None, 0x000E, Some("GPSTrackRef"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSTrackRef", "GPSInfo")])
}

define_tag! {
    /// Direction of movement of the GPS receiver.
    GPS_TRACK = Tag::new(Some(&ifd0::GPS_INFO), None, 0x000F, Some("GPSTrack"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSTrack", "GPSInfo")])
}

define_tag! {
    /// Reference for the image direction.
    GPS_IMG_DIRECTION_REF = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0010,
        Some("GPSImgDirectionRef"), TagBehavior::StandardValue,
        &[("Exif.GPSInfo.GPSImgDirectionRef", "GPSInfo")])
}

define_tag! {
    /// Direction of the image when it was captured.
    GPS_IMG_DIRECTION = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0011, Some("GPSImgDirection"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSImgDirection", "GPSInfo")])
}

define_tag! {
    /// Geodetic survey data used by the GPS receiver, such as `WGS-84`.
    GPS_MAP_DATUM = Tag::new(Some(&ifd0::GPS_INFO), None, 0x0012, Some("GPSMapDatum"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSMapDatum", "GPSInfo")])
}

define_tag! {
    /// Name of the method used for location finding.
    GPS_PROCESSING_METHOD = Tag::new(Some(&ifd0::GPS_INFO), None, 0x001B,
        Some("GPSProcessingMethod"), TagBehavior::StandardValue,
        &[("Exif.GPSInfo.GPSProcessingMethod", "GPSInfo")])
}

define_tag! {
    /// Name of the GPS area.
    GPS_AREA_INFORMATION = Tag::new(Some(&ifd0::GPS_INFO), None, 0x001C,
        Some("GPSAreaInformation"), TagBehavior::StandardValue,
        &[("Exif.GPSInfo.GPSAreaInformation", "GPSInfo")])
}

define_tag! {
    /// UTC date as `YYYY:MM:DD`.
    GPS_DATE_STAMP = Tag::new(Some(&ifd0::GPS_INFO), None, 0x001D, Some("GPSDateStamp"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSDateStamp", "GPSInfo")])
}

define_tag! {
    /// Whether differential correction was applied.
    GPS_DIFFERENTIAL = Tag::new(Some(&ifd0::GPS_INFO), None, 0x001E, Some("GPSDifferential"),
        TagBehavior::StandardValue, &[("Exif.GPSInfo.GPSDifferential", "GPSInfo")])
}

define_tag! {
    /// Horizontal positioning error in meters.
    GPS_H_POSITIONING_ERROR = Tag::new(Some(&ifd0::GPS_INFO), None, 0x001F,
        Some("GPSHPositioningError"), TagBehavior::StandardValue,
        &[("Exif.GPSInfo.GPSHPositioningError", "GPSInfo")])
}

pub(crate) fn register(provider: &TagProvider) -> crate::Result<()> {
    provider.add_all([
        &*GPS_VERSION_ID,
        &*GPS_LATITUDE_REF,
        &*GPS_LATITUDE,
        &*GPS_LONGITUDE_REF,
        &*GPS_LONGITUDE,
        &*GPS_ALTITUDE_REF,
        &*GPS_ALTITUDE,
        &*GPS_TIME_STAMP,
        &*GPS_SATELLITES,
        &*GPS_STATUS,
        &*GPS_MEASURE_MODE,
        &*GPS_DOP,
        &*GPS_SPEED_REF,
        &*GPS_SPEED,
        &*GPS_TRACK_REF,
        &*GPS_TRACK,
        &*GPS_IMG_DIRECTION_REF,
        &*GPS_IMG_DIRECTION,
        &*GPS_MAP_DATUM,
        &*GPS_PROCESSING_METHOD,
        &*GPS_AREA_INFORMATION,
        &*GPS_DATE_STAMP,
        &*GPS_DIFFERENTIAL,
        &*GPS_H_POSITIONING_ERROR,
    ])
}
