//! Editing decoded trees: lookups, references, imports, and custom tag providers.

use exifscope::{metadata::tags, prelude::*};

const CANNOT_ROUND_TRIP: &[u8] = &[
    0x4D, 0x4D, // Byte order
    0x00, 0x2A, // Magic number
    0x00, 0x00, 0x00, 0x08, // IFD0 offset
    0x00, 0x02, // Entry count
    0x12, 0x34, // Tag (CannotRoundTrip1)
    0x00, 0x04, // Type (UInt32)
    0x00, 0x00, 0x00, 0x01, // Count
    0x00, 0x00, 0x00, 0x11, // Value
    0x12, 0x35, // Tag (CannotRoundTrip2)
    0x00, 0x04, // Type (UInt32)
    0x00, 0x00, 0x00, 0x01, // Count
    0x00, 0x00, 0x00, 0x22, // Value
    0x00, 0x00, 0x00, 0x00, // No more IFDs
];

fn two_level_tree() -> Result<ExifMetadata> {
    let mut exif_directory = ImageFileDirectory::new();
    exif_directory.set(&tags::exif_ifd::DATE_TIME_ORIGINAL, "2024:11:03 19:45:47");
    exif_directory.set(&tags::exif_ifd::ISO, 200u16);

    let mut ifd0 = ImageFileDirectory::new();
    ifd0.set(&tags::ifd::MAKE, "Phaeyz");
    ifd0.set(
        &tags::ifd0::EXIF_OFFSET,
        ImageFileDirectoryCollection::from(vec![exif_directory]),
    );

    let mut exif = ExifMetadata::new();
    exif.push(ifd0);
    Ok(exif)
}

#[test]
fn cannot_round_trip_entries_are_reported() -> Result<()> {
    let provider = TagProvider::built_in().to_mutable();
    let first = Tag::cannot_round_trip(None, None, 0x1234, "CannotRoundTrip1")?;
    let second = Tag::cannot_round_trip(None, None, 0x1235, "CannotRoundTrip2")?;
    provider.add(&first)?;
    provider.add(&second)?;

    let (exif, references) =
        ExifMetadata::deserialize_with_report(CANNOT_ROUND_TRIP, Some(&provider))?;

    assert_eq!(exif.len(), 1);
    assert_eq!(references.len(), 2);

    let entry = exif.entry_at(&references[0]).unwrap();
    assert_eq!(entry.tag().name(), "CannotRoundTrip1");
    assert_eq!(entry.value(), &EntryValue::UInt32(0x11));

    let entry = exif.entry_at(&references[1]).unwrap();
    assert_eq!(entry.tag().name(), "CannotRoundTrip2");
    assert_eq!(entry.value(), &EntryValue::UInt32(0x22));
    Ok(())
}

#[test]
fn cannot_round_trip_entries_can_be_removed_before_encoding() -> Result<()> {
    let provider = TagProvider::built_in().to_mutable();
    let tag = Tag::cannot_round_trip(None, None, 0x1234, "CannotRoundTrip1")?;
    provider.add(&tag)?;

    let (mut exif, references) =
        ExifMetadata::deserialize_with_report(CANNOT_ROUND_TRIP, Some(&provider))?;
    for reference in &references {
        exif[reference.directory].remove(&reference.tag);
    }

    let bytes = exif.serialize()?;
    let decoded = ExifMetadata::deserialize(&bytes, Some(&provider))?;
    assert!(decoded[0].get(&tag).is_none());
    Ok(())
}

#[test]
fn default_catalog_decodes_unknown_tags_as_standard_values() -> Result<()> {
    // Without the custom provider the same entries are plain anonymous values.
    let (exif, references) = ExifMetadata::deserialize_with_report(CANNOT_ROUND_TRIP, None)?;
    assert!(references.is_empty());
    let unnamed = Tag::unnamed(Tag::root(), 0, 0x1234)?;
    let entry = exif[0].get(&unnamed).unwrap();
    assert_eq!(entry.tag().name(), "Tag 0x1234");
    assert_eq!(entry.value(), &EntryValue::UInt32(0x11));
    Ok(())
}

#[test]
fn find_entry_descends_pointer_entries() -> Result<()> {
    let exif = two_level_tree()?;

    let entry = exif
        .find_entry(&[
            tags::ifd0::EXIF_OFFSET.clone(),
            tags::exif_ifd::DATE_TIME_ORIGINAL.clone(),
        ])?
        .unwrap();
    assert_eq!(
        entry.value(),
        &EntryValue::Ascii("2024:11:03 19:45:47".to_string())
    );

    let entry = exif.find_entry(&[tags::ifd::MAKE.clone()])?.unwrap();
    assert_eq!(entry.value(), &EntryValue::Ascii("Phaeyz".to_string()));

    assert!(exif
        .find_entry(&[
            tags::ifd0::GPS_INFO.clone(),
            tags::gps_info::GPS_DATE_STAMP.clone(),
        ])?
        .is_none());
    Ok(())
}

#[test]
fn find_entry_rejects_value_entry_mid_path() -> Result<()> {
    let exif = two_level_tree()?;
    let result = exif.find_entry(&[
        tags::ifd::MAKE.clone(),
        tags::exif_ifd::DATE_TIME_ORIGINAL.clone(),
    ]);
    assert!(matches!(result, Err(Error::InvalidValue(_))));
    Ok(())
}

#[test]
fn import_merges_into_existing_tree() -> Result<()> {
    let mut target = two_level_tree()?;

    let mut exif_directory = ImageFileDirectory::new();
    exif_directory.set(&tags::exif_ifd::ISO, 400u16);
    let mut ifd0 = ImageFileDirectory::new();
    ifd0.set(&tags::ifd::MODEL, "Scope One");
    ifd0.set(
        &tags::ifd0::EXIF_OFFSET,
        ImageFileDirectoryCollection::from(vec![exif_directory]),
    );
    let mut source = ExifMetadata::new();
    source.push(ifd0);

    target.import(&source);

    // Imported values overwrite, everything else is untouched.
    assert_eq!(
        target.find_entry(&[tags::ifd::MAKE.clone()])?.unwrap().value(),
        &EntryValue::Ascii("Phaeyz".to_string())
    );
    assert_eq!(
        target.find_entry(&[tags::ifd::MODEL.clone()])?.unwrap().value(),
        &EntryValue::Ascii("Scope One".to_string())
    );
    assert_eq!(
        target
            .find_entry(&[
                tags::ifd0::EXIF_OFFSET.clone(),
                tags::exif_ifd::ISO.clone(),
            ])?
            .unwrap()
            .value(),
        &EntryValue::UInt16(400)
    );
    assert_eq!(
        target
            .find_entry(&[
                tags::ifd0::EXIF_OFFSET.clone(),
                tags::exif_ifd::DATE_TIME_ORIGINAL.clone(),
            ])?
            .unwrap()
            .value(),
        &EntryValue::Ascii("2024:11:03 19:45:47".to_string())
    );
    Ok(())
}

#[test]
fn edit_and_reserialize() -> Result<()> {
    let mut exif = two_level_tree()?;
    exif[0].set(&tags::ifd::ARTIST, "Someone Else");

    let bytes = exif.serialize()?;
    let decoded = ExifMetadata::deserialize(&bytes, None)?;
    assert_eq!(
        decoded
            .find_entry(&[tags::ifd::ARTIST.clone()])?
            .unwrap()
            .value(),
        &EntryValue::Ascii("Someone Else".to_string())
    );
    assert_eq!(decoded.directories(), exif.directories());
    Ok(())
}

#[test]
fn from_file_decodes_mapped_buffer() -> Result<()> {
    let exif = two_level_tree()?;
    let bytes = exif.serialize()?;

    let path = std::env::temp_dir().join("exifscope-from-file-test.exif");
    std::fs::write(&path, &bytes)?;
    let decoded = ExifMetadata::from_file(&path, None);
    std::fs::remove_file(&path)?;

    assert_eq!(decoded?.directories(), exif.directories());
    Ok(())
}

#[test]
fn provider_override_wins_over_catalog() -> Result<()> {
    // Re-registering a wire value makes the newest registration win score ties.
    let provider = TagProvider::built_in().to_mutable();
    let renamed = Tag::new(
        Some(Tag::root()),
        None,
        0x010F,
        Some("Manufacturer"),
        TagBehavior::StandardValue,
        &[],
    )?;
    provider.add_or_update(&renamed)?;

    let exif = two_level_tree()?;
    let bytes = exif.serialize()?;
    let decoded = ExifMetadata::deserialize(&bytes, Some(&provider))?;
    let entry = decoded[0].get(&renamed).unwrap();
    assert_eq!(entry.tag().name(), "Manufacturer");
    Ok(())
}
