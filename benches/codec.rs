#![allow(unused)]
extern crate exifscope;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use exifscope::{metadata::tags, prelude::*};
use std::hint::black_box;

/// Builds a representative metadata tree: a root chain of two directories with EXIF and GPS
/// child directories, string values, rationals, and a multi-pointer entry.
fn build_tree() -> ExifMetadata {
    let mut exif_directory = ImageFileDirectory::new();
    exif_directory.set(&tags::exif_ifd::EXIF_VERSION, [0x30u8, 0x32, 0x33, 0x32]);
    exif_directory.set(&tags::exif_ifd::DATE_TIME_ORIGINAL, "2024:11:03 19:45:47");
    exif_directory.set(&tags::exif_ifd::ISO, 200u16);
    exif_directory.set(
        &tags::exif_ifd::EXPOSURE_TIME,
        UnsignedRational::new(1, 250),
    );

    let mut interop_first = ImageFileDirectory::new();
    interop_first.set(&tags::interoperability_ifd::INTEROP_INDEX, "R98");
    let mut interop_second = ImageFileDirectory::new();
    interop_second.set(&tags::interoperability_ifd::INTEROP_INDEX, "THM");
    exif_directory.set(
        &tags::exif_ifd::INTEROPERABILITY_IFD,
        vec![
            ImageFileDirectoryCollection::from(vec![interop_first]),
            ImageFileDirectoryCollection::from(vec![interop_second]),
        ],
    );

    let mut gps_directory = ImageFileDirectory::new();
    gps_directory.set(&tags::gps_info::GPS_VERSION_ID, [0x02u8, 0x02, 0x00, 0x00]);
    gps_directory.set(&tags::gps_info::GPS_DATE_STAMP, "2024:11:04");
    gps_directory.set(
        &tags::gps_info::GPS_LATITUDE,
        vec![
            UnsignedRational::new(47, 1),
            UnsignedRational::new(36, 1),
            UnsignedRational::new(2822, 100),
        ],
    );

    let mut ifd0 = ImageFileDirectory::new();
    ifd0.set(&tags::ifd::MAKE, "Phaeyz");
    ifd0.set(&tags::ifd::MODEL, "Scope One");
    ifd0.set(&tags::ifd::X_RESOLUTION, UnsignedRational::new(300, 1));
    ifd0.set(&tags::ifd::Y_RESOLUTION, UnsignedRational::new(300, 1));
    ifd0.set(&tags::ifd::RESOLUTION_UNIT, 2u16);
    ifd0.set(
        &tags::ifd0::EXIF_OFFSET,
        ImageFileDirectoryCollection::from(vec![exif_directory]),
    );
    ifd0.set(
        &tags::ifd0::GPS_INFO,
        ImageFileDirectoryCollection::from(vec![gps_directory]),
    );

    let mut ifd1 = ImageFileDirectory::new();
    ifd1.set(&tags::ifd::COMPRESSION, 6u16);
    ifd1.set(&tags::ifd::ORIENTATION, 1u16);

    let mut exif = ExifMetadata::new();
    exif.push(ifd0);
    exif.push(ifd1);
    exif
}

fn bench_serialize(c: &mut Criterion) {
    let exif = build_tree();
    let size = exif.serialize().expect("tree serializes").len();

    let mut group = c.benchmark_group("serialize");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("tree", |b| {
        b.iter(|| {
            let bytes = black_box(&exif).serialize().unwrap();
            black_box(bytes)
        });
    });
    group.finish();
}

fn bench_deserialize(c: &mut Criterion) {
    let bytes = build_tree().serialize().expect("tree serializes");

    let mut group = c.benchmark_group("deserialize");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("tree", |b| {
        b.iter(|| {
            let exif = ExifMetadata::deserialize(black_box(&bytes), None).unwrap();
            black_box(exif)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_serialize, bench_deserialize);
criterion_main!(benches);
