use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{ImageFormat, Rgb, RgbImage};
use imgduck::processing::compress_to_temp;
use imgduck::scan::{collect_subdirs, list_images};
use imgduck::utils::{is_image_file, saving_percent};
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn create_listing_fixture(file_count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for i in 0..file_count {
        let name = match i % 4 {
            0 => format!("photo_{:04}.jpg", i),
            1 => format!("PHOTO_{:04}.PNG", i),
            2 => format!("scan_{:04}.tiff", i),
            _ => format!("notes_{:04}.txt", i),
        };
        File::create(temp_dir.path().join(name)).unwrap();
    }

    temp_dir
}

fn create_subdir_fixture(album_count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for i in 0..album_count {
        let album = temp_dir.path().join(format!("album_{:03}", i));
        std::fs::create_dir_all(album.join("raw")).unwrap();
    }

    temp_dir
}

fn bench_extension_checks(c: &mut Criterion) {
    let paths = [
        Path::new("holiday/IMG_2043.JPG"),
        Path::new("holiday/IMG_2044.webp"),
        Path::new("holiday/notes.txt"),
        Path::new("holiday/archive.tar.gz"),
    ];

    c.bench_function("is_image_file", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(is_image_file(black_box(path)));
            }
        })
    });
}

fn bench_saving_percent(c: &mut Criterion) {
    c.bench_function("saving_percent", |b| {
        b.iter(|| saving_percent(black_box(1_843_201), black_box(412_887)))
    });
}

fn bench_list_images(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_images");

    for file_count in [100usize, 500, 1000].iter() {
        let temp_dir = create_listing_fixture(*file_count);

        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            &temp_dir,
            |b, dir| b.iter(|| list_images(black_box(dir.path()))),
        );
    }

    group.finish();
}

fn bench_collect_subdirs(c: &mut Criterion) {
    let temp_dir = create_subdir_fixture(100);

    c.bench_function("collect_subdirs", |b| {
        b.iter(|| collect_subdirs(black_box(temp_dir.path())))
    });
}

fn bench_compress_probe(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let photo = temp_dir.path().join("photo.bmp");
    let img = RgbImage::from_pixel(128, 128, Rgb([200, 30, 30]));
    img.save_with_format(&photo, ImageFormat::Bmp).unwrap();

    c.bench_function("compress_probe", |b| {
        b.iter(|| compress_to_temp(black_box(&photo), black_box(80)))
    });
}

criterion_group!(
    benches,
    bench_extension_checks,
    bench_saving_percent,
    bench_list_images,
    bench_collect_subdirs,
    bench_compress_probe
);
criterion_main!(benches);
