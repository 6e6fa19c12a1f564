#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{ImageBuffer, Rgb, RgbImage};
use rgbseam::{EnergyField, PixelGrid, SeamCarver, SeamFinder};

fn picture() -> RgbImage {
    ImageBuffer::from_fn(200, 150, |x, y| {
        Rgb([(x ^ y) as u8, (x * 3) as u8, (y * 5) as u8])
    })
}

fn full_energy(c: &mut Criterion) {
    let grid = PixelGrid::from_image(&picture()).unwrap();
    c.bench_function("energy 200x150", move |b| {
        b.iter(|| EnergyField::compute(&grid))
    });
}

fn find_seams(c: &mut Criterion) {
    let carver = SeamCarver::new(&picture()).unwrap();
    c.bench_function("vertical seam 200x150", move |b| {
        b.iter(|| carver.find_vertical_seam())
    });
}

fn carve_columns(c: &mut Criterion) {
    let image = picture();
    c.bench_function("carve 20 columns 200x150", move |b| {
        b.iter(|| {
            let mut carver = SeamCarver::new(&image).unwrap();
            carver.carve(180, 150).unwrap();
            carver
        })
    });
}

criterion_group!(benches, full_energy, find_seams, carve_columns);
criterion_main!(benches);
