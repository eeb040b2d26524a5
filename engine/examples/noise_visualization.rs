use engine::{Fbm, NoiseGenerator, Perlin2D, Perlin3D};
use image::{GrayImage, Luma};
use std::path::Path;

fn save_grayscale(data: &[Vec<f64>], filename: &str) {
    let size = data.len();
    let mut img = GrayImage::new(size as u32, size as u32);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for row in data {
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }

    for (y, row) in data.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn sample2d<N: NoiseGenerator>(generator: &N, size: usize, scale: f64) -> Vec<Vec<f64>> {
    (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    generator.get2(
                        x as f64 * scale / size as f64,
                        y as f64 * scale / size as f64,
                    )
                })
                .collect()
        })
        .collect()
}

fn main() {
    let size = 256;

    // Single-octave 2D gradient noise
    let perlin2 = Perlin2D::new(42);
    save_grayscale(&sample2d(&perlin2, size, 8.0), "perlin2d.png");

    // Multi-octave stack over the same tables
    let fbm = Fbm::new(Perlin2D::new(42), 5, 0.5, 2.0);
    save_grayscale(&sample2d(&fbm, size, 8.0), "perlin2d_fbm.png");

    // Mid-cube slice of 3D noise
    let perlin3 = Perlin3D::new(42);
    let slice: Vec<Vec<f64>> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| {
                    perlin3.sample(
                        x as f64 * 8.0 / size as f64,
                        y as f64 * 8.0 / size as f64,
                        4.0,
                    )
                })
                .collect()
        })
        .collect();
    save_grayscale(&slice, "perlin3d_slice.png");
}
