// Copyright @genoise 2026

use crate::math::bitmap::Bitmap;

use exr::prelude::*;

// Write EXR image to file
pub fn write_exr_to_file(bitmap: &Bitmap, file_path: &str) {
    log::info!("Starting writing openexr image: {}.", file_path);

    let write_result = write_rgb_file(file_path,
                                      bitmap.width(), bitmap.height(), |x, y| {
        let pixel = bitmap[(x, y)];
        (pixel[0], pixel[1], pixel[2])
    });
    match write_result {
        Ok(()) => log::info!("EXR written to: {}.", file_path),
        Err(e) => log::error!("EXR written error: {}.", e.to_string()),
    }
}

// Write PNG image to file, gamma encoded, with alpha preserved
pub fn write_png_to_file(bitmap: &Bitmap, file_path: &str) {
    log::info!("Starting writing png image: {}.", file_path);

    let width = bitmap.width();
    let height = bitmap.height();
    let mut out = image::RgbaImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let pixel = bitmap[(x, y)];
            let encode = |v: f32| {
                (v.clamp(0.0, 1.0).powf(1.0 / 2.2) * 255.0).round() as u8
            };
            let alpha = (pixel[3].clamp(0.0, 1.0) * 255.0).round() as u8;
            out.put_pixel(x as u32, y as u32,
                          image::Rgba([encode(pixel[0]),
                                       encode(pixel[1]),
                                       encode(pixel[2]),
                                       alpha]));
        }
    }
    match out.save(file_path) {
        Ok(()) => log::info!("PNG written to: {}.", file_path),
        Err(e) => log::error!("PNG written error: {}.", e.to_string()),
    }
}

/* Tests for image io */
