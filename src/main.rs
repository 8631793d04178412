// Copyright @genoise 2026

#![allow(dead_code)]

pub extern crate nalgebra as na;

mod cameras;
mod core;
mod filters;
mod integrators;
mod io;
mod lights;
mod materials;
mod math;
mod renderers;
mod samplers;
mod shapes;

use self::cameras::perspective::PerspectiveCamera;
use self::core::camera::Camera;
use self::core::integrator::Integrator;
use self::core::primitive::Primitive;
use self::core::scene::Scene;
use self::core::task::{FilterKind, IntegratorKind, RenderTask, SamplerKind};
use self::io::image_utils;
use self::lights::area::AreaLight;
use self::lights::environment::EnvironmentLight;
use self::lights::point::PointLight;
use self::materials::emissive::Emissive;
use self::materials::glass::Glass;
use self::materials::lambertian::Lambertian;
use self::materials::mirror::Mirror;
use self::math::constants::Vector3f;
use self::math::spectrum::{ColorSpectrum, Spectrum};
use self::renderers::parallel::ParallelRenderer;
use self::renderers::renderer::Renderer;
use self::shapes::plane::Plane;
use self::shapes::sphere::Sphere;

use indicatif::{ProgressBar, ProgressStyle};

use std::env;
use std::sync::Arc;

// Built-in demonstration scene: a diffuse floor with a diffuse, a mirror
// and a glass sphere, lit by an emissive sphere, a point light and a dim
// environment.
fn demo_scene(width: usize, height: usize) -> Scene {
    let camera: Arc<dyn Camera> = Arc::new(PerspectiveCamera::new(
        Vector3f::new(0.0, 2.0, -7.0),
        Vector3f::new(0.0, 1.0, 0.0),
        Vector3f::new(0.0, 1.0, 0.0),
        std::f32::consts::FRAC_PI_3,
        width, height,
    ));

    let floor = Arc::new(Primitive::new(
        Arc::new(Plane::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0))),
        Some(Arc::new(Lambertian::new(ColorSpectrum::new(0.7, 0.7, 0.7)))),
    ));
    let matte = Arc::new(Primitive::new(
        Arc::new(Sphere::new(Vector3f::new(-2.2, 1.0, 0.0), 1.0)),
        Some(Arc::new(Lambertian::new(ColorSpectrum::new(0.8, 0.3, 0.25)))),
    ));
    let mirror = Arc::new(Primitive::new(
        Arc::new(Sphere::new(Vector3f::new(0.0, 1.0, 1.5), 1.0)),
        Some(Arc::new(Mirror::new(ColorSpectrum::splat(0.9)))),
    ));
    let glass = Arc::new(Primitive::new(
        Arc::new(Sphere::new(Vector3f::new(2.2, 1.0, 0.0), 1.0)),
        Some(Arc::new(Glass::new(ColorSpectrum::splat(1.0),
                                 ColorSpectrum::splat(1.0), 1.5))),
    ));

    let lamp_radiance = ColorSpectrum::splat(12.0);
    let lamp = Arc::new(Primitive::new(
        Arc::new(Sphere::new(Vector3f::new(0.0, 6.0, -2.0), 0.6)),
        Some(Arc::new(Emissive::two_sided(lamp_radiance))),
    ));

    let area = Arc::new(AreaLight::with_sample_count(lamp.clone(), lamp_radiance, 2));
    let key = Arc::new(PointLight::new(Vector3f::new(-5.0, 7.0, -4.0),
                                       ColorSpectrum::splat(60.0)));
    let env = Arc::new(EnvironmentLight::new(ColorSpectrum::new(0.05, 0.06, 0.08)));

    Scene::new(vec![floor, matte, mirror, glass, lamp],
               vec![area, key, env],
               camera)
}

fn main() {
    env::set_var("RUST_LOG", "info");
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <output.exr|output.png> [--width N] [--height N] \
                   [--spp N] [--max-depth N] [--seed N] \
                   [--sampler random|stratified|best-candidate] \
                   [--indirect-samples N] [--threads N]", args[0]);
        std::process::exit(1);
    }

    let output_path = &args[1];
    let mut width: usize = 640;
    let mut height: usize = 480;
    let mut spp: u32 = 16;
    let mut max_depth: u32 = 5;
    let mut seed: u64 = 0;
    let mut sampler = SamplerKind::Random;
    let mut indirect_samples: u32 = 0;
    let mut threads: usize = std::thread::available_parallelism()
        .map(|n| n.get()).unwrap_or(1);

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                i += 1;
                width = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(width);
            }
            "--height" => {
                i += 1;
                height = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(height);
            }
            "--spp" => {
                i += 1;
                spp = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(spp);
            }
            "--max-depth" => {
                i += 1;
                max_depth = args.get(i).and_then(|v| v.parse::<u32>().ok()).unwrap_or(max_depth);
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|v| v.parse::<u64>().ok()).unwrap_or(seed);
            }
            "--sampler" => {
                i += 1;
                sampler = match args.get(i).map(|v| v.as_str()) {
                    Some("stratified") => SamplerKind::Stratified,
                    Some("best-candidate") => SamplerKind::BestCandidate,
                    _ => SamplerKind::Random,
                };
            }
            "--indirect-samples" => {
                i += 1;
                indirect_samples = args.get(i).and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(indirect_samples);
            }
            "--threads" => {
                i += 1;
                threads = args.get(i).and_then(|v| v.parse::<usize>().ok()).unwrap_or(threads);
            }
            _ => {}
        }
        i += 1;
    }

    let mut task = RenderTask::new("demo", width, height)
        .expect("invalid film dimensions");
    task.samples_per_pixel = spp;
    task.seed = seed;
    task.max_depth = max_depth;
    task.sampler = sampler;
    task.filter = FilterKind::Mitchell;
    task.integrator = if indirect_samples > 0 {
        IntegratorKind::MonteCarlo { indirect_samples }
    } else {
        IntegratorKind::Path
    };
    if let Err(e) = task.validate() {
        eprintln!("invalid render task: {}", e);
        std::process::exit(1);
    }

    log::info!("Rendering {}x{} at {} spp, max depth {}, {} threads.",
               width, height, spp, max_depth, threads);

    let scene = demo_scene(width, height);
    let film = task.build_film().expect("validated above");
    let sampler = task.build_sampler().expect("validated above");
    let integrator: Arc<dyn Integrator> = Arc::from(
        task.build_integrator().expect("validated above"));

    let bar = ProgressBar::new(100);
    bar.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}] {bar:40} {pos:>3}%").unwrap());
    let bar_handle = bar.clone();
    let renderer = ParallelRenderer::with_progress(
        integrator, threads,
        Box::new(move |fraction| {
            bar_handle.set_position((fraction * 100.0) as u64);
        }),
    );

    renderer.render(sampler, &film, &scene);
    bar.finish();

    let image = film.get_image();
    if output_path.ends_with(".png") {
        image_utils::write_png_to_file(&image, output_path);
    } else {
        image_utils::write_exr_to_file(&image, output_path);
    }
}
