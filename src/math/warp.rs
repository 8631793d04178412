// Copyright @genoise 2026

use super::constants::{Float, Vector2f, Vector3f, INV_PI, PI, TWO_PI, INV_TWO_PI};

pub fn sample_uniform_hemisphere(u: &Vector2f) -> Vector3f {
    let z: Float = u.x;
    let r: Float = (1. - z * z).max(0.0).sqrt();
    let phi: Float = 2. * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn sample_uniform_hemisphere_pdf() -> Float {
    INV_TWO_PI
}

pub fn sample_uniform_sphere(u: &Vector2f) -> Vector3f {
    let z: Float = 1.0 - 2.0 * u.x;
    let r: Float = (1. - z * z).max(0.0).sqrt();
    let phi: Float = 2. * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

pub fn sample_uniform_sphere_pdf() -> Float {
    0.5 * INV_TWO_PI
}

pub fn sample_uniform_disk_concentric(u: &Vector2f) -> Vector2f {
    let r1: Float = 2.0 * u.x - 1.0;
    let r2: Float = 2.0 * u.y - 1.0;

    let phi: Float;
    let r: Float;

    if r1 == 0. && r2 == 0. {
        r = 0.0;
        phi = 0.0;
    } else if r1 * r1 > r2 * r2 {
        r = r1;
        phi = (PI / 4.0) * (r2 / r1);
    } else {
        r = r2;
        phi = (PI / 2.0) - (r1 / r2) * (PI / 4.0);
    }

    let (sin_phi, cos_phi) = phi.sin_cos();

    Vector2f::new(r * cos_phi, r * sin_phi)
}

pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let p = sample_uniform_disk_concentric(u);
    let z = (1. - p.x * p.x - p.y * p.y).max(0.0).sqrt();

    Vector3f::new(p.x, p.y, z)
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Uniform direction inside the cone of half-angle acos(cos_theta_max)
/// around +z.
pub fn sample_uniform_cone(u: &Vector2f, cos_theta_max: Float) -> Vector3f {
    let cos_theta = (1.0 - u.x) + u.x * cos_theta_max;
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = u.y * TWO_PI;

    Vector3f::new(phi.cos() * sin_theta, phi.sin() * sin_theta, cos_theta)
}

pub fn sample_uniform_cone_pdf(cos_theta_max: Float) -> Float {
    if cos_theta_max >= 1.0 {
        0.0
    } else {
        1.0 / (TWO_PI * (1.0 - cos_theta_max))
    }
}

/* Tests for warps */
