//! BRDF building blocks for direct lighting.
//!
//! Microfacet terms follow the UE4 conventions (roughness squared before use).
//! Every clamped dot product uses a 0.01 floor instead of 0 so grazing angles
//! don't divide by zero.

use lux_math::{Color, Vec3};
use std::f32::consts::PI;

/// Floor applied to clamped dot products.
pub const DOT_FLOOR: f32 = 0.01;

/// Lambert diffuse: `kd * cd / pi`.
#[inline]
pub fn lambert(kd: f32, cd: Color) -> Color {
    kd * cd / PI
}

/// Lambert diffuse with a per-channel reflectance (tinted `kd`).
#[inline]
pub fn lambert_tinted(kd: Color, cd: Color) -> Color {
    kd * cd / PI
}

/// Phong specular lobe.
///
/// - `l`: light direction, pointing away from the surface
/// - `v`: view direction, pointing away from the surface
/// - `n`: surface normal
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let reflected = 2.0 * n.dot(l).max(DOT_FLOOR) * n - l;
    let cos_alpha = reflected.dot(v).max(0.0);
    Color::splat(ks * cos_alpha.powf(exponent))
}

/// Schlick's Fresnel approximation, per RGB channel.
///
/// `f0` is the base reflectivity at normal incidence.
#[inline]
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let one_minus_cos = 1.0 - h.dot(v);
    f0 + (Color::ONE - f0) * one_minus_cos.powi(5)
}

/// Trowbridge-Reitz GGX normal distribution.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let a2 = a * a;
    let n_dot_h = n.dot(h);
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Schlick-GGX geometry term for a single direction (direct lighting `k`).
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f32) -> f32 {
    let a = roughness * roughness;
    let k = (a + 1.0) * (a + 1.0) / 8.0;
    let n_dot_v = n.dot(v).max(DOT_FLOOR);
    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Smith geometry term: shadowing along `v` times masking along `l`.
#[inline]
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}
