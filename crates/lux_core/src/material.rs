//! Surface materials for direct lighting.
//!
//! Every material answers one question: how much light arriving along `l`
//! leaves toward the viewer along `v`. Both `l` (incident light direction) and
//! `v` (view ray direction) point *toward* the surface.

use crate::brdf;
use crate::hittable::HitRecord;
use lux_math::{colors, Color, Vec3};

/// Below this magnitude the Cook-Torrance denominator is treated as zero.
const SPECULAR_DENOM_EPSILON: f32 = 1e-4;

/// Base reflectivity used for dielectrics.
const DIELECTRIC_F0: f32 = 0.04;

/// Trait for materials that can be shaded for a single light sample.
pub trait Shade {
    /// Reflected color for light arriving along `l` and leaving along `-v`.
    fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> Color;
}

/// Constant color, independent of geometry and lighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    pub color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Shade for SolidColor {
    fn shade(&self, _hit: &HitRecord, _l: Vec3, _v: Vec3) -> Color {
        self.color
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lambert {
    pub diffuse_color: Color,
    /// Diffuse reflectance (kd)
    pub diffuse_reflectance: f32,
}

impl Lambert {
    /// Create a new Lambert material with the given color and reflectance.
    pub fn new(diffuse_color: Color, diffuse_reflectance: f32) -> Self {
        Self {
            diffuse_color,
            diffuse_reflectance,
        }
    }
}

impl Shade for Lambert {
    fn shade(&self, _hit: &HitRecord, _l: Vec3, _v: Vec3) -> Color {
        brdf::lambert(self.diffuse_reflectance, self.diffuse_color)
    }
}

/// Lambert diffuse plus a Phong specular lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LambertPhong {
    pub diffuse_color: Color,
    /// Diffuse reflectance (kd)
    pub diffuse_reflectance: f32,
    /// Specular reflectance (ks)
    pub specular_reflectance: f32,
    pub phong_exponent: f32,
}

impl LambertPhong {
    pub fn new(diffuse_color: Color, kd: f32, ks: f32, phong_exponent: f32) -> Self {
        Self {
            diffuse_color,
            diffuse_reflectance: kd,
            specular_reflectance: ks,
            phong_exponent,
        }
    }
}

impl Shade for LambertPhong {
    fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> Color {
        // The Phong lobe wants directions pointing away from the surface
        brdf::lambert(self.diffuse_reflectance, self.diffuse_color)
            + brdf::phong(self.specular_reflectance, self.phong_exponent, -l, -v, hit.normal)
    }
}

/// Cook-Torrance microfacet material (GGX distribution, Smith geometry, Schlick Fresnel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookTorrance {
    pub albedo: Color,
    /// 0 = dielectric, anything else is shaded as a conductor
    pub metalness: f32,
    /// In (0, 1]; 1 = rough, close to 0 = smooth
    pub roughness: f32,
}

impl CookTorrance {
    pub fn new(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Self {
            albedo,
            metalness: metalness.clamp(0.0, 1.0),
            roughness: roughness.clamp(f32::EPSILON, 1.0),
        }
    }

    #[inline]
    fn is_metal(&self) -> bool {
        self.metalness != 0.0
    }
}

impl Default for CookTorrance {
    /// Smooth copper.
    fn default() -> Self {
        Self::new(Color::new(0.955, 0.637, 0.538), 1.0, 0.1)
    }
}

impl Shade for CookTorrance {
    fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> Color {
        let n = hit.normal;
        let half = (v + l).normalize_or_zero();

        let f0 = if self.is_metal() {
            self.albedo
        } else {
            Color::splat(DIELECTRIC_F0)
        };

        let f = brdf::fresnel_schlick(half, v, f0);
        let d = brdf::normal_distribution_ggx(n, half, self.roughness);
        let g = brdf::geometry_smith(n, -v, -l, self.roughness);

        let denom = 4.0 * v.dot(n) * l.dot(n);
        let specular = if denom.abs() < SPECULAR_DENOM_EPSILON {
            Color::ZERO
        } else {
            let s = f * d * g / denom;
            if s.is_finite() {
                s
            } else {
                Color::ZERO
            }
        };

        // Energy left over after specular reflection goes to the diffuse lobe
        let kd = if self.is_metal() { Color::ZERO } else { Color::ONE - f };
        let diffuse = brdf::lambert_tinted(kd, self.albedo);

        diffuse + specular
    }
}

/// The closed set of materials a scene can reference by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    SolidColor(SolidColor),
    Lambert(Lambert),
    LambertPhong(LambertPhong),
    CookTorrance(CookTorrance),
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Material::SolidColor(SolidColor::new(color))
    }

    pub fn lambert(diffuse_color: Color, kd: f32) -> Self {
        Material::Lambert(Lambert::new(diffuse_color, kd))
    }

    pub fn lambert_phong(diffuse_color: Color, kd: f32, ks: f32, phong_exponent: f32) -> Self {
        Material::LambertPhong(LambertPhong::new(diffuse_color, kd, ks, phong_exponent))
    }

    pub fn cook_torrance(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Material::CookTorrance(CookTorrance::new(albedo, metalness, roughness))
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::solid_color(colors::RED)
    }
}

impl Shade for Material {
    #[inline]
    fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> Color {
        match self {
            Material::SolidColor(m) => m.shade(hit, l, v),
            Material::Lambert(m) => m.shade(hit, l, v),
            Material::LambertPhong(m) => m.shade(hit, l, v),
            Material::CookTorrance(m) => m.shade(hit, l, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    /// Hit on a floor facing +Y.
    fn floor_hit() -> HitRecord {
        HitRecord {
            point: Vec3::ZERO,
            normal: Vec3::Y,
            t: 1.0,
            material_index: 0,
        }
    }

    /// Light coming down from above at 45 degrees, viewer mirrored.
    fn mirror_pair() -> (Vec3, Vec3) {
        let l = Vec3::new(1.0, -1.0, 0.0).normalize();
        let v = Vec3::new(-1.0, -1.0, 0.0).normalize();
        (l, v)
    }

    #[test]
    fn test_solid_color_ignores_inputs() {
        let m = Material::solid_color(colors::BLUE);
        assert_eq!(m.shade(&floor_hit(), Vec3::X, Vec3::Z), colors::BLUE);
        assert_eq!(m.shade(&floor_hit(), Vec3::ZERO, Vec3::ZERO), colors::BLUE);
    }

    #[test]
    fn test_default_material_is_red() {
        assert_eq!(Material::default(), Material::solid_color(colors::RED));
    }

    #[test]
    fn test_lambert_shade() {
        let m = Material::lambert(colors::RED, 1.0);
        let (l, v) = mirror_pair();
        let c = m.shade(&floor_hit(), l, v);

        assert!((c.x - 1.0 / PI).abs() < 1e-6);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn test_lambert_phong_adds_highlight_at_mirror() {
        let m = Material::lambert_phong(colors::BLUE, 1.0, 1.0, 60.0);
        let (l, v) = mirror_pair();

        let c = m.shade(&floor_hit(), l, v);
        let diffuse = brdf::lambert(1.0, colors::BLUE);

        // Full highlight on every channel on top of the diffuse term
        assert!((c.x - 1.0).abs() < 1e-3);
        assert!((c.z - (diffuse.z + 1.0)).abs() < 1e-3);

        // Away from the mirror direction the highlight dies off
        let off = m.shade(&floor_hit(), l, -Vec3::Y);
        assert!(off.x < 0.1);
    }

    #[test]
    fn test_cook_torrance_dielectric_diffuse_uses_one_minus_fresnel() {
        let albedo = Color::new(0.75, 0.75, 0.75);
        let ct = CookTorrance::new(albedo, 0.0, 1.0);
        let (l, v) = mirror_pair();
        let hit = floor_hit();

        let half = (v + l).normalize();
        let f = brdf::fresnel_schlick(half, v, Color::splat(0.04));
        let d = brdf::normal_distribution_ggx(hit.normal, half, 1.0);
        let g = brdf::geometry_smith(hit.normal, -v, -l, 1.0);
        let specular = f * d * g / (4.0 * v.dot(hit.normal) * l.dot(hit.normal));
        let expected = (Color::ONE - f) * albedo / PI + specular;

        let c = ct.shade(&hit, l, v);
        assert!((c - expected).length() < 1e-5);
        assert!(c.is_finite());
    }

    #[test]
    fn test_cook_torrance_metal_has_no_diffuse() {
        let albedo = Color::new(0.972, 0.960, 0.915);
        let ct = CookTorrance::new(albedo, 1.0, 0.6);
        let (l, v) = mirror_pair();
        let hit = floor_hit();

        let half = (v + l).normalize();
        let f = brdf::fresnel_schlick(half, v, albedo);
        let d = brdf::normal_distribution_ggx(hit.normal, half, 0.6);
        let g = brdf::geometry_smith(hit.normal, -v, -l, 0.6);
        let specular = f * d * g / (4.0 * v.dot(hit.normal) * l.dot(hit.normal));

        assert!((ct.shade(&hit, l, v) - specular).length() < 1e-5);
    }

    #[test]
    fn test_cook_torrance_grazing_is_finite() {
        let ct = Material::cook_torrance(Color::splat(0.75), 0.0, 0.1);
        // Light exactly in the tangent plane: the denominator vanishes
        let l = Vec3::X;
        let v = Vec3::new(-1.0, -1.0, 0.0).normalize();

        let c = ct.shade(&floor_hit(), l, v);
        assert!(c.is_finite());
        assert!(c.min_element() >= 0.0);
    }

    #[test]
    fn test_cook_torrance_default_is_copper() {
        let ct = CookTorrance::default();
        assert_eq!(ct.metalness, 1.0);
        assert_eq!(ct.albedo, Color::new(0.955, 0.637, 0.538));
    }
}
