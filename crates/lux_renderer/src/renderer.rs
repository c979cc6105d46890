//! Direct lighting renderer.
//!
//! Each pixel casts one primary ray through the pixel center, finds the
//! closest hit and sums the contribution of every light that passes the
//! shadow test. There are no secondary bounces.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use lux_core::{HitRecord, Scene, Shade};
use lux_math::{Camera, Color, ColorExt, Mat4, Ray, Vec3};
use rayon::prelude::*;
use thiserror::Error;

use crate::frame_buffer::FrameBuffer;
use crate::settings::{LightingMode, RenderSettings};

/// Errors that can occur while configuring or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown lighting mode: {0}")]
    UnknownLightingMode(String),

    #[error("Render cancelled")]
    Cancelled,
}

/// Per-frame camera data, computed once and shared by every pixel.
#[derive(Debug, Clone, Copy)]
pub struct FrameView {
    camera_to_world: Mat4,
    origin: Vec3,
    fov_scale: f32,
    aspect_ratio: f32,
    width: u32,
    height: u32,
}

impl FrameView {
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        Self {
            camera_to_world: camera.camera_to_world(),
            origin: camera.origin,
            fov_scale: camera.fov_scale(),
            aspect_ratio: width as f32 / height.max(1) as f32,
            width,
            height,
        }
    }

    /// Primary ray through the center of pixel (px, py). Row 0 is the top.
    #[inline]
    pub fn primary_ray(&self, px: u32, py: u32) -> Ray {
        let x = (2.0 * (px as f32 + 0.5) / self.width as f32 - 1.0) * self.aspect_ratio * self.fov_scale;
        let y = (1.0 - 2.0 * (py as f32 + 0.5) / self.height as f32) * self.fov_scale;

        let direction = self.camera_to_world.transform_vector3(Vec3::new(x, y, 1.0));
        Ray::new(self.origin, direction)
    }
}

/// Sum the contribution of every light at `hit`, seen along `view_dir`.
///
/// The result is unclamped.
pub fn shade_hit(scene: &Scene, settings: &RenderSettings, hit: &HitRecord, view_dir: Vec3) -> Color {
    // Dangling material indices shade with the default material
    let material = scene.material(hit.material_index).copied().unwrap_or_default();
    let origin = hit.point + hit.normal * settings.shadow_epsilon;

    let mut color = Color::ZERO;
    for light in &scene.lights {
        let to_light = light.direction_to_light(origin);
        let shadow_ray = Ray::with_bounds(origin, to_light, settings.shadow_epsilon, to_light.length());

        if settings.shadows_enabled && scene.any_hit(&shadow_ray) {
            continue;
        }

        let light_dir = shadow_ray.direction;
        let cos_theta = hit.normal.dot(light_dir);
        if cos_theta <= 0.0 {
            continue;
        }

        color += match settings.lighting_mode {
            LightingMode::ObservedArea => Color::splat(cos_theta),
            LightingMode::Radiance => light.radiance(origin),
            LightingMode::Brdf => material.shade(hit, -light_dir, view_dir),
            LightingMode::Combined => light.radiance(origin) * material.shade(hit, -light_dir, view_dir) * cos_theta,
        };
    }

    color
}

/// Unclamped color seen along `ray`.
pub fn trace_ray(scene: &Scene, settings: &RenderSettings, ray: &Ray) -> Color {
    match scene.closest_hit(ray) {
        Some(hit) => shade_hit(scene, settings, &hit, ray.direction),
        None => settings.background,
    }
}

/// Render a single pixel to packed `0x00RRGGBB`.
#[inline]
pub fn render_pixel(scene: &Scene, settings: &RenderSettings, view: &FrameView, px: u32, py: u32) -> u32 {
    let ray = view.primary_ray(px, py);
    trace_ray(scene, settings, &ray).max_to_one().to_packed_rgb()
}

/// Render the scene into `frame`, in parallel over rows.
///
/// The resolution is taken from the frame buffer.
pub fn render(scene: &Scene, settings: &RenderSettings, frame: &mut FrameBuffer) {
    render_rows(scene, settings, frame, None);
}

/// Like [`render`], but stops handing out pixels once `cancel` is set.
///
/// A cancelled frame is left partially written.
pub fn render_cancellable(
    scene: &Scene,
    settings: &RenderSettings,
    frame: &mut FrameBuffer,
    cancel: &AtomicBool,
) -> Result<(), RenderError> {
    if render_rows(scene, settings, frame, Some(cancel)) {
        Ok(())
    } else {
        Err(RenderError::Cancelled)
    }
}

/// Returns false if any pixel was skipped because the frame was cancelled.
fn render_rows(
    scene: &Scene,
    settings: &RenderSettings,
    frame: &mut FrameBuffer,
    cancel: Option<&AtomicBool>,
) -> bool {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return true;
    }

    let view = FrameView::new(&scene.camera, width, height);
    let start = Instant::now();

    let completed = frame
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .map(|(py, row)| render_row(scene, settings, &view, py as u32, row, cancel))
        .reduce(|| true, |a, b| a && b);

    if !completed {
        log::debug!("Render of '{}' cancelled after {:.2?}", scene.name, start.elapsed());
        return false;
    }

    log::info!(
        "Rendered '{}' at {}x{} ({}, shadows {}) in {:.2?}",
        scene.name,
        width,
        height,
        settings.lighting_mode,
        if settings.shadows_enabled { "on" } else { "off" },
        start.elapsed()
    );
    true
}

/// Render one row of pixels. Returns false if it stopped early on `cancel`.
fn render_row(
    scene: &Scene,
    settings: &RenderSettings,
    view: &FrameView,
    py: u32,
    row: &mut [u32],
    cancel: Option<&AtomicBool>,
) -> bool {
    for (px, pixel) in row.iter_mut().enumerate() {
        if is_cancelled(cancel) {
            return false;
        }
        *pixel = render_pixel(scene, settings, view, px as u32, py);
    }
    true
}

#[inline]
fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}
