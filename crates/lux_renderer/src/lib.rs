//! Lux Renderer - direct lighting CPU ray tracing.
//!
//! One primary ray per pixel, closest-hit lookup, a shadow ray per light and
//! a choice of what each light contributes ([`LightingMode`]). Pixels are
//! rendered in parallel over rows with rayon.
//!
//! # Example
//!
//! ```ignore
//! use lux_core::ReferenceScene;
//! use lux_renderer::{render, FrameBuffer, RenderSettings};
//!
//! let scene = ReferenceScene::Reference.build("resources".as_ref())?;
//! let mut frame = FrameBuffer::new(640, 480);
//! render(&scene, &RenderSettings::default(), &mut frame);
//! ```

mod frame_buffer;
mod renderer;
mod settings;

pub use frame_buffer::{unpack_rgb, FrameBuffer};
pub use renderer::{render, render_cancellable, render_pixel, shade_hit, trace_ray, FrameView, RenderError};
pub use settings::{LightingMode, RenderSettings, DEFAULT_SHADOW_EPSILON};
