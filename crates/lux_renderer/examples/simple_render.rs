//! Simple direct lighting example.
//!
//! Builds a small scene in code, renders it once per lighting mode and saves
//! each frame in PPM format.

use lux_core::{CullMode, Material, Scene, Triangle, TriangleMesh};
use lux_math::{colors, Camera, Color, Vec3};
use lux_renderer::{render, FrameBuffer, LightingMode, RenderSettings};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> std::io::Result<()> {
    println!("Lux Ray Tracer - Simple Example");
    println!("===============================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let mut settings = RenderSettings::default();
    let mut frame = FrameBuffer::new(640, 480);

    for _ in LightingMode::ALL {
        settings.cycle_lighting_mode();

        let start = std::time::Instant::now();
        render(&scene, &settings, &mut frame);
        println!("Rendered {} in {:?}", settings.lighting_mode, start.elapsed());

        let filename = format!("output_{}.ppm", settings.lighting_mode);
        save_ppm(&frame, &filename)?;
        println!("Saved to {}", filename);
    }

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple");
    scene.camera = Camera::new(Vec3::new(0.0, 1.5, -6.0), 45.0);

    let floor = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    let red = scene.add_material(Material::lambert(colors::RED, 1.0));
    let blue = scene.add_material(Material::lambert_phong(colors::BLUE, 1.0, 1.0, 60.0));
    let gold = scene.add_material(Material::cook_torrance(Color::new(1.0, 0.782, 0.344), 1.0, 0.3));

    scene.add_plane(Vec3::ZERO, Vec3::Y, floor);
    scene.add_sphere(Vec3::new(-1.5, 0.75, 0.0), 0.75, red);
    scene.add_sphere(Vec3::new(0.0, 0.75, 0.5), 0.75, gold);
    scene.add_sphere(Vec3::new(1.5, 0.75, 0.0), 0.75, blue);

    // A single triangle floating above the spheres
    let mut mesh = TriangleMesh::empty(CullMode::NoCulling, floor);
    mesh.append_triangle(&Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    ));
    mesh.translate(Vec3::new(0.0, 2.0, 1.5));
    mesh.rotate_y(0.3);
    mesh.update_transforms();
    scene.add_mesh(mesh);

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_directional_light(Vec3::new(1.0, -1.0, 0.5), 0.5, colors::WHITE);

    scene
}

fn save_ppm(frame: &FrameBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", frame.width(), frame.height())?;
    writeln!(writer, "255")?;

    for y in 0..frame.height() {
        for x in 0..frame.width() {
            let [r, g, b] = frame.get_rgb(x, y).unwrap_or_default();
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
