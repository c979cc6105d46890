//! Built-in scenes, from flat-shaded spheres up to an animated OBJ mesh.

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lux_math::{colors, Camera, Color, Vec3};

use crate::material::Material;
use crate::mesh::TriangleMesh;
use crate::scene::{Scene, SceneError};
use crate::triangle::{CullMode, Triangle};

/// File name of the bunny mesh inside the resource directory.
pub const BUNNY_OBJ: &str = "lowpoly_bunny.obj";

const GRAY_BLUE: Color = Color::new(0.49, 0.57, 0.57);
const SILVER: Color = Color::new(0.972, 0.960, 0.915);
const PLASTIC_GRAY: Color = Color::new(0.75, 0.75, 0.75);

/// The scenes the viewer can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceScene {
    /// Solid-color spheres inside a box of solid-color planes, no lights
    SolidColors,
    /// Six solid-color spheres in a box with one point light
    SolidColorsLit,
    /// Lambert and Lambert-Phong spheres
    LambertTest,
    /// Six Cook-Torrance spheres, metals on the bottom row, plastics on top
    CookTorrance,
    /// A single quad mesh spinning about Y
    MeshTest,
    /// Cook-Torrance spheres plus one triangle per cull mode, all spinning
    Reference,
    /// Low-poly bunny loaded from OBJ
    Bunny,
}

impl ReferenceScene {
    pub const ALL: [ReferenceScene; 7] = [
        ReferenceScene::SolidColors,
        ReferenceScene::SolidColorsLit,
        ReferenceScene::LambertTest,
        ReferenceScene::CookTorrance,
        ReferenceScene::MeshTest,
        ReferenceScene::Reference,
        ReferenceScene::Bunny,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ReferenceScene::SolidColors => "solid-colors",
            ReferenceScene::SolidColorsLit => "solid-colors-lit",
            ReferenceScene::LambertTest => "lambert-test",
            ReferenceScene::CookTorrance => "cook-torrance",
            ReferenceScene::MeshTest => "mesh-test",
            ReferenceScene::Reference => "reference",
            ReferenceScene::Bunny => "bunny",
        }
    }

    /// Build the scene. `resources` is only read by scenes that load files.
    pub fn build(self, resources: &Path) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(self.name());

        match self {
            ReferenceScene::SolidColors => build_solid_colors(&mut scene),
            ReferenceScene::SolidColorsLit => build_solid_colors_lit(&mut scene),
            ReferenceScene::LambertTest => build_lambert_test(&mut scene),
            ReferenceScene::CookTorrance => build_cook_torrance(&mut scene),
            ReferenceScene::MeshTest => build_mesh_test(&mut scene),
            ReferenceScene::Reference => build_reference(&mut scene),
            ReferenceScene::Bunny => build_bunny(&mut scene, resources)?,
        }

        log::debug!(
            "Built scene '{}': {} planes, {} spheres, {} meshes ({} triangles), {} lights, {} materials",
            scene.name,
            scene.planes.len(),
            scene.spheres.len(),
            scene.meshes.len(),
            scene.total_triangle_count(),
            scene.lights.len(),
            scene.material_count()
        );

        Ok(scene)
    }

    /// Advance mesh animation to `total_time` seconds.
    ///
    /// Rotations are absolute, so calling this with the same time twice
    /// gives the same geometry.
    pub fn animate(self, scene: &mut Scene, total_time: f32) {
        let yaw = match self {
            ReferenceScene::MeshTest => FRAC_PI_2 * total_time,
            ReferenceScene::Reference => (total_time.cos() + 1.0) / 2.0 * PI,
            ReferenceScene::Bunny => (total_time.cos() + 1.0) * PI + PI,
            _ => return,
        };

        for mesh in &mut scene.meshes {
            mesh.rotate_y(yaw);
            mesh.update_transforms();
        }
    }
}

impl fmt::Display for ReferenceScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceScene {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceScene::ALL
            .into_iter()
            .find(|scene| scene.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SceneError::UnknownScene(s.to_string()))
    }
}

/// Five planes forming an open box around the origin, facing inward.
fn add_box(scene: &mut Scene, material: usize) {
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, material);
    scene.add_plane(Vec3::ZERO, Vec3::Y, material);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, material);
    scene.add_plane(Vec3::new(5.0, 0.0, 10.0), -Vec3::X, material);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, material);
}

/// Warm key, warm fill and a cool rim light.
fn add_three_point_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}

/// Rough, medium and smooth metals on the bottom row, plastics on the top row.
fn add_cook_torrance_spheres(scene: &mut Scene) {
    let roughness = [1.0, 0.6, 0.1];
    let xs = [-1.75, 0.0, 1.75];

    for (albedo, metalness, y) in [(SILVER, 1.0, 1.0), (PLASTIC_GRAY, 0.0, 3.0)] {
        for (x, r) in xs.into_iter().zip(roughness) {
            let material = scene.add_material(Material::cook_torrance(albedo, metalness, r));
            scene.add_sphere(Vec3::new(x, y, 0.0), 0.75, material);
        }
    }
}

fn build_solid_colors(scene: &mut Scene) {
    let red = 0;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_sphere(Vec3::new(-25.0, 0.0, 100.0), 50.0, red);
    scene.add_sphere(Vec3::new(25.0, 0.0, 100.0), 50.0, blue);

    scene.add_plane(Vec3::new(-75.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(75.0, 0.0, 0.0), -Vec3::X, green);
    scene.add_plane(Vec3::new(0.0, -75.0, 0.0), Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 75.0, 0.0), -Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 125.0), -Vec3::Z, magenta);
}

fn build_solid_colors_lit(scene: &mut Scene) {
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let red = 0;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), -Vec3::X, green);
    scene.add_plane(Vec3::ZERO, Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), -Vec3::Z, magenta);

    for (i, x) in [-1.75, 0.0, 1.75].into_iter().enumerate() {
        let (bottom, top) = if i % 2 == 0 { (red, blue) } else { (blue, red) };
        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, bottom);
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, top);
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, colors::WHITE);
}

fn build_lambert_test(scene: &mut Scene) {
    scene.camera = Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0);

    let red = scene.add_material(Material::lambert(colors::RED, 1.0));
    let blue_phong = scene.add_material(Material::lambert_phong(colors::BLUE, 1.0, 1.0, 60.0));
    let yellow = scene.add_material(Material::lambert(colors::YELLOW, 1.0));

    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::Y, yellow);

    scene.add_sphere(Vec3::new(-0.75, 1.0, 0.0), 1.0, red);
    scene.add_sphere(Vec3::new(0.75, 1.0, 0.0), 1.0, blue_phong);

    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 25.0, colors::WHITE);
    scene.add_point_light(Vec3::new(0.0, 2.5, -5.0), 25.0, colors::WHITE);
}

fn build_cook_torrance(scene: &mut Scene) {
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    add_cook_torrance_spheres(scene);
    let gray_blue = scene.add_material(Material::lambert(GRAY_BLUE, 1.0));
    add_box(scene, gray_blue);
    add_three_point_lights(scene);
}

fn build_mesh_test(scene: &mut Scene) {
    scene.camera = Camera::new(Vec3::new(0.0, 1.0, -5.0), 45.0);

    let gray_blue = scene.add_material(Material::lambert(GRAY_BLUE, 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_box(scene, gray_blue);

    let positions = vec![
        Vec3::new(-0.75, -1.0, 0.0),
        Vec3::new(-0.75, 1.0, 0.0),
        Vec3::new(0.75, 1.0, 1.0),
        Vec3::new(0.75, -1.0, 0.0),
    ];
    let mut mesh = TriangleMesh::new(positions, vec![0, 1, 2, 0, 2, 3], CullMode::NoCulling, white);
    mesh.translate(Vec3::new(0.0, 1.5, 0.0));
    mesh.update_transforms();
    scene.add_mesh(mesh);

    add_three_point_lights(scene);
}

fn build_reference(scene: &mut Scene) {
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    add_cook_torrance_spheres(scene);
    let gray_blue = scene.add_material(Material::lambert(GRAY_BLUE, 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_box(scene, gray_blue);

    // Clockwise winding, facing the camera
    let base = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    );

    for (cull_mode, x) in [
        (CullMode::BackFaceCulling, -1.75),
        (CullMode::FrontFaceCulling, 0.0),
        (CullMode::NoCulling, 1.75),
    ] {
        let id = scene.add_triangle_mesh(cull_mode, white);
        let mesh = &mut scene.meshes[id];
        mesh.append_triangle(&base);
        mesh.translate(Vec3::new(x, 4.5, 0.0));
        mesh.update_transforms();
    }

    add_three_point_lights(scene);
}

fn build_bunny(scene: &mut Scene, resources: &Path) -> Result<(), SceneError> {
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -10.0), 45.0);

    let gray_blue = scene.add_material(Material::lambert(GRAY_BLUE, 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_box(scene, gray_blue);

    let mut bunny = TriangleMesh::from_obj(resources.join(BUNNY_OBJ), CullMode::BackFaceCulling, white)?;
    bunny.rotate_y(PI);
    bunny.scale(Vec3::splat(2.0));
    bunny.update_transforms();
    scene.add_mesh(bunny);

    add_three_point_lights(scene);
    Ok(())
}
