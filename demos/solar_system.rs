//! Solar system demo: a sun, an earth and a moon as boxes, advanced in
//! fixed 1/60 s ticks for a couple of simulated seconds.
//!
//! ```text
//! cargo run --example solar_system
//! ```

use zigmesh::math::{Point3, Rgb};
use zigmesh::operations::creation::MakeBox;
use zigmesh::orbit::OrbitSystem;
use zigmesh::scene::{Camera, FrameLoop, Light, Material, Renderer, Scene, SceneObject};
use zigmesh::Result;

/// Logs where every anchored body is drawn.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &Scene, _camera: &Camera) -> Result<()> {
        for (_, object) in scene.objects() {
            let p = object.transform.transform_point(&Point3::origin());
            tracing::debug!(color = %object.material.color, x = p.x, y = p.y, "body");
        }
        Ok(())
    }
}

fn build() -> Result<FrameLoop> {
    let mut orbits = OrbitSystem::new();
    let sun = orbits.add_fixed(Point3::origin());
    let earth = orbits.add_satellite(sun, 30.0, 8.0, 0.0)?;
    let moon = orbits.add_satellite(earth, 4.0, 2.0, 0.0)?;

    let mut scene = Scene::new();
    for (body, size, material) in [
        (sun, 20.0, Material::unlit(Rgb::from_hex(0x00ff_d700))),
        (earth, 4.0, Material::lambert(Rgb::from_hex(0x0000_00ff))),
        (moon, 2.0, Material::lambert(Rgb::from_hex(0x0080_8080))),
    ] {
        scene.add_object(
            SceneObject::new(MakeBox::new(size).execute()?, material).anchored_to(body),
        );
    }
    scene.add_light(Light::Point {
        color: Rgb::from_hex(0x00ff_ffff),
        intensity: 1.0,
        position: Point3::origin(),
        range: 1000.0,
    });
    scene.add_light(Light::Ambient {
        color: Rgb::from_hex(0x0022_2222),
    });

    let camera = Camera::looking_at(Point3::new(0.0, -70.0, 70.0), Point3::origin());
    Ok(FrameLoop::new(scene, camera, orbits))
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("solar_system=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut frame_loop = match build() {
        Ok(frame_loop) => frame_loop,
        Err(e) => {
            eprintln!("[solar_system] cannot build: {e}");
            std::process::exit(1);
        }
    };

    let mut renderer = LogRenderer;
    for _ in 0..120 {
        if let Err(e) = frame_loop.tick(1.0 / 60.0, &mut renderer) {
            eprintln!("[solar_system] frame failed: {e}");
            break;
        }
    }
    tracing::info!(frames = frame_loop.frames(), "done");
}
