//! Ziggurat demo: builds a stack from the option panel and drives a few frames
//! through a renderer that only logs what it would draw.
//!
//! ```text
//! cargo run --example ziggurat              # default controls
//! cargo run --example ziggurat -- 12 6      # 12 levels, 6 sides
//! RUST_LOG=zigmesh=trace cargo run --example ziggurat
//! ```

use zigmesh::controls::ZigguratPanel;
use zigmesh::math::{Point3, Rgb};
use zigmesh::orbit::OrbitSystem;
use zigmesh::scene::{Camera, FrameLoop, Light, Renderer, Scene};
use zigmesh::Result;

/// Logs a summary of every frame instead of drawing it.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        let triangles: usize = scene.objects().map(|(_, o)| o.mesh.triangle_count()).sum();
        let aabb = scene.bounding_box()?;
        tracing::info!(
            objects = scene.len(),
            triangles,
            height = aabb.height(),
            eye = ?camera.position,
            "frame"
        );
        Ok(())
    }
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("ziggurat=info".parse().unwrap_or_default())
        .add_directive("zigmesh=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut panel = ZigguratPanel::new();
    let mut args = std::env::args().skip(1);
    if let Some(levels) = args.next().and_then(|a| a.parse().ok()) {
        panel.controls.levels = levels;
    }
    if let Some(sides) = args.next().and_then(|a| a.parse().ok()) {
        panel.controls.sides = sides;
    }

    let stack = match panel.create() {
        Ok(stack) => stack,
        Err(e) => {
            eprintln!("[ziggurat] cannot build: {e}");
            std::process::exit(1);
        }
    };

    let mut scene = Scene::new();
    scene.add_stack(stack);
    scene.add_light(Light::Directional {
        color: Rgb::from_hex(0x00ff_ffff),
        intensity: 0.8,
        position: Point3::new(0.0, 0.0, 10.0),
    });
    scene.add_light(Light::Ambient {
        color: Rgb::from_hex(0x0022_2222),
    });

    let camera = Camera::looking_at(Point3::new(5.0, 30.0, 20.0), Point3::origin());
    let mut frame_loop = FrameLoop::new(scene, camera, OrbitSystem::new());
    let mut renderer = LogRenderer;
    for _ in 0..3 {
        if let Err(e) = frame_loop.tick(1.0 / 60.0, &mut renderer) {
            eprintln!("[ziggurat] frame failed: {e}");
            break;
        }
    }
}
