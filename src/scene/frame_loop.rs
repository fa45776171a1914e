use crate::error::Result;
use crate::orbit::{BodyId, OrbitSystem};

use super::{Camera, ObjectId, Scene};

/// Something that turns a scene into pixels.
pub trait Renderer {
    /// Draws one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be produced.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;
}

/// Per-tick driver: advances orbits, moves anchored objects, renders.
///
/// The loop itself belongs to the caller, which invokes [`FrameLoop::tick`]
/// once per display refresh with the time elapsed since the previous call.
#[derive(Debug)]
pub struct FrameLoop {
    /// Objects and lights.
    pub scene: Scene,
    /// Viewpoint.
    pub camera: Camera,
    /// Bodies that anchored objects follow.
    pub orbits: OrbitSystem,
    frames: u64,
}

impl FrameLoop {
    /// Creates a new frame loop.
    #[must_use]
    pub fn new(scene: Scene, camera: Camera, orbits: OrbitSystem) -> Self {
        Self {
            scene,
            camera,
            orbits,
            frames: 0,
        }
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advances the simulation by `delta` seconds and renders one frame.
    ///
    /// Objects anchored to an orbit body keep their rotation and scale and
    /// take the body's position as their translation.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` is invalid, an anchor refers to an
    /// unknown body, or the renderer fails. On error no frame is counted.
    /// Invalid deltas and unknown anchors are caught before the orbits or
    /// any object move.
    pub fn tick(&mut self, delta: f64, renderer: &mut dyn Renderer) -> Result<()> {
        let anchors: Vec<(ObjectId, BodyId)> = self
            .scene
            .objects()
            .filter_map(|(id, object)| object.anchor.map(|body| (id, body)))
            .collect();
        for &(_, body) in &anchors {
            self.orbits.body(body)?;
        }

        self.orbits.tick(delta)?;

        for (id, body) in anchors {
            let p = self.orbits.position(body)?;
            if let Some(object) = self.scene.object_mut(id) {
                object
                    .transform
                    .fixed_view_mut::<3, 1>(0, 3)
                    .copy_from(&p.coords);
            }
        }

        renderer.render(&self.scene, &self.camera)?;
        self.frames += 1;
        tracing::trace!(frame = self.frames, delta, "rendered frame");
        Ok(())
    }
}
