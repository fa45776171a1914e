//! Self-similar towers built by stacking rings.
//!
//! Every builder in this module produces a [`StackNode`] chain: level 0 is
//! the bottom-most ring and owns the next level up as its child. Each level
//! stores its transform relative to its parent, so scaling one level scales
//! every level above it.

mod knotted;
mod segmented;
mod ziggurat;

pub use knotted::MakeKnottedStack;
pub use segmented::MakeSegmentedStack;
pub use ziggurat::MakeZiggurat;

use std::fmt;

use crate::config::MAX_STACK_LEVELS;
use crate::error::{OperationError, Result};
use crate::math::{lift_and_scale, Matrix4, Rgb};
use crate::mesh::TriangleMesh;
use crate::operations::creation::MakeRing;
use crate::operations::query::{Aabb, BoundingBox};
use crate::operations::transform::GeneralTransform;

/// One level of a stacked solid.
///
/// `Clone`, `PartialEq`, `Debug` and `Drop` walk the chain with a loop, so
/// a stack at [`MAX_STACK_LEVELS`] never recurses once per level.
pub struct StackNode {
    /// The level's ring, in its own local frame.
    pub mesh: TriangleMesh,
    /// Display color of the level.
    pub color: Rgb,
    /// Vertical translation relative to the parent level.
    pub offset: f64,
    /// Horizontal (x/z) scale relative to the parent level.
    pub scale: f64,
    /// The next level up, if any.
    pub child: Option<Box<StackNode>>,
}

/// A level of a stack with its transform resolved to world space.
#[derive(Debug, Clone)]
pub struct PlacedMesh {
    /// Index of the level, 0 at the bottom.
    pub level: usize,
    /// The level's ring in its local frame.
    pub mesh: TriangleMesh,
    /// Display color of the level.
    pub color: Rgb,
    /// Local-to-world transform.
    pub transform: Matrix4,
}

impl PlacedMesh {
    /// Returns the level's ring transformed into world space.
    ///
    /// # Errors
    ///
    /// Returns an error if the transform is not finite.
    pub fn world_mesh(&self) -> Result<TriangleMesh> {
        GeneralTransform::new(self.transform).apply(&self.mesh)
    }
}

impl StackNode {
    /// Returns the local transform of this level relative to its parent.
    #[must_use]
    pub fn local_transform(&self) -> Matrix4 {
        lift_and_scale(self.offset, self.scale)
    }

    /// Copy of this level alone, without its child.
    fn detached(&self) -> StackNode {
        StackNode {
            mesh: self.mesh.clone(),
            color: self.color,
            offset: self.offset,
            scale: self.scale,
            child: None,
        }
    }

    /// Number of levels in the chain starting at this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels().count()
    }

    /// Iterates over the levels from this node upward.
    pub fn levels(&self) -> impl Iterator<Item = &StackNode> {
        std::iter::successors(Some(self), |node| node.child.as_deref())
    }

    /// Returns the level `index` steps above this node.
    #[must_use]
    pub fn level(&self, index: usize) -> Option<&StackNode> {
        self.levels().nth(index)
    }

    /// Cumulative horizontal scale of every level, from this node upward.
    #[must_use]
    pub fn cumulative_scales(&self) -> Vec<f64> {
        self.levels()
            .scan(1.0, |acc, node| {
                *acc *= node.scale;
                Some(*acc)
            })
            .collect()
    }

    /// Resolves every level's transform by pre-multiplying down the chain.
    #[must_use]
    pub fn flatten(&self) -> Vec<PlacedMesh> {
        let mut world = Matrix4::identity();
        self.levels()
            .enumerate()
            .map(|(level, node)| {
                world *= node.local_transform();
                PlacedMesh {
                    level,
                    mesh: node.mesh.clone(),
                    color: node.color,
                    transform: world,
                }
            })
            .collect()
    }

    /// Merges every level into one world-space mesh with per-vertex colors.
    ///
    /// # Errors
    ///
    /// Returns an error if any transform is not finite.
    pub fn world_mesh(&self) -> Result<TriangleMesh> {
        let mut combined = TriangleMesh::default();
        for placed in self.flatten() {
            let mut mesh = placed.world_mesh()?;
            mesh.colors = vec![placed.color; mesh.vertex_count()];
            combined.merge(&mesh)?;
        }
        Ok(combined)
    }

    /// Axis-aligned bounding box of the whole stack in world space.
    ///
    /// # Errors
    ///
    /// Returns an error if any transform is not finite.
    pub fn bounding_box(&self) -> Result<Aabb> {
        BoundingBox::new(&self.world_mesh()?).execute()
    }
}

impl Drop for StackNode {
    fn drop(&mut self) {
        let mut next = self.child.take();
        while let Some(mut node) = next {
            next = node.child.take();
        }
    }
}

impl Clone for StackNode {
    fn clone(&self) -> Self {
        let mut root = self.detached();
        root.child = self
            .child
            .as_deref()
            .and_then(|child| link(child.levels().map(StackNode::detached).collect()))
            .map(Box::new);
        root
    }
}

impl PartialEq for StackNode {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        let mut lhs = self.levels();
        let mut rhs = other.levels();
        loop {
            match (lhs.next(), rhs.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if a.offset != b.offset
                        || a.scale != b.scale
                        || a.color != b.color
                        || a.mesh != b.mesh
                    {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl fmt::Debug for StackNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.levels().map(LevelView)).finish()
    }
}

/// Debug view of a single level, without its child.
struct LevelView<'a>(&'a StackNode);

impl fmt::Debug for LevelView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackNode")
            .field("mesh", &self.0.mesh)
            .field("color", &self.0.color)
            .field("offset", &self.0.offset)
            .field("scale", &self.0.scale)
            .finish_non_exhaustive()
    }
}

/// Chains unlinked levels bottom to top, returning the bottom level.
fn link(mut levels: Vec<StackNode>) -> Option<StackNode> {
    let mut child = None;
    while let Some(mut node) = levels.pop() {
        node.child = child;
        if levels.is_empty() {
            return Some(node);
        }
        child = Some(Box::new(node));
    }
    None
}

/// Per-level parameters resolved by a builder before any mesh is generated.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LevelSpec {
    pub height: f64,
    pub radius: f64,
    pub offset: f64,
    pub scale: f64,
    pub color: Rgb,
}

/// Fails with `ResourceExceeded` if a stack would have too many levels.
pub(crate) fn check_level_limit(levels: usize) -> Result<()> {
    if levels > MAX_STACK_LEVELS {
        return Err(OperationError::ResourceExceeded {
            requested: levels,
            limit: MAX_STACK_LEVELS,
        }
        .into());
    }
    Ok(())
}

/// Builds the chain for `specs`, one ring per level.
///
/// Only the first level may cap its bottom and only the last level may cap
/// its top. Nothing is returned unless every level builds.
pub(crate) fn compose(
    sides: u32,
    specs: &[LevelSpec],
    cap_bottom: bool,
    cap_top: bool,
) -> Result<StackNode> {
    check_level_limit(specs.len())?;
    let last = specs.len().saturating_sub(1);

    let mut levels = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let mesh = MakeRing::new(sides, spec.height, spec.radius)
            .with_caps(cap_bottom && index == 0, cap_top && index == last)
            .execute()?;
        levels.push(StackNode {
            mesh,
            color: spec.color,
            offset: spec.offset,
            scale: spec.scale,
            child: None,
        });
    }

    link(levels).ok_or_else(|| {
        OperationError::InvalidArgument("stack needs at least one level".into()).into()
    })
}
