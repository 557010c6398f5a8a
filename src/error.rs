//! Error types for scene construction and validation
//!
//! The scene model itself performs almost no checking. Errors come from three
//! places: growth operations that would push a mesh past the 16-bit index
//! ceiling, the [`MeshBuilder`](crate::MeshBuilder), and the validator.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: Capacity errors
//! - **E2xxx**: Structural integrity errors
//! - **E3xxx**: Geometry operation errors
//!
//! ## Error Codes
//!
//! - `E1001`: Mesh sequence is full (16-bit index ceiling)
//! - `E2001`: Invalid mesh structure
//! - `E2002`: Unresolved material reference
//! - `E2003`: Duplicate material name
//! - `E3001`: Geometry operation on empty mesh

use std::fmt;
use thiserror::Error;

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, Error>;

/// The per-mesh sequence an [`Error::IndexOverflow`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Vertex positions
    Vertex,
    /// Texture coordinates
    TexCoord,
    /// Triangle faces
    Face,
    /// Per-face smoothing group masks
    SmoothingGroup,
}

impl ElementKind {
    /// Human-readable plural name of the sequence
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Vertex => "vertices",
            ElementKind::TexCoord => "texture coordinates",
            ElementKind::Face => "faces",
            ElementKind::SmoothingGroup => "smoothing groups",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while building or validating a scene
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A mesh sequence already holds the maximum number of elements
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Source mesh was not split before import
    /// - Builder appended the same chunk twice
    ///
    /// **Suggestions**:
    /// - Split the mesh into several meshes of the same model
    #[error("[E1001] Too many {kind} in mesh: limit is {limit}")]
    IndexOverflow {
        /// Which sequence is full
        kind: ElementKind,
        /// The ceiling that was hit
        limit: usize,
    },

    /// Mesh structure violates an index-integrity invariant
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Face references a vertex that does not exist
    /// - Smoothing group count differs from face count
    /// - Material group references a face that does not exist
    /// - Non-finite transform matrix
    #[error("[E2001] Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Material group names a material the scene does not contain
    ///
    /// **Error Code**: E2002
    ///
    /// Only reported when strict material references are enabled; otherwise
    /// the reference is treated as "no material".
    #[error("[E2002] Unresolved material reference: {0}")]
    UnresolvedMaterial(String),

    /// Two materials in one scene share a name
    ///
    /// **Error Code**: E2003
    ///
    /// Only reported when duplicate names are disallowed; otherwise lookup is
    /// first-wins.
    #[error("[E2003] Duplicate material name: {0}")]
    DuplicateMaterial(String),

    /// Geometry operation needs data the mesh does not have
    ///
    /// **Error Code**: E3001
    #[error("[E3001] Empty geometry: {0}")]
    EmptyGeometry(String),
}

impl Error {
    /// Create an IndexOverflow error for the given sequence
    pub fn overflow(kind: ElementKind, limit: usize) -> Self {
        Error::IndexOverflow { kind, limit }
    }

    /// Create an InvalidMesh error with context about where the problem is
    ///
    /// # Arguments
    /// * `context` - Location of the mesh (e.g., "model 'Box' mesh 0")
    /// * `message` - Description of the error
    pub fn invalid_mesh_context(context: &str, message: &str) -> Self {
        if context.is_empty() {
            Error::InvalidMesh(message.to_string())
        } else {
            Error::InvalidMesh(format!("{}: {}", context, message))
        }
    }

    /// Create an UnresolvedMaterial error for a material group
    pub fn unresolved_material(context: &str, material_name: &str) -> Self {
        Error::UnresolvedMaterial(format!(
            "{} references material '{}' which is not defined in the scene. \
             Check the material list or treat the group as unmaterialed.",
            context, material_name
        ))
    }
}
