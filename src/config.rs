//! Validation configuration

/// Controls which structural problems validation reports as errors
///
/// The default configuration enforces only the index-integrity invariants
/// and tolerates everything the .3ds format tolerates: dangling material
/// names, duplicate material names, meshes without smoothing data and texture
/// coordinate counts that differ from the vertex count. Tolerated problems
/// are logged at `warn` level.
///
/// # Example
///
/// ```
/// use lib3ds::ValidationConfig;
///
/// let config = ValidationConfig::new()
///     .with_strict_material_references(true)
///     .with_require_smoothing_groups(true);
/// assert!(config.strict_material_references());
/// assert!(config.allow_duplicate_material_names());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    strict_material_references: bool,
    allow_duplicate_material_names: bool,
    require_smoothing_groups: bool,
    require_per_vertex_tex_coords: bool,
}

impl ValidationConfig {
    /// Create a lenient configuration
    pub fn new() -> Self {
        Self {
            strict_material_references: false,
            allow_duplicate_material_names: true,
            require_smoothing_groups: false,
            require_per_vertex_tex_coords: false,
        }
    }

    /// Create a configuration that rejects every tolerated problem
    pub fn strict() -> Self {
        Self {
            strict_material_references: true,
            allow_duplicate_material_names: false,
            require_smoothing_groups: true,
            require_per_vertex_tex_coords: true,
        }
    }

    /// Treat material group names that do not resolve as errors
    pub fn with_strict_material_references(mut self, strict: bool) -> Self {
        self.strict_material_references = strict;
        self
    }

    /// Allow several materials in one scene to share a name
    pub fn with_allow_duplicate_material_names(mut self, allow: bool) -> Self {
        self.allow_duplicate_material_names = allow;
        self
    }

    /// Require one smoothing group mask per face even when none were supplied
    pub fn with_require_smoothing_groups(mut self, require: bool) -> Self {
        self.require_smoothing_groups = require;
        self
    }

    /// Require textured meshes to have exactly one texture coordinate per vertex
    pub fn with_require_per_vertex_tex_coords(mut self, require: bool) -> Self {
        self.require_per_vertex_tex_coords = require;
        self
    }

    /// Whether unresolved material names are errors
    pub fn strict_material_references(&self) -> bool {
        self.strict_material_references
    }

    /// Whether duplicate material names are allowed
    pub fn allow_duplicate_material_names(&self) -> bool {
        self.allow_duplicate_material_names
    }

    /// Whether a mesh with faces must carry smoothing groups
    pub fn require_smoothing_groups(&self) -> bool {
        self.require_smoothing_groups
    }

    /// Whether texture coordinates must match the vertex count
    pub fn require_per_vertex_tex_coords(&self) -> bool {
        self.require_per_vertex_tex_coords
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::new()
    }
}
