//! Models and the scene root

use log::{debug, trace};

use super::color::Color;
use super::material::Material;
use super::mesh::TriangleMesh;
use crate::config::ValidationConfig;
use crate::error::Result;

/// A named group of meshes forming one logical object
///
/// A model with no meshes is valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    name: String,
    meshes: Vec<TriangleMesh>,
}

impl Model {
    /// Create a new unnamed model with no meshes
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new model with the given name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meshes: Vec::new(),
        }
    }

    /// Model name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the model name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Take ownership of a mesh and append it to this model
    pub fn add_tri_mesh(&mut self, mesh: TriangleMesh) {
        debug!(
            "model '{}': adding mesh {} ({} vertices, {} faces)",
            self.name,
            self.meshes.len(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        self.meshes.push(mesh);
    }

    /// Get a mesh by index
    pub fn tri_mesh(&self, index: usize) -> &TriangleMesh {
        &self.meshes[index]
    }

    /// Get a mesh by index for further building
    pub fn tri_mesh_mut(&mut self, index: usize) -> &mut TriangleMesh {
        &mut self.meshes[index]
    }

    /// Number of meshes
    pub fn tri_mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// All meshes in insertion order
    pub fn tri_meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    /// Check if the model has no meshes
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

/// Root container of an imported scene
///
/// Owns every model and material. Dropping the scene drops the whole tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    models: Vec<Model>,
    materials: Vec<Material>,
    background_color: Color,
}

impl Scene {
    /// Create a new empty scene with a black background
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a model and append it to the scene
    pub fn add_model(&mut self, model: Model) {
        debug!(
            "scene: adding model {} '{}' with {} mesh(es)",
            self.models.len(),
            model.name(),
            model.tri_mesh_count()
        );
        self.models.push(model);
    }

    /// Get a model by index
    pub fn model(&self, index: usize) -> &Model {
        &self.models[index]
    }

    /// Get a model by index for further building
    pub fn model_mut(&mut self, index: usize) -> &mut Model {
        &mut self.models[index]
    }

    /// Number of models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    /// All models in insertion order
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Take ownership of a material and append it to the scene
    pub fn add_material(&mut self, material: Material) {
        debug!(
            "scene: adding material {} '{}'",
            self.materials.len(),
            material.name()
        );
        self.materials.push(material);
    }

    /// Get a material by index
    pub fn material(&self, index: usize) -> &Material {
        &self.materials[index]
    }

    /// Number of materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// All materials in insertion order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Background color
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Replace the background color
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Find a material by name
    ///
    /// When several materials share the name, the first one added wins.
    pub fn find_material(&self, name: &str) -> Option<&Material> {
        let found = self.materials.iter().find(|m| m.name() == name);
        if found.is_none() {
            trace!("scene: no material named '{}'", name);
        }
        found
    }

    /// Position of the material [`find_material`](Self::find_material) would return
    pub fn find_material_index(&self, name: &str) -> Option<usize> {
        self.materials.iter().position(|m| m.name() == name)
    }

    /// Iterate over every material with the given name, in insertion order
    pub fn materials_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Material> + 'a {
        self.materials.iter().filter(move |m| m.name() == name)
    }

    /// Iterate over every mesh in the scene along with its owning model
    pub fn meshes(&self) -> impl Iterator<Item = (&Model, &TriangleMesh)> + '_ {
        self.models
            .iter()
            .flat_map(|model| model.tri_meshes().iter().map(move |mesh| (model, mesh)))
    }

    /// Total number of meshes across all models
    pub fn total_mesh_count(&self) -> usize {
        self.models.iter().map(Model::tri_mesh_count).sum()
    }

    /// Total number of faces across all meshes
    pub fn total_face_count(&self) -> usize {
        self.meshes().map(|(_, mesh)| mesh.face_count() as usize).sum()
    }

    /// Check the whole scene for index-integrity and reference problems
    pub fn validate(&self, config: &ValidationConfig) -> Result<()> {
        crate::validator::validate_scene(self, config)
    }
}

/// Resolve a material name against a scene
///
/// Returns `None` when no material has that name. See
/// [`Scene::find_material`] for the duplicate-name policy.
pub fn lookup_material_by_name<'a>(scene: &'a Scene, name: &str) -> Option<&'a Material> {
    scene.find_material(name)
}
