//! Surface materials

use super::color::Color;

/// Named surface-appearance descriptor
///
/// Every field is a plain replaceable value. A freshly created material has an
/// empty name, no texture map, black colors and zero shininess and opacity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    name: String,
    texture_map: String,
    ambient: Color,
    diffuse: Color,
    specular: Color,
    shininess: f32,
    opacity: f32,
}

impl Material {
    /// Create a new material with default properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new material with the given name
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Material name, used as the lookup key for material groups
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the material name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Path of the texture map
    ///
    /// An empty string means the material is untextured.
    pub fn texture_map(&self) -> &str {
        &self.texture_map
    }

    /// Replace the texture map path
    pub fn set_texture_map(&mut self, path: impl Into<String>) {
        self.texture_map = path.into();
    }

    /// Check if the material references a texture map
    pub fn has_texture_map(&self) -> bool {
        !self.texture_map.is_empty()
    }

    /// Ambient color
    pub fn ambient_color(&self) -> Color {
        self.ambient
    }

    /// Replace the ambient color
    pub fn set_ambient_color(&mut self, color: Color) {
        self.ambient = color;
    }

    /// Diffuse color
    pub fn diffuse_color(&self) -> Color {
        self.diffuse
    }

    /// Replace the diffuse color
    pub fn set_diffuse_color(&mut self, color: Color) {
        self.diffuse = color;
    }

    /// Specular color
    pub fn specular_color(&self) -> Color {
        self.specular
    }

    /// Replace the specular color
    pub fn set_specular_color(&mut self, color: Color) {
        self.specular = color;
    }

    /// Shininess, usually in `[0, 1]` but not enforced
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    /// Replace the shininess
    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }

    /// Opacity, usually in `[0, 1]` but not enforced
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Replace the opacity
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
}
