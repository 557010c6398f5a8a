//! Material reference validation

use std::collections::HashSet;

use log::warn;

use crate::config::ValidationConfig;
use crate::error::{Error, Result};
use crate::model::Scene;

/// Validates that material names are unique when the configuration requires it
///
/// Duplicates are otherwise logged; lookups resolve to the first material with
/// the name.
pub fn validate_duplicate_material_names(scene: &Scene, config: &ValidationConfig) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(scene.material_count());

    for (idx, material) in scene.materials().iter().enumerate() {
        if seen.insert(material.name()) {
            continue;
        }
        if !config.allow_duplicate_material_names() {
            return Err(Error::DuplicateMaterial(format!(
                "Material {} reuses the name '{}'. \
                 Each material in a scene must have a distinct name.",
                idx,
                material.name()
            )));
        }
        warn!(
            "material {} reuses the name '{}'; lookups resolve to the first one",
            idx,
            material.name()
        );
    }

    Ok(())
}

/// Validates that every material group names a material of the scene
///
/// Unresolved names are logged and treated as "no material" unless strict
/// material references are enabled.
pub fn validate_material_references(scene: &Scene, config: &ValidationConfig) -> Result<()> {
    let known: HashSet<&str> = scene.materials().iter().map(|m| m.name()).collect();

    for (model_idx, model) in scene.models().iter().enumerate() {
        for (mesh_idx, mesh) in model.tri_meshes().iter().enumerate() {
            for (group_idx, group) in mesh.mesh_material_groups().iter().enumerate() {
                if known.contains(group.material_name.as_str()) {
                    continue;
                }
                let context = format!(
                    "Model {} ('{}') mesh {} material group {}",
                    model_idx,
                    model.name(),
                    mesh_idx,
                    group_idx
                );
                if config.strict_material_references() {
                    return Err(Error::unresolved_material(&context, &group.material_name));
                }
                warn!(
                    "{} references unknown material '{}'",
                    context, group.material_name
                );
            }
        }
    }

    Ok(())
}
