//! Load the mesh for every drawable model before the window opens.

use std::collections::HashMap;
use std::path::Path;

use orrery_assets::{AssetError, MeshData, load_model};
use orrery_config::{ModelSource, ModelsConfig};
use orrery_sim::ModelKind;

/// Relative file paths resolve against `base_dir`.
pub fn resolve_source(source: &ModelSource, base_dir: &Path) -> ModelSource {
    match source {
        ModelSource::File(path) if path.is_relative() => ModelSource::File(base_dir.join(path)),
        other => other.clone(),
    }
}

fn source_for(models: &ModelsConfig, kind: ModelKind) -> &ModelSource {
    match kind {
        ModelKind::Sun => &models.sun,
        ModelKind::Earth => &models.earth,
        ModelKind::Moon => &models.moon,
        ModelKind::Star => &models.star,
    }
}

/// Load all four models. The first failure aborts.
pub fn load_scene_models(
    models: &ModelsConfig,
    base_dir: &Path,
) -> Result<HashMap<ModelKind, MeshData>, AssetError> {
    ModelKind::ALL
        .into_iter()
        .map(|kind| {
            let source = resolve_source(source_for(models, kind), base_dir);
            let mesh = load_model(&source)?;
            tracing::info!(
                model = kind.name(),
                vertices = mesh.vertex_count(),
                triangles = mesh.triangle_count(),
                "Loaded model"
            );
            Ok((kind, mesh))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_models_load() {
        let dir = tempfile::tempdir().unwrap();
        let meshes = load_scene_models(&ModelsConfig::default(), dir.path()).unwrap();
        assert_eq!(meshes.len(), 4);
        for kind in ModelKind::ALL {
            assert!(meshes.contains_key(&kind), "missing {}", kind.name());
        }
    }

    #[test]
    fn test_relative_path_resolves_against_base() {
        let source = ModelSource::File(PathBuf::from("models/earth.ron"));
        let resolved = resolve_source(&source, Path::new("/etc/orrery"));
        assert_eq!(
            resolved,
            ModelSource::File(PathBuf::from("/etc/orrery/models/earth.ron"))
        );
    }

    #[test]
    fn test_absolute_path_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let absolute = dir.path().join("moon.ron");
        let source = ModelSource::File(absolute.clone());
        assert_eq!(resolve_source(&source, Path::new("/elsewhere")), source);
    }

    #[test]
    fn test_missing_model_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let models = ModelsConfig {
            moon: ModelSource::File(PathBuf::from("moon.ron")),
            ..ModelsConfig::default()
        };
        let err = load_scene_models(&models, dir.path()).unwrap_err();
        match err {
            AssetError::NotFound { path } => assert_eq!(path, dir.path().join("moon.ron")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_file_model_loads_from_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let star = orrery_assets::generate_icosphere(0, 1.0);
        let text = ron::ser::to_string(&star).unwrap();
        std::fs::write(dir.path().join("star.ron"), text).unwrap();

        let models = ModelsConfig {
            star: ModelSource::File(PathBuf::from("star.ron")),
            ..ModelsConfig::default()
        };
        let meshes = load_scene_models(&models, dir.path()).unwrap();
        assert_eq!(meshes[&ModelKind::Star].vertex_count(), 12);
    }
}
