//! Resolve a configured [`ModelSource`] into mesh data.

use std::path::{Path, PathBuf};

use orrery_config::ModelSource;

use crate::icosphere::generate_icosphere;
use crate::mesh::{MeshData, MeshError};

/// Errors produced while loading a model.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("model file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read model file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a RON mesh description.
    #[error("malformed model file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid mesh {name}: {source}")]
    Invalid {
        name: String,
        #[source]
        source: MeshError,
    },
}

/// Produce the mesh described by `source`, validated and ready for upload.
pub fn load_model(source: &ModelSource) -> Result<MeshData, AssetError> {
    match source {
        ModelSource::Icosphere {
            subdivisions,
            radius,
            color,
        } => {
            let mut mesh = generate_icosphere(*subdivisions, *radius);
            mesh.color = *color;
            mesh.validate().map_err(|source| AssetError::Invalid {
                name: format!("icosphere({subdivisions})"),
                source,
            })?;
            Ok(mesh)
        }
        ModelSource::File(path) => load_mesh_file(path),
    }
}

/// Read and validate a RON-serialized [`MeshData`] file.
pub fn load_mesh_file(path: &Path) -> Result<MeshData, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mesh: MeshData = ron::from_str(&contents).map_err(|source| AssetError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    mesh.validate().map_err(|source| AssetError::Invalid {
        name: path.display().to_string(),
        source,
    })?;

    log::debug!(
        "Loaded mesh {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = r#"(
        positions: [(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)],
        normals: [(0.0, 0.0, 1.0), (0.0, 0.0, 1.0), (0.0, 0.0, 1.0)],
        indices: [0, 1, 2],
        color: (0.5, 0.5, 0.5, 1.0),
    )"#;

    #[test]
    fn test_icosphere_source_applies_color() {
        let source = ModelSource::Icosphere {
            subdivisions: 1,
            radius: 3.0,
            color: [0.1, 0.2, 0.3, 1.0],
        };
        let mesh = load_model(&source).unwrap();
        assert_eq!(mesh.color, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(mesh.triangle_count(), 80);
    }

    #[test]
    fn test_default_models_load() {
        let models = orrery_config::ModelsConfig::default();
        for source in [&models.sun, &models.earth, &models.moon, &models.star] {
            assert!(load_model(source).is_ok());
        }
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.ron");
        std::fs::write(&path, TRIANGLE).unwrap();

        let mesh = load_model(&ModelSource::File(path)).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.color, [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.ron");
        let err = load_model(&ModelSource::File(path.clone())).unwrap_err();
        match err {
            AssetError::NotFound { path: p } => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ron");
        std::fs::write(&path, "this is not ron {{{").unwrap();
        let err = load_mesh_file(&path).unwrap_err();
        assert!(matches!(err, AssetError::Malformed { .. }), "got {err:?}");
    }

    #[test]
    fn test_invalid_mesh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ron");
        std::fs::write(&path, TRIANGLE.replace("[0, 1, 2]", "[0, 1, 7]")).unwrap();
        let err = load_mesh_file(&path).unwrap_err();
        assert!(
            matches!(
                err,
                AssetError::Invalid {
                    source: MeshError::IndexOutOfRange { index: 7, .. },
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn test_mesh_file_without_triangles_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.ron");
        std::fs::write(
            &path,
            "(positions: [(0.0, 0.0, 0.0)], normals: [(0.0, 1.0, 0.0)], indices: [])",
        )
        .unwrap();
        let err = load_model(&ModelSource::File(path)).unwrap_err();
        assert!(
            matches!(
                err,
                AssetError::Invalid {
                    source: MeshError::NoTriangles,
                    ..
                }
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let err = AssetError::NotFound {
            path: PathBuf::from("models/earth.ron"),
        };
        assert!(err.to_string().contains("models/earth.ron"));
    }
}
