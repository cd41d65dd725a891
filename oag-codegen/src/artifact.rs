//! Artifact descriptors and resolved output paths.

use serde::Serialize;

/// What a catalog entry produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// One source file per model.
    Model,
    /// One source file per API group.
    Api,
    /// One markdown page per API group.
    ApiDoc,
    /// One markdown page per model.
    ModelDoc,
    /// One mock source file per API group.
    Mock,
    /// A fixed-name project support file.
    Support,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Model => "model",
            ArtifactKind::Api => "api",
            ArtifactKind::ApiDoc => "api-doc",
            ArtifactKind::ModelDoc => "model-doc",
            ArtifactKind::Mock => "mock",
            ArtifactKind::Support => "support",
        }
    }
}

/// A catalog entry describing one unit of generated output, independent of
/// any concrete entity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSpec {
    /// Template identifier handed to the (out-of-scope) renderer.
    pub template: String,
    pub kind: ArtifactKind,
    /// Output extension without the dot; empty for fixed-name support files.
    pub extension: String,
    /// Relative subfolder under the output root, possibly empty.
    pub folder: String,
    /// Fixed file name, set for support artifacts only.
    pub file_name: String,
}

impl ArtifactSpec {
    /// An entity-instantiated source artifact (flat layout).
    pub fn source(template: &str, kind: ArtifactKind, extension: &str) -> Self {
        Self {
            template: template.to_string(),
            kind,
            extension: extension.to_string(),
            folder: String::new(),
            file_name: String::new(),
        }
    }

    /// An entity-instantiated doc artifact under a subfolder.
    pub fn doc(template: &str, kind: ArtifactKind, folder: &str) -> Self {
        Self {
            template: template.to_string(),
            kind,
            extension: "md".to_string(),
            folder: folder.to_string(),
            file_name: String::new(),
        }
    }

    /// A fixed-name support file, optionally under a subfolder.
    pub fn support(template: &str, folder: &str, file_name: &str) -> Self {
        Self {
            template: template.to_string(),
            kind: ArtifactKind::Support,
            extension: String::new(),
            folder: folder.to_string(),
            file_name: file_name.to_string(),
        }
    }
}

/// One (artifact, entity) pair resolved to a concrete output path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    pub artifact: ArtifactSpec,
    /// Entity name this path was instantiated for; empty for support files.
    pub entity: String,
    pub path: String,
}

/// Render resolved paths as a fixed-width table, one row per path.
///
/// This is the diffable surface downstream tooling consumes; rows appear
/// in plan order and the format carries no timestamps or other noise.
pub fn path_table(paths: &[ResolvedPath]) -> String {
    paths
        .iter()
        .map(|p| {
            format!(
                "{:<10} {:<13} {}",
                p.artifact.kind.as_str(),
                p.artifact.template,
                p.path
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_table_rows() {
        let paths = vec![ResolvedPath {
            artifact: ArtifactSpec::source("model", ArtifactKind::Model, "go"),
            entity: "Pet".to_string(),
            path: "/out/Pet.go".to_string(),
        }];
        assert_eq!(path_table(&paths), "model      model         /out/Pet.go");
    }

    #[test]
    fn test_source_spec() {
        let spec = ArtifactSpec::source("model", ArtifactKind::Model, "go");
        assert_eq!(spec.template, "model");
        assert_eq!(spec.extension, "go");
        assert!(spec.folder.is_empty());
        assert!(spec.file_name.is_empty());
    }

    #[test]
    fn test_support_spec() {
        let spec = ArtifactSpec::support("openapi", "api", "openapi.yaml");
        assert_eq!(spec.kind, ArtifactKind::Support);
        assert_eq!(spec.folder, "api");
        assert_eq!(spec.file_name, "openapi.yaml");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ArtifactKind::ApiDoc.as_str(), "api-doc");
        assert_eq!(ArtifactKind::Support.as_str(), "support");
    }
}
