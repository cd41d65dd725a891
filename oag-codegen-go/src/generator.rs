//! The Go backend behind the shared [`ClientCodegen`] seam.

use std::path::Path;

use oag_codegen::{
    ArtifactKind, ArtifactSpec, ClientCodegen, ConfigState, OptionRegistry, Plan, Result,
};

use crate::options::PACKAGE_NAME;
use crate::{naming, options, paths, planner, validate};

/// Go client generator backend: option table, validator, artifact catalog,
/// and path layout rules.
pub struct GoCodegen {
    options: OptionRegistry,
}

impl GoCodegen {
    pub fn new() -> Self {
        Self {
            options: options::registry(),
        }
    }
}

impl Default for GoCodegen {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientCodegen for GoCodegen {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        paths::FILE_EXTENSION
    }

    fn options(&self) -> &OptionRegistry {
        &self.options
    }

    fn validate(&self, state: &ConfigState) -> Result<()> {
        validate::validate(state)
    }

    fn plan(&self, state: &ConfigState) -> Plan {
        planner::plan(state)
    }

    /// Kind-specific layout: flat source tree, nested doc folder, nested
    /// mock subpackage folder, declared locations for support files.
    fn artifact_path(
        &self,
        artifact: &ArtifactSpec,
        entity: &str,
        output_root: &Path,
        state: &ConfigState,
    ) -> String {
        let path = match artifact.kind {
            ArtifactKind::Support => {
                let dir = if artifact.folder.is_empty() {
                    output_root.to_path_buf()
                } else {
                    output_root.join(&artifact.folder)
                };
                dir.join(&artifact.file_name)
            }
            ArtifactKind::Model | ArtifactKind::Api => output_root.join(format!(
                "{}.{}",
                naming::to_file_stem(entity),
                artifact.extension
            )),
            ArtifactKind::ApiDoc | ArtifactKind::ModelDoc => {
                output_root.join(&artifact.folder).join(format!(
                    "{}.{}",
                    naming::to_doc_stem(entity),
                    artifact.extension
                ))
            }
            ArtifactKind::Mock => output_root
                .join(format!("{}{}", state.str(PACKAGE_NAME), paths::MOCK_SUFFIX))
                .join(format!(
                    "{}.{}",
                    naming::to_file_stem(entity),
                    artifact.extension
                )),
        };
        path.display().to_string()
    }
}
