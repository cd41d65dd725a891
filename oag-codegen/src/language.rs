//! The trait a language backend implements.
//!
//! A backend supplies its option table, its cross-option validator, its
//! artifact catalog, and its path layout rules. The expansion of a plan
//! over a concrete entity set is shared and lives here.

use std::path::Path;

use crate::artifact::{ArtifactKind, ArtifactSpec, ResolvedPath};
use crate::error::Result;
use crate::options::{ConfigState, OptionRegistry, RawOptions};
use crate::plan::{EntitySet, Plan};

/// A language-specific client generator backend.
pub trait ClientCodegen {
    /// Language identifier (e.g., "go")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go")
    fn file_extension(&self) -> &'static str;

    /// The options this backend recognizes
    fn options(&self) -> &OptionRegistry;

    /// Enforce cross-option constraints on a resolved state
    fn validate(&self, state: &ConfigState) -> Result<()>;

    /// Compute the ordered artifact set and renderer context
    fn plan(&self, state: &ConfigState) -> Plan;

    /// Resolve one (artifact, entity) pair to an output path. Pure, no I/O.
    fn artifact_path(
        &self,
        artifact: &ArtifactSpec,
        entity: &str,
        output_root: &Path,
        state: &ConfigState,
    ) -> String;

    /// Overlay raw values onto this backend's defaults.
    fn resolve(&self, raw: &RawOptions) -> Result<ConfigState> {
        self.options().resolve(raw)
    }

    /// Expand a plan over the entity set, in catalog order.
    ///
    /// Model-kind artifacts are instantiated per model, API-kind artifacts
    /// per API group, support artifacts exactly once with an empty entity
    /// name. Path resolution for distinct artifacts is independent; the
    /// catalog yields one artifact per (kind, entity) pair, so no two rows
    /// share a target file.
    fn resolve_paths(
        &self,
        plan: &Plan,
        entities: &EntitySet,
        output_root: &Path,
        state: &ConfigState,
    ) -> Vec<ResolvedPath> {
        let mut paths = Vec::new();
        for artifact in &plan.artifacts {
            match artifact.kind {
                ArtifactKind::Model | ArtifactKind::ModelDoc => {
                    for model in &entities.models {
                        paths.push(self.resolved(artifact, model, output_root, state));
                    }
                }
                ArtifactKind::Api | ArtifactKind::ApiDoc | ArtifactKind::Mock => {
                    for api in &entities.apis {
                        paths.push(self.resolved(artifact, api, output_root, state));
                    }
                }
                ArtifactKind::Support => {
                    paths.push(self.resolved(artifact, "", output_root, state));
                }
            }
        }
        paths
    }

    /// Build one [`ResolvedPath`] row.
    fn resolved(
        &self,
        artifact: &ArtifactSpec,
        entity: &str,
        output_root: &Path,
        state: &ConfigState,
    ) -> ResolvedPath {
        ResolvedPath {
            artifact: artifact.clone(),
            entity: entity.to_string(),
            path: self.artifact_path(artifact, entity, output_root, state),
        }
    }
}

/// Run the whole pipeline: resolve, validate, plan, resolve paths.
///
/// A configuration error aborts before any path is resolved.
pub fn plan_paths(
    codegen: &impl ClientCodegen,
    raw: &RawOptions,
    entities: &EntitySet,
    output_root: &Path,
) -> Result<(Plan, Vec<ResolvedPath>)> {
    let state = codegen.resolve(raw)?;
    codegen.validate(&state)?;
    let plan = codegen.plan(&state);
    let paths = codegen.resolve_paths(&plan, entities, output_root, &state);
    Ok((plan, paths))
}
