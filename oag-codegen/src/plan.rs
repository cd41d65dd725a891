//! The planned artifact set for one generation run.

use serde::Serialize;

use crate::artifact::ArtifactSpec;

/// Data the (out-of-scope) template renderer receives alongside each
/// artifact. Populated by the backend's planner from the resolved options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub package_name: String,
    pub package_version: String,
    /// Import-path prefix for the parent of the generated package; only
    /// meaningful when mock generation is enabled.
    pub package_root: String,
    pub api_doc_path: String,
    pub model_doc_path: String,
    pub with_xml: bool,
    pub interfaces: bool,
    pub http_response: bool,
    pub prepend_form_or_body: bool,
}

/// The ordered artifact set plus the renderer context.
///
/// A deterministic, total function of the resolved configuration: planning
/// twice from equal states yields equal plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub artifacts: Vec<ArtifactSpec>,
    pub context: TemplateContext,
}

/// The named models and API groups supplied by the schema layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntitySet {
    pub models: Vec<String>,
    pub apis: Vec<String>,
}

impl EntitySet {
    pub fn new(models: Vec<String>, apis: Vec<String>) -> Self {
        Self { models, apis }
    }
}
