//! The Go artifact catalog and its conditional planning rules.

use oag_codegen::{ArtifactKind, ArtifactSpec, ConfigState, Plan, TemplateContext};

use crate::options::{
    HTTP_RESPONSE, INTERFACES, PACKAGE_NAME, PACKAGE_ROOT, PACKAGE_VERSION, PREPEND_FORM_OR_BODY,
    TESTIFY_MOCK, WITH_XML,
};
use crate::paths;

/// The base catalog: entity-instantiated artifacts first, then the fixed
/// support files in registration order.
pub fn base_catalog() -> Vec<ArtifactSpec> {
    vec![
        ArtifactSpec::source("model", ArtifactKind::Model, paths::FILE_EXTENSION),
        ArtifactSpec::source("api", ArtifactKind::Api, paths::FILE_EXTENSION),
        ArtifactSpec::doc("api_doc", ArtifactKind::ApiDoc, paths::DOCS_DIR),
        ArtifactSpec::doc("model_doc", ArtifactKind::ModelDoc, paths::DOCS_DIR),
        ArtifactSpec::support("openapi", "api", "openapi.yaml"),
        ArtifactSpec::support("README", "", "README.md"),
        ArtifactSpec::support("git_push.sh", "", "git_push.sh"),
        ArtifactSpec::support("gitignore", "", ".gitignore"),
        ArtifactSpec::support("configuration", "", "configuration.go"),
        ArtifactSpec::support("client", "", "client.go"),
        ArtifactSpec::support("response", "", "response.go"),
        ArtifactSpec::support("api_response", "", "api_response.go"),
        ArtifactSpec::support("travis", "", ".travis.yml"),
    ]
}

/// Compute the ordered artifact set and renderer context for a resolved
/// configuration.
///
/// Conditional artifacts are appended after the base catalog in a fixed
/// evaluation order, so re-planning an equal state yields an identical
/// sequence. `withXml` never changes the artifact set, only the context.
pub fn plan(state: &ConfigState) -> Plan {
    let mut artifacts = base_catalog();

    if state.bool(TESTIFY_MOCK) {
        let mock_pkg = format!("{}{}", state.str(PACKAGE_NAME), paths::MOCK_SUFFIX);
        artifacts.push(ArtifactSpec::support("client_mock", &mock_pkg, "client_mock.go"));
        artifacts.push(ArtifactSpec::source(
            "api_mock",
            ArtifactKind::Mock,
            paths::FILE_EXTENSION,
        ));
    }

    Plan {
        artifacts,
        context: template_context(state),
    }
}

/// Build the renderer context from the resolved options.
fn template_context(state: &ConfigState) -> TemplateContext {
    TemplateContext {
        package_name: state.str(PACKAGE_NAME).to_string(),
        package_version: state.str(PACKAGE_VERSION).to_string(),
        package_root: state.str(PACKAGE_ROOT).to_string(),
        api_doc_path: paths::API_DOC_PATH.to_string(),
        model_doc_path: paths::MODEL_DOC_PATH.to_string(),
        with_xml: state.bool(WITH_XML),
        interfaces: state.bool(INTERFACES),
        http_response: state.bool(HTTP_RESPONSE),
        prepend_form_or_body: state.bool(PREPEND_FORM_OR_BODY),
    }
}
