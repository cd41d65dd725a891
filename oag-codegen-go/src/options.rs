//! Recognized configuration options for the Go backend.
//!
//! Option-name keys are exported as constants so the validator, planner,
//! and host tooling never spell a name twice.

use oag_codegen::OptionRegistry;

/// Go package version embedded in generated metadata and support files.
pub const PACKAGE_VERSION: &str = "packageVersion";

/// Root package name for all generated sources.
pub const PACKAGE_NAME: &str = "packageName";

/// Import-path prefix for the parent of the generated package.
pub const PACKAGE_ROOT: &str = "packageRoot";

/// Adds XML serialization annotations to model artifacts.
pub const WITH_XML: &str = "withXml";

/// Puts form/body parameters first in generated API signatures.
pub const PREPEND_FORM_OR_BODY: &str = "prependFormOrBody";

/// Generated API types are interfaces instead of concrete implementations.
pub const INTERFACES: &str = "interfaces";

/// Generated API methods additionally return the raw HTTP response.
pub const HTTP_RESPONSE: &str = "httpResponse";

/// Enables generation of the testify mock artifact set.
pub const TESTIFY_MOCK: &str = "testifyMock";

/// Declare every option the Go backend recognizes, with its default.
pub fn registry() -> OptionRegistry {
    OptionRegistry::new()
        .string(PACKAGE_VERSION, "Go package version.", "1.0.0")
        .string(PACKAGE_NAME, "Go package name (convention: lowercase).", "openapi")
        .string(
            PACKAGE_ROOT,
            "Import path for the parent of the main generated package, for use with testifyMock so the mock package can find it.",
            "",
        )
        .boolean(
            WITH_XML,
            "Include support for the application/xml content type and XML annotations in the model.",
            false,
        )
        .boolean(
            PREPEND_FORM_OR_BODY,
            "Add form or body parameters to the beginning of the parameter list.",
            false,
        )
        .boolean(
            INTERFACES,
            "Main types are interfaces instead of concrete implementations.",
            false,
        )
        .boolean(HTTP_RESPONSE, "Include the raw HTTP response in methods.", true)
        .boolean(
            TESTIFY_MOCK,
            "Include a testify mock stub for the API clients. Requires interfaces=true and httpResponse=false.",
            false,
        )
}

#[cfg(test)]
mod tests {
    use oag_codegen::{OptionKind, OptionValue, RawOptions};

    use super::*;

    #[test]
    fn test_all_options_declared() {
        let registry = registry();
        assert_eq!(registry.len(), 8);
        for name in [
            PACKAGE_VERSION,
            PACKAGE_NAME,
            PACKAGE_ROOT,
            WITH_XML,
            PREPEND_FORM_OR_BODY,
            INTERFACES,
            HTTP_RESPONSE,
            TESTIFY_MOCK,
        ] {
            assert!(registry.get(name).is_some(), "missing option {name}");
        }
    }

    #[test]
    fn test_defaults() {
        let state = registry().resolve(&RawOptions::new()).unwrap();
        assert_eq!(state.str(PACKAGE_VERSION), "1.0.0");
        assert_eq!(state.str(PACKAGE_NAME), "openapi");
        assert_eq!(state.str(PACKAGE_ROOT), "");
        assert!(!state.bool(WITH_XML));
        assert!(!state.bool(PREPEND_FORM_OR_BODY));
        assert!(!state.bool(INTERFACES));
        assert!(state.bool(HTTP_RESPONSE));
        assert!(!state.bool(TESTIFY_MOCK));
    }

    #[test]
    fn test_kinds() {
        let registry = registry();
        assert_eq!(registry.get(PACKAGE_NAME).unwrap().kind, OptionKind::Str);
        assert_eq!(registry.get(TESTIFY_MOCK).unwrap().kind, OptionKind::Bool);
        assert_eq!(
            registry.get(HTTP_RESPONSE).unwrap().default,
            OptionValue::Bool(true)
        );
    }
}
