//! Path constants for the Go output layout.

/// File extension for generated Go source files.
pub const FILE_EXTENSION: &str = "go";

/// File extension for generated documentation pages.
pub const DOC_EXTENSION: &str = "md";

/// Documentation directory relative to the output root.
pub const DOCS_DIR: &str = "docs";

/// API doc path handed to the renderer context.
pub const API_DOC_PATH: &str = "docs/";

/// Model doc path handed to the renderer context.
pub const MODEL_DOC_PATH: &str = "docs/";

/// Suffix appended to the package name for the mock subpackage.
pub const MOCK_SUFFIX: &str = "_mock";

/// Default output root when the host supplies none.
pub const DEFAULT_OUTPUT_DIR: &str = "generated-code/go";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(FILE_EXTENSION, "go");
        assert_eq!(DOCS_DIR, "docs");
        assert_eq!(MOCK_SUFFIX, "_mock");
        assert_eq!(DEFAULT_OUTPUT_DIR, "generated-code/go");
    }
}
