//! Go-specific naming rules for generated files.

use oag_core::to_pascal_case;

/// File stem for a model or API source file (e.g., "pet_store" -> "PetStore").
pub fn to_file_stem(entity: &str) -> String {
    to_pascal_case(entity)
}

/// File stem for a documentation page. Doc pages share the source stem.
pub fn to_doc_stem(entity: &str) -> String {
    to_pascal_case(entity)
}
