//! Case conversion helpers for generated file and identifier names.

/// Convert a string to PascalCase (e.g., "pet_store" -> "PetStore")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "PetStore" -> "pet_store")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Convert a string to camelCase (e.g., "pet_store" -> "petStore")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("pet"), "Pet");
        assert_eq!(to_pascal_case("pet_store"), "PetStore");
        assert_eq!(to_pascal_case("store-order"), "StoreOrder");
        assert_eq!(to_pascal_case("Pet"), "Pet");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Pet"), "pet");
        assert_eq!(to_snake_case("PetStore"), "pet_store");
        assert_eq!(to_snake_case("store-order"), "store_order");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("pet_store"), "petStore");
        assert_eq!(to_camel_case("Pet"), "pet");
        assert_eq!(to_camel_case(""), "");
    }

}
