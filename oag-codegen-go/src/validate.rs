//! Cross-option constraint checks, run once before planning.

use oag_codegen::{ConfigState, Error, Result};

use crate::options::{HTTP_RESPONSE, INTERFACES, TESTIFY_MOCK};

/// Enforce inter-option constraints on a resolved state.
///
/// Single hard constraint: mock generation builds on the interface surface
/// and cannot wrap raw transport responses, so `testifyMock=true` requires
/// `interfaces=true` and `httpResponse=false`.
pub fn validate(state: &ConfigState) -> Result<()> {
    let testify_mock = state.bool(TESTIFY_MOCK);
    let interfaces = state.bool(INTERFACES);
    let http_response = state.bool(HTTP_RESPONSE);

    if testify_mock && (!interfaces || http_response) {
        return Err(Error::constraint(
            format!(
                "{TESTIFY_MOCK}=true requires {INTERFACES}=true and {HTTP_RESPONSE}=false \
                 (got {INTERFACES}={interfaces}, {HTTP_RESPONSE}={http_response})"
            ),
            format!("set {INTERFACES}=true and {HTTP_RESPONSE}=false, or disable {TESTIFY_MOCK}"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use oag_codegen::RawOptions;

    use super::*;
    use crate::options::registry;

    fn state_with(pairs: &[(&str, bool)]) -> ConfigState {
        let raw: RawOptions = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), toml::Value::Boolean(*v)))
            .collect();
        registry().resolve(&raw).unwrap()
    }

    #[test]
    fn test_defaults_pass() {
        assert!(validate(&state_with(&[])).is_ok());
    }

    #[test]
    fn test_mock_with_interfaces_and_no_http_response_passes() {
        let state = state_with(&[
            (TESTIFY_MOCK, true),
            (INTERFACES, true),
            (HTTP_RESPONSE, false),
        ]);
        assert!(validate(&state).is_ok());
    }

    #[test]
    fn test_mock_without_interfaces_fails() {
        let state = state_with(&[(TESTIFY_MOCK, true), (HTTP_RESPONSE, false)]);
        let err = validate(&state).unwrap_err();
        assert!(matches!(err, Error::OptionConstraint { .. }));
        let msg = err.to_string();
        assert!(msg.contains("interfaces=false"));
        assert!(msg.contains("httpResponse=false"));
    }

    #[test]
    fn test_mock_with_http_response_fails() {
        let state = state_with(&[(TESTIFY_MOCK, true), (INTERFACES, true)]);
        let err = validate(&state).unwrap_err();
        assert!(matches!(err, Error::OptionConstraint { .. }));
        assert!(err.to_string().contains("httpResponse=true"));
    }

    #[test]
    fn test_interfaces_alone_is_fine() {
        let state = state_with(&[(INTERFACES, true)]);
        assert!(validate(&state).is_ok());
    }
}
