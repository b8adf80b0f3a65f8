use serde::{Deserialize, Serialize};

/// One license entry from `GET /v2/licenses`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct License {
    /// License number, e.g. `CUL000003`
    pub license_number: String,
    /// Human-readable license name
    pub license_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_camel_case() {
        let license: License = serde_json::from_str(
            r#"{"licenseNumber":"CUL000003","licenseName":"Example Cultivator"}"#,
        )
        .unwrap();
        assert_eq!(license.license_number, "CUL000003");
        assert_eq!(license.license_name, "Example Cultivator");
    }
}
