use serde::{Deserialize, Serialize};

/// One transfer entry from the `/v2/transfers/*` listing endpoints
///
/// Each transfer carries a manifest number that identifies the shipment
/// document rendered as a PDF.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Transfer id
    #[serde(default)]
    pub id: u64,
    /// Manifest number identifying the shipment document
    pub manifest_number: String,
    /// License number of the shipping facility
    #[serde(default)]
    pub shipper_facility_license_number: Option<String>,
    /// License number of the receiving facility
    #[serde(default)]
    pub recipient_facility_license_number: Option<String>,
    /// When the transfer was created, as reported by the server
    #[serde(default)]
    pub created_date_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_partial_fields() {
        let transfer: Transfer = serde_json::from_str(
            r#"{"id":77,"manifestNumber":"0000012345","shipperFacilityLicenseNumber":"CUL000003"}"#,
        )
        .unwrap();
        assert_eq!(transfer.id, 77);
        assert_eq!(transfer.manifest_number, "0000012345");
        assert_eq!(
            transfer.shipper_facility_license_number.as_deref(),
            Some("CUL000003")
        );
        assert!(transfer.created_date_time.is_none());
    }
}
