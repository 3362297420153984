use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.85 = 85%). Never as percentages.
pub type Rate = Decimal;

/// Bounded sub-scores and the overall viability score, always in [0, 100].
pub type Score = Decimal;

/// Progress toward the facility-inspection approval required before a
/// residence may operate as a licensed adult family home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    /// Inspection approval on record.
    Approved,
    /// Inspected but not yet approved.
    Inspected,
    /// Listing text mentions licensing without evidence.
    Mentioned,
    /// Explicitly no approval.
    None,
    #[default]
    Unknown,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Approved => "approved",
            LicenseStatus::Inspected => "inspected",
            LicenseStatus::Mentioned => "mentioned",
            LicenseStatus::None => "none",
            LicenseStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw listing record as supplied by the acquisition layer.
///
/// Every field is serde-defaulted: absent numeric fields resolve to zero,
/// absent text to the empty string, and an absent licensing status to
/// `Unknown`. Deserialization never fails on a missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub price: Money,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: Decimal,
    #[serde(default)]
    pub sqft: Decimal,
    #[serde(default)]
    pub property_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub license_status: LicenseStatus,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_listing_defaults_on_missing_fields() {
        let listing: Listing = serde_json::from_str(r#"{"address": "123 Main St"}"#).unwrap();
        assert_eq!(listing.address, "123 Main St");
        assert_eq!(listing.price, Decimal::ZERO);
        assert_eq!(listing.bedrooms, 0);
        assert_eq!(listing.sqft, Decimal::ZERO);
        assert_eq!(listing.county, "");
        assert_eq!(listing.license_status, LicenseStatus::Unknown);
    }

    #[test]
    fn test_license_status_wire_names() {
        let listing: Listing =
            serde_json::from_str(r#"{"license_status": "approved"}"#).unwrap();
        assert_eq!(listing.license_status, LicenseStatus::Approved);

        let listing: Listing = serde_json::from_str(r#"{"license_status": "none"}"#).unwrap();
        assert_eq!(listing.license_status, LicenseStatus::None);
    }

    #[test]
    fn test_listing_full_record() {
        let listing: Listing = serde_json::from_str(
            r#"{
                "address": "456 Oak Ave",
                "city": "Olympia",
                "county": "Thurston",
                "price": "650000",
                "bedrooms": 4,
                "bathrooms": "2.5",
                "sqft": "2400",
                "property_type": "rambler",
                "license_status": "inspected",
                "source": "nwmls"
            }"#,
        )
        .unwrap();
        assert_eq!(listing.price, dec!(650000));
        assert_eq!(listing.bathrooms, dec!(2.5));
        assert_eq!(listing.license_status, LicenseStatus::Inspected);
    }
}
