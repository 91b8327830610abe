//! School identity domain model.
//!
//! # Responsibility
//! - Define the editable identity record shown on every view.
//! - Provide the hardcoded first-run default.
//!
//! # Invariants
//! - Fields are display strings; empty values are tolerated by design
//!   (no input validation in this layer).
//! - A missing `logo_url` renders as a placeholder glyph in the UI.

use serde::{Deserialize, Serialize};

/// Editable school identity, persisted as one JSON record.
///
/// Wire field names match the stored shape of the source data
/// (`logoUrl` in camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolIdentity {
    /// Display name, non-empty by convention only.
    pub name: String,
    /// Display address line.
    pub address: String,
    /// Optional logo URL; `None` means "show the placeholder".
    #[serde(rename = "logoUrl", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl Default for SchoolIdentity {
    /// First-run identity used until the user saves their own.
    fn default() -> Self {
        Self {
            name: "SD Negeri 01 Indonesia".to_string(),
            address: "Jl. Merdeka No. 1, Jakarta Pusat".to_string(),
            logo_url: Some("https://picsum.photos/seed/school/100/100".to_string()),
        }
    }
}

impl SchoolIdentity {
    /// Returns whether a logo URL is present and non-blank.
    pub fn has_logo(&self) -> bool {
        self.logo_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::SchoolIdentity;

    #[test]
    fn default_matches_first_run_identity() {
        let identity = SchoolIdentity::default();

        assert_eq!(identity.name, "SD Negeri 01 Indonesia");
        assert_eq!(identity.address, "Jl. Merdeka No. 1, Jakarta Pusat");
        assert!(identity.has_logo());
    }

    #[test]
    fn blank_logo_counts_as_absent() {
        let mut identity = SchoolIdentity::default();

        identity.logo_url = Some("   ".to_string());
        assert!(!identity.has_logo());

        identity.logo_url = None;
        assert!(!identity.has_logo());
    }

    #[test]
    fn wire_shape_uses_camel_case_logo_field() {
        let identity = SchoolIdentity {
            name: "SDN Contoh".to_string(),
            address: "Jl. Contoh No. 2".to_string(),
            logo_url: Some("https://example.com/logo.png".to_string()),
        };

        let json = serde_json::to_value(&identity).expect("identity serializes");
        assert_eq!(json["name"], "SDN Contoh");
        assert_eq!(json["logoUrl"], "https://example.com/logo.png");

        let decoded: SchoolIdentity =
            serde_json::from_value(json).expect("identity decodes");
        assert_eq!(decoded, identity);
    }

    #[test]
    fn missing_logo_field_decodes_as_none() {
        let decoded: SchoolIdentity = serde_json::from_str(
            r#"{"name":"SDN Tanpa Logo","address":"Jl. Kosong"}"#,
        )
        .expect("identity decodes without logoUrl");

        assert_eq!(decoded.logo_url, None);
    }
}
