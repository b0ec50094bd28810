use serde::{Deserialize, Serialize};

/// Singleton profile document shown on the public landing page.
///
/// The stored record is overwritten wholesale on every update; there is no
/// partial patch and no versioning, the last writer wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Login request exchanging the shared admin password for a bearer credential.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    pub password: String,
}

/// Create/update payload for a social link.
///
/// `url` may arrive without a scheme; it is normalized before persistence so
/// the stored value is always absolute.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLink {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i64,
}

/// Create payload for a contact entry.
#[derive(Debug, Clone, Deserialize)]
pub struct NewContact {
    /// Kind of contact ("email", "wechat", ...). Wire name: `type`.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Private entries are stored but never listed publicly.
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub sort_order: i64,
}

/// Create payload for a project card.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_payload_maps_wire_type_field() {
        let raw = r#"{"type":"email","value":"me@example.com","is_public":true}"#;
        let contact = serde_json::from_str::<NewContact>(raw).expect("parse sample");

        assert_eq!(contact.kind, "email");
        assert_eq!(contact.value, "me@example.com");
        assert!(contact.is_public);
        assert_eq!(contact.sort_order, 0);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let link = serde_json::from_str::<NewLink>(r#"{"title":"Blog","url":"blog.example.com"}"#)
            .expect("parse sample");

        assert_eq!(link.icon, None);
        assert_eq!(link.sort_order, 0);

        let profile = serde_json::from_str::<Profile>("{}").expect("parse sample");
        assert_eq!(profile, Profile::default());
    }
}
