use serde::{Deserialize, Serialize};
use strum::Display;

/// Scope of an API key issued by the service.
///
/// `Publisher` keys may modify schema and mediate client access; `Client` keys are
/// the minimally-privileged keys embedded in end-user-facing apps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum KeyRole {
    Publisher,
    Client,
}

/// An API key as returned by the service, held in memory only until written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub role: KeyRole,
    pub secret: String,
}

/// Every successful response wraps its payload in a `resource` object.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct ResourceEnvelope<T> {
    pub resource: T,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct KeyResource {
    pub key: String,
}

/// Per-class configuration applied during schema migration.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq))]
pub struct ClassConfig {
    pub event_sets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyRole::Publisher, "publisher")]
    #[case(KeyRole::Client, "client")]
    fn test_key_role_display(#[case] role: KeyRole, #[case] expected: &str) {
        assert_eq!(role.to_string(), expected);
    }

    #[test]
    fn test_deserialize_key_envelope() {
        let json = r#"{"resource": {"ref": "keys/101", "key": "abc123", "class": "keys"}}"#;
        let envelope: ResourceEnvelope<KeyResource> =
            serde_json::from_str(json).expect("Deserialization must not fail");
        assert_eq!(envelope.resource.key, "abc123");
    }

    #[test]
    fn test_serialize_class_config() {
        let config = ClassConfig {
            event_sets: vec!["chat".to_string()],
        };
        let json = serde_json::to_value(&config).expect("Serialization must not fail");
        assert_eq!(json, serde_json::json!({"event_sets": ["chat"]}));
    }
}
