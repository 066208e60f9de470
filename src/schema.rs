use crate::fauna::client::FaunaClient;
use crate::fauna::error::ApiResult;
use crate::fauna::object::ClassConfig;
use tracing::debug;

/// The fixed schema expected by the FaunaChat example app.
///
/// One data class per chat message, with a single event set to page through the
/// messages belonging to a chat. The shape is deliberately not configurable; the
/// mobile test suite hardcodes these names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition {
    classes: Vec<ClassDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
    pub event_sets: Vec<String>,
}

impl SchemaDefinition {
    /// The chat-message schema: class `message` with event set `chat`.
    pub fn chat() -> Self {
        Self {
            classes: vec![ClassDefinition {
                name: "message".to_string(),
                event_sets: vec!["chat".to_string()],
            }],
        }
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    /// Push this declaration to the remote service, class by class.
    ///
    /// Must run under a publisher-key session; root sessions are not used for
    /// schema changes.
    pub async fn apply(&self, publisher: &FaunaClient) -> ApiResult<()> {
        for class in &self.classes {
            debug!("applying config for class {}", class.name);
            let config = ClassConfig {
                event_sets: class.event_sets.clone(),
            };
            publisher.update_class_config(&class.name, &config).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fauna::client::{FaunaClient, SessionAuth};
    use std::str::FromStr;
    use url::Url;

    #[test]
    fn test_chat_schema_shape() {
        let schema = SchemaDefinition::chat();
        assert_eq!(schema.classes().len(), 1);
        let class = &schema.classes()[0];
        assert_eq!(class.name, "message");
        assert_eq!(class.event_sets, vec!["chat".to_string()]);
    }

    #[test_log::test(tokio::test)]
    async fn test_apply_puts_class_config() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/classes/message/config")
            .match_body(mockito::Matcher::Json(serde_json::json!({"event_sets": ["chat"]})))
            .with_status(200)
            .with_body(r#"{"resource": {}}"#)
            .create_async()
            .await;
        let api_url = Url::from_str(&server.url()).unwrap();
        let publisher = FaunaClient::builder(api_url, SessionAuth::Key("pub-secret".to_string()))
            .try_build()
            .unwrap();
        SchemaDefinition::chat()
            .apply(&publisher)
            .await
            .expect("schema apply must succeed");
        mock.assert_async().await;
    }
}
