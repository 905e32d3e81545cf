//! Discord REST API client.

mod client;
mod error;
mod receiver;
mod types;

pub use client::DiscordClient;
pub use error::DiscordError;
pub use receiver::MessageReceiver;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use std::time::Duration;
    use tokio_stream::StreamExt;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> DiscordClient {
        DiscordClient::new(mock_server.uri(), &SecretString::new("test-token".into())).unwrap()
    }

    fn message_json(id: &str, content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "channel_id": "42",
            "author": {
                "id": "1001",
                "username": "becky",
                "discriminator": "0001",
                "bot": false
            },
            "content": content,
            "timestamp": "2021-03-01T12:00:00.000000+00:00"
        })
    }

    #[tokio::test]
    async fn test_health_check_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(client.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_current_user_sends_bot_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .and(header("Authorization", "Bot test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "9999",
                "username": "squishy-overlord",
                "discriminator": "8086",
                "bot": true
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let user = client.current_user().await.unwrap();

        assert_eq!(user.id, "9999");
        assert!(user.bot);
        assert_eq!(user.tag(), "squishy-overlord#8086");
    }

    #[tokio::test]
    async fn test_current_user_invalid_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users/@me"))
            .respond_with(ResponseTemplate::new(401).set_body_string("401: Unauthorized"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.current_user().await;

        assert!(matches!(result, Err(DiscordError::Api(_))));
    }

    #[tokio::test]
    async fn test_messages_sorted_oldest_first() {
        let mock_server = MockServer::start().await;

        // The API answers newest first.
        let body = serde_json::json!([
            message_json("300", "third"),
            message_json("200", "second"),
            message_json("100", "first"),
        ]);

        Mock::given(method("GET"))
            .and(path("/channels/42/messages"))
            .and(query_param("limit", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let messages = client.messages_after("42", None).await.unwrap();

        let ids: Vec<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["100", "200", "300"]);
        assert_eq!(messages[0].content, "first");
        assert_eq!(messages[0].author.tag(), "becky#0001");
    }

    #[tokio::test]
    async fn test_messages_after_passes_cursor() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/channels/42/messages"))
            .and(query_param("after", "200"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([message_json(
                    "300", "third"
                )])),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let messages = client.messages_after("42", Some("200")).await.unwrap();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "300");
    }

    #[tokio::test]
    async fn test_create_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/channels/42/messages"))
            .and(body_json(serde_json::json!({"content": "pong"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(message_json("400", "pong")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        client.create_message("42", "pong").await.unwrap();
    }

    #[tokio::test]
    async fn test_create_message_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/channels/42/messages"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Missing Permissions"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.create_message("42", "pong").await;

        assert!(matches!(result, Err(DiscordError::SendFailed(_))));
    }

    #[tokio::test]
    async fn test_guild_roles_and_member() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/guilds/7/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "70", "name": "@everyone"},
                {"id": "71", "name": "BotAdmin"}
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/guilds/7/members/1001"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "user": {"id": "1001", "username": "becky", "discriminator": "0001"},
                "roles": ["71"]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);

        let roles = client.guild_roles("7").await.unwrap();
        assert_eq!(roles.len(), 2);
        assert_eq!(roles[1].name, "BotAdmin");

        let member = client.guild_member("7", "1001").await.unwrap();
        assert_eq!(member.roles, vec!["71"]);
    }

    #[tokio::test]
    async fn test_receiver_primes_then_yields_new_messages() {
        let mock_server = MockServer::start().await;

        // First poll (no cursor) primes the cursor at the newest id.
        Mock::given(method("GET"))
            .and(path("/channels/42/messages"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([message_json("100", "old history")])),
            )
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        // Subsequent polls carry after=100 and yield the new message.
        Mock::given(method("GET"))
            .and(path("/channels/42/messages"))
            .and(query_param("after", "100"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([message_json("200", "!!ping")])),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let receiver =
            MessageReceiver::new(client, vec!["42".to_string()], Duration::from_millis(10));
        let mut stream = Box::pin(receiver.stream());

        let msg = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("stream should yield before timing out")
            .expect("stream never ends");

        // The priming poll's history is not replayed.
        assert_eq!(msg.id, "200");
        assert_eq!(msg.content, "!!ping");
    }

    #[test]
    fn test_user_tag_without_discriminator() {
        let user = User {
            id: "1".into(),
            username: "modern".into(),
            discriminator: "0".into(),
            bot: false,
        };
        assert_eq!(user.tag(), "modern");
    }
}
