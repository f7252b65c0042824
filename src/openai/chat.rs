use anyhow::{Error, Result};

use crate::openai::{Message, completion};

/// Substituted when the provider answers without any usable message
/// content. Content absence is not an error so the reply field is
/// never empty.
pub const NO_REPLY_PLACEHOLDER: &str = "[No reply]";

/// Runs the next turn in chat by passing a transcript to the LLM and
/// returning the text of the first completion choice.
pub async fn reply(
    history: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, Error> {
    let resp = completion(history, api_hostname, api_key, model).await?;

    let text = match resp["choices"][0]["message"]["content"].as_str() {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => NO_REPLY_PLACEHOLDER.to_string(),
    };

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::Role;

    #[tokio::test]
    async fn test_reply_returns_first_choice_content() {
        let mut server = mockito::Server::new_async().await;

        let response_body = r#"{
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Use a drag rope."}},
                {"index": 1, "message": {"role": "assistant", "content": "Second choice"}}
            ]
        }"#;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create();

        let history = vec![Message::new(Role::User, "How do I set up a drag line?")];
        let result = reply(&history, server.url().as_str(), "test-key", "gpt-4o")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(result, "Use a drag rope.");
    }

    #[tokio::test]
    async fn test_reply_substitutes_placeholder_when_no_choices() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create();

        let history = vec![Message::new(Role::User, "Hello")];
        let result = reply(&history, server.url().as_str(), "test-key", "gpt-4o")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(result, NO_REPLY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_reply_substitutes_placeholder_when_content_empty() {
        let mut server = mockito::Server::new_async().await;

        let response_body = r#"{
            "choices": [{"index": 0, "message": {"role": "assistant", "content": ""}}]
        }"#;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create();

        let history = vec![Message::new(Role::User, "Hello")];
        let result = reply(&history, server.url().as_str(), "test-key", "gpt-4o")
            .await
            .unwrap();

        mock.assert();
        assert_eq!(result, NO_REPLY_PLACEHOLDER);
    }
}
