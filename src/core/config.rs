use std::env;

/// Persona instruction prepended to every provider call. Callers can
/// never alter this through request input; it is only overridable via
/// process configuration at startup.
pub const SYSTEM_PROMPT: &str = "You are RutDoc™, a scent strategist trained on whitetail communication. You speak clearly and tactically. Never guess. Never hype. Never name competitors. You only teach what works.";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub system_message: String,
    pub relay_api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "2222";
        let openai_api_hostname = env::var("RUTDOC_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let openai_model = env::var("RUTDOC_LLM_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
        let system_message =
            env::var("RUTDOC_SYSTEM_MESSAGE").unwrap_or_else(|_| SYSTEM_PROMPT.to_string());
        let relay_api_url = env::var("RUTDOC_RELAY_API_URL")
            .unwrap_or_else(|_| format!("http://{}:{}/api/rutdoc", host, port));

        Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
            relay_api_url,
        }
    }
}
