use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{ChatRequest, ChatResponse};

impl<S: KeyValueStore> ApiClient<S> {
    /// Ask the assistant a question and return its reply text.
    pub async fn send_chat(&self, message: &str) -> ApiResult<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::Validation("Message is empty".into()));
        }
        let request = ChatRequest {
            message: message.to_string(),
        };
        let reply: ChatResponse = self.post("/chat/", &request).await?;
        Ok(reply.response)
    }
}
