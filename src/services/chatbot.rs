use tracing::{debug, error, warn};

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    rules::{EMPTY_COMPLETION_REPLY, INSUFFICIENT_BALANCE_REPLY, MISCONFIGURED_REPLY, UPSTREAM_ERROR_PREFIX},
    services::{
        deepseek::Completion,
        prompt::{compose_messages, last_user_message, normalize_kb},
    },
    state::AppState,
};

/// Relay one chat request upstream.
///
/// A missing key and upstream rejections are answered as ordinary replies.
/// Only transport failures surface as `Err`.
pub async fn generate_reply(state: &AppState, request: ChatRequest) -> Result<ChatReply, AppError> {
    let Some(api_key) = state.config.api_key.as_deref() else {
        warn!("DEEPSEEK_API_KEY is not set, returning misconfiguration reply");
        return Ok(ChatReply::new(MISCONFIGURED_REPLY));
    };

    let last_user = last_user_message(&request.messages);
    let kb = normalize_kb(request.kb.as_deref());
    debug!(turns = request.messages.len(), kb_bytes = kb.len(), "relaying chat");

    let messages = compose_messages(last_user, kb);
    let completion = state
        .client
        .complete(api_key, &messages)
        .await
        .inspect_err(|e| error!(error = %e, "upstream request failed"))?;

    Ok(ChatReply::new(answer_for(completion)))
}

pub fn answer_for(completion: Completion) -> String {
    match completion {
        Completion::Success(content) => content.unwrap_or_else(|| EMPTY_COMPLETION_REPLY.to_string()),
        Completion::Rejected { status, error } => {
            let message = error.message();
            warn!(%status, upstream_message = message, "upstream rejected request");

            if message.to_lowercase().contains("insufficient balance") {
                INSUFFICIENT_BALANCE_REPLY.to_string()
            } else {
                format!("{UPSTREAM_ERROR_PREFIX}{message}")
            }
        }
    }
}
