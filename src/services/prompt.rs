use crate::{
    message::Message,
    rules::{KB_PREFIX, PERSONA_RULES, STYLE_EXAMPLES},
};

/// Content of the newest `user` turn, or an empty string when there is none.
/// Older turns and assistant/system turns are not forwarded.
pub fn last_user_message(messages: &[Message]) -> &str {
    messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.as_str())
        .unwrap_or("")
}

pub fn normalize_kb(kb: Option<&str>) -> &str {
    kb.map(str::trim).unwrap_or("")
}

/// Upstream message list, always in this order:
/// persona rules, style examples, knowledge base, user turn.
pub fn compose_messages(last_user: &str, kb: &str) -> Vec<Message> {
    vec![
        Message::system(PERSONA_RULES),
        Message::system(STYLE_EXAMPLES),
        Message::system(format!("{KB_PREFIX}{kb}")),
        Message::user(last_user),
    ]
}
