use serde::Deserialize;

/// A single inbound event from Telegram, as delivered to the webhook.
/// Read-only input; only the fields the dispatcher needs are modeled,
/// everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct Update {
    #[allow(dead_code)]
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    pub from: Option<User>,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub first_name: String,
}

impl Message {
    /// Sender display name. Channel posts and service messages have no
    /// `from`; greet those neutrally instead of dropping the update.
    pub fn sender_name(&self) -> &str {
        self.from.as_ref().map_or("ወዳጄ", |u| u.first_name.as_str())
    }
}
