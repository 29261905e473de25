//! Per-chat table of the bot's most recent rate reply.

use dashmap::DashMap;
use teloxide::types::{ChatId, MessageId};

/// Remembers the last rate reply sent to each chat so the next reply can
/// replace it. Keyed by chat id, so chats never interfere with each other
/// even when updates are handled concurrently.
#[derive(Default)]
pub struct ReplyCache {
    last_reply: DashMap<ChatId, MessageId>,
}

impl ReplyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the reply currently recorded for `chat`.
    pub fn take(&self, chat: ChatId) -> Option<MessageId> {
        self.last_reply.remove(&chat).map(|(_, id)| id)
    }

    /// Record `message_id` as the current reply for `chat`.
    pub fn record(&self, chat: ChatId, message_id: MessageId) {
        self.last_reply.insert(chat, message_id);
    }
}
