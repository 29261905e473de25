//! Inbound update handlers.

use std::sync::Arc;

use rust_decimal::Decimal;
use teloxide::prelude::*;
use tracing::{debug, info, warn};

use crate::bot::keyboard;
use crate::bot::reply_cache::ReplyCache;
use crate::exchange::SummaryClient;
use crate::pricing;

pub type HandlerResult = Result<(), teloxide::RequestError>;

/// `/start`: send the persistent menu button, then the commission choices.
pub async fn handle_start(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, keyboard::MENU_PROMPT)
        .reply_markup(keyboard::menu_keyboard())
        .await?;

    bot.send_message(msg.chat.id, keyboard::COMMISSION_PROMPT)
        .reply_markup(keyboard::commission_keyboard())
        .await?;

    Ok(())
}

/// Commission button pressed: fetch the rate, quote it, replace the
/// previous reply in this chat.
pub async fn handle_callback(
    bot: Bot,
    query: CallbackQuery,
    client: Arc<SummaryClient>,
    cache: Arc<ReplyCache>,
) -> HandlerResult {
    // Stop the client-side spinner regardless of what happens next.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        debug!(error = %e, "Failed to answer callback query");
    }

    let Some(chat_id) = query.message.as_ref().map(|m| m.chat().id) else {
        return Ok(());
    };
    let Some(payload) = query.data.as_deref() else {
        return Ok(());
    };

    let Ok(commission) = payload.parse::<Decimal>() else {
        warn!(payload, "Undecodable callback payload");
        bot.send_message(chat_id, keyboard::COMMISSION_ERROR).await?;
        return Ok(());
    };

    let rate = match client.last_traded_price().await {
        Ok(rate) => rate,
        Err(e) => {
            warn!(error = %e, "Rate fetch failed");
            bot.send_message(chat_id, keyboard::RATE_ERROR).await?;
            return Ok(());
        }
    };

    let (adjusted, formula) = pricing::adjusted_rate(rate, commission);
    info!(
        chat_id = chat_id.0,
        commission = %commission,
        rate = %rate,
        adjusted = %adjusted,
        "Quoting rate"
    );

    // Best-effort delete of the previous reply before sending the new one.
    if let Some(previous) = cache.take(chat_id) {
        if let Err(e) = bot.delete_message(chat_id, previous).await {
            debug!(error = %e, "Failed to delete previous reply");
        }
    }

    let reply = bot
        .send_message(chat_id, keyboard::rate_reply(commission, adjusted, formula))
        .await?;
    cache.record(chat_id, reply.id);

    Ok(())
}
