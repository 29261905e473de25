//! Update dispatch.
//!
//! Two branches: `/start` messages and commission callback queries. Every
//! other update shape falls through to the default handler and is dropped.

pub mod handler;
pub mod keyboard;
pub mod reply_cache;

use std::sync::Arc;

use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::trace;

use crate::exchange::SummaryClient;
use handler::{handle_callback, handle_start};
use reply_cache::ReplyCache;

/// Run the long-polling dispatcher until shutdown.
pub async fn run_dispatcher(bot: Bot, client: Arc<SummaryClient>) {
    let cache = Arc::new(ReplyCache::new());

    let tree = dptree::entry()
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.text() == Some("/start"))
                .endpoint(handle_start),
        )
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![client, cache])
        .default_handler(|update| async move {
            trace!(update_id = update.id.0, "Ignoring update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text("Update handler failed"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
