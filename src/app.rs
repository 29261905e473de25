//! App orchestration.

use std::sync::Arc;

use teloxide::Bot;
use tracing::info;

use crate::bot;
use crate::config::Config;
use crate::error::Result;
use crate::exchange::SummaryClient;

/// Main application struct.
pub struct App;

impl App {
    /// Wire the bot and the summary client, then run the update loop
    /// until shutdown.
    pub async fn run(config: Config) -> Result<()> {
        let bot = Bot::new(&config.bot_token);
        let client = Arc::new(SummaryClient::new(config.summary_url.clone()));

        info!(summary_url = %config.summary_url, "Update loop starting");
        bot::run_dispatcher(bot, client).await;

        Ok(())
    }
}
