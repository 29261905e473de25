//! Bahtbot - commission-adjusted USDT/THB rate quotes over Telegram.
//!
//! The bot answers `/start` with a fixed set of commission buttons. Each
//! button press fetches the USDT/THB last traded price from the Bitazza
//! Level-1 summary endpoint, applies the selected commission, and replies
//! with the adjusted rate, replacing the bot's previous reply in that chat.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Error types for the crate
//! - [`pricing`] - Commission-adjusted pricing math
//! - [`exchange`] - Level-1 summary client and payload decoding
//! - [`bot`] - Update dispatch, handlers, keyboards
//! - [`app`] - Application wiring

pub mod app;
pub mod bot;
pub mod config;
pub mod error;
pub mod exchange;
pub mod pricing;
