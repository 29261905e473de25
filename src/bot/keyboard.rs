//! Outbound message texts and keyboard construction.

use rust_decimal::Decimal;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

use crate::pricing::Formula;

/// Label of the persistent menu button.
pub const MENU_BUTTON: &str = "Menu";

/// Greeting carried by the menu-keyboard message.
pub const MENU_PROMPT: &str = "Welcome! Use the menu to request a rate.";

/// Prompt carried by the inline commission keyboard.
pub const COMMISSION_PROMPT: &str = "Choose a commission for the rate:";

/// Sent when a callback payload is not a decimal commission.
pub const COMMISSION_ERROR: &str = "Failed to process the commission value.";

/// Sent when the rate fetch fails, whatever the reason.
pub const RATE_ERROR: &str = "Failed to fetch the exchange rate. Try again later.";

/// Persistent reply keyboard with the single menu button.
#[must_use]
pub fn menu_keyboard() -> KeyboardMarkup {
    let mut markup = KeyboardMarkup::new([[KeyboardButton::new(MENU_BUTTON)]]);
    markup.resize_keyboard = true;
    markup
}

/// Inline keyboard with the five fixed commission choices.
///
/// Callback payloads are the decimal commission values; the cost-basis
/// button carries the withdrawal fee itself, which selects the internal
/// formula downstream.
#[must_use]
pub fn commission_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new([
        vec![
            InlineKeyboardButton::callback("1.5%", "1.5"),
            InlineKeyboardButton::callback("2.0%", "2.0"),
        ],
        vec![
            InlineKeyboardButton::callback("2.5%", "2.5"),
            InlineKeyboardButton::callback("3.0%", "3.0"),
        ],
        vec![InlineKeyboardButton::callback("Cost basis incl. fee", "0.26")],
    ])
}

/// Reply text for a computed rate, both values with two decimals.
#[must_use]
pub fn rate_reply(commission: Decimal, rate: Decimal, formula: Formula) -> String {
    match formula {
        Formula::CostBasis => {
            format!("Cost-basis rate with {commission:.2}% commission: {rate:.2}")
        }
        Formula::Customer => format!("Rate with {commission:.2}% commission: {rate:.2}"),
    }
}
