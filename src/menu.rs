//! The static six-button main menu.

use teloxide::types::{KeyboardButton, KeyboardMarkup};

pub const BTN_SOS: &str = "🆘 እርዳኝ (SOS)";
pub const BTN_TIPS: &str = "🧠 ምክር/ዘዴዎች";
pub const BTN_STORIES: &str = "💪 የለውጥ ታሪኮች";
pub const BTN_RESOURCES: &str = "📚 መርጃዎች";
pub const BTN_ASK: &str = "❓ ጥያቄ ለመጠየቅ";
pub const BTN_ABOUT: &str = "ℹ️ ስለ ቦቱ";

/// All labels in menu order.
pub const LABELS: [&str; 6] = [
    BTN_SOS,
    BTN_TIPS,
    BTN_STORIES,
    BTN_RESOURCES,
    BTN_ASK,
    BTN_ABOUT,
];

/// Builds the reply keyboard: two buttons per row, resized to content.
pub fn menu_keyboard() -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = LABELS
        .chunks(2)
        .map(|pair| pair.iter().map(|label| KeyboardButton::new(*label)).collect())
        .collect();

    KeyboardMarkup::new(rows).resize_keyboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyboard_is_three_rows_of_two() {
        let keyboard = menu_keyboard();
        assert_eq!(keyboard.keyboard.len(), 3);
        for row in &keyboard.keyboard {
            assert_eq!(row.len(), 2);
        }
    }

    #[test]
    fn keyboard_preserves_menu_order() {
        let keyboard = menu_keyboard();
        let labels: Vec<&str> = keyboard
            .keyboard
            .iter()
            .flatten()
            .map(|b| b.text.as_str())
            .collect();
        assert_eq!(labels, LABELS);
    }

    #[test]
    fn keyboard_is_resized() {
        assert!(menu_keyboard().resize_keyboard);
    }
}
