//! Text → reply lookup. Pure, transport-free, so it tests in isolation.

use teloxide::types::{KeyboardMarkup, ParseMode};

use crate::content;
use crate::menu;

/// An outgoing message, constructed fresh per response.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub keyboard: Option<KeyboardMarkup>,
}

impl Reply {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parse_mode: None,
            keyboard: None,
        }
    }
}

/// Maps incoming message text onto a canned reply.
///
/// `/start` gets the welcome message with the menu keyboard attached; the
/// six menu labels get their static responses; everything else is silently
/// ignored. Matching is exact string equality, nothing fuzzier.
pub fn respond_to(text: &str, first_name: &str) -> Option<Reply> {
    match text {
        "/start" => Some(Reply {
            text: content::welcome_text(first_name),
            parse_mode: None,
            keyboard: Some(menu::menu_keyboard()),
        }),
        menu::BTN_SOS => Some(Reply {
            text: content::SOS_TEXT.to_string(),
            parse_mode: Some(ParseMode::Markdown),
            keyboard: None,
        }),
        menu::BTN_TIPS => Some(Reply::plain(content::TIPS_TEXT)),
        menu::BTN_STORIES => Some(Reply::plain(content::STORIES_TEXT)),
        menu::BTN_RESOURCES => Some(Reply::plain(content::RESOURCES_TEXT)),
        menu::BTN_ASK => Some(Reply::plain(content::ASK_TEXT)),
        menu::BTN_ABOUT => Some(Reply::plain(content::ABOUT_TEXT)),
        _ => None,
    }
}
