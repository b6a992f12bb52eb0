//! HTML extraction for MyInstants pages.
//!
//! Each module handles one page shape: repeating listing cards, the sound
//! detail page, and the inline play-trigger attribute both rely on.

mod detail_extractor;
mod listing_extractor;
mod play_args;

pub use detail_extractor::*;
pub use listing_extractor::*;
pub use play_args::*;

use serde::{Deserialize, Serialize};

/// One sound as shown on a listing or search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    /// Second-to-last path segment of the sound's detail link.
    pub id: String,
    /// Visible title text of the card.
    pub title: String,
    /// Absolute URL of the sound's detail page.
    pub url: String,
    /// Absolute URL of the audio file.
    pub mp3: String,
}

/// Full representation of one sound from its dedicated page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDetail {
    pub id: String,
    /// Absolute URL of the detail page itself.
    pub url: String,
    pub title: String,
    /// None when the page has no play control.
    pub mp3: Option<String>,
    /// Empty when the description region is absent.
    pub description: String,
    /// Tag texts in document order, leading `#` stripped.
    pub tags: Vec<String>,
    /// 0 when the likes region is absent or unparsable.
    pub favorites: u64,
    /// 0 when no "<n> views" text is present.
    pub views: u64,
    pub uploader: Option<String>,
    pub uploader_url: Option<String>,
}
