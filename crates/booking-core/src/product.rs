//! Product Page
//!
//! Session dates, availability, purchase options and the media carousel
//! for a bookable lesson.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::basket::BasketItem;

const SESSION_DATES: [&str; 31] = [
    "4th April", "11th April", "18th April", "25th April", "2nd May", "9th May", "16th May",
    "23rd May", "30th May", "4th June", "11th June", "18th Jun", "25th Jun", "2nd Jul", "9th Jul",
    "16th Jul", "23rd Jul", "30th Jul", "6th Aug", "13th Aug", "20th Aug", "27th Aug", "3rd Sep",
    "10th Sep", "17th Sep", "24th Sep", "1st Oct", "8th Oct", "15th Oct", "22nd Oct", "29th Oct",
];

/// Dates listed directly on the page; the rest live in the dates drawer
pub const MAIN_GRID_SIZE: usize = 11;

/// Dates with no spaces left
pub const FULL_DATES: [&str; 2] = ["date-5", "date-6"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDate {
    pub value: String,
    pub label: &'static str,
}

pub fn session_dates() -> Vec<SessionDate> {
    SESSION_DATES
        .iter()
        .enumerate()
        .map(|(i, label)| SessionDate { value: format!("date-{}", i + 1), label })
        .collect()
}

pub fn main_grid_dates() -> Vec<SessionDate> {
    session_dates().into_iter().take(MAIN_GRID_SIZE).collect()
}

pub fn drawer_dates() -> Vec<SessionDate> {
    session_dates().into_iter().skip(MAIN_GRID_SIZE).collect()
}

pub fn date_label(value: &str) -> Option<&'static str> {
    let index: usize = value.strip_prefix("date-")?.parse().ok()?;
    SESSION_DATES.get(index.checked_sub(1)?).copied()
}

pub fn is_main_grid_date(value: &str) -> bool {
    main_grid_dates().iter().any(|d| d.value == value)
}

pub fn has_spaces(value: &str) -> bool {
    !FULL_DATES.iter().any(|d| *d == value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PurchaseOption {
    /// Monthly block of sessions, billed at the item's cost
    #[default]
    Block,
    /// One session at the per-session price
    Single,
}

/// What the shopper has picked on the product page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection {
    pub option: PurchaseOption,
    pub date: String,
}

impl Default for ProductSelection {
    fn default() -> Self {
        Self { option: PurchaseOption::Block, date: "date-1".to_string() }
    }
}

impl ProductSelection {
    /// Select a date; unknown values are ignored
    pub fn select_date(&mut self, value: &str) {
        if date_label(value).is_some() {
            self.date = value.to_string();
        }
    }

    pub fn can_add_to_basket(&self) -> bool {
        has_spaces(&self.date)
    }

    /// A date chosen from the drawer shows as an extra grid button
    pub fn drawer_pick(&self) -> Option<&'static str> {
        if is_main_grid_date(&self.date) {
            None
        } else {
            date_label(&self.date)
        }
    }

    /// The basket line for this selection
    pub fn to_basket_item(&self, product: &BasketItem, id: impl Into<String>) -> BasketItem {
        let mut item = product.clone();
        item.id = id.into();
        if self.option == PurchaseOption::Single {
            item.cost = None;
            if let Some(label) = date_label(&self.date) {
                item.dates = Some(label.to_string());
            }
        }
        item
    }
}

/// The lesson featured on the product page
pub fn featured_product() -> BasketItem {
    BasketItem {
        id: "bubble-the-seahorse".to_string(),
        image: Some("seahorse.jpg".to_string()),
        title: "Bubble the Seahorse".to_string(),
        sub_title: Some("Every Tuesday at 11:30 - 12:00".to_string()),
        dates: Some("4th April - 25th April".to_string()),
        price: Some("£16.00".to_string()),
        price_quantity: Some("session".to_string()),
        cost: Some("£64.00".to_string()),
        billing: Some("Monthly on the 1st".to_string()),
        coach: Some("Michael Phelps".to_string()),
        ..BasketItem::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    YouTube,
}

/// One slide of the product carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn new(url: impl Into<String>, kind: MediaKind) -> Self {
        Self { url: url.into(), kind }
    }

    /// Address to load in the main slide
    pub fn source(&self) -> Option<String> {
        match self.kind {
            MediaKind::YouTube => youtube_id(&self.url).map(|id| format!("https://www.youtube.com/embed/{}", id)),
            _ => Some(self.url.clone()),
        }
    }

    /// Still image for the thumbnail strip; `None` for videos, which show
    /// their first frame
    pub fn thumbnail(&self) -> Option<String> {
        match self.kind {
            MediaKind::Image => Some(self.url.clone()),
            MediaKind::YouTube => youtube_id(&self.url).map(|id| format!("https://img.youtube.com/vi/{}/0.jpg", id)),
            MediaKind::Video => None,
        }
    }

    /// `video/<extension>` for a video file
    pub fn video_type(&self) -> Option<String> {
        match self.kind {
            MediaKind::Video => self.url.rsplit_once('.').map(|(_, ext)| format!("video/{}", ext)),
            _ => None,
        }
    }
}

/// Video id from the `v` query parameter of a YouTube watch URL
pub fn youtube_id(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let (_, query) = without_fragment.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "v")
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|id| !id.is_empty())
}

/// Which slide is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaCarousel {
    media: Vec<MediaItem>,
    current: usize,
}

impl MediaCarousel {
    pub fn new(media: Vec<MediaItem>) -> Self {
        Self { media, current: 0 }
    }

    pub fn media(&self) -> &[MediaItem] {
        &self.media
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.media.get(self.current)
    }

    /// Thumbnails only make sense with more than one slide
    pub fn shows_thumbnails(&self) -> bool {
        self.media.len() > 1
    }

    /// Jump to a slide; out-of-range indices are ignored
    pub fn go_to_slide(&mut self, index: usize) {
        if index < self.media.len() {
            debug!(index, "carousel slide changed");
            self.current = index;
        }
    }
}

/// Slides for the featured lesson
pub fn featured_media() -> Vec<MediaItem> {
    vec![
        MediaItem::new("seahorse.jpg", MediaKind::Image),
        MediaItem::new("finder-3.jpg", MediaKind::Image),
        MediaItem::new("enter-pool.mp4", MediaKind::Video),
        MediaItem::new("https://www.youtube.com/watch?v=LijdyVaaDnY", MediaKind::YouTube),
    ]
}
