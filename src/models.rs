//! Frontend Models
//!
//! View-level data; domain types live in `booking_core`.

/// Top-level screens of the storefront
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Calendar,
    Product,
    Checkout,
    Contact,
    /// Landing page for an emailed squad invite
    AcceptInvite,
}

impl Page {
    /// Pages reachable from the header navigation
    pub const NAV: [Page; 3] = [Page::Calendar, Page::Product, Page::Contact];

    /// Page to open for the address bar's query string; invite emails
    /// link to `?invite=...`
    pub fn landing(search: &str) -> Page {
        let query = search.trim_start_matches('?');
        if query.split('&').any(|pair| pair == "invite" || pair.starts_with("invite=")) {
            Page::AcceptInvite
        } else {
            Page::Calendar
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Calendar => "Lessons",
            Page::Product => "Bubble the Seahorse",
            Page::Checkout => "Checkout",
            Page::Contact => "Contact",
            Page::AcceptInvite => "Create a JoinIn account",
        }
    }
}

/// A row of the lesson catalogue tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueRow {
    /// Category key, or `{category}-{index}` for a lesson
    pub key: String,
    pub title: &'static str,
    pub tone: &'static str,
    /// Number of lessons below a category; 0 for lessons
    pub child_count: usize,
}

impl CatalogueRow {
    pub fn is_category(&self) -> bool {
        self.child_count > 0
    }
}
