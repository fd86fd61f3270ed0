use crate::{DealRecord, FetchStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status: FetchStatus,
    pub deals: Vec<DisplayDeal>,
    pub failure: Option<String>,
    pub search_term: String,
    pub total_loaded: usize,
    pub dirty: bool,
}

/// A deal plus the fields the presentation renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDeal {
    pub record: DealRecord,
    /// Slug with hyphens turned into spaces.
    pub title: String,
    pub formatted_price: String,
    pub formatted_original_price: Option<String>,
    pub discount_badge: Option<i64>,
}
