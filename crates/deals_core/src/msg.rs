use crate::{DealRecord, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The consuming view became visible; load the first page.
    ViewMounted,
    /// User edited the search box.
    SearchChanged(String),
    /// User asked to load the deals again, typically after a failure.
    RetryRequested,
    /// The consuming view went away; drop any outstanding retrieval.
    ViewUnmounted,
    /// Engine delivered a page of deals.
    FetchSucceeded {
        generation: Generation,
        items: Vec<DealRecord>,
    },
    /// Engine could not deliver a page of deals.
    FetchFailed {
        generation: Generation,
        reason: String,
    },
}
