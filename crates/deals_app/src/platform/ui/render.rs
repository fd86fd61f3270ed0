use deals_core::{AppViewModel, DisplayDeal, FetchStatus};

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![header(view)];

    match view.status {
        FetchStatus::Idle => lines.push("Deals have not been requested yet.".to_string()),
        FetchStatus::Loading => {
            lines.extend((0..LOADING_PLACEHOLDER_ROWS).map(|_| PLACEHOLDER_ROW.to_string()));
        }
        FetchStatus::Failed => {
            let reason = view.failure.as_deref().unwrap_or("unknown error");
            lines.push(format!(
                "Could not load deals ({reason}). Type {RETRY_COMMAND} to try again."
            ));
        }
        FetchStatus::Loaded if view.deals.is_empty() => {
            if view.total_loaded == 0 {
                lines.push("No deals right now.".to_string());
            } else {
                lines.push("No deals match your search.".to_string());
            }
        }
        FetchStatus::Loaded => lines.extend(view.deals.iter().map(format_deal_row)),
    }

    lines.push(format!(
        "Type to search, {RETRY_COMMAND} to reload, {QUIT_COMMAND} to exit."
    ));
    lines
}

fn header(view: &AppViewModel) -> String {
    let term = view.search_term.trim();
    if term.is_empty() || view.status != FetchStatus::Loaded {
        return HEADER_TITLE.to_string();
    }
    format!(
        "{HEADER_TITLE} matching \"{term}\" ({} of {})",
        view.deals.len(),
        view.total_loaded
    )
}

fn format_deal_row(deal: &DisplayDeal) -> String {
    let mut row = format!(
        "{title} | Store #{store} | ${price}",
        title = deal.title,
        store = deal.record.store,
        price = deal.formatted_price
    );
    if let Some(original) = &deal.formatted_original_price {
        row.push_str(&format!(" (was ${original})"));
    }
    if let Some(badge) = deal.discount_badge {
        row.push_str(&format!(" -{badge}%"));
    }
    row.push_str(" | ");
    row.push_str(&deal.record.url);
    row
}
