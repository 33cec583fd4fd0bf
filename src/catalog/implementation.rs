use tracing::debug;

use super::public_types::*;

pub const ITEMS_PER_PAGE: usize = 6;
const MAX_PAGE_LINKS: usize = 5;
const MIN_SUGGESTION_CHARS: usize = 2;

pub fn filter_restaurants<'a>(
    all: &'a [Restaurant],
    category: &str,
    search: &str,
) -> Vec<&'a Restaurant> {
    let category = category.trim().replacen('-', " ", 1).to_lowercase();
    let search = search.trim().to_lowercase();

    all.iter()
        .filter(|r| category.is_empty() || has_cuisine(r, &category))
        .filter(|r| {
            search.is_empty() || r.name.to_lowercase().contains(&search) || has_cuisine(r, &search)
        })
        .collect()
}

fn has_cuisine(restaurant: &Restaurant, needle: &str) -> bool {
    restaurant
        .cuisine_types
        .iter()
        .any(|cuisine| cuisine.to_lowercase().contains(needle))
}

/// Stable sort; `Relevance` leaves the order alone.
pub fn sort_restaurants(restaurants: &mut [&Restaurant], sort: SortOption) {
    match sort {
        SortOption::Relevance => {}
        SortOption::Rating => restaurants.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::DeliveryTime => restaurants.sort_by_key(|r| {
            let minutes = leading_minutes(&r.delivery_time);
            (minutes.is_none(), minutes)
        }),
    }
}

/// `"25-35 min"` -> `25`. Unparsable times sort last.
pub fn leading_minutes(delivery_time: &str) -> Option<u32> {
    delivery_time
        .split('-')
        .next()
        .and_then(|lower| lower.trim().trim_end_matches("min").trim().parse().ok())
}

pub fn search_restaurants<'a>(all: &'a [Restaurant], query: &ListingQuery) -> Vec<&'a Restaurant> {
    let mut found = filter_restaurants(all, &query.category, &query.search);
    sort_restaurants(&mut found, query.sort);
    debug!(
        category = %query.category,
        search = %query.search,
        matches = found.len(),
        "restaurant listing query"
    );
    found
}

pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let total_pages = if per_page == 0 {
        0
    } else {
        items.len().div_ceil(per_page)
    };

    if page == 0 || page > total_pages {
        return Page {
            items: &[],
            page,
            total_pages,
        };
    }

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start..end],
        page,
        total_pages,
    }
}

/// Keeps `current` unless `requested` names an existing page.
pub fn clamp_page(current: usize, requested: usize, total_pages: usize) -> usize {
    if (1..=total_pages).contains(&requested) {
        requested
    } else {
        current
    }
}

/// The pagination bar: at most five numbered links, the first and last page
/// always reachable, gaps shown as ellipses.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= MAX_PAGE_LINKS {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let half = MAX_PAGE_LINKS / 2;
    let mut links = Vec::with_capacity(MAX_PAGE_LINKS + 2);

    if current <= half + 1 {
        links.extend((1..MAX_PAGE_LINKS).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    } else if current >= total_pages - half {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((total_pages - MAX_PAGE_LINKS + 2..=total_pages).map(PageLink::Page));
    } else {
        links.push(PageLink::Page(1));
        links.push(PageLink::Ellipsis);
        links.extend((current - half + 1..=current + half - 1).map(PageLink::Page));
        links.push(PageLink::Ellipsis);
        links.push(PageLink::Page(total_pages));
    }
    links
}

/// Menu items grouped by category, categories in first-seen order.
pub fn menu_by_category(items: &[MenuItem]) -> Vec<(&str, Vec<&MenuItem>)> {
    let mut groups: Vec<(&str, Vec<&MenuItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category.as_str(), vec![item])),
        }
    }
    groups
}

// ---------------------------
// Delivery location
// ---------------------------

/// Known addresses containing `term`, case-insensitive. Inputs shorter than two
/// characters suggest nothing.
pub fn suggest_addresses<'a>(all: &'a [String], term: &str) -> Vec<&'a str> {
    if term.chars().count() < MIN_SUGGESTION_CHARS {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    all.iter()
        .filter(|address| address.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// The location to submit for a search box value; blank input submits nothing.
pub fn confirm_location(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    debug!(location = term, "delivery location set");
    Some(term.to_string())
}
