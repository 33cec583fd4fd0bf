use serde::{Deserialize, Serialize};

use crate::common::simple_types::{LineItemId, UnitPrice};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine_types: Vec<String>,
    pub rating: f32,
    /// A minute range such as `"25-35 min"`.
    pub delivery_time: String,
    pub promotional_tag: Option<String>,
    pub distance: Option<String>,
    /// `"$"` to `"$$$$"`.
    pub price_range: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: LineItemId,
    pub name: String,
    pub description: String,
    pub price: UnitPrice,
    pub category: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Relevance,
    Rating,
    DeliveryTime,
}

/// One page of a listing. `page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
}

/// An entry in the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Listing filters as entered by the user. Empty strings match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Category slug such as `"coffee-tea"`.
    pub category: String,
    pub search: String,
    pub sort: SortOption,
}
