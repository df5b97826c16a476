// src/domain/filter.rs

use crate::domain::house::House;

/// Category chips shown on the home screen. "All" disables the filter.
pub const CATEGORIES: [&str; 4] = ["All", "House", "Apartment", "Villa"];

/// A category card on the explore screen: name as first seen in the data,
/// number of listings, and the icon name used by the templates.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub icon: &'static str,
}

/// Apply the search and category filters the way the listing screens do:
/// case-insensitive substring match of `query` on the address, and
/// case-insensitive equality match on the category. An empty query or the
/// "All" category leaves that dimension unfiltered.
pub fn filter_houses(houses: &[House], query: &str, category: &str) -> Vec<House> {
    let query = query.trim().to_lowercase();

    houses
        .iter()
        .filter(|house| query.is_empty() || house.address.to_lowercase().contains(&query))
        .filter(|house| {
            category.eq_ignore_ascii_case("all") || house.category.eq_ignore_ascii_case(category)
        })
        .cloned()
        .collect()
}

/// Icon name for a category card.
pub fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "house" => "home",
        "apartment" => "business",
        "villa" => "sunny",
        "condo" => "key",
        _ => "grid",
    }
}

/// Count listings per category for the explore screen. Categories compare
/// case-insensitively and keep the spelling they first appear with.
pub fn category_summaries(houses: &[House]) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for house in houses {
        if let Some(existing) = summaries
            .iter_mut()
            .find(|s| s.category.eq_ignore_ascii_case(&house.category))
        {
            existing.count += 1;
        } else {
            summaries.push(CategorySummary {
                category: house.category.clone(),
                count: 1,
                icon: category_icon(&house.category),
            });
        }
    }

    summaries
}
