use maud::{html, Markup};

use crate::domain::filter::CATEGORIES;
use crate::domain::house::House;

pub fn alert(message: &str) -> Markup {
    html! {
        div class="alert" { (message) }
    }
}

pub fn success_alert(message: &str) -> Markup {
    html! {
        div class="alert success" { (message) }
    }
}

/// Inline fetch-failure box with the manual retry action.
pub fn fetch_error(message: &str, retry_href: &str) -> Markup {
    html! {
        div class="center" {
            p class="alert" { (message) }
            a class="primary" href=(retry_href) { "Retry" }
        }
    }
}

/// Address search form. Submits back to `action` and keeps the selected
/// category in a hidden field so the filters compose.
pub fn search_bar(action: &str, query: &str, category: &str) -> Markup {
    html! {
        form class="search-bar" method="get" action=(action) {
            input
                type="search"
                name="q"
                value=(query)
                placeholder="Search houses by address...";
            input type="hidden" name="category" value=(category);
            button type="submit" class="primary" { "Search" }
        }
    }
}

/// The fixed category chips from the home screen.
pub fn category_chips(action: &str, query: &str, selected: &str) -> Markup {
    html! {
        div class="category-chips" {
            @for category in CATEGORIES {
                @let href = chip_href(action, query, category);
                @if category.eq_ignore_ascii_case(selected) {
                    a class="chip selected" href=(href) { (category) }
                } @else {
                    a class="chip" href=(href) { (category) }
                }
            }
        }
    }
}

fn chip_href(action: &str, query: &str, category: &str) -> String {
    let mut pairs = url::form_urlencoded::Serializer::new(String::new());
    pairs.append_pair("q", query);
    pairs.append_pair("category", category);
    format!("{action}?{}", pairs.finish())
}

pub fn house_card(house: &House) -> Markup {
    html! {
        a class="house-card" href={ "/house/" (house.id) } {
            img src=(house.image_url) alt=(house.address);
            div class="info" {
                p class="price" { "Rs. " (house.price) }
                p { (house.description) }
                p class="meta" { (house.address) }
                p class="meta" { (house.category) }
            }
        }
    }
}

pub fn house_grid(houses: &[House]) -> Markup {
    html! {
        @if houses.is_empty() {
            p class="empty" { "No properties found" }
        } @else {
            div class="house-grid" {
                @for house in houses {
                    (house_card(house))
                }
            }
        }
    }
}

pub fn guest_button() -> Markup {
    html! {
        form method="post" action="/guest" {
            button type="submit" class="ghost" { "Continue as Guest" }
        }
    }
}
