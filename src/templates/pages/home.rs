// templates/pages/home.rs

use crate::domain::house::House;
use crate::templates::{
    app_layout,
    components::{category_chips, fetch_error, house_grid, search_bar},
};
use maud::{html, Markup};

pub struct HomeVm {
    pub username: String,
    pub query: String,
    pub category: String,
    pub houses: Vec<House>,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    app_layout(
        "Home",
        html! {
            main class="container" {
                div class="profile-row" {
                    img
                        class="avatar"
                        src="https://randomuser.me/api/portraits/men/1.jpg"
                        alt="avatar"
                        width="48"
                        height="48";
                    div {
                        p class="lead" { "Welcome To DoorVue" }
                        h2 { (vm.username) }
                    }
                }

                (search_bar("/home", &vm.query, &vm.category))
                (category_chips("/home", &vm.query, &vm.category))

                (house_grid(&vm.houses))
            }
        },
    )
}

/// Shown when the listing fetch fails; retry is a manual user action.
pub fn fetch_error_page(message: &str, retry_href: &str) -> Markup {
    app_layout(
        "Something went wrong",
        html! {
            main class="container" {
                (fetch_error(message, retry_href))
            }
        },
    )
}
