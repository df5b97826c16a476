use crate::templates::{app_layout, components::guest_button};
use maud::{html, Markup};

pub fn welcome_page() -> Markup {
    app_layout(
        "Welcome",
        html! {
            main class="container narrow center" {
                h1 { "Welcome To DoorVue" }
                p class="lead" {
                    "Discover your dream home nearby with DoorVue—your trusted \
                     partner in finding the ideal place to live!"
                }

                p {
                    a class="primary" href="/signin" { "Sign In" }
                }

                (guest_button())
            }
        },
    )
}
