use crate::templates::{
    app_layout,
    components::{alert, guest_button},
};
use maud::{html, Markup};

pub fn signin_page(error: Option<&str>) -> Markup {
    app_layout(
        "Sign in",
        html! {
            main class="container narrow" {
                h1 { "Sign in" }

                @if let Some(message) = error {
                    (alert(message))
                }

                form class="stacked" method="post" action="/signin" {
                    input
                        type="email"
                        name="email"
                        placeholder="Email"
                        autocomplete="email";
                    input
                        type="password"
                        name="password"
                        placeholder="Password";

                    button type="submit" class="primary" { "Sign In" }
                }

                p {
                    "Don't have an account? "
                    a href="/signup" { "Sign Up" }
                }

                (guest_button())
            }
        },
    )
}
