use crate::templates::{app_layout, components::alert};
use maud::{html, Markup};

pub fn signup_page(error: Option<&str>) -> Markup {
    app_layout(
        "Sign up",
        html! {
            main class="container narrow" {
                h1 { "Create Account" }

                @if let Some(message) = error {
                    (alert(message))
                }

                form class="stacked" method="post" action="/signup" {
                    input
                        type="text"
                        name="username"
                        placeholder="Username";
                    input
                        type="email"
                        name="email"
                        placeholder="Email"
                        autocomplete="email";
                    input
                        type="password"
                        name="password"
                        placeholder="Password";
                    input
                        type="password"
                        name="confirm_password"
                        placeholder="Confirm Password";

                    button type="submit" class="primary" { "Sign Up" }
                }

                p {
                    "Already have an account? "
                    a href="/signin" { "Sign In" }
                }
            }
        },
    )
}
