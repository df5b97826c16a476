use crate::db::session::SessionRecord;
use crate::templates::app_layout;
use maud::{html, Markup};

pub fn profile_page(user: &SessionRecord) -> Markup {
    app_layout(
        "Profile",
        html! {
            main class="container narrow" {
                div class="profile-card" {
                    img
                        src="https://randomuser.me/api/portraits/men/1.jpg"
                        alt="profile photo";
                    h2 { (user.username) }
                    @if !user.email.is_empty() {
                        p class="lead" { (user.email) }
                    }
                }

                ul {
                    li { "Change password (coming soon)" }
                    li { "Saved homes (coming soon)" }
                }

                form method="post" action="/logout" {
                    button type="submit" class="primary" { "Log Out" }
                }
            }
        },
    )
}
