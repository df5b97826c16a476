use crate::domain::filter::CategorySummary;
use crate::domain::house::House;
use crate::templates::{
    app_layout,
    components::{house_grid, search_bar},
};
use maud::{html, Markup};

pub struct ExploreVm {
    pub query: String,
    pub category: String,
    pub summaries: Vec<CategorySummary>,
    pub houses: Vec<House>,
}

pub fn explore_page(vm: &ExploreVm) -> Markup {
    app_layout(
        "Explore",
        html! {
            main class="container" {
                (search_bar("/explore", &vm.query, &vm.category))

                h2 { "Categories" }
                div class="category-grid" {
                    @for summary in &vm.summaries {
                        a class="category-card" href={
                            "/explore?category=" (summary.category)
                        } {
                            span class={ "icon icon-" (summary.icon) } {}
                            h3 { (summary.category) }
                            p class="count" {
                                (summary.count)
                                @if summary.count == 1 { " property" } @else { " properties" }
                            }
                        }
                    }
                }

                h2 { "Properties" }
                (house_grid(&vm.houses))
            }
        },
    )
}
