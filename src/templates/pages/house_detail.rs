use crate::domain::geo::{display_distance_km, Coordinates};
use crate::domain::house::HouseDetail;
use crate::templates::{
    app_layout,
    components::{alert, success_alert},
};
use maud::{html, Markup, PreEscaped};

/// Where the proximity gate stands for the viewing device.
pub enum GateStatus {
    /// No position reported yet; the page asks the browser for one.
    AwaitingPosition,
    PermissionDenied,
    PositionUnavailable,
    /// The listing itself has no coordinates, so the gate can never pass.
    NoCoordinates,
    TooFar { distance_km: f64 },
    Unlockable { distance_km: f64, device: Coordinates },
}

pub struct HouseDetailVm {
    pub house: HouseDetail,
    pub gate: GateStatus,
}

pub fn house_detail_page(vm: &HouseDetailVm) -> Markup {
    let house = &vm.house;

    app_layout(
        &house.address,
        html! {
            main class="container" {
                img class="detail-image" src=(house.image_url) alt=(house.address);

                h1 { (house.address) }
                p class="lead" { (house.description) }

                div class="price-row" {
                    div {
                        h2 { "Rs. " (house.price) }
                        p class="lead" { (house.category) }
                    }
                    @match &vm.gate {
                        GateStatus::Unlockable { distance_km, .. } => {
                            span class="distance-pill" {
                                "Distance: " (display_distance_km(*distance_km)) " Km"
                            }
                        }
                        GateStatus::TooFar { distance_km } => {
                            span class="distance-pill" {
                                "Distance: " (display_distance_km(*distance_km)) " Km"
                            }
                        }
                        _ => {}
                    }
                }

                div class="facilities" {
                    h3 { "Facilities" }
                    ul {
                        li { "Rooms: 2" }
                        li { "Bed Count: 2" }
                        li { "Bathroom Count: 2" }
                        li { "Area: 1000 sqft" }
                        li { "Garage Count: 1" }
                        li { "Security: 24/7" }
                    }
                }

                (gate_section(vm))
            }
        },
    )
}

fn gate_section(vm: &HouseDetailVm) -> Markup {
    match &vm.gate {
        GateStatus::Unlockable { device, .. } => html! {
            form method="post" action={ "/house/" (vm.house.id) "/unlock" } {
                input type="hidden" name="lat" value=(device.latitude);
                input type="hidden" name="lon" value=(device.longitude);
                button type="submit" class="primary" { "Unlock House" }
            }
        },
        GateStatus::TooFar { .. } => html! {
            div class="alert warning" {
                "You are too far from the selected house."
            }
        },
        GateStatus::PermissionDenied => {
            alert("Location permission is required to unlock the house.")
        }
        GateStatus::PositionUnavailable => alert("Current position unavailable."),
        GateStatus::NoCoordinates => alert("This listing has no location on file."),
        GateStatus::AwaitingPosition => html! {
            p class="lead" { "Checking how far away you are..." }
            script {
                (PreEscaped(POSITION_PROBE))
            }
        },
    }
}

// Reports the device position back as query parameters; the gate itself
// runs on the server.
const POSITION_PROBE: &str = r#"
navigator.geolocation.getCurrentPosition(function (p) {
  window.location.replace(window.location.pathname + "?lat=" + p.coords.latitude + "&lon=" + p.coords.longitude);
}, function (e) {
  var reason = e.code === 1 ? "denied" : "unavailable";
  window.location.replace(window.location.pathname + "?loc=" + reason);
});
"#;

pub enum UnlockOutcome {
    Unlocked,
    TooFar,
    Failed,
}

pub fn unlock_result_page(house_id: &str, outcome: UnlockOutcome) -> Markup {
    let body = match outcome {
        UnlockOutcome::Unlocked => success_alert("House unlocked"),
        UnlockOutcome::TooFar => html! {
            div class="alert warning" { "You are too far from the selected house." }
        },
        UnlockOutcome::Failed => alert("Unlock failed"),
    };

    app_layout(
        "Unlock",
        html! {
            main class="container narrow center" {
                (body)
                p {
                    a href={ "/house/" (house_id) } { "← Back to house" }
                }
            }
        },
    )
}
