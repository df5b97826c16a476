use std::collections::HashMap;
use std::io::Read;
use std::sync::Arc;

use chrono::Utc;

use astra::{Body, Request};

use crate::auth::service::SignUpForm;
use crate::auth::AuthService;
use crate::db::Database;
use crate::domain::filter::{category_summaries, filter_houses};
use crate::domain::geo;
use crate::domain::house::HouseDetail;
use crate::errors::{ResultResp, ServerError};
use crate::estate::ListingSource;
use crate::location::{self, LocationError};
use crate::responses::{html_response, redirect, static_asset};
use crate::templates::pages::{
    explore_page, fetch_error_page, home_page, house_detail_page, profile_page, signin_page,
    signup_page, unlock_result_page, welcome_page, ExploreVm, GateStatus, HomeVm, HouseDetailVm,
    UnlockOutcome,
};

pub struct AppState {
    pub db: Database,
    pub listings: Arc<dyn ListingSource>,
    pub auth: AuthService,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let (parts, body) = req.into_parts();
    let path = parts.uri.path().to_string();
    let query = parse_query(parts.uri.query());

    match (parts.method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(welcome_page()),

        ("GET", "/signin") => html_response(signin_page(None)),
        ("POST", "/signin") => sign_in(state, &parse_form(body)?),
        ("GET", "/signup") => html_response(signup_page(None)),
        ("POST", "/signup") => sign_up(state, &parse_form(body)?),
        ("POST", "/guest") => guest(state),
        ("POST", "/logout") => logout(state),

        ("GET", "/home") => home(state, &query),
        ("GET", "/explore") => explore(state, &query),
        ("GET", "/profile") => profile(state),

        ("GET", p) if p.starts_with("/static/") => {
            static_asset(p.trim_start_matches("/static/"))
        }

        (method, p) => match (method, house_route(p)) {
            ("GET", Some(HouseRoute::Detail(id))) => house_detail(state, id, &query),
            ("POST", Some(HouseRoute::Unlock(id))) => unlock(state, id, &parse_form(body)?),
            _ => Err(ServerError::NotFound),
        },
    }
}

enum HouseRoute<'a> {
    Detail(&'a str),
    Unlock(&'a str),
}

fn house_route(path: &str) -> Option<HouseRoute<'_>> {
    let rest = path.strip_prefix("/house/")?;

    if let Some(id) = rest.strip_suffix("/unlock") {
        if id.is_empty() || id.contains('/') {
            return None;
        }
        return Some(HouseRoute::Unlock(id));
    }

    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(HouseRoute::Detail(rest))
}

fn sign_in(state: &AppState, form: &HashMap<String, String>) -> ResultResp {
    let email = form.get("email").map(String::as_str).unwrap_or("");
    let password = form.get("password").map(String::as_str).unwrap_or("");

    let result = state
        .db
        .with_conn(|conn| state.auth.sign_in(conn, email, password, Utc::now().naive_utc()));

    match result {
        Ok(_) => redirect("/home"),
        // Alert on the form, no state change.
        Err(ServerError::BadRequest(msg)) | Err(ServerError::Unauthorized(msg)) => {
            html_response(signin_page(Some(&msg)))
        }
        Err(other) => Err(other),
    }
}

fn sign_up(state: &AppState, form: &HashMap<String, String>) -> ResultResp {
    let form = SignUpForm {
        username: form.get("username").cloned().unwrap_or_default(),
        email: form.get("email").cloned().unwrap_or_default(),
        password: form.get("password").cloned().unwrap_or_default(),
        confirm_password: form.get("confirm_password").cloned().unwrap_or_default(),
    };

    let result = state
        .db
        .with_conn(|conn| state.auth.sign_up(conn, &form, Utc::now().naive_utc()));

    match result {
        Ok(_) => redirect("/home"),
        Err(ServerError::BadRequest(msg)) => html_response(signup_page(Some(&msg))),
        Err(other) => Err(other),
    }
}

fn guest(state: &AppState) -> ResultResp {
    state
        .db
        .with_conn(|conn| state.auth.continue_as_guest(conn, Utc::now().naive_utc()))?;
    redirect("/home")
}

fn logout(state: &AppState) -> ResultResp {
    state.db.with_conn(|conn| state.auth.logout(conn))?;
    redirect("/signin")
}

fn home(state: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let username = state
        .db
        .with_conn(|conn| state.auth.current_user(conn))?
        .map(|record| record.username)
        .unwrap_or_else(|| "Guest".to_string());

    let q = query.get("q").cloned().unwrap_or_default();
    let category = query
        .get("category")
        .cloned()
        .unwrap_or_else(|| "All".to_string());

    match state.listings.fetch_houses() {
        Ok(houses) => html_response(home_page(&HomeVm {
            username,
            houses: filter_houses(&houses, &q, &category),
            query: q,
            category,
        })),
        Err(e) => {
            eprintln!("⚠️ Fetching houses failed: {e}");
            html_response(fetch_error_page(
                "An error occurred while fetching houses",
                "/home",
            ))
        }
    }
}

fn explore(state: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let q = query.get("q").cloned().unwrap_or_default();
    let category = query
        .get("category")
        .cloned()
        .unwrap_or_else(|| "All".to_string());

    match state.listings.fetch_houses() {
        Ok(houses) => html_response(explore_page(&ExploreVm {
            summaries: category_summaries(&houses),
            houses: filter_houses(&houses, &q, &category),
            query: q,
            category,
        })),
        Err(e) => {
            eprintln!("⚠️ Fetching houses failed: {e}");
            html_response(fetch_error_page(
                "An error occurred while fetching houses",
                "/explore",
            ))
        }
    }
}

fn profile(state: &AppState) -> ResultResp {
    let user = state.db.with_conn(|conn| state.auth.current_user(conn))?;

    match user {
        Some(record) => html_response(profile_page(&record)),
        None => redirect("/signin"),
    }
}

fn house_detail(state: &AppState, id: &str, query: &HashMap<String, String>) -> ResultResp {
    let house = state.listings.fetch_house(id).map_err(ServerError::from)?;
    let gate = evaluate_gate(&house, query);

    html_response(house_detail_page(&HouseDetailVm { house, gate }))
}

fn unlock(state: &AppState, id: &str, form: &HashMap<String, String>) -> ResultResp {
    let house = match state.listings.fetch_house(id) {
        Ok(house) => house,
        Err(e) => {
            eprintln!("⚠️ Unlock fetch failed: {e}");
            return html_response(unlock_result_page(id, UnlockOutcome::Failed));
        }
    };

    // Never trust the button: the gate is re-checked with the posted
    // position before reporting success.
    let outcome = match evaluate_gate(&house, form) {
        GateStatus::Unlockable { .. } => UnlockOutcome::Unlocked,
        GateStatus::TooFar { .. } => UnlockOutcome::TooFar,
        _ => UnlockOutcome::Failed,
    };

    html_response(unlock_result_page(id, outcome))
}

/// Combine the listing's coordinates with the browser-reported position.
/// Every upstream failure short-circuits before the distance math runs.
fn evaluate_gate(house: &HouseDetail, params: &HashMap<String, String>) -> GateStatus {
    let Some(target) = house.coordinates else {
        return GateStatus::NoCoordinates;
    };

    let position_reported =
        params.contains_key("lat") || params.contains_key("lon") || params.contains_key("loc");
    if !position_reported {
        return GateStatus::AwaitingPosition;
    }

    match location::device_position(params) {
        Ok(device) => {
            let distance_km = geo::distance_km(device, target);
            if geo::is_unlock_eligible(distance_km) {
                GateStatus::Unlockable {
                    distance_km,
                    device,
                }
            } else {
                GateStatus::TooFar { distance_km }
            }
        }
        Err(LocationError::PermissionDenied) => GateStatus::PermissionDenied,
        Err(LocationError::Unavailable) => GateStatus::PositionUnavailable,
    }
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form(mut body: Body) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = String::new();
    body.reader()
        .read_to_string(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(buf.as_bytes())
        .into_owned()
        .collect())
}
