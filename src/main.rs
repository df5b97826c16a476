use crate::auth::{AuthConfig, AuthService};
use crate::db::connection::{init_db, Database};
use crate::estate::EstateClient;
use crate::router::{handle, AppState};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod auth;
mod db;
mod domain;
mod errors;
mod estate;
mod location;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Create the database handle
    let db = Database::new("doorvue.sqlite3");

    // 2️⃣ Initialize database from schema.sql
    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Build the estate API client (DOORVUE_ESTATE_URL overrides the mock API)
    let estate = match EstateClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Estate client init failed: {e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        db,
        listings: Arc::new(estate),
        auth: AuthService::new(AuthConfig::default()),
    });

    // 4️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_page(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
