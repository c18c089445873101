pub mod aggregator;
pub mod catchers;
pub mod config;
pub mod error;
pub mod queries;
pub mod reader;
pub mod recorder;
pub mod routes;
pub mod store;
pub mod utils;
pub use shared::{models::*, Member, ItemId, Tallied};

use rocket::{Build, Rocket, catchers, routes};
use routes::AppState;

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/", routes![routes::cast_vote])
        .register(
            "/",
            catchers![
                catchers::not_found,
                catchers::unprocessable,
                catchers::internal_error
            ],
        )
}
