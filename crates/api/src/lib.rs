pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::{create_api_routes, with_path_normalization};
pub use state::AppState;
