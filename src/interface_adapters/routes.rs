use crate::interface_adapters::handlers::verify_slip;
use crate::interface_adapters::state::AppState;
use axum::Router;

// Single implicit endpoint: every path and method lands on the same handler.
pub fn app(state: AppState) -> Router {
    Router::new().fallback(verify_slip).with_state(state)
}
