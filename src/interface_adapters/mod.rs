// Interface adapters: HTTP protocol, handlers, and verifier wiring.

pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
