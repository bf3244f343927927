// Composition root.
//
// Responsibilities
// - Read config from the environment.
// - Pick in memory or PostgreSQL stores and wire them into the use case handlers.
// - Expose the handlers over REST and GraphQL.

pub mod client_ip;
pub mod config;
pub mod dashboard;
pub mod error_response;
pub mod graphql;
pub mod http;
pub mod refresh;
pub mod state;
