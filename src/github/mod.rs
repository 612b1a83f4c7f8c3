pub mod api;
pub mod client;
pub mod create;
pub mod delete;
pub mod error;
pub mod graphql;
pub mod issues;

#[cfg(test)]
pub(crate) mod testing;
