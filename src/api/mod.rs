//! REST bindings for the catalog API.
//!
//! Each resource module exposes one function per remote operation returning
//! an [`Endpoint`]; [`ApiClient::send`] executes it.

pub mod auth;
pub mod authors;
pub mod books;
pub mod categories;
pub mod comments;
pub mod tags;
pub mod users;

mod client;
mod endpoint;

pub use client::{ApiClient, LogNavigator, Navigator};
pub use endpoint::Endpoint;

#[cfg(feature = "csr")]
pub use client::BrowserNavigator;
