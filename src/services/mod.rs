pub use auth::AuthService;

mod auth;
