//! Page components

mod admin;
mod author;
mod book;
mod category;
mod favorites;
mod home;
mod login;
mod new_user;
mod not_found;
mod profile;
mod register;
mod tag;

pub use admin::AdminPage;
pub use author::AuthorPage;
pub use book::BookPage;
pub use category::CategoryPage;
pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use new_user::NewUserPage;
pub use not_found::NotFound;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use tag::TagPage;
