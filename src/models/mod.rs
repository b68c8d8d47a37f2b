pub use author::*;
pub use book::*;
pub use book_status::*;
pub use category::*;
pub use comment::*;
pub use tag::*;
pub use user::*;

mod author;
mod book;
mod book_status;
mod category;
mod comment;
mod tag;
mod user;
