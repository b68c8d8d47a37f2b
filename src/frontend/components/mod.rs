//! Reusable UI components

mod alert;
mod book_card;
mod button;
mod footer;
mod input;
mod nav;

pub use alert::{Alert, AlertVariant, ErrorAlert, Loading};
pub use book_card::{BookCard, BookGrid};
pub use button::{Button, ButtonVariant};
pub use footer::Footer;
pub use input::{PasswordInput, TextArea, TextInput};
pub use nav::Nav;
