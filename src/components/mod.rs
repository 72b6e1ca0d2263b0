pub mod book_post;
pub mod hooks;
pub mod like_button;
pub mod password_input;
pub mod ui;

pub use book_post::{BookFeed, BookPost};
pub use like_button::LikeButton;
pub use password_input::PasswordInput;
