//! Domain entities

pub mod comment;
pub mod shoutout;
pub mod user;

pub use comment::{Comment, CommentAuthor};
pub use shoutout::Shoutout;
pub use user::User;
