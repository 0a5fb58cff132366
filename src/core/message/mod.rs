mod author;
mod cleaner;
mod co_author;
mod sign_off;

pub use author::{AuthorIdentity, AuthorSource};
pub use cleaner::{CleanedMessage, MessageCleaner, clean_message};
pub use co_author::{CoAuthor, is_bot_co_author_line, is_co_author_line};
pub use sign_off::{SignOff, is_sign_off_line};
