pub mod card_index;
pub mod reader;

pub use card_index::parse_card_index;
pub use reader::{Reader, READER_HEADER};
