pub mod dump;

pub use dump::{dump_keyboard, Error, Options};
