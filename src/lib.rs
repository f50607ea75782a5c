pub mod cli;
#[cfg(unix)]
pub mod console;
pub mod dump;
pub mod keymap;
pub mod symbols;

pub use dump::{Dumper, TableShape};
pub use keymap::{KeyAction, KeyboardDriver, Keymap, ModifierMask};
pub use symbols::{Charset, SymbolTable};

pub(crate) mod pad;
pub(crate) mod utils;
