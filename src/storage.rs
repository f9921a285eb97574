pub mod export;
pub mod ledger_file;
pub mod parser;

pub use ledger_file::{Error, LedgerFile, Normalized};
pub use parser::{ParseMode, is_title_line};
