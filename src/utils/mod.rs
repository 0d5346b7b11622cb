pub mod notify;
pub mod table;

pub use notify::TerminalNotifier;
