mod browser;
mod common;
mod manager;
mod picker;

// Public API
pub use browser::browse_catalog;
pub use common::TerminalSession;
pub use manager::manage_quickcode;
pub use picker::TerminalMenu;
