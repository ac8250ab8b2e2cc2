pub mod alert;
pub mod entry;
pub mod entry_log;
pub mod manhole;
pub mod risk_level;
pub mod worker;
