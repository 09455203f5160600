//! Maintenance jobs. Each job talks to the CRM only through GraphQL, so the
//! same code runs against a remote server or an in-process schema.

pub mod client;
pub mod errors;
pub mod heartbeat;
pub mod log_file;
pub mod reminders;
pub mod restock;

/// Timestamp format used by the heartbeat log.
pub const HEARTBEAT_TIME_FORMAT: &str = "%d/%m/%Y-%H:%M:%S";
/// Timestamp format used by the restock log.
pub const RESTOCK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
