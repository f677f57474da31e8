pub mod audit_log;
pub mod logs;

pub use audit_log::ui::AuditLogList;
pub use logs::ui::LogViewer;
