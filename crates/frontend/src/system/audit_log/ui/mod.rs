mod list;

pub use list::AuditLogList;
