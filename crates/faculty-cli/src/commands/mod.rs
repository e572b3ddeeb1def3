pub mod dispatch;
pub mod overdue;
pub mod performance;
pub mod shared;
pub mod summary;
pub mod trends;
pub mod validate;
