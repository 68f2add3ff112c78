pub mod analyze;
pub mod cloud;
pub mod dispatch;
pub mod report;
pub mod schema;
pub mod shared;
