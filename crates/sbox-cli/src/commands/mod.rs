pub mod admin;
pub mod dispatch;
pub mod feed;
pub mod schema;
pub mod shared;
pub mod stats;
pub mod submit;
