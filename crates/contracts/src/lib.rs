pub mod connect;
pub mod query;
