pub mod consts;
pub mod database;
pub mod error;
pub mod model;
pub mod persistence;
pub mod store;
pub mod validation;
