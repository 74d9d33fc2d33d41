pub mod errors;
pub mod models;
pub mod navigation;
pub mod policy;
