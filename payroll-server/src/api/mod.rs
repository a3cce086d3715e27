//! HTTP API handlers

pub mod employees;
pub mod etl;
pub mod health;
pub mod kpis;
pub mod ml;

pub use employees::list_employees;
pub use etl::upload_dataset;
pub use health::{health_check, root};
pub use kpis::get_kpis;
pub use ml::train_models;
