pub mod error;
pub mod validation;
pub mod model;
pub mod schedule;
pub mod db;
pub mod ops;
pub mod queries;
pub mod migrate;
pub mod cli;
