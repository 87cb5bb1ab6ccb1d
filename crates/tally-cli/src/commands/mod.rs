pub mod audit;
pub mod calendar;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod run;
pub mod schema;
mod shared;
