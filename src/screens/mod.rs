pub mod database;
pub mod review;
