pub mod models;
pub mod orders;
pub mod requests;
pub mod responses;
pub mod trade_api;
pub mod validators;
