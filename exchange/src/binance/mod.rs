pub mod consts;
pub mod errors;
pub mod futures;
pub mod utils;
