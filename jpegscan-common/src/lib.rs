pub mod read;
pub mod utils;
