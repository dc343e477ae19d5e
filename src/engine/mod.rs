pub mod adapter;
pub mod canned;
pub mod options;
