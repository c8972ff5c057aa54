pub mod constants;
pub mod options;
pub mod region;
