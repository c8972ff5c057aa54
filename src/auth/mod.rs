pub mod iam;
pub mod token;
pub mod transport;
