#[cfg(test)]
pub mod common;

#[cfg(test)]
mod token_refresh;
