//! Siraj library exports for testing

pub mod core;
pub mod remote;
pub mod screens;

#[cfg(test)]
pub mod test_support;
