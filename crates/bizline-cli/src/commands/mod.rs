pub mod business;
pub mod headline;
