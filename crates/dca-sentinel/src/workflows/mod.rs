pub mod collections;
pub mod intake;
