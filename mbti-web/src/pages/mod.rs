pub mod not_found;
pub mod quiz;
pub mod result;
