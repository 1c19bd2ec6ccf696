pub mod answers;
pub mod reports;
pub mod tester;

pub use tester::*;
