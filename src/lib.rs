pub mod error;
pub mod pairs;
pub mod pmf;
pub mod share;
pub mod support;
pub mod weight;

pub type Int = num::BigInt;
pub type Ratio = num::BigRational;
