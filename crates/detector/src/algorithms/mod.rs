pub mod preprocessing;
pub mod extraction;
pub mod moments;
pub mod classification;

pub use preprocessing::*;
pub use extraction::*;
pub use moments::*;
pub use classification::*;
