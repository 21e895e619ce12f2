pub mod feed;
pub mod quote;
pub mod sample;

pub use feed::*;
pub use quote::*;
pub use sample::*;
