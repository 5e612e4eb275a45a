pub mod file;
pub mod fixture;
pub mod traits;

pub use file::*;
pub use fixture::*;
pub use traits::*;
