pub mod dump;
pub mod inventory;

pub use dump::*;
pub use inventory::*;
