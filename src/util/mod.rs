pub mod coreext;
pub mod traits;
