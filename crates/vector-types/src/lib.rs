pub mod entry;
pub mod scene;

pub use entry::*;
pub use scene::*;
