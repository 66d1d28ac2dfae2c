//! Persistence seams for tasks and sessions.

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::ShellStore;
