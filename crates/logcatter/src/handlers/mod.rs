//! Output sinks for log records

mod traits;
mod stream;
mod memory;

pub use traits::{BoxedHandler, Handler};
pub use stream::StreamHandler;
pub use memory::MemoryHandler;
