//! Handler trait definition

use std::sync::Arc;

use crate::record::Record;

/// A sink that receives records and writes them somewhere.
///
/// Implementations:
/// - `StreamHandler`: formats to stderr (the default sink)
/// - `MemoryHandler`: captures formatted lines for assertions
pub trait Handler: Send + Sync {
    /// Write one record to this sink.
    fn emit(&self, record: &Record<'_>);
}

/// Type alias for a boxed handler.
pub type BoxedHandler = Box<dyn Handler>;

// Lets a test keep a handle to a handler it has registered.
impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn emit(&self, record: &Record<'_>) {
        (**self).emit(record);
    }
}
