use std::{error::Error, sync::Arc};

/// Receiving side of an emission source.
///
/// A well-behaved source calls `next` zero or more times and then at most one of
/// `complete` or `error`.
pub trait Observer {
    type NextFnType;

    fn next(&mut self, _: Self::NextFnType);
    fn complete(&mut self);
    fn error(&mut self, _: Arc<dyn Error + Send + Sync>);
}
