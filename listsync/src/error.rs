/// Errors reported by [`crate::DataSource`] mutators.
///
/// On error the collection is left unmodified and no mutation event is
/// emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("splice start {start} out of range for collection of length {len}")]
    SpliceStartOutOfRange { start: usize, len: usize },

    /// A splice must delete at least one item or insert at least one item.
    #[error("splice deletes nothing and inserts nothing")]
    EmptySplice,
}

pub type Result<T> = core::result::Result<T, Error>;
