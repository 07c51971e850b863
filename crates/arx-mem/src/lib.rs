pub mod vec_types;

mod errors;
mod raw_storage;

pub use errors::CapacityError;
pub use raw_storage::RawStorage;
pub use vec_types::{DynArray, Iter, IterMut, Result};
