mod dyn_array;
mod iter;
mod strategies;

pub use dyn_array::DynArray;
pub use iter::{Iter, IterMut};

pub type Result<T> = core::result::Result<T, crate::CapacityError>;
