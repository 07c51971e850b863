use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    AllocFailed {
        new_capacity: usize,
    },
    ZeroSizedElement,
}

impl fmt::Display for CapacityError {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "failed to allocate storage for {} elements", new_capacity)
            },
            Self::ZeroSizedElement => {
                write!(f, "zero sized element types can not be stored")
            },
        }
    }
}

impl std::error::Error for CapacityError {}
