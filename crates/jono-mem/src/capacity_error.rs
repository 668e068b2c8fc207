#[derive(Clone, Copy, Debug)]
pub enum CapacityError {
    AllocFailed {
        new_capacity: usize,
    },
    CapacityOverflow {
        requested: usize,
    },
    ZeroSizedElement,
}

impl core::fmt::Display for CapacityError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::CapacityOverflow { requested } => {
                write!(f, "requested capacity {} exceeds the largest supported allocation", requested)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for CapacityError {}
