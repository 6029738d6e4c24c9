//! # Tensor Placement

use core::fmt::{Display, Formatter};

/// Where a tensor's storage lives.
///
/// Only [`Device::Host`] storage may be read directly;
/// see [`crate::tensor::IdTensor::to_host`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    /// Host-addressable memory.
    #[default]
    Host,

    /// An accelerator, by ordinal.
    Accelerator(u32),
}

impl Device {
    /// Is this host memory?
    pub fn is_host(&self) -> bool {
        matches!(self, Self::Host)
    }
}

impl Display for Device {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Accelerator(ordinal) => write!(f, "accelerator:{ordinal}"),
        }
    }
}
