//! # Rectangular Id Tensor

use std::borrow::Cow;

use crate::{
    errors::{PMResult, PiecemealError},
    tensor::{Device, ScalarType, TensorStorage},
};

/// An immutable, row-major tensor of (usually) integer token ids.
///
/// The element count always matches the product of `dims`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdTensor {
    dims: Vec<usize>,
    storage: TensorStorage,
    device: Device,
}

impl IdTensor {
    /// Build a host tensor from a shape and flat row-major storage.
    ///
    /// ## Arguments
    /// * `dims` - the extent of each dimension.
    /// * `storage` - the flat element buffer.
    ///
    /// ## Returns
    /// A new `IdTensor`, or [`PiecemealError::InvalidShape`] if the element
    /// count does not match `dims`, or does not fit in `usize`.
    pub fn new<D, S>(
        dims: D,
        storage: S,
    ) -> PMResult<Self>
    where
        D: Into<Vec<usize>>,
        S: Into<TensorStorage>,
    {
        let dims = dims.into();
        let storage = storage.into();

        let expected = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| {
                PiecemealError::InvalidShape(format!("dims {dims:?} overflow the element count"))
            })?;
        if expected != storage.len() {
            return Err(PiecemealError::InvalidShape(format!(
                "dims {dims:?} require {expected} elements, storage holds {}",
                storage.len()
            )));
        }

        Ok(Self {
            dims,
            storage,
            device: Device::Host,
        })
    }

    /// Build a rank-2 host tensor from equal-length rows.
    ///
    /// ## Arguments
    /// * `rows` - the rows; all must have the same length.
    ///
    /// ## Returns
    /// A `(rows.len(), row_len)` tensor, or [`PiecemealError::InvalidShape`]
    /// if the rows are ragged.
    pub fn from_rows<E, R>(rows: &[R]) -> PMResult<Self>
    where
        E: Copy,
        R: AsRef<[E]>,
        Vec<E>: Into<TensorStorage>,
    {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);

        let mut flat: Vec<E> = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(PiecemealError::InvalidShape(format!(
                    "row {idx} has length {}, expected {cols}",
                    row.len()
                )));
            }
            flat.extend_from_slice(row);
        }

        Self::new([rows.len(), cols], flat)
    }

    /// Place this tensor on the given device.
    ///
    /// Storage is kept as a staging buffer; reads go through [`Self::to_host`].
    pub fn on_device(
        mut self,
        device: Device,
    ) -> Self {
        self.device = device;
        self
    }

    /// The extent of each dimension.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The number of dimensions.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// The declared element type.
    pub fn scalar_type(&self) -> ScalarType {
        self.storage.scalar_type()
    }

    /// The device holding the storage.
    pub fn device(&self) -> Device {
        self.device
    }

    /// The flat row-major storage.
    pub fn storage(&self) -> &TensorStorage {
        &self.storage
    }

    /// Materialize this tensor in host memory.
    ///
    /// ## Returns
    /// `Cow::Borrowed(self)` if already on the host; otherwise a host copy
    /// with identical shape and values.
    #[must_use]
    pub fn to_host(&self) -> Cow<'_, IdTensor> {
        if self.device.is_host() {
            return Cow::Borrowed(self);
        }

        log::trace!(
            "copying {} bytes of {} tensor from {} to host",
            self.storage.nbytes(),
            self.scalar_type(),
            self.device
        );

        Cow::Owned(Self {
            dims: self.dims.clone(),
            storage: self.storage.clone(),
            device: Device::Host,
        })
    }

    /// View a rank-1 tensor as a single-row rank-2 tensor.
    ///
    /// Rank-2 tensors are returned unchanged.
    ///
    /// ## Returns
    /// The batched tensor, or [`PiecemealError::InvalidArgument`] for any
    /// other rank.
    pub fn into_batch(self) -> PMResult<Self> {
        match self.rank() {
            1 => Ok(Self {
                dims: vec![1, self.dims[0]],
                ..self
            }),
            2 => Ok(self),
            rank => Err(PiecemealError::InvalidArgument(format!(
                "expected a rank 1 or rank 2 tensor, found rank {rank}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let t = IdTensor::new([2, 3], vec![1i32, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(t.dims(), &[2, 3]);
        assert_eq!(t.rank(), 2);
        assert_eq!(t.scalar_type(), ScalarType::I32);
        assert_eq!(t.device(), Device::Host);

        assert!(matches!(
            IdTensor::new([2, 3], vec![1i32, 2, 3]),
            Err(PiecemealError::InvalidShape(_))
        ));

        let empty = IdTensor::new([0, 4], Vec::<i64>::new()).unwrap();
        assert_eq!(empty.dims(), &[0, 4]);
    }

    #[test]
    fn test_new_overflowing_dims() {
        // The product wraps to 0 in unchecked arithmetic.
        match IdTensor::new([1usize << 33, 1usize << 31], Vec::<i32>::new()) {
            Err(PiecemealError::InvalidShape(msg)) => assert!(msg.contains("overflow"), "{msg}"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_from_rows() {
        let t = IdTensor::from_rows(&[vec![5i16, 9], vec![9, 5]]).unwrap();
        assert_eq!(t.dims(), &[2, 2]);
        assert_eq!(t.storage(), &TensorStorage::I16(vec![5, 9, 9, 5]));

        assert!(matches!(
            IdTensor::from_rows(&[vec![1i64, 2], vec![3]]),
            Err(PiecemealError::InvalidShape(_))
        ));

        let none: &[Vec<i32>] = &[];
        let t = IdTensor::from_rows(none).unwrap();
        assert_eq!(t.dims(), &[0, 0]);
    }

    #[test]
    fn test_to_host() {
        let t = IdTensor::from_rows(&[[1i32, 2]]).unwrap();
        assert!(matches!(t.to_host(), Cow::Borrowed(_)));

        let dev = t.clone().on_device(Device::Accelerator(1));
        assert_eq!(dev.device(), Device::Accelerator(1));

        let host = dev.to_host();
        assert!(matches!(host, Cow::Owned(_)));
        assert_eq!(host.device(), Device::Host);
        assert_eq!(host.as_ref(), &t);
    }

    #[test]
    fn test_into_batch() {
        let t = IdTensor::new([3], vec![1i32, 2, 3]).unwrap();
        let t = t.into_batch().unwrap();
        assert_eq!(t.dims(), &[1, 3]);

        let t = t.into_batch().unwrap();
        assert_eq!(t.dims(), &[1, 3]);

        let t = IdTensor::new([1, 1, 1], vec![1i32]).unwrap();
        assert!(matches!(
            t.into_batch(),
            Err(PiecemealError::InvalidArgument(_))
        ));
    }
}
