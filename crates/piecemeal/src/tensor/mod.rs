//! # Token Id Tensors
//!
//! A minimal rectangular integer tensor, sufficient to carry batches of
//! token ids between a model and a [`crate::decoders::PieceDecoder`].
//!
//! * [`ScalarType`] - the declared element type tag.
//! * [`Device`] - where the tensor's storage lives.
//! * [`TensorStorage`] - the flat, row-major element buffer.
//! * [`IdTensor`] - shape + storage + device.

pub mod device;
pub mod id_tensor;
pub mod scalar_type;
pub mod storage;

#[doc(inline)]
pub use device::Device;
#[doc(inline)]
pub use id_tensor::IdTensor;
#[doc(inline)]
pub use scalar_type::ScalarType;
#[doc(inline)]
pub use storage::TensorStorage;
