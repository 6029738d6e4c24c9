//! # Common Types and Traits
use core::fmt::{Debug, Display};

use num_traits::{PrimInt, Signed, ToPrimitive};

use crate::errors::{PMResult, PiecemealError};

/// The working token id type of a vocabulary.
pub type TokenId = i32;

/// An element type that can hold token ids in an [`crate::tensor::IdTensor`].
///
/// These are constrained to be signed primitive integers;
/// narrowing to [`TokenId`] is checked, never truncating.
pub trait IdElement:
    'static + PrimInt + Signed + ToPrimitive + Default + Debug + Display + Send + Sync
{
    /// Narrow this element to a [`TokenId`].
    ///
    /// ## Returns
    /// The value as a `TokenId`, or [`PiecemealError::IdNarrowing`]
    /// if the value is not representable in 32 bits.
    #[inline(always)]
    fn to_token_id(self) -> PMResult<TokenId> {
        self.to_i32().ok_or_else(|| PiecemealError::IdNarrowing {
            // i64 holds every admissible element width.
            value: self.to_i64().unwrap_or_default(),
        })
    }
}

impl IdElement for i16 {}
impl IdElement for i32 {}
impl IdElement for i64 {}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type PMHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PMHashMap<K, V> {
            PMHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type PMHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> PMHashMap<K, V> {
            PMHashMap::with_capacity(capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_id_elements() {
        struct IsElement<E: IdElement>(PhantomData<E>);

        let _: IsElement<i16>;
        let _: IsElement<i32>;
        let _: IsElement<i64>;
    }

    #[test]
    fn test_to_token_id() {
        assert_eq!(7i16.to_token_id().unwrap(), 7);
        assert_eq!((-3i16).to_token_id().unwrap(), -3);
        assert_eq!(i32::MAX.to_token_id().unwrap(), i32::MAX);
        assert_eq!(9i64.to_token_id().unwrap(), 9);
        assert_eq!((i32::MIN as i64).to_token_id().unwrap(), i32::MIN);

        match (i32::MAX as i64 + 1).to_token_id() {
            Err(PiecemealError::IdNarrowing { value }) => {
                assert_eq!(value, i32::MAX as i64 + 1)
            }
            other => panic!("unexpected: {other:?}"),
        }

        assert!(matches!(
            i64::MIN.to_token_id(),
            Err(PiecemealError::IdNarrowing { value: i64::MIN })
        ));
    }
}
