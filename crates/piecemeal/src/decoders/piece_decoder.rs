//! # Batch Piece Decoder

use core::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    compat::threads::{chunk_len, est_max_parallelism},
    data::Data,
    decoders::PieceDecoderOptions,
    errors::{PMResult, PiecemealError},
    tensor::{IdTensor, TensorStorage},
    types::IdElement,
    vocab::PieceModel,
};

/// Decodes batches of token ids into text with a [`PieceModel`].
///
/// Rows are independent: output `i` is the detokenization of exactly the
/// pieces of row `i`, in order. The row range is split into one contiguous
/// chunk per worker; each worker writes only its own output slots.
#[derive(Debug)]
pub struct PieceDecoder<M: PieceModel> {
    model: Arc<M>,
    options: PieceDecoderOptions,
}

impl<M: PieceModel> Clone for PieceDecoder<M> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
            options: self.options,
        }
    }
}

impl<M: PieceModel> PieceDecoder<M> {
    /// Create a decoder with the default [`PieceDecoderOptions`].
    pub fn new(model: Arc<M>) -> Self {
        Self::with_options(model, PieceDecoderOptions::default())
    }

    /// Create a decoder with the given options.
    pub fn with_options(
        model: Arc<M>,
        options: PieceDecoderOptions,
    ) -> Self {
        Self { model, options }
    }

    /// The vocabulary model.
    pub fn model(&self) -> &Arc<M> {
        &self.model
    }

    /// The decoder options.
    pub fn options(&self) -> &PieceDecoderOptions {
        &self.options
    }

    /// Decode a value from a data pipeline.
    ///
    /// ## Arguments
    /// * `data` - must be [`Data::Tensor`].
    ///
    /// ## Returns
    /// * rank-2 tensors: a [`Data::List`] of one [`Data::String`] per row.
    /// * rank-1 tensors: a single non-batched row, as one [`Data::String`].
    /// * anything else: [`PiecemealError::InvalidArgument`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, data)))]
    pub fn decode_data(
        &self,
        data: Data,
    ) -> PMResult<Data> {
        let tensor = match data {
            Data::Tensor(tensor) => tensor,
            other => {
                return Err(PiecemealError::InvalidArgument(format!(
                    "the SentencePiece decoder expects as input a tensor, found {}",
                    other.kind_name()
                )));
            }
        };

        if tensor.rank() == 1 {
            let mut output = self.decode(&tensor.into_batch()?)?;
            return Ok(Data::String(output.pop().unwrap_or_default()));
        }

        Ok(self.decode(&tensor)?.into())
    }

    /// Decode a `(batch_size, sequence_length)` token-id tensor.
    ///
    /// ## Returns
    /// One string per row, index-aligned with the rows; or the first error.
    /// No partial output is returned.
    ///
    /// ## Errors
    /// * [`PiecemealError::InvalidArgument`] - the tensor is not rank 2.
    /// * [`PiecemealError::NotSupported`] - the elements are not i16, i32, or i64.
    /// * [`PiecemealError::IdNarrowing`] - an element does not fit in i32.
    /// * any error of [`PieceModel::token_for_id`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tensor)))]
    pub fn decode(
        &self,
        tensor: &IdTensor,
    ) -> PMResult<Vec<String>> {
        if tensor.rank() != 2 {
            return Err(PiecemealError::InvalidArgument(format!(
                "expected a (batch, sequence) tensor, found dims {:?}",
                tensor.dims()
            )));
        }

        let scalar_type = tensor.scalar_type();
        if !scalar_type.is_token_id_width() {
            return Err(PiecemealError::NotSupported { scalar_type });
        }

        let host = tensor.to_host();

        let batch_size = host.dims()[0];
        let seq_len = host.dims()[1];

        log::debug!(
            "decoding ({batch_size}, {seq_len}) {scalar_type} batch from {}",
            tensor.device()
        );

        match host.storage() {
            TensorStorage::I16(data) => self.decode_flat(data, batch_size, seq_len),
            TensorStorage::I32(data) => self.decode_flat(data, batch_size, seq_len),
            TensorStorage::I64(data) => self.decode_flat(data, batch_size, seq_len),
            other => Err(PiecemealError::NotSupported {
                scalar_type: other.scalar_type(),
            }),
        }
    }

    /// Decode a single row of token ids.
    pub fn decode_row<E: IdElement>(
        &self,
        ids: &[E],
    ) -> PMResult<String> {
        let mut pieces = Vec::with_capacity(ids.len());
        self.decode_ids(ids, &mut pieces)
    }

    /// Decode equal-length rows of token ids.
    ///
    /// ## Returns
    /// See [`Self::decode`]; ragged rows are [`PiecemealError::InvalidShape`].
    pub fn decode_rows<E, R>(
        &self,
        rows: &[R],
    ) -> PMResult<Vec<String>>
    where
        E: IdElement,
        R: AsRef<[E]>,
        Vec<E>: Into<TensorStorage>,
    {
        self.decode(&IdTensor::from_rows::<E, R>(rows)?)
    }

    /// The number of workers the row range is split over.
    fn worker_count(&self) -> NonZeroUsize {
        let workers = if cfg!(feature = "rayon") && self.options.parallel {
            est_max_parallelism()
        } else {
            1
        };
        NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN)
    }

    /// Decode row-major `data` of `batch_size` rows of `seq_len` ids.
    fn decode_flat<E: IdElement>(
        &self,
        data: &[E],
        batch_size: usize,
        seq_len: usize,
    ) -> PMResult<Vec<String>> {
        let mut output = vec![String::new(); batch_size];

        let workers = self.worker_count();
        let chunk = chunk_len(batch_size, workers);

        log::trace!("partitioning {batch_size} rows into chunks of {chunk} for {workers} workers");

        let fill_chunk = |chunk_idx: usize, slots: &mut [String]| -> PMResult<()> {
            let mut pieces = Vec::with_capacity(seq_len);
            let start = chunk_idx * chunk;
            for (offset, slot) in slots.iter_mut().enumerate() {
                let row = start + offset;
                let ids = &data[row * seq_len..(row + 1) * seq_len];
                *slot = self.decode_ids(ids, &mut pieces)?;
            }
            Ok(())
        };

        #[cfg(feature = "rayon")]
        if workers.get() > 1 {
            crate::rayon::try_fill_chunks_par(&mut output, chunk, fill_chunk)?;
            return Ok(output);
        }

        output
            .chunks_mut(chunk)
            .enumerate()
            .try_for_each(|(idx, slots)| fill_chunk(idx, slots))?;

        Ok(output)
    }

    /// Narrow, resolve, and detokenize one row.
    ///
    /// A row ending in the pad id is cut at its first pad id; pad ids inside
    /// an unpadded row are resolved like any other id.
    ///
    /// `pieces` is scratch space, cleared on entry; it borrows from the model.
    fn decode_ids<'a, E: IdElement>(
        &'a self,
        ids: &[E],
        pieces: &mut Vec<&'a str>,
    ) -> PMResult<String> {
        pieces.clear();

        let pad_id = match (self.options.pad_id, ids.last()) {
            (Some(pad), Some(&last)) if last.to_token_id()? == pad => Some(pad),
            _ => None,
        };

        for &elem in ids {
            let id = elem.to_token_id()?;
            if Some(id) == pad_id {
                break;
            }
            pieces.push(self.model.token_for_id(id)?);
        }

        Ok(self.model.detokenize(pieces))
    }
}
