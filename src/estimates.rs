//! Writing separated estimates back into the dataset's folder convention.

mod codec;
mod write;

pub use codec::{AudioBuffer, Codec, WavCodec};
pub use write::EstimateWriter;

#[cfg(test)]
mod tests;
