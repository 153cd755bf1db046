//! Collaborator seams consumed by the pipeline.

pub mod inference;
pub mod normalizer;

pub use inference::Inference;
pub use normalizer::{AddressNormalizer, NoopNormalizer, NormalizedAddress};
