pub mod codec;

pub use codec::{decode, encode, EncodedReference, DEFAULT_DIGITS};
