//! Rendering module for dotgen.
//!
//! Rasterizes state colours into canvases and encodes them into
//! ICO and PNG containers.

mod circle;
mod encode;

pub use circle::{downscale, rasterize_circle, DEFAULT_MARGIN, DEFAULT_SIZE, DEFAULT_SMALL_SIZE};
pub use encode::{encode, encode_ico, encode_png, EncodedAsset, MAX_ICO_SIZE};
