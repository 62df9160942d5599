//! Hoshen core library.
//!
//! Connected-component labeling with the Hoshen–Kopelman algorithm. The
//! generic engine ([`hoshen_kopelman`]) works over any [`NodeSource`]; the
//! image engine ([`label_image`]) labels RGBA buffers in place and stores each
//! pixel's blob id in its colour through [`codec`].
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod census;
pub mod codec;
mod compaction;
mod equivalence;
mod error;
mod grid;
mod hoshen_kopelman;
mod image;
mod label;
mod labeler;
mod node_source;
#[cfg(test)]
mod property;
mod raster;
#[cfg(test)]
mod test_utils;
mod visualize;

pub use crate::{
    builder::{LabelerBuilder, MAX_LABEL_CAPACITY},
    census::collect_blobs,
    error::{LabelingError, LabelingErrorCode, Result},
    grid::BinaryGrid,
    hoshen_kopelman::hoshen_kopelman,
    image::{CHANNELS, Origin, PixelBuffer},
    label::{Blob, Label, NULL_LABEL},
    labeler::Labeler,
    node_source::NodeSource,
    raster::label_image,
    visualize::{FALLBACK_COLOR, PALETTE, palette_color, visualize},
};
