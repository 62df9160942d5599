//! Bijection between blob labels and RGBA colours.
//!
//! The image engine stores labels inside the pixels it labels. A label `id`
//! is shifted to `v = id + 1` so that [`NULL_LABEL`] maps to the fully
//! transparent black `(0, 0, 0, 0)`, and `v` is then written as a big-endian
//! base-256 number across the red, green, blue and alpha channels.
//!
//! Only labels in `NULL_LABEL..=MAX_ENCODABLE_LABEL` have a colour. Labels
//! outside that range are a precondition violation: they are caught by debug
//! assertions but silently wrap in release builds.

use crate::label::{Label, NULL_LABEL};

/// Largest label that fits in the four colour channels (`2^32 - 2`).
pub const MAX_ENCODABLE_LABEL: Label = u32::MAX as Label - 1;

/// Colour used for pixels that belong to no blob.
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Encodes a label as an `[r, g, b, a]` colour.
///
/// # Examples
/// ```
/// use hoshen_core::{NULL_LABEL, codec};
///
/// assert_eq!(codec::encode(NULL_LABEL), [0, 0, 0, 0]);
/// assert_eq!(codec::encode(0), [0, 0, 0, 1]);
/// assert_eq!(codec::encode(255), [0, 0, 1, 0]);
/// ```
#[must_use]
pub fn encode(label: Label) -> [u8; 4] {
    debug_assert!(
        (NULL_LABEL..=MAX_ENCODABLE_LABEL).contains(&label),
        "label {label} cannot be encoded in 32 bits"
    );
    let shifted = (label - NULL_LABEL) as u32;
    shifted.to_be_bytes()
}

/// Decodes an `[r, g, b, a]` colour back into a label.
///
/// # Examples
/// ```
/// use hoshen_core::{NULL_LABEL, codec};
///
/// assert_eq!(codec::decode([0, 0, 0, 0]), NULL_LABEL);
/// assert_eq!(codec::decode([0, 0, 1, 0]), 255);
/// ```
#[must_use]
pub fn decode(color: [u8; 4]) -> Label {
    Label::from(u32::from_be_bytes(color)) + NULL_LABEL
}

/// Returns `true` when the colour encodes [`NULL_LABEL`].
#[must_use]
pub fn is_empty(color: [u8; 4]) -> bool {
    color == EMPTY_COLOR
}
