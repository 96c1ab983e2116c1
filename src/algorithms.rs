pub mod extraction;
pub mod numbering;

#[doc(inline)]
pub use extraction::{extract_points, Extraction, SkipReason, Skipped};

#[doc(inline)]
pub use numbering::{anchor_shift, index_ring, renumber_ring, shifted_index};
