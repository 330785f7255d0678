//! Screen regions for mouse hit testing
//!
//! Rendering records where each field and suggestion panel was drawn;
//! `region_at()` maps a pointer position back to the topmost region.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
