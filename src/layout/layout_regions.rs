use ratatui::layout::Rect;

use crate::app::Focus;

/// A clickable part of the search screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// A form control, including the seat class selector
    Field(Focus),
    /// Suggestion panel of a city field
    Panel(Focus),
}

/// Regions in the order they were drawn during the last frame
#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    entries: Vec<(Region, Rect)>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record `region`; later entries are drawn on top of earlier ones
    pub fn push(&mut self, region: Region, area: Rect) {
        self.entries.retain(|(r, _)| *r != region);
        self.entries.push((region, area));
    }

    pub fn rect(&self, region: Region) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, area)| *area)
    }

    pub(super) fn entries(&self) -> &[(Region, Rect)] {
        &self.entries
    }
}
