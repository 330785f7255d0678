pub const NO_RESULTS_TEXT: &str = "No cities found";
pub const UNAVAILABLE_TEXT: &str = "Suggestions unavailable";

/// One row of the suggestion panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    /// A city name that can be highlighted and committed
    Suggestion(String),
    /// Placeholder for an empty result; never selectable
    NoResults,
    /// Placeholder for a failed lookup; never selectable
    Unavailable,
}

impl PanelRow {
    pub fn is_selectable(&self) -> bool {
        matches!(self, PanelRow::Suggestion(_))
    }

    pub fn text(&self) -> &str {
        match self {
            PanelRow::Suggestion(city) => city,
            PanelRow::NoResults => NO_RESULTS_TEXT,
            PanelRow::Unavailable => UNAVAILABLE_TEXT,
        }
    }
}

/// How a row should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    None,
    Hovered,
    Selected,
}

/// Suggestion panel state: rows, visibility, keyboard cursor and hover
#[derive(Debug, Default)]
pub struct AutocompleteState {
    rows: Vec<PanelRow>,
    visible: bool,
    selected: Option<usize>,
    hovered: Option<usize>,
    /// Suggestions from the last accepted lookup, used to re-show on focus
    last_suggestions: Vec<String>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the panel from a lookup result and show it
    ///
    /// An empty list becomes a single "no results" row. The cursor and hover
    /// are reset because the rows they pointed at are gone.
    pub fn set_suggestions(&mut self, mut cities: Vec<String>, max: Option<usize>) {
        if let Some(max) = max {
            cities.truncate(max);
        }

        self.rows = if cities.is_empty() {
            vec![PanelRow::NoResults]
        } else {
            cities.iter().cloned().map(PanelRow::Suggestion).collect()
        };
        self.last_suggestions = cities;
        self.selected = None;
        self.hovered = None;
        self.visible = true;
    }

    /// Replace the rows with the "unavailable" placeholder and show it
    pub fn set_unavailable(&mut self) {
        self.rows = vec![PanelRow::Unavailable];
        self.selected = None;
        self.hovered = None;
        self.visible = true;
    }

    /// Show the last accepted list again, replacing a placeholder row
    pub fn show_last_suggestions(&mut self) {
        if self.last_suggestions.is_empty() {
            return;
        }
        if !self.rows.iter().all(PanelRow::is_selectable) {
            self.rows = self
                .last_suggestions
                .iter()
                .cloned()
                .map(PanelRow::Suggestion)
                .collect();
            self.selected = None;
            self.hovered = None;
        }
        self.visible = true;
    }

    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    pub fn last_suggestions(&self) -> &[String] {
        &self.last_suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.hovered = None;
    }

    pub fn selectable_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_selectable()).count()
    }

    /// Keyboard cursor; None means nothing is highlighted
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.rows.get(i))
            .filter(|row| row.is_selectable())
            .map(PanelRow::text)
    }

    /// Move the cursor down, stopping at the last selectable row
    pub fn select_next(&mut self) {
        let count = self.selectable_count();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(count - 1),
        });
    }

    /// Move the cursor up; moving past the first row clears the selection
    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered
    }

    /// Track the row under the pointer; placeholders are never hovered
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|&i| self.rows.get(i).is_some_and(PanelRow::is_selectable));
    }

    pub fn highlight(&self, index: usize) -> RowHighlight {
        if self.selected == Some(index) {
            RowHighlight::Selected
        } else if self.hovered == Some(index) {
            RowHighlight::Hovered
        } else {
            RowHighlight::None
        }
    }

    /// Text of the row at `index` if it can be committed
    pub fn selectable_text(&self, index: usize) -> Option<&str> {
        self.rows
            .get(index)
            .filter(|row| row.is_selectable())
            .map(PanelRow::text)
    }
}

#[cfg(test)]
#[path = "autocomplete_state_tests.rs"]
mod autocomplete_state_tests;
