use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Rect directly under `anchor`, as wide as the anchor and clipped to `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(bottom.saturating_sub(popup_y)),
    }
}

/// Rect in the top-right corner of `area`, stacked below `offset_y` rows
pub fn top_right(area: Rect, width: u16, height: u16, offset_y: u16) -> Rect {
    let width = width.min(area.width);
    let y = area.y.saturating_add(offset_y);
    let bottom = area.y.saturating_add(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width),
        y,
        width,
        height: height.min(bottom.saturating_sub(y)),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
