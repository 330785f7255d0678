#[cfg(test)]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use chrono::{NaiveDate, NaiveDateTime};
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use crate::app::{App, Focus};
    use crate::autocomplete::{AutocompleteController, AutocompleteOptions, InputField};
    use crate::form::Fares;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Controller on a departure-city field, connected to nothing
    pub fn test_controller() -> AutocompleteController {
        AutocompleteController::attach(
            InputField::new(Some("departure-city"), "departure_city", "From"),
            AutocompleteOptions::default(),
        )
    }

    /// Type `text` into the controller one character at a time at `now`
    pub fn type_text(controller: &mut AutocompleteController, text: &str, now: Instant) {
        for ch in text.chars() {
            controller.handle_key(key(KeyCode::Char(ch)), now);
        }
    }

    /// Fixed wall-clock "now" for date constraints
    pub fn test_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    /// Search screen with a 5000 base fare and no lookup workers
    pub fn test_app() -> App {
        App::new(
            AutocompleteOptions::default(),
            Some(Fares::new(5000.0, None, None)),
            test_now(),
        )
    }

    /// Put `cities` into the panel of a city field as if a lookup returned them
    pub fn show_suggestions(app: &mut App, focus: Focus, cities: &[&str]) {
        let controller = app.controller_mut(focus).unwrap();
        controller
            .state_mut()
            .set_suggestions(cities.iter().map(|c| c.to_string()).collect(), None);
    }

    /// Draw the app on an 80x30 test terminal; records its layout regions
    pub fn render_app(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    pub fn buffer_line(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn click(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }
}
