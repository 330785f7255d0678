//! Tests for AutocompleteController

use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::crossterm::event::KeyModifiers;

use super::*;
use crate::api::ApiError;
use crate::autocomplete::PanelRow;
use crate::test_utils::test_helpers::{key, key_with_mods, ms, test_controller, type_text};

struct Harness {
    controller: AutocompleteController,
    requests: Receiver<LookupRequest>,
    responses: Sender<LookupResponse>,
}

impl Harness {
    fn new(options: AutocompleteOptions) -> Self {
        let mut controller = AutocompleteController::attach(
            InputField::new(Some("departure-city"), "departure_city", "From"),
            options,
        );
        let (request_tx, requests) = mpsc::channel();
        let (responses, response_rx) = mpsc::channel();
        controller.set_channels(request_tx, response_rx);
        controller.handle_focus();
        Self {
            controller,
            requests,
            responses,
        }
    }

    fn fetches(&self) -> Vec<(String, u64)> {
        self.requests
            .try_iter()
            .filter_map(|r| match r {
                LookupRequest::Fetch { query, request_id } => Some((query, request_id)),
                _ => None,
            })
            .collect()
    }

    fn all_requests(&self) -> Vec<LookupRequest> {
        self.requests.try_iter().collect()
    }

    fn respond(&mut self, request_id: u64, names: &[&str]) {
        self.responses
            .send(LookupResponse::Suggestions {
                request_id,
                query: String::new(),
                cities: names.iter().map(|s| s.to_string()).collect(),
            })
            .unwrap();
        self.controller.poll_responses();
    }

    /// Type `text`, let the debounce fire, and answer with `names`
    fn show(&mut self, text: &str, names: &[&str], now: Instant) -> u64 {
        type_text(&mut self.controller, text, now);
        self.controller.tick(now + ms(150));
        let (_, request_id) = self.fetches().pop().expect("lookup dispatched");
        self.respond(request_id, names);
        request_id
    }

    fn suggestion_texts(&self) -> Vec<String> {
        self.controller
            .state()
            .rows()
            .iter()
            .map(|row| row.text().to_string())
            .collect()
    }
}

fn last_arrived() -> AutocompleteOptions {
    AutocompleteOptions {
        ordering: ResponseOrdering::LastArrived,
        ..AutocompleteOptions::default()
    }
}

mod debounce_tests {
    use super::*;

    #[test]
    fn test_blank_query_hides_and_never_fetches() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);
        assert!(h.controller.is_panel_visible());

        let t1 = t0 + ms(500);
        h.controller.handle_key(key(KeyCode::Backspace), t1);
        h.controller.handle_key(key(KeyCode::Backspace), t1);
        h.controller.tick(t1 + ms(1000));

        assert!(!h.controller.is_panel_visible());
        assert!(h.fetches().is_empty());
    }

    #[test]
    fn test_whitespace_only_query_is_blank() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "   ", t0);
        h.controller.tick(t0 + ms(1000));
        assert!(h.fetches().is_empty());
    }

    #[test]
    fn test_single_character_is_dispatched() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "K", t0);
        h.controller.tick(t0 + ms(150));
        assert_eq!(h.fetches(), vec![("K".to_string(), 1)]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "  Kaz ", t0);
        h.controller.tick(t0 + ms(150));
        assert_eq!(h.fetches(), vec![("Kaz".to_string(), 1)]);
    }

    #[test]
    fn test_keystrokes_within_quiet_period_collapse() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "M", t0);
        h.controller.tick(t0 + ms(100));
        type_text(&mut h.controller, "o", t0 + ms(100));
        h.controller.tick(t0 + ms(200));
        type_text(&mut h.controller, "s", t0 + ms(200));

        h.controller.tick(t0 + ms(349));
        assert!(h.fetches().is_empty());

        h.controller.tick(t0 + ms(350));
        assert_eq!(h.fetches(), vec![("Mos".to_string(), 1)]);

        h.controller.tick(t0 + ms(1000));
        assert!(h.fetches().is_empty());
    }

    #[test]
    fn test_separate_quiet_periods_fetch_separately() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "Lo", t0);
        h.controller.tick(t0 + ms(150));
        type_text(&mut h.controller, "n", t0 + ms(300));
        h.controller.tick(t0 + ms(450));

        let fetched: Vec<String> = h.fetches().into_iter().map(|(q, _)| q).collect();
        assert_eq!(fetched, vec!["Lo".to_string(), "Lon".to_string()]);
    }

    #[test]
    fn test_cursor_keys_do_not_restart_debounce() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "Ufa", t0);
        h.controller.handle_key(key(KeyCode::Left), t0 + ms(100));
        h.controller.tick(t0 + ms(150));
        assert_eq!(h.fetches().len(), 1);
    }

    #[test]
    fn test_custom_debounce_delay() {
        let mut h = Harness::new(AutocompleteOptions {
            debounce: ms(300),
            ..AutocompleteOptions::default()
        });
        let t0 = Instant::now();
        type_text(&mut h.controller, "Ufa", t0);
        h.controller.tick(t0 + ms(299));
        assert!(h.fetches().is_empty());
        h.controller.tick(t0 + ms(300));
        assert_eq!(h.fetches().len(), 1);
    }

    #[test]
    fn test_next_deadline_tracks_pending_timers() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        assert_eq!(h.controller.next_deadline(t0), None);

        type_text(&mut h.controller, "T", t0);
        assert_eq!(h.controller.next_deadline(t0 + ms(100)), Some(ms(50)));
    }
}

mod render_state_tests {
    use super::*;

    #[test]
    fn test_success_renders_rows_in_order() {
        let mut h = Harness::new(AutocompleteOptions::default());
        h.show("M", &["Moscow", "Minsk"], Instant::now());

        assert!(h.controller.is_panel_visible());
        assert_eq!(h.suggestion_texts(), vec!["Moscow", "Minsk"]);
        assert_eq!(h.controller.state().selectable_count(), 2);
    }

    #[test]
    fn test_empty_result_renders_placeholder() {
        let mut h = Harness::new(AutocompleteOptions::default());
        h.show("Xyz", &[], Instant::now());

        assert!(h.controller.is_panel_visible());
        assert_eq!(h.controller.state().rows(), &[PanelRow::NoResults]);
    }

    #[test]
    fn test_max_suggestions_option() {
        let mut h = Harness::new(AutocompleteOptions {
            max_suggestions: Some(1),
            ..AutocompleteOptions::default()
        });
        h.show("M", &["Moscow", "Minsk"], Instant::now());
        assert_eq!(h.suggestion_texts(), vec!["Moscow"]);
    }

    #[test]
    fn test_failure_leaves_panel_untouched() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);

        type_text(&mut h.controller, "s", t0 + ms(500));
        h.controller.tick(t0 + ms(650));
        let (_, request_id) = h.fetches().pop().unwrap();
        h.responses
            .send(LookupResponse::Failed {
                request_id,
                error: ApiError::Status { code: 500 },
            })
            .unwrap();

        assert!(!h.controller.poll_responses());
        assert!(h.controller.is_panel_visible());
        assert_eq!(h.suggestion_texts(), vec!["Moscow"]);
    }

    #[test]
    fn test_failure_before_any_result_stays_hidden() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "Mo", t0);
        h.controller.tick(t0 + ms(150));
        let (_, request_id) = h.fetches().pop().unwrap();

        h.controller.apply_response(LookupResponse::Failed {
            request_id,
            error: ApiError::Network("connection refused".to_string()),
        });
        assert!(!h.controller.is_panel_visible());
    }

    #[test]
    fn test_failure_with_unavailable_row() {
        let mut h = Harness::new(AutocompleteOptions {
            show_unavailable: true,
            ..AutocompleteOptions::default()
        });
        let t0 = Instant::now();
        type_text(&mut h.controller, "Mo", t0);
        h.controller.tick(t0 + ms(150));
        let (_, request_id) = h.fetches().pop().unwrap();

        assert!(h.controller.apply_response(LookupResponse::Failed {
            request_id,
            error: ApiError::Parse("expected value".to_string()),
        }));
        assert_eq!(h.controller.state().rows(), &[PanelRow::Unavailable]);
        assert_eq!(h.controller.state().selectable_count(), 0);
    }

    #[test]
    fn test_lookups_without_worker_are_skipped() {
        let mut controller = test_controller();
        let t0 = Instant::now();
        type_text(&mut controller, "Sochi", t0);
        controller.tick(t0 + ms(150));

        assert!(controller.in_flight().is_empty());
        assert!(!controller.poll_responses());
    }

    #[test]
    fn test_worker_disconnect_is_survived() {
        let mut h = Harness::new(AutocompleteOptions::default());
        drop(h.responses);

        assert!(!h.controller.poll_responses());

        let t0 = Instant::now();
        type_text(&mut h.controller, "Sochi", t0);
        h.controller.tick(t0 + ms(150));
        assert!(h.controller.in_flight().is_empty());
    }
}

mod keyboard_tests {
    use super::*;

    #[test]
    fn test_down_and_up_are_consumed_and_clamped() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("M", &["Moscow", "Minsk"], t0);

        for _ in 0..3 {
            assert_eq!(
                h.controller.handle_key(key(KeyCode::Down), t0),
                KeyOutcome::Consumed
            );
        }
        assert_eq!(h.controller.state().selected_index(), Some(1));

        for _ in 0..3 {
            assert_eq!(
                h.controller.handle_key(key(KeyCode::Up), t0),
                KeyOutcome::Consumed
            );
        }
        assert_eq!(h.controller.state().selected_index(), None);
    }

    #[test]
    fn test_navigation_passes_through_when_hidden() {
        let mut controller = test_controller();
        let now = Instant::now();
        assert_eq!(
            controller.handle_key(key(KeyCode::Down), now),
            KeyOutcome::PassedThrough
        );
        assert_eq!(
            controller.handle_key(key(KeyCode::Enter), now),
            KeyOutcome::PassedThrough
        );
    }

    #[test]
    fn test_navigation_ignores_placeholder_panel() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Xyz", &[], t0);

        assert_eq!(
            h.controller.handle_key(key(KeyCode::Down), t0),
            KeyOutcome::PassedThrough
        );
        assert_eq!(h.controller.state().selected_index(), None);
    }

    #[test]
    fn test_enter_commits_highlighted_row() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("M", &["Moscow", "Minsk"], t0);
        h.controller.handle_key(key(KeyCode::Down), t0);
        h.controller.handle_key(key(KeyCode::Down), t0);

        let outcome = h.controller.handle_key(key(KeyCode::Enter), t0);

        assert_eq!(outcome, KeyOutcome::Consumed);
        assert_eq!(h.controller.field().value(), "Minsk");
        assert!(!h.controller.is_panel_visible());
        assert!(h.controller.field().is_focused());
        assert_eq!(
            h.controller.field_mut().take_events(),
            vec![FieldEvent::Input {
                value: "Minsk".to_string()
            }]
        );
    }

    #[test]
    fn test_enter_without_selection_suppresses_submit_only() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("M", &["Moscow"], t0);

        assert_eq!(
            h.controller.handle_key(key(KeyCode::Enter), t0),
            KeyOutcome::Consumed
        );
        assert_eq!(h.controller.field().value(), "M");
        assert!(h.controller.is_panel_visible());
        assert!(h.controller.field_mut().take_events().is_empty());
    }

    #[test]
    fn test_escape_hides_without_touching_text() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);

        let outcome = h.controller.handle_key(key(KeyCode::Esc), t0);

        assert_eq!(outcome, KeyOutcome::PassedThrough);
        assert!(!h.controller.is_panel_visible());
        assert_eq!(h.controller.field().value(), "Mo");
    }

    #[test]
    fn test_other_keys_reach_the_field() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);

        let outcome = h.controller.handle_key(key(KeyCode::Char('s')), t0);
        assert_eq!(outcome, KeyOutcome::PassedThrough);
        assert_eq!(h.controller.field().value(), "Mos");
    }

    #[test]
    fn test_ctrl_m_does_not_split_the_field() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "Mos", t0);
        h.controller.handle_key(
            key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL),
            t0,
        );
        type_text(&mut h.controller, "cow", t0);

        assert_eq!(h.controller.field().value(), "Moscow");
        assert_eq!(h.controller.field().textarea.lines().len(), 1);

        h.controller.tick(t0 + ms(150));
        let fetches = h.fetches();
        assert_eq!(fetches.last().map(|(q, _)| q.as_str()), Some("Moscow"));
    }

    #[test]
    fn test_commit_does_not_trigger_own_lookup() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("M", &["Moscow"], t0);
        h.controller.handle_key(key(KeyCode::Down), t0);
        h.controller.handle_key(key(KeyCode::Enter), t0);

        h.controller.tick(t0 + ms(1000));
        assert!(h.fetches().is_empty());
        assert!(!h.controller.is_panel_visible());
    }

    #[test]
    fn test_commit_drops_pending_debounce() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("M", &["Moscow", "Minsk"], t0);

        // Typing restarts the debounce; committing before it fires wins
        let t1 = t0 + ms(400);
        type_text(&mut h.controller, "i", t1);
        h.controller.handle_key(key(KeyCode::Down), t1);
        h.controller.handle_key(key(KeyCode::Enter), t1);
        h.controller.tick(t1 + ms(150));

        assert!(h.fetches().is_empty());
        assert_eq!(h.controller.field().value(), "Moscow");
    }
}

mod focus_tests {
    use super::*;

    #[test]
    fn test_blur_hides_after_delay() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);

        let t1 = t0 + ms(500);
        h.controller.handle_blur(t1);
        assert!(!h.controller.field().is_focused());

        h.controller.tick(t1 + ms(149));
        assert!(h.controller.is_panel_visible());
        h.controller.tick(t1 + ms(150));
        assert!(!h.controller.is_panel_visible());
    }

    #[test]
    fn test_click_after_blur_still_commits() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow", "Mozhaysk"], t0);

        // Pressing the mouse on a row blurs the field first
        let t1 = t0 + ms(500);
        h.controller.handle_blur(t1);
        h.controller.tick(t1 + ms(20));
        assert!(h.controller.handle_click(1));

        assert_eq!(h.controller.field().value(), "Mozhaysk");
        assert!(!h.controller.is_panel_visible());
        assert!(h.controller.field().is_focused());
        assert_eq!(h.controller.field_mut().take_events().len(), 1);

        h.controller.tick(t1 + ms(1000));
        assert!(!h.controller.is_panel_visible());
        assert_eq!(h.controller.field().value(), "Mozhaysk");
    }

    #[test]
    fn test_click_on_placeholder_does_nothing() {
        let mut h = Harness::new(AutocompleteOptions::default());
        h.show("Xyz", &[], Instant::now());

        assert!(!h.controller.handle_click(0));
        assert!(h.controller.is_panel_visible());
        assert_eq!(h.controller.field().value(), "Xyz");
    }

    #[test]
    fn test_click_on_hidden_panel_does_nothing() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);
        h.controller.handle_key(key(KeyCode::Esc), t0);

        assert!(!h.controller.handle_click(0));
        assert_eq!(h.controller.field().value(), "Mo");
    }

    #[test]
    fn test_refocus_reshows_without_fetch() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);
        h.controller.handle_blur(t0 + ms(200));
        h.controller.tick(t0 + ms(400));
        assert!(!h.controller.is_panel_visible());

        h.controller.handle_focus();

        assert!(h.controller.is_panel_visible());
        assert!(h.fetches().is_empty());
    }

    #[test]
    fn test_refocus_with_blank_value_stays_hidden() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);
        h.controller.field_mut().set_value("  ");
        h.controller.handle_blur(t0 + ms(200));
        h.controller.tick(t0 + ms(400));

        h.controller.handle_focus();
        assert!(!h.controller.is_panel_visible());
    }

    #[test]
    fn test_refocus_after_empty_result_stays_hidden() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Xyz", &[], t0);
        h.controller.handle_blur(t0 + ms(200));
        h.controller.tick(t0 + ms(400));

        h.controller.handle_focus();
        assert!(!h.controller.is_panel_visible());
    }

    #[test]
    fn test_refocus_after_failure_shows_last_list() {
        let mut h = Harness::new(AutocompleteOptions {
            show_unavailable: true,
            ..AutocompleteOptions::default()
        });
        let t0 = Instant::now();
        h.show("Mo", &["Moscow", "Monaco"], t0);

        type_text(&mut h.controller, "s", t0 + ms(200));
        h.controller.tick(t0 + ms(400));
        let (_, request_id) = h.fetches().pop().unwrap();
        h.controller.apply_response(LookupResponse::Failed {
            request_id,
            error: ApiError::Network("timed out".to_string()),
        });
        assert_eq!(h.controller.state().rows(), &[PanelRow::Unavailable]);

        h.controller.handle_blur(t0 + ms(500));
        h.controller.tick(t0 + ms(700));
        assert!(!h.controller.is_panel_visible());
        h.controller.handle_focus();

        assert!(h.controller.is_panel_visible());
        assert_eq!(h.suggestion_texts(), vec!["Moscow", "Monaco"]);
        assert!(h.fetches().is_empty());
    }

    #[test]
    fn test_refocus_cancels_pending_hide() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        h.show("Mo", &["Moscow"], t0);

        h.controller.handle_blur(t0 + ms(200));
        h.controller.handle_focus();
        h.controller.tick(t0 + ms(1000));

        assert!(h.controller.is_panel_visible());
    }

    #[test]
    fn test_hover_follows_pointer() {
        let mut h = Harness::new(AutocompleteOptions::default());
        h.show("M", &["Moscow", "Minsk"], Instant::now());

        h.controller.handle_hover(Some(1));
        assert_eq!(h.controller.state().hovered_index(), Some(1));
        h.controller.handle_hover(None);
        assert_eq!(h.controller.state().hovered_index(), None);
    }
}

mod ordering_tests {
    use super::*;

    /// Issue "Lo" then "Lon" so both lookups are in flight at once
    fn two_overlapping(h: &mut Harness) -> (u64, u64) {
        let t0 = Instant::now();
        type_text(&mut h.controller, "Lo", t0);
        h.controller.tick(t0 + ms(150));
        type_text(&mut h.controller, "n", t0 + ms(200));
        h.controller.tick(t0 + ms(350));

        let fetches = h.fetches();
        assert_eq!(fetches.len(), 2);
        assert_eq!(fetches[0].0, "Lo");
        assert_eq!(fetches[1].0, "Lon");
        (fetches[0].1, fetches[1].1)
    }

    #[test]
    fn test_last_arrived_shows_older_response_when_it_lands_last() {
        let mut h = Harness::new(last_arrived());
        let (lo, lon) = two_overlapping(&mut h);

        h.respond(lon, &["London"]);
        h.respond(lo, &["London", "Los Angeles", "Lome"]);

        assert_eq!(h.suggestion_texts(), vec!["London", "Los Angeles", "Lome"]);
    }

    #[test]
    fn test_last_arrived_keeps_both_lookups_running() {
        let mut h = Harness::new(last_arrived());
        two_overlapping(&mut h);
        assert_eq!(h.controller.in_flight().len(), 2);
    }

    #[test]
    fn test_latest_issued_discards_stale_response() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let (lo, lon) = two_overlapping(&mut h);

        h.respond(lon, &["London"]);
        h.respond(lo, &["London", "Los Angeles", "Lome"]);

        assert_eq!(h.suggestion_texts(), vec!["London"]);
    }

    #[test]
    fn test_latest_issued_ignores_stale_response_arriving_first() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let (lo, lon) = two_overlapping(&mut h);

        h.respond(lo, &["London", "Los Angeles", "Lome"]);
        assert!(h.controller.state().rows().is_empty());

        h.respond(lon, &["London"]);
        assert_eq!(h.suggestion_texts(), vec!["London"]);
    }

    #[test]
    fn test_latest_issued_cancels_superseded_lookup() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "Lo", t0);
        h.controller.tick(t0 + ms(150));
        type_text(&mut h.controller, "n", t0 + ms(200));
        h.controller.tick(t0 + ms(350));

        assert_eq!(
            h.all_requests(),
            vec![
                LookupRequest::Fetch {
                    query: "Lo".to_string(),
                    request_id: 1
                },
                LookupRequest::Cancel { request_id: 1 },
                LookupRequest::Fetch {
                    query: "Lon".to_string(),
                    request_id: 2
                },
            ]
        );
        assert_eq!(h.controller.in_flight(), &[2]);
    }

    #[test]
    fn test_clearing_field_invalidates_in_flight_lookup() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "L", t0);
        h.controller.tick(t0 + ms(150));
        let (_, request_id) = h.fetches().pop().unwrap();

        h.controller.handle_key(key(KeyCode::Backspace), t0 + ms(200));
        assert_eq!(
            h.all_requests(),
            vec![LookupRequest::Cancel { request_id }]
        );

        h.respond(request_id, &["Lyon"]);
        assert!(!h.controller.is_panel_visible());
    }
}

mod detach_tests {
    use super::*;

    #[test]
    fn test_detach_cancels_lookups_and_stops_worker() {
        let mut h = Harness::new(AutocompleteOptions::default());
        let t0 = Instant::now();
        type_text(&mut h.controller, "Ka", t0);
        h.controller.tick(t0 + ms(150));
        h.fetches();

        let field = h.controller.detach();

        assert_eq!(field.value(), "Ka");
        assert_eq!(
            h.requests.try_iter().collect::<Vec<_>>(),
            vec![
                LookupRequest::Cancel { request_id: 1 },
                LookupRequest::Shutdown
            ]
        );
    }

    #[test]
    fn test_detach_without_worker_returns_field() {
        let mut controller = test_controller();
        type_text(&mut controller, "Perm", Instant::now());

        let field = controller.detach();
        assert_eq!(field.value(), "Perm");
        assert_eq!(field.id(), Some("departure-city"));
    }

    #[test]
    fn test_detach_drops_pending_debounce() {
        let (request_tx, request_rx) = mpsc::channel();
        let (_response_tx, response_rx) = mpsc::channel();
        let mut controller = test_controller();
        controller.set_channels(request_tx, response_rx);
        type_text(&mut controller, "Perm", Instant::now());

        controller.detach();

        assert_eq!(
            request_rx.try_iter().collect::<Vec<_>>(),
            vec![LookupRequest::Shutdown]
        );
    }
}
