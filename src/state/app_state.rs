//! Application state definitions

use crate::geo::RegionOption;
use crate::state::{JobForm, Stage, UserType, Wizard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    PostJob,
}

/// A community help request shown on the home board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: String,
    pub title: String,
    pub requester_name: String,
    pub avatar_url: String,
    pub description: String,
    pub budget: String,
    pub location: String,
}

impl HelpRequest {
    /// Card for a post submitted from this machine
    pub fn from_post(post: &JobPost) -> Self {
        let location = if post.city.is_empty() && post.state.is_empty() {
            "Remote".to_string()
        } else {
            format!("{}, {}", post.city, post.state)
        };
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            requester_name: "You".to_string(),
            avatar_url: String::new(),
            description: post.description.clone(),
            budget: format!("{}/hour", post.hourly_rate),
            location,
        }
    }
}

/// A submitted job post, the record handed to the submission sink
///
/// Mirrors the form one-to-one. Nothing is re-validated on the way out, so
/// `user_type` stays optional instead of assuming the stage gates were
/// walked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPost {
    pub id: Uuid,
    pub user_type: Option<UserType>,
    pub state: String,
    pub city: String,
    pub title: String,
    pub hourly_rate: String,
    pub description: String,
    pub has_timeline: bool,
    pub duration: String,
    pub created_at: DateTime<Utc>,
}

impl JobPost {
    pub fn from_form(form: &JobForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_type: form.user_type,
            state: form.state.clone(),
            city: form.city.clone(),
            title: form.title.clone(),
            hourly_rate: form.hourly_rate.clone(),
            description: form.description.clone(),
            has_timeline: form.has_timeline,
            duration: form.duration.clone(),
            created_at: Utc::now(),
        }
    }
}

/// Which pane has input focus on the location stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationFocus {
    #[default]
    States,
    Cities,
}

impl LocationFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::States => Self::Cities,
            Self::Cities => Self::States,
        };
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Home board
    pub requests: Vec<HelpRequest>,
    pub selected_index: usize,
    pub scroll_offset: usize,

    // Wizard core
    pub wizard: Wizard,

    // Wizard UI bookkeeping
    pub role_cursor: usize,
    pub location_focus: LocationFocus,
    pub state_cursor: usize,
    pub city_cursor: usize,
    pub active_field: usize,
    pub review_button: usize,

    // Geography lookups (session-local cache)
    pub states: Vec<RegionOption>,
    pub cities: Vec<String>,
    pub loading_states: bool,
    pub loading_cities: bool,
    states_seq: u64,
    cities_seq: u64,

    // Status line
    pub status_message: Option<String>,
}

impl AppState {
    /// Move selection down one grid row
    pub fn move_selection_down(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        }
    }

    /// Move selection up one grid row
    pub fn move_selection_up(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    /// Move selection left within the row
    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index % columns > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection right within the row
    pub fn move_selection_right(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    /// Keep the selected card inside the visible row window
    pub fn ensure_selected_visible(&mut self, columns: usize, visible_rows: usize) {
        if columns == 0 || visible_rows == 0 {
            return;
        }
        let row = self.selected_index / columns;
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible_rows {
            self.scroll_offset = row + 1 - visible_rows;
        }
    }

    /// Reset the wizard and switch to the post-request view
    pub fn open_wizard(&mut self) {
        self.wizard = Wizard::new();
        self.reset_wizard_ui();
        self.states.clear();
        self.cities.clear();
        self.current_view = View::PostJob;
    }

    /// Drop the form record and return to the home board
    ///
    /// Bumps both lookup sequences so any in-flight response lands stale.
    pub fn close_wizard(&mut self) {
        self.wizard = Wizard::new();
        self.reset_wizard_ui();
        self.states.clear();
        self.cities.clear();
        self.states_seq += 1;
        self.cities_seq += 1;
        self.loading_states = false;
        self.loading_cities = false;
        self.current_view = View::Home;
    }

    fn reset_wizard_ui(&mut self) {
        self.role_cursor = 0;
        self.location_focus = LocationFocus::States;
        self.state_cursor = 0;
        self.city_cursor = 0;
        self.active_field = 0;
        self.review_button = 0;
    }

    /// Reset per-stage cursors after a stage transition
    pub fn enter_stage(&mut self, stage: Stage) {
        self.active_field = 0;
        self.review_button = 0;
        if stage == Stage::Location {
            self.location_focus = LocationFocus::States;
        }
    }

    /// Start a region lookup; returns the sequence tag for the response
    pub fn begin_states_lookup(&mut self) -> u64 {
        self.states_seq += 1;
        self.loading_states = true;
        self.states_seq
    }

    /// Start a locality lookup for the current state; drops the stale list
    pub fn begin_cities_lookup(&mut self) -> u64 {
        self.cities_seq += 1;
        self.loading_cities = true;
        self.cities.clear();
        self.city_cursor = 0;
        self.cities_seq
    }

    /// Drop the locality list (state became empty); invalidates in-flight
    /// lookups without issuing a new one
    pub fn clear_cities(&mut self) {
        self.cities_seq += 1;
        self.loading_cities = false;
        self.cities.clear();
        self.city_cursor = 0;
    }

    /// Land a region lookup. Latest request wins: a response tagged with
    /// anything but the newest sequence is dropped.
    pub fn finish_states_lookup(&mut self, seq: u64, states: Vec<RegionOption>) -> bool {
        if seq != self.states_seq {
            return false;
        }
        self.loading_states = false;
        self.state_cursor = 0;
        self.states = states;
        true
    }

    /// Land a locality lookup, same sequence rule as the regions
    pub fn finish_cities_lookup(&mut self, seq: u64, cities: Vec<String>) -> bool {
        if seq != self.cities_seq {
            return false;
        }
        self.loading_cities = false;
        self.city_cursor = 0;
        self.cities = cities;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldChange;
    use pretty_assertions::assert_eq;

    fn region(name: &str, code: &str) -> RegionOption {
        RegionOption {
            name: name.to_string(),
            code: code.to_string(),
        }
    }

    mod grid_navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_down_stops_at_last_row() {
            let mut state = AppState::default();
            state.move_selection_down(3, 4);
            assert_eq!(state.selected_index, 3);
            state.move_selection_down(3, 4);
            assert_eq!(state.selected_index, 3);
        }

        #[test]
        fn test_left_right_stay_within_row() {
            let mut state = AppState::default();
            state.move_selection_right(3, 6);
            state.move_selection_right(3, 6);
            assert_eq!(state.selected_index, 2);
            // The rightmost column refuses to wrap into the next row
            state.move_selection_right(3, 6);
            assert_eq!(state.selected_index, 2);
            state.move_selection_left(3);
            state.move_selection_left(3);
            state.move_selection_left(3);
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_scroll_follows_selection() {
            let mut state = AppState::default();
            state.selected_index = 9; // row 3 with 3 columns
            state.ensure_selected_visible(3, 2);
            assert_eq!(state.scroll_offset, 2);
            state.selected_index = 0;
            state.ensure_selected_visible(3, 2);
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_zero_columns_is_inert() {
            let mut state = AppState::default();
            state.move_selection_down(0, 10);
            state.move_selection_up(0);
            state.ensure_selected_visible(0, 5);
            assert_eq!(state.selected_index, 0);
        }
    }

    mod lookup_sequencing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_latest_states_request_wins() {
            let mut state = AppState::default();
            let first = state.begin_states_lookup();
            let second = state.begin_states_lookup();

            // The slow first response arrives after the second was issued
            assert!(!state.finish_states_lookup(first, vec![region("Goa", "GA")]));
            assert!(state.loading_states);
            assert!(state.states.is_empty());

            assert!(state.finish_states_lookup(second, vec![region("Kerala", "KL")]));
            assert!(!state.loading_states);
            assert_eq!(state.states.len(), 1);
            assert_eq!(state.states[0].name, "Kerala");
        }

        #[test]
        fn test_begin_cities_drops_cached_list() {
            let mut state = AppState::default();
            let seq = state.begin_cities_lookup();
            assert!(state.finish_cities_lookup(seq, vec!["Panaji".to_string()]));
            assert_eq!(state.cities.len(), 1);

            state.begin_cities_lookup();
            assert!(state.cities.is_empty());
            assert!(state.loading_cities);
        }

        #[test]
        fn test_clear_cities_invalidates_in_flight() {
            let mut state = AppState::default();
            let seq = state.begin_cities_lookup();
            state.clear_cities();
            assert!(!state.finish_cities_lookup(seq, vec!["Panaji".to_string()]));
            assert!(state.cities.is_empty());
            assert!(!state.loading_cities);
        }

        #[test]
        fn test_close_wizard_invalidates_in_flight() {
            let mut state = AppState::default();
            state.open_wizard();
            let states_seq = state.begin_states_lookup();
            let cities_seq = state.begin_cities_lookup();
            state.close_wizard();
            assert!(!state.finish_states_lookup(states_seq, vec![region("Goa", "GA")]));
            assert!(!state.finish_cities_lookup(cities_seq, vec!["Panaji".to_string()]));
            assert_eq!(state.current_view, View::Home);
        }
    }

    mod wizard_lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_open_wizard_starts_fresh() {
            let mut state = AppState::default();
            state.open_wizard();
            state.wizard.change(FieldChange::State("Goa".to_string()));
            state.close_wizard();
            state.open_wizard();
            assert_eq!(state.wizard.form, JobForm::default());
            assert_eq!(state.current_view, View::PostJob);
        }
    }

    mod post_record {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_from_form_mirrors_every_field() {
            let mut form = JobForm::default();
            form.apply(FieldChange::UserType(UserType::Professional));
            form.apply(FieldChange::State("Goa".to_string()));
            form.apply(FieldChange::City("Panaji".to_string()));
            form.apply(FieldChange::Title("Plumber".to_string()));
            form.apply(FieldChange::HourlyRate("80".to_string()));
            form.apply(FieldChange::Description("Fix the sink".to_string()));
            form.apply(FieldChange::HasTimeline(true));
            form.apply(FieldChange::Duration("2 weeks".to_string()));

            let post = JobPost::from_form(&form);
            assert_eq!(post.user_type, Some(UserType::Professional));
            assert_eq!(post.state, "Goa");
            assert_eq!(post.city, "Panaji");
            assert_eq!(post.title, "Plumber");
            assert_eq!(post.hourly_rate, "80");
            assert_eq!(post.description, "Fix the sink");
            assert!(post.has_timeline);
            assert_eq!(post.duration, "2 weeks");
        }

        #[test]
        fn test_card_from_post_formats_location_and_budget() {
            let mut form = JobForm::default();
            form.apply(FieldChange::State("Goa".to_string()));
            form.apply(FieldChange::City("Panaji".to_string()));
            form.apply(FieldChange::HourlyRate("80".to_string()));
            let card = HelpRequest::from_post(&JobPost::from_form(&form));
            assert_eq!(card.location, "Panaji, Goa");
            assert_eq!(card.budget, "80/hour");
            assert_eq!(card.requester_name, "You");
        }

        #[test]
        fn test_card_from_empty_location_reads_remote() {
            let card = HelpRequest::from_post(&JobPost::from_form(&JobForm::default()));
            assert_eq!(card.location, "Remote");
        }
    }
}
