//! Application state and core logic

use crate::config::TuiConfig;
use crate::geo::{GeoClient, GeoError, RegionOption, DEFAULT_COUNTRY};
use crate::state::{
    AppState, FieldChange, HelpRequest, JobPost, LocationFocus, Stage, UserType, View,
};
use crate::store::{JobSinkTrait, JobStore};
use crate::ui::home::{CARD_HEIGHT, CARD_SPACING_H, MIN_CARD_WIDTH};
use crate::ui::HEADER_HEIGHT;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Completed geography lookup, tagged with the sequence it was issued under
#[derive(Debug)]
pub enum GeoEvent {
    States {
        seq: u64,
        outcome: Result<Vec<RegionOption>, GeoError>,
    },
    Cities {
        seq: u64,
        outcome: Result<Vec<String>, GeoError>,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the geography API
    geo: GeoClient,
    /// Submission sink for completed posts
    store: JobStore,
    /// Country the lookups are keyed by
    country: String,
    /// Channel carrying finished lookups back to the event loop
    geo_tx: mpsc::UnboundedSender<GeoEvent>,
    geo_rx: mpsc::UnboundedReceiver<GeoEvent>,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_default();
        let geo = GeoClient::new(config.geo_api_url.clone());
        let store = JobStore::open();
        let country = config
            .country
            .clone()
            .unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        let mut state = AppState::default();
        state.requests = crate::state::seed_requests();
        if config.show_archived_posts.unwrap_or(true) {
            match store.load() {
                Ok(posts) => state
                    .requests
                    .extend(posts.iter().map(HelpRequest::from_post)),
                Err(err) => tracing::warn!(error = %err, "failed to load archived posts"),
            }
        }

        let (geo_tx, geo_rx) = mpsc::unbounded_channel();
        Ok(Self {
            state,
            geo,
            store,
            country,
            geo_tx,
            geo_rx,
            terminal_size: None,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply every finished lookup that landed since the last tick
    pub fn drain_geo_events(&mut self) {
        while let Ok(event) = self.geo_rx.try_recv() {
            self.apply_geo_event(event);
        }
    }

    /// Land one lookup response. Failures degrade to an empty options list;
    /// stale responses are dropped by the sequence check in the state layer.
    fn apply_geo_event(&mut self, event: GeoEvent) {
        match event {
            GeoEvent::States { seq, outcome } => {
                let states = outcome.unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "region lookup failed");
                    Vec::new()
                });
                self.state.finish_states_lookup(seq, states);
            }
            GeoEvent::Cities { seq, outcome } => {
                let cities = outcome.unwrap_or_else(|err| {
                    tracing::warn!(error = %err, "locality lookup failed");
                    Vec::new()
                });
                self.state.finish_cities_lookup(seq, cities);
            }
        }
    }

    /// Kick off a region lookup on a background task
    fn spawn_states_lookup(&mut self) {
        let seq = self.state.begin_states_lookup();
        let geo = self.geo.clone();
        let tx = self.geo_tx.clone();
        let country = self.country.clone();
        tokio::spawn(async move {
            let outcome = geo.fetch_states(&country).await;
            let _ = tx.send(GeoEvent::States { seq, outcome });
        });
    }

    /// Kick off a locality lookup for the currently selected state, or just
    /// drop the list when no state is chosen
    fn spawn_cities_lookup(&mut self) {
        let state_name = self.state.wizard.form.state.clone();
        if state_name.is_empty() {
            self.state.clear_cities();
            return;
        }
        let seq = self.state.begin_cities_lookup();
        let geo = self.geo.clone();
        let tx = self.geo_tx.clone();
        let country = self.country.clone();
        tokio::spawn(async move {
            let outcome = geo.fetch_cities(&country, &state_name).await;
            let _ = tx.send(GeoEvent::Cities { seq, outcome });
        });
    }

    /// Calculate number of columns for the request grid
    pub fn calculate_grid_columns(&self) -> usize {
        // terminal_size is (height, width)
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);

        // Subtract outer borders (2)
        let usable_width = width.saturating_sub(2);

        let columns = if usable_width >= MIN_CARD_WIDTH {
            ((usable_width + CARD_SPACING_H) / (MIN_CARD_WIDTH + CARD_SPACING_H)) as usize
        } else {
            1
        };
        columns.max(1)
    }

    /// Calculate how many card rows fit in the board's inner area
    pub fn calculate_grid_visible_rows(&self) -> usize {
        let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
        // Header, status bar, outer borders
        let content = height.saturating_sub(HEADER_HEIGHT + 1 + 2);
        ((content / CARD_HEIGHT) as usize).max(1)
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Any key clears a lingering status message
        self.state.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::PostJob => self.handle_wizard_key(key).await?,
        }
        Ok(())
    }

    /// Handle keys on the home board
    fn handle_home_key(&mut self, key: KeyEvent) {
        let columns = self.calculate_grid_columns();
        let visible_rows = self.calculate_grid_visible_rows();
        let total = self.state.requests.len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(columns, total);
                self.state.ensure_selected_visible(columns, visible_rows);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up(columns);
                self.state.ensure_selected_visible(columns, visible_rows);
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.state.move_selection_left(columns);
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.move_selection_right(columns, total);
            }
            KeyCode::Char('n') | KeyCode::Char('p') => {
                self.open_wizard();
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
            }
            _ => {}
        }
    }

    /// Open the post-request wizard and start the region lookup
    fn open_wizard(&mut self) {
        self.state.open_wizard();
        self.spawn_states_lookup();
    }

    /// Handle keys in the post-request wizard
    async fn handle_wizard_key(&mut self, key: KeyEvent) -> Result<()> {
        // Wizard-wide navigation first; refused transitions are no-ops
        match key.code {
            KeyCode::Esc => {
                self.cancel_wizard();
                return Ok(());
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.state.wizard.advance() {
                    let stage = self.state.wizard.stage();
                    self.state.enter_stage(stage);
                }
                return Ok(());
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.state.wizard.retreat() {
                    let stage = self.state.wizard.stage();
                    self.state.enter_stage(stage);
                }
                return Ok(());
            }
            KeyCode::Char(c @ '1'..='4') if key.modifiers.contains(KeyModifiers::ALT) => {
                if let Some(target) = Stage::from_number(c as u8 - b'0') {
                    if self.state.wizard.jump_to(target) {
                        self.state.enter_stage(target);
                    }
                }
                return Ok(());
            }
            _ => {}
        }

        match self.state.wizard.stage() {
            Stage::RoleType => self.handle_role_stage_key(key),
            Stage::Location => self.handle_location_stage_key(key),
            Stage::Details => self.handle_details_stage_key(key),
            Stage::Review => self.handle_review_stage_key(key).await,
        }
        Ok(())
    }

    /// Handle keys on the role-type stage
    fn handle_role_stage_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => self.state.role_cursor = 0,
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.state.role_cursor = 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                let choice = if self.state.role_cursor == 0 {
                    UserType::Professional
                } else {
                    UserType::Employment
                };
                self.state.wizard.change(FieldChange::UserType(choice));
            }
            _ => {}
        }
    }

    /// Handle keys on the location stage
    fn handle_location_stage_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.state.location_focus.toggle(),
            KeyCode::Char('j') | KeyCode::Down => match self.state.location_focus {
                LocationFocus::States => {
                    let max = self.state.states.len();
                    if max > 0 && self.state.state_cursor < max - 1 {
                        self.state.state_cursor += 1;
                    }
                }
                LocationFocus::Cities => {
                    let max = self.state.cities.len();
                    if max > 0 && self.state.city_cursor < max - 1 {
                        self.state.city_cursor += 1;
                    }
                }
            },
            KeyCode::Char('k') | KeyCode::Up => match self.state.location_focus {
                LocationFocus::States => {
                    self.state.state_cursor = self.state.state_cursor.saturating_sub(1);
                }
                LocationFocus::Cities => {
                    self.state.city_cursor = self.state.city_cursor.saturating_sub(1);
                }
            },
            KeyCode::Enter => match self.state.location_focus {
                LocationFocus::States => {
                    if let Some(region) = self.state.states.get(self.state.state_cursor) {
                        let name = region.name.clone();
                        // Unconditional: picking a state always resets the city
                        self.state.wizard.change(FieldChange::State(name));
                        self.spawn_cities_lookup();
                        self.state.location_focus = LocationFocus::Cities;
                    }
                }
                LocationFocus::Cities => {
                    if let Some(city) = self.state.cities.get(self.state.city_cursor) {
                        let city = city.clone();
                        self.state.wizard.change(FieldChange::City(city));
                    }
                }
            },
            _ => {}
        }
    }

    /// Details fields: title, hourly rate, description, timeline checkbox,
    /// and the duration once a timeline is expected
    fn details_field_count(&self) -> usize {
        if self.state.wizard.form.has_timeline {
            5
        } else {
            4
        }
    }

    /// Handle keys on the details stage
    fn handle_details_stage_key(&mut self, key: KeyEvent) {
        let count = self.details_field_count();
        let field = self.state.active_field;
        match key.code {
            KeyCode::Tab => self.state.active_field = (field + 1) % count,
            KeyCode::BackTab => {
                self.state.active_field = if field == 0 { count - 1 } else { field - 1 };
            }
            KeyCode::Enter | KeyCode::Char(' ') if field == 3 => {
                let next = !self.state.wizard.form.has_timeline;
                self.state.wizard.change(FieldChange::HasTimeline(next));
            }
            KeyCode::Enter if field == 2 => {
                // Enter in the description adds a newline
                let mut description = self.state.wizard.form.description.clone();
                description.push('\n');
                self.state
                    .wizard
                    .change(FieldChange::Description(description));
            }
            KeyCode::Char(c) => self.details_input_char(c),
            KeyCode::Backspace => self.details_backspace(),
            _ => {}
        }
    }

    /// Route a typed character into the active details field
    fn details_input_char(&mut self, c: char) {
        let form = &self.state.wizard.form;
        let change = match self.state.active_field {
            0 => {
                let mut title = form.title.clone();
                title.push(c);
                FieldChange::Title(title)
            }
            1 => {
                // Numeric-as-text: digits and a decimal point only
                if !c.is_ascii_digit() && c != '.' {
                    return;
                }
                let mut rate = form.hourly_rate.clone();
                rate.push(c);
                FieldChange::HourlyRate(rate)
            }
            2 => {
                let mut description = form.description.clone();
                description.push(c);
                FieldChange::Description(description)
            }
            4 => {
                let mut duration = form.duration.clone();
                duration.push(c);
                FieldChange::Duration(duration)
            }
            _ => return,
        };
        self.state.wizard.change(change);
    }

    /// Remove the last character from the active details field
    fn details_backspace(&mut self) {
        let form = &self.state.wizard.form;
        let change = match self.state.active_field {
            0 => {
                let mut title = form.title.clone();
                title.pop();
                FieldChange::Title(title)
            }
            1 => {
                let mut rate = form.hourly_rate.clone();
                rate.pop();
                FieldChange::HourlyRate(rate)
            }
            2 => {
                let mut description = form.description.clone();
                description.pop();
                FieldChange::Description(description)
            }
            4 => {
                let mut duration = form.duration.clone();
                duration.pop();
                FieldChange::Duration(duration)
            }
            _ => return,
        };
        self.state.wizard.change(change);
    }

    /// Handle keys on the review stage
    async fn handle_review_stage_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => self.state.review_button = 0,
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => self.state.review_button = 1,
            KeyCode::Enter => {
                if self.state.review_button == 0 {
                    self.submit_wizard().await;
                } else {
                    self.cancel_wizard();
                }
            }
            _ => {}
        }
    }

    /// Hand the finished form to the submission sink and close the wizard.
    /// Stage predicates are not re-checked here; Review is always valid.
    async fn submit_wizard(&mut self) {
        let post = JobPost::from_form(&self.state.wizard.form);
        match self.store.submit(&post).await {
            Ok(()) => {
                self.state.requests.push(HelpRequest::from_post(&post));
                self.state.status_message = Some("Request posted!".to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to archive post");
                self.state.status_message = Some("Request posted (archive failed)".to_string());
            }
        }
        self.state.close_wizard();
    }

    /// Discard the form and return to the home board
    fn cancel_wizard(&mut self) {
        self.state.close_wizard();
    }
}
