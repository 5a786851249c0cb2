//! Post-request wizard: stage machine and form reducer

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What the poster is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Professional,
    Employment,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Hire a Professional",
            Self::Employment => "Find Work",
        }
    }

    /// Long form used on the review stage
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Professional => "Looking to hire a professional",
            Self::Employment => "Looking for work",
        }
    }
}

/// One step of the linear post-request wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Stage {
    #[default]
    RoleType,
    Location,
    Details,
    Review,
}

impl Stage {
    /// All stages in wizard order
    pub const ALL: [Stage; 4] = [
        Stage::RoleType,
        Stage::Location,
        Stage::Details,
        Stage::Review,
    ];

    /// 1-based stage number shown in the progress indicator
    pub fn number(self) -> u8 {
        match self {
            Self::RoleType => 1,
            Self::Location => 2,
            Self::Details => 3,
            Self::Review => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::RoleType),
            2 => Some(Self::Location),
            3 => Some(Self::Details),
            4 => Some(Self::Review),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::RoleType => "Role Type",
            Self::Location => "Location",
            Self::Details => "Details",
            Self::Review => "Review",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::RoleType => "What are you looking for?",
            Self::Location => "Where is this opportunity?",
            Self::Details => "Tell us about the work",
            Self::Review => "Review and post",
        }
    }
}

/// The single mutable form record behind the wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobForm {
    pub user_type: Option<UserType>,
    pub state: String,
    pub city: String,
    pub title: String,
    pub hourly_rate: String,
    pub description: String,
    pub has_timeline: bool,
    pub duration: String,
}

/// A single field mutation. Cross-field resets live in [`JobForm::apply`]
/// and nowhere else.
#[derive(Debug, Clone)]
pub enum FieldChange {
    UserType(UserType),
    State(String),
    City(String),
    Title(String),
    HourlyRate(String),
    Description(String),
    HasTimeline(bool),
    Duration(String),
}

impl JobForm {
    /// Apply one field change, enforcing the dependent-field resets
    /// synchronously with the write.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::UserType(user_type) => self.user_type = Some(user_type),
            FieldChange::State(state) => {
                self.state = state;
                // A state change always invalidates the chosen city
                self.city.clear();
            }
            FieldChange::City(city) => self.city = city,
            FieldChange::Title(title) => self.title = title,
            FieldChange::HourlyRate(rate) => self.hourly_rate = rate,
            FieldChange::Description(description) => self.description = description,
            FieldChange::HasTimeline(has_timeline) => {
                self.has_timeline = has_timeline;
                // No timeline means no duration to show
                if !has_timeline {
                    self.duration.clear();
                }
            }
            FieldChange::Duration(duration) => self.duration = duration,
        }
    }
}

/// Linear four-stage wizard over a [`JobForm`]
///
/// A stage lands in the completed set only when its validity predicate held
/// at the moment of the forward transition. Refused transitions are no-ops.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    pub form: JobForm,
    stage: Stage,
    completed: BTreeSet<Stage>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_completed(&self, stage: Stage) -> bool {
        self.completed.contains(&stage)
    }

    /// Whether the progress indicator lets the user jump to `stage`
    pub fn is_accessible(&self, stage: Stage) -> bool {
        stage <= self.stage || stage.prev().is_some_and(|prev| self.completed.contains(&prev))
    }

    /// Validity predicate for a stage against the current form
    pub fn is_valid(&self, stage: Stage) -> bool {
        match stage {
            Stage::RoleType => self.form.user_type.is_some(),
            Stage::Location => !self.form.state.is_empty() && !self.form.city.is_empty(),
            Stage::Details => {
                !self.form.title.is_empty()
                    && !self.form.hourly_rate.is_empty()
                    && !self.form.description.is_empty()
                    && (!self.form.has_timeline || !self.form.duration.is_empty())
            }
            Stage::Review => true,
        }
    }

    /// Move forward one stage. Marks the stage being left as completed.
    /// Refused (returns false) when the current stage is invalid or the
    /// wizard is already on the review stage.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.stage.next() else {
            return false;
        };
        if !self.is_valid(self.stage) {
            return false;
        }
        self.completed.insert(self.stage);
        self.stage = next;
        true
    }

    /// Move back one stage. Re-entry means "not yet re-confirmed", so the
    /// stage being left drops out of the completed set.
    pub fn retreat(&mut self) -> bool {
        let Some(prev) = self.stage.prev() else {
            return false;
        };
        self.completed.remove(&self.stage);
        self.stage = prev;
        true
    }

    /// Jump straight to `target` if it is accessible. A backward jump also
    /// un-completes every stage at or past the target so they get
    /// re-validated on the way forward again.
    pub fn jump_to(&mut self, target: Stage) -> bool {
        if !self.is_accessible(target) {
            return false;
        }
        if target < self.stage {
            self.completed.retain(|stage| *stage < target);
        }
        self.stage = target;
        true
    }

    /// Route a field mutation through the reducer
    pub fn change(&mut self, change: FieldChange) {
        self.form.apply(change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Form that satisfies the stage-3 predicate (no timeline)
    fn filled_form() -> JobForm {
        JobForm {
            user_type: Some(UserType::Professional),
            state: "Goa".to_string(),
            city: "Panaji".to_string(),
            title: "Full Stack Developer".to_string(),
            hourly_rate: "50".to_string(),
            description: "Build the thing".to_string(),
            has_timeline: false,
            duration: String::new(),
        }
    }

    /// Wizard driven forward to the given stage through valid input
    fn wizard_at(stage: Stage) -> Wizard {
        let mut wizard = Wizard::new();
        wizard.form = filled_form();
        while wizard.stage() < stage {
            assert!(wizard.advance());
        }
        wizard
    }

    mod stage_enum {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_numbers_round_trip() {
            for stage in Stage::ALL {
                assert_eq!(Stage::from_number(stage.number()), Some(stage));
            }
        }

        #[test]
        fn test_from_number_rejects_out_of_range() {
            assert_eq!(Stage::from_number(0), None);
            assert_eq!(Stage::from_number(5), None);
        }

        #[test]
        fn test_next_and_prev_at_the_ends() {
            assert_eq!(Stage::RoleType.prev(), None);
            assert_eq!(Stage::Review.next(), None);
            assert_eq!(Stage::RoleType.next(), Some(Stage::Location));
            assert_eq!(Stage::Review.prev(), Some(Stage::Details));
        }

        #[test]
        fn test_default_is_role_type() {
            assert_eq!(Stage::default(), Stage::RoleType);
        }
    }

    mod field_reducer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_state_change_clears_city() {
            let mut form = JobForm::default();
            form.apply(FieldChange::State("Goa".to_string()));
            form.apply(FieldChange::City("Panaji".to_string()));
            assert_eq!(form.city, "Panaji");

            form.apply(FieldChange::State("Karnataka".to_string()));
            assert_eq!(form.state, "Karnataka");
            assert_eq!(form.city, "");
        }

        #[test]
        fn test_state_reset_is_unconditional() {
            // Re-selecting the same state still drops the city
            let mut form = JobForm::default();
            form.apply(FieldChange::State("Goa".to_string()));
            form.apply(FieldChange::City("Margao".to_string()));
            form.apply(FieldChange::State("Goa".to_string()));
            assert_eq!(form.city, "");
        }

        #[test]
        fn test_disabling_timeline_clears_duration() {
            let mut form = JobForm::default();
            form.apply(FieldChange::HasTimeline(true));
            form.apply(FieldChange::Duration("2 weeks".to_string()));
            assert_eq!(form.duration, "2 weeks");

            form.apply(FieldChange::HasTimeline(false));
            assert!(!form.has_timeline);
            assert_eq!(form.duration, "");
        }

        #[test]
        fn test_enabling_timeline_keeps_duration() {
            let mut form = JobForm::default();
            form.apply(FieldChange::HasTimeline(true));
            form.apply(FieldChange::Duration("1 month".to_string()));
            form.apply(FieldChange::HasTimeline(true));
            assert_eq!(form.duration, "1 month");
        }

        #[test]
        fn test_plain_fields_have_no_side_effects() {
            let mut form = filled_form();
            form.apply(FieldChange::Title("Designer".to_string()));
            form.apply(FieldChange::HourlyRate("75".to_string()));
            form.apply(FieldChange::Description("Logos".to_string()));
            assert_eq!(form.state, "Goa");
            assert_eq!(form.city, "Panaji");
        }
    }

    mod validity {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_role_stage_requires_user_type() {
            let mut wizard = Wizard::new();
            assert!(!wizard.is_valid(Stage::RoleType));
            wizard.change(FieldChange::UserType(UserType::Employment));
            assert!(wizard.is_valid(Stage::RoleType));
        }

        #[test]
        fn test_location_stage_requires_state_and_city() {
            let mut wizard = Wizard::new();
            assert!(!wizard.is_valid(Stage::Location));
            wizard.change(FieldChange::State("Goa".to_string()));
            assert!(!wizard.is_valid(Stage::Location));
            wizard.change(FieldChange::City("Panaji".to_string()));
            assert!(wizard.is_valid(Stage::Location));
        }

        #[test]
        fn test_details_stage_requires_duration_only_with_timeline() {
            let mut wizard = Wizard::new();
            wizard.form = filled_form();
            assert!(wizard.is_valid(Stage::Details));

            wizard.change(FieldChange::HasTimeline(true));
            assert!(!wizard.is_valid(Stage::Details));

            wizard.change(FieldChange::Duration("2 weeks".to_string()));
            assert!(wizard.is_valid(Stage::Details));
        }

        #[test]
        fn test_review_stage_is_always_valid() {
            let wizard = Wizard::new();
            assert!(wizard.is_valid(Stage::Review));
        }
    }

    mod transitions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_advance_refused_on_invalid_stage() {
            let mut wizard = Wizard::new();
            assert!(!wizard.advance());
            assert_eq!(wizard.stage(), Stage::RoleType);
            assert!(!wizard.is_completed(Stage::RoleType));
        }

        #[test]
        fn test_advance_marks_stage_completed() {
            let mut wizard = Wizard::new();
            wizard.change(FieldChange::UserType(UserType::Professional));
            assert!(wizard.advance());
            assert_eq!(wizard.stage(), Stage::Location);
            assert!(wizard.is_completed(Stage::RoleType));
        }

        #[test]
        fn test_advance_is_noop_at_review() {
            let mut wizard = wizard_at(Stage::Review);
            assert!(!wizard.advance());
            assert_eq!(wizard.stage(), Stage::Review);
        }

        #[test]
        fn test_retreat_refused_at_first_stage() {
            let mut wizard = Wizard::new();
            assert!(!wizard.retreat());
            assert_eq!(wizard.stage(), Stage::RoleType);
        }

        #[test]
        fn test_retreat_unmarks_the_stage_being_left() {
            let mut wizard = wizard_at(Stage::Details);
            assert!(wizard.advance());
            assert!(wizard.is_completed(Stage::Details));

            // Leaving Review touches only Review's marker (it never had one)
            assert!(wizard.retreat());
            assert_eq!(wizard.stage(), Stage::Details);
            assert!(wizard.is_completed(Stage::Details));

            // Leaving Details drops its marker: re-entry is unconfirmed
            assert!(wizard.retreat());
            assert_eq!(wizard.stage(), Stage::Location);
            assert!(!wizard.is_completed(Stage::Details));
            assert!(wizard.is_completed(Stage::Location));
        }

        #[test]
        fn test_forward_jump_requires_completed_predecessor() {
            let mut wizard = Wizard::new();
            wizard.form = filled_form();
            assert!(!wizard.jump_to(Stage::Details));
            assert_eq!(wizard.stage(), Stage::RoleType);

            assert!(wizard.advance());
            // Only RoleType is completed; Details stays out of reach until
            // Location has been confirmed by advancing through it.
            assert!(!wizard.jump_to(Stage::Details));
            assert!(wizard.jump_to(Stage::Location));
        }

        #[test]
        fn test_forward_jump_over_completed_stage() {
            let mut wizard = wizard_at(Stage::Details);
            assert!(wizard.retreat());
            assert!(wizard.retreat());
            assert_eq!(wizard.stage(), Stage::RoleType);
            // RoleType stayed completed, so Location is one jump away
            assert!(wizard.jump_to(Stage::Location));
            assert_eq!(wizard.stage(), Stage::Location);
        }

        #[test]
        fn test_backward_jump_clears_markers_from_target_on() {
            let mut wizard = wizard_at(Stage::Details);
            assert!(wizard.is_completed(Stage::RoleType));
            assert!(wizard.is_completed(Stage::Location));

            assert!(wizard.jump_to(Stage::RoleType));
            assert_eq!(wizard.stage(), Stage::RoleType);
            assert!(!wizard.is_completed(Stage::RoleType));
            assert!(!wizard.is_completed(Stage::Location));
        }

        #[test]
        fn test_jump_to_current_stage_keeps_markers() {
            let mut wizard = wizard_at(Stage::Location);
            assert!(wizard.jump_to(Stage::Location));
            assert!(wizard.is_completed(Stage::RoleType));
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blocked_then_unblocked_first_stage() {
            let mut wizard = Wizard::new();
            assert!(!wizard.advance());
            assert_eq!(wizard.stage(), Stage::RoleType);

            wizard.change(FieldChange::UserType(UserType::Professional));
            assert!(wizard.advance());
            assert_eq!(wizard.stage(), Stage::Location);
            assert!(wizard.is_completed(Stage::RoleType));
            assert!(!wizard.is_completed(Stage::Location));
        }

        #[test]
        fn test_city_resets_across_repeated_state_picks() {
            let mut wizard = wizard_at(Stage::Location);
            wizard.change(FieldChange::State("Goa".to_string()));
            assert_eq!(wizard.form.city, "");
            wizard.change(FieldChange::City("Panaji".to_string()));
            wizard.change(FieldChange::State("Karnataka".to_string()));
            assert_eq!(wizard.form.city, "");
        }

        #[test]
        fn test_timeline_cleared_before_submit() {
            let mut wizard = wizard_at(Stage::Details);
            wizard.change(FieldChange::HasTimeline(true));
            wizard.change(FieldChange::Duration("2 weeks".to_string()));
            assert!(wizard.advance());
            assert_eq!(wizard.stage(), Stage::Review);
            assert_eq!(wizard.form.duration, "2 weeks");

            // Flip the checkbox off from review: the duration must go too
            wizard.change(FieldChange::HasTimeline(false));
            assert_eq!(wizard.form.duration, "");
        }

        #[test]
        fn test_jump_home_from_details_clears_everything() {
            let mut wizard = wizard_at(Stage::Details);
            assert!(wizard.jump_to(Stage::RoleType));
            assert_eq!(wizard.stage(), Stage::RoleType);
            for stage in Stage::ALL {
                assert!(!wizard.is_completed(stage));
            }
        }
    }
}
