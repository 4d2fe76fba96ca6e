//! User intents and their dispatch onto the view state

use crate::feedback::{Feedback, ImpactStyle};
use crate::quote::{Deck, QuoteId};

use super::state::ViewState;

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Show the previous quote
    Previous,
    /// Show the next quote
    Next,
    /// Toggle favorite on the displayed quote
    ToggleFavorite,
    /// Jump to a quote from the favorites list
    SelectFavorite(QuoteId),
    /// Leave the app
    Quit,
}

impl Intent {
    /// Impact emitted when this intent is handled
    pub fn impact(self) -> Option<ImpactStyle> {
        match self {
            Intent::Previous | Intent::Next | Intent::SelectFavorite(_) => {
                Some(ImpactStyle::Light)
            }
            Intent::ToggleFavorite => Some(ImpactStyle::Medium),
            Intent::Quit => None,
        }
    }
}

/// Apply an intent to the state, emitting its feedback first
///
/// Returns false when the intent asks to quit.
pub fn dispatch(
    state: &mut ViewState,
    deck: &Deck,
    intent: Intent,
    feedback: &dyn Feedback,
) -> bool {
    if let Some(style) = intent.impact() {
        feedback.impact(style);
    }

    match intent {
        Intent::Previous => state.previous(deck),
        Intent::Next => state.next(deck),
        Intent::ToggleFavorite => {
            let id = state.current_quote(deck).id;
            state.toggle(id);
            tracing::debug!(id, favorite = state.favorite_ids.contains(&id), "Toggled favorite");
        }
        Intent::SelectFavorite(id) => state.select(deck, id),
        Intent::Quit => return false,
    }

    tracing::debug!(index = state.current_index, ?intent, "Handled intent");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::testing::Recorder;
    use pretty_assertions::assert_eq;

    #[test]
    fn navigation_emits_light_impacts() {
        let deck = Deck::builtin();
        let mut state = ViewState::new();
        let recorder = Recorder::default();

        assert!(dispatch(&mut state, &deck, Intent::Next, &recorder));
        assert!(dispatch(&mut state, &deck, Intent::Previous, &recorder));

        assert_eq!(state.current_index, 0);
        assert_eq!(recorder.taken(), vec![ImpactStyle::Light, ImpactStyle::Light]);
    }

    #[test]
    fn toggle_targets_displayed_quote_with_medium_impact() {
        let deck = Deck::builtin();
        let mut state = ViewState { current_index: 2, ..Default::default() };
        let recorder = Recorder::default();

        dispatch(&mut state, &deck, Intent::ToggleFavorite, &recorder);

        assert!(state.favorite_ids.contains(&3));
        assert_eq!(recorder.taken(), vec![ImpactStyle::Medium]);
    }

    #[test]
    fn selecting_favorite_updates_card() {
        let deck = Deck::builtin();
        let mut state = ViewState::new();
        let recorder = Recorder::default();

        state.toggle(7);
        dispatch(&mut state, &deck, Intent::SelectFavorite(7), &recorder);

        assert_eq!(state.current_index, 6);
        assert_eq!(state.current_quote(&deck).author, "Tony Robbins");
        assert_eq!(recorder.taken(), vec![ImpactStyle::Light]);
    }

    #[test]
    fn quit_stops_without_feedback() {
        let deck = Deck::builtin();
        let mut state = ViewState::new();
        let recorder = Recorder::default();

        assert!(!dispatch(&mut state, &deck, Intent::Quit, &recorder));
        assert!(recorder.taken().is_empty());
        assert_eq!(state, ViewState::new());
    }

    #[test]
    fn scenario_toggle_three_then_one_then_three() {
        let deck = Deck::builtin();
        let mut state = ViewState::new();
        let recorder = Recorder::default();

        state.select(&deck, 3);
        dispatch(&mut state, &deck, Intent::ToggleFavorite, &recorder);
        state.select(&deck, 1);
        dispatch(&mut state, &deck, Intent::ToggleFavorite, &recorder);

        let order: Vec<_> = state.favorites(&deck).iter().map(|(_, q)| q.id).collect();
        assert_eq!(order, vec![1, 3]);

        state.select(&deck, 3);
        dispatch(&mut state, &deck, Intent::ToggleFavorite, &recorder);

        let order: Vec<_> = state.favorites(&deck).iter().map(|(_, q)| q.id).collect();
        assert_eq!(order, vec![1]);
    }
}
