// SPDX-License-Identifier: MPL-2.0
//! Gallery interaction state: card hover tracking and the lightbox modal.
//!
//! Hover and the lightbox are independent axes. Opening or closing the
//! lightbox never touches the hovered card, and hover keeps updating while a
//! photo is enlarged.

use crate::error::{Error, Result};
use crate::gallery::catalog::{self, MediaItem, PhotoData, CATALOG};
use iced::Task;

/// Modal state of the enlarged-photo overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    /// No photo is enlarged; the grid is fully interactive.
    #[default]
    Idle,
    /// The photo at `index` is shown enlarged above the dimmed grid.
    Viewing { index: usize },
}

/// Gallery screen state.
#[derive(Debug, Clone)]
pub struct State {
    /// Card currently under the pointer, if any.
    hovered: Option<usize>,
    lightbox: Lightbox,
    /// Decoded photos, indexed like [`CATALOG`]. `None` until decoding lands.
    photos: Vec<Option<PhotoData>>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Create the initial gallery state: nothing hovered, lightbox idle,
    /// no photo decoded yet.
    pub fn new() -> Self {
        Self {
            hovered: None,
            lightbox: Lightbox::Idle,
            photos: vec![None; CATALOG.len()],
        }
    }

    /// Index of the card currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Current modal state.
    pub fn lightbox(&self) -> Lightbox {
        self.lightbox
    }

    /// The enlarged photo's index, when the lightbox is open.
    pub fn viewed_index(&self) -> Option<usize> {
        match self.lightbox {
            Lightbox::Idle => None,
            Lightbox::Viewing { index } => Some(index),
        }
    }

    /// The catalog entry shown in the lightbox, when open.
    pub fn viewed_item(&self) -> Option<&'static MediaItem> {
        self.viewed_index().and_then(|index| CATALOG.get(index))
    }

    /// Decoded pixels for the catalog photo at `index`, once available.
    pub fn photo(&self, index: usize) -> Option<&PhotoData> {
        self.photos.get(index).and_then(|slot| slot.as_ref())
    }
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    HoverEntered(usize),
    HoverExited(usize),
    CardPressed(usize),
    SurfacePressed,
    ClosePressed,
    BackdropPressed,
    ViewPrevious,
    ViewNext,
    PhotoDecoded {
        index: usize,
        result: Result<PhotoData>,
    },
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A photo failed to decode; the parent surfaces a toast.
    DecodeFailed(Error),
}

/// Start decoding every catalog photo off the UI thread.
///
/// PNG decoding is CPU-bound, so each photo goes through `spawn_blocking`
/// instead of tying up the async executor.
pub fn decode_all() -> Task<Message> {
    Task::batch((0..CATALOG.len()).map(|index| {
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || catalog::decode_photo(index))
                    .await
                    .map_err(|join_error| Error::Asset(join_error.to_string()))?
            },
            move |result| Message::PhotoDecoded { index, result },
        )
    }))
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::HoverEntered(index) => {
            state.hovered = Some(index);
            Event::None
        }
        Message::HoverExited(index) => {
            // Ignore exits for a card the pointer already left; a fresh
            // enter for the next card may have landed first.
            if state.hovered == Some(index) {
                state.hovered = None;
            }
            Event::None
        }
        Message::CardPressed(index) => {
            // Pressing a card always shows that card, including while
            // another photo is already enlarged.
            if index < CATALOG.len() {
                state.lightbox = Lightbox::Viewing { index };
            }
            Event::None
        }
        Message::SurfacePressed => {
            // Clicks on the enlarged photo itself keep it open; only the
            // dimmed backdrop and the close control dismiss it.
            Event::None
        }
        Message::ClosePressed | Message::BackdropPressed => {
            state.lightbox = Lightbox::Idle;
            Event::None
        }
        Message::ViewPrevious => {
            if let Lightbox::Viewing { index } = state.lightbox {
                let previous = if index == 0 {
                    CATALOG.len() - 1
                } else {
                    index - 1
                };
                state.lightbox = Lightbox::Viewing { index: previous };
            }
            Event::None
        }
        Message::ViewNext => {
            if let Lightbox::Viewing { index } = state.lightbox {
                state.lightbox = Lightbox::Viewing {
                    index: (index + 1) % CATALOG.len(),
                };
            }
            Event::None
        }
        Message::PhotoDecoded { index, result } => match result {
            Ok(photo) => {
                if let Some(slot) = state.photos.get_mut(index) {
                    *slot = Some(photo);
                }
                Event::None
            }
            Err(error) => Event::DecodeFailed(error),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::image;

    fn test_photo() -> PhotoData {
        PhotoData {
            handle: image::Handle::from_rgba(1, 1, vec![255, 0, 0, 255]),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn initial_state_is_idle_with_nothing_hovered() {
        let state = State::new();
        assert_eq!(state.hovered(), None);
        assert_eq!(state.lightbox(), Lightbox::Idle);
        for index in 0..CATALOG.len() {
            assert!(state.photo(index).is_none());
        }
    }

    #[test]
    fn hover_round_trip_restores_initial_state() {
        let mut state = State::new();

        update(&mut state, Message::HoverEntered(2));
        assert_eq!(state.hovered(), Some(2));

        update(&mut state, Message::HoverExited(2));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn stale_hover_exit_keeps_newer_hover() {
        let mut state = State::new();

        update(&mut state, Message::HoverEntered(1));
        update(&mut state, Message::HoverEntered(2));
        update(&mut state, Message::HoverExited(1));

        assert_eq!(state.hovered(), Some(2));
    }

    #[test]
    fn card_press_opens_lightbox_for_that_card() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(3));

        assert_eq!(state.lightbox(), Lightbox::Viewing { index: 3 });
        assert_eq!(state.viewed_item().map(|item| item.ordinal), Some(4));
    }

    #[test]
    fn close_control_returns_to_idle() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(0));
        update(&mut state, Message::ClosePressed);

        assert_eq!(state.lightbox(), Lightbox::Idle);
    }

    #[test]
    fn backdrop_press_returns_to_idle() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(5));
        update(&mut state, Message::BackdropPressed);

        assert_eq!(state.lightbox(), Lightbox::Idle);
    }

    #[test]
    fn surface_press_keeps_the_lightbox_open() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(2));
        update(&mut state, Message::SurfacePressed);

        assert_eq!(state.lightbox(), Lightbox::Viewing { index: 2 });
    }

    #[test]
    fn hover_survives_a_full_lightbox_cycle() {
        let mut state = State::new();

        update(&mut state, Message::HoverEntered(3));
        update(&mut state, Message::CardPressed(3));
        assert_eq!(state.hovered(), Some(3));

        update(&mut state, Message::ClosePressed);
        assert_eq!(state.hovered(), Some(3));
    }

    #[test]
    fn hover_keeps_updating_while_lightbox_is_open() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(0));
        update(&mut state, Message::HoverEntered(4));

        assert_eq!(state.hovered(), Some(4));
        assert_eq!(state.lightbox(), Lightbox::Viewing { index: 0 });
    }

    #[test]
    fn pressing_another_card_switches_the_viewed_photo() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(1));
        update(&mut state, Message::CardPressed(4));

        assert_eq!(state.lightbox(), Lightbox::Viewing { index: 4 });
    }

    #[test]
    fn press_outside_catalog_is_ignored() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(CATALOG.len()));

        assert_eq!(state.lightbox(), Lightbox::Idle);
    }

    #[test]
    fn view_next_wraps_past_the_last_photo() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(CATALOG.len() - 1));
        update(&mut state, Message::ViewNext);

        assert_eq!(state.lightbox(), Lightbox::Viewing { index: 0 });
    }

    #[test]
    fn view_previous_wraps_before_the_first_photo() {
        let mut state = State::new();

        update(&mut state, Message::CardPressed(0));
        update(&mut state, Message::ViewPrevious);

        assert_eq!(
            state.lightbox(),
            Lightbox::Viewing {
                index: CATALOG.len() - 1
            }
        );
    }

    #[test]
    fn navigation_is_ignored_while_idle() {
        let mut state = State::new();

        update(&mut state, Message::ViewNext);
        assert_eq!(state.lightbox(), Lightbox::Idle);

        update(&mut state, Message::ViewPrevious);
        assert_eq!(state.lightbox(), Lightbox::Idle);
    }

    #[test]
    fn decoded_photo_is_stored_at_its_index() {
        let mut state = State::new();

        let event = update(
            &mut state,
            Message::PhotoDecoded {
                index: 2,
                result: Ok(test_photo()),
            },
        );

        assert!(matches!(event, Event::None));
        assert!(state.photo(2).is_some());
        assert!(state.photo(0).is_none());
    }

    #[test]
    fn decode_failure_is_reported_to_the_parent() {
        let mut state = State::new();

        let event = update(
            &mut state,
            Message::PhotoDecoded {
                index: 1,
                result: Err(Error::Asset("truncated png".into())),
            },
        );

        assert!(matches!(event, Event::DecodeFailed(_)));
        assert!(state.photo(1).is_none());
    }
}
