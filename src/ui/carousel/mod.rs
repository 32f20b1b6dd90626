// SPDX-License-Identifier: MPL-2.0
//! Carousel component: a horizontal pager of image cards with a page
//! indicator.
//!
//! The component owns the pager geometry, the per-page card states and the
//! image provider. Image downloads are issued as tasks and come back as
//! [`Message::ImageLoaded`].

pub mod card;
pub mod indicator;
pub mod pager;
pub mod transform;

pub use card::{card_label, CardStore, CardViewState, ImageStatus};
pub use pager::PagerState;
pub use transform::CardTransform;

use crate::app::config::PAGE_COUNT;
use crate::error::Error;
use crate::media::{ImageData, ImageLoader, ImageProvider};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, RelativeOffset, Scrollbar, Viewport};
use iced::widget::{operation, Column, Container, Id, Row, Scrollable};
use iced::{Alignment, Element, Length, Padding, Task};
use std::fmt;
use std::time::{Duration, Instant};

/// Widget id of the horizontal strip, used to scroll it programmatically.
pub const SCROLLABLE_ID: &str = "carousel-pager";

/// Padding between the window edge and the carousel on every side.
pub const SCREEN_PADDING: f32 = spacing::MD;

/// Width left to the strip inside a window `window_width` wide.
#[must_use]
pub fn strip_width(window_width: f32) -> f32 {
    (window_width - 2.0 * SCREEN_PADDING).max(0.0)
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The strip was scrolled by the user.
    Scrolled { offset_x: f32, viewport_width: f32 },
    /// The space available to the strip changed.
    ViewportResized(f32),
    /// The card body was released under the pointer: pick a new image,
    /// unless the release ends a swipe.
    CardTapped(usize),
    FavoriteToggled(usize),
    IndicatorPressed(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Periodic tick used to snap once scrolling settles.
    Tick(Instant),
    ImageLoaded {
        page: usize,
        image_ref: String,
        result: Result<ImageData, Error>,
    },
}

pub struct State {
    pager: PagerState,
    cards: CardStore,
    provider: Box<dyn ImageProvider>,
    loader: ImageLoader,
    snap_delay: Duration,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("pager", &self.pager)
            .field("cards", &self.cards.len())
            .field("snap_delay", &self.snap_delay)
            .finish()
    }
}

impl State {
    #[must_use]
    pub fn new(provider: Box<dyn ImageProvider>, loader: ImageLoader, snap_delay: Duration) -> Self {
        Self {
            pager: PagerState::new(PAGE_COUNT),
            cards: CardStore::new(),
            provider,
            loader,
            snap_delay,
        }
    }

    /// Creates the cards visible at startup and starts loading their images.
    pub fn start(&mut self) -> Task<Message> {
        self.materialize_visible()
    }

    #[must_use]
    pub fn pager(&self) -> &PagerState {
        &self.pager
    }

    #[must_use]
    pub fn cards(&self) -> &CardStore {
        &self.cards
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Whether the pager is waiting to snap after a scroll.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pager.is_settling()
    }

    /// Transform of the card at `page` for the current scroll position.
    #[must_use]
    pub fn card_transform(&self, page: usize) -> CardTransform {
        CardTransform::from_offset(self.pager.page_offset(page))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Scrolled {
                offset_x,
                viewport_width,
            } => {
                self.pager.set_viewport_width(viewport_width);
                if let Some(page) = self.pager.on_scroll(offset_x, Instant::now()) {
                    log::debug!("focused page {}", page + 1);
                }
                self.materialize_visible()
            }
            Message::ViewportResized(width) => {
                self.pager.set_viewport_width(width);
                self.materialize_visible()
            }
            Message::CardTapped(page) => {
                if self.pager.is_settling() {
                    log::debug!("ignoring release on page {} after a swipe", page + 1);
                    return Task::none();
                }
                self.randomize_image(page)
            }
            Message::FavoriteToggled(page) => {
                let task = self.ensure_card(page);
                if let Some(card) = self.cards.get_mut(page) {
                    let favorite = card.toggle_favorite();
                    log::debug!("page {} favorite = {}", page + 1, favorite);
                }
                task
            }
            Message::IndicatorPressed(page) => self.scroll_to_page(page),
            Message::NextPage => match self.pager.next_page() {
                Some(page) => self.scroll_to_page(page),
                None => Task::none(),
            },
            Message::PreviousPage => match self.pager.previous_page() {
                Some(page) => self.scroll_to_page(page),
                None => Task::none(),
            },
            Message::FirstPage => self.scroll_to_page(0),
            Message::LastPage => self.scroll_to_page(self.pager.final_page()),
            Message::Tick(now) => match self.pager.settle(now, self.snap_delay) {
                Some(page) => self.snap_strip_to(page),
                None => Task::none(),
            },
            Message::ImageLoaded {
                page,
                image_ref,
                result,
            } => {
                let failure = result.as_ref().err().map(ToString::to_string);
                let applied = self
                    .cards
                    .get_mut(page)
                    .is_some_and(|card| card.resolve(&image_ref, result));
                match (applied, failure) {
                    (false, _) => log::debug!("dropping stale image for page {}", page + 1),
                    (true, Some(err)) => log::warn!("image for page {} failed: {}", page + 1, err),
                    (true, None) => {}
                }
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, colors: &ColorScheme) -> Element<'a, Message> {
        let page_count = self.pager.page_count();

        let strip = (0..page_count)
            .fold(Row::new(), |row, page| {
                let card = card::view(page, self.cards.get(page), self.card_transform(page), colors);
                // Fixed-width slots keep the stride constant while cards shrink.
                row.push(
                    Container::new(card)
                        .width(Length::Fixed(sizing::CARD_WIDTH))
                        .align_x(Horizontal::Center)
                        .align_y(Vertical::Center),
                )
            })
            .spacing(spacing::LG)
            .align_y(Alignment::Center);

        let side = PagerState::side_padding(self.pager.viewport_width());
        let padded = Container::new(strip).padding(Padding {
            top: spacing::LG,
            right: side,
            bottom: spacing::LG,
            left: side,
        });

        let scrollable = Scrollable::new(padded)
            .id(Id::new(SCROLLABLE_ID))
            .width(Length::Fill)
            .direction(Direction::Horizontal(Scrollbar::hidden()))
            .on_scroll(|viewport: Viewport| Message::Scrolled {
                offset_x: viewport.absolute_offset().x,
                viewport_width: viewport.bounds().width,
            });

        Column::new()
            .push(scrollable)
            .push(indicator::view(page_count, self.pager.current_page(), colors))
            .spacing(spacing::LG)
            .padding(SCREEN_PADDING)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .into()
    }

    fn ensure_card(&mut self, page: usize) -> Task<Message> {
        if page >= self.pager.page_count() {
            return Task::none();
        }
        match self.cards.ensure(page, self.provider.as_mut()) {
            Some(image_ref) => self.fetch(page, image_ref),
            None => Task::none(),
        }
    }

    fn materialize_visible(&mut self) -> Task<Message> {
        let tasks: Vec<_> = self
            .pager
            .visible_pages()
            .map(|page| self.ensure_card(page))
            .collect();
        Task::batch(tasks)
    }

    fn randomize_image(&mut self, page: usize) -> Task<Message> {
        if page >= self.pager.page_count() {
            return Task::none();
        }
        let Some(card) = self.cards.get_mut(page) else {
            return self.ensure_card(page);
        };
        let image_ref = self.provider.next_image();
        card.replace_image(image_ref.clone());
        self.fetch(page, image_ref)
    }

    fn scroll_to_page(&mut self, page: usize) -> Task<Message> {
        let page = self.pager.go_to(page);
        Task::batch([self.snap_strip_to(page), self.materialize_visible()])
    }

    fn snap_strip_to(&self, page: usize) -> Task<Message> {
        operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: self.pager.relative_offset_for(page),
                y: 0.0,
            },
        )
    }

    fn fetch(&self, page: usize, image_ref: String) -> Task<Message> {
        Task::perform(self.loader.fetch(image_ref.clone()), move |result| {
            Message::ImageLoaded {
                page,
                image_ref: image_ref.clone(),
                result,
            }
        })
    }
}
