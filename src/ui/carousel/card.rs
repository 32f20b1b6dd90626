// SPDX-License-Identifier: MPL-2.0
//! Per-page card state and the card view.

use super::transform::CardTransform;
use super::Message;
use crate::error::Error;
use crate::media::{ImageData, ImageProvider};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{fade, ColorScheme};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, image::Image, mouse_area, Column, Container, Row, Text};
use iced::{mouse, Alignment, ContentFit, Element, Font, Length};
use std::collections::BTreeMap;

/// Body text shown under every card title.
pub const CARD_DESCRIPTION: &str =
    "Lorem Ipsum is simply dummy text of the printing and typesetting industry.";

/// Title of the card at zero-based `page`.
#[must_use]
pub fn card_label(page: usize) -> String {
    format!("Image {}", page + 1)
}

/// Where the card's current image is in its lifecycle.
#[derive(Debug, Clone)]
pub enum ImageStatus {
    Loading,
    Ready(ImageData),
    Failed(String),
}

/// View state owned by one page.
#[derive(Debug, Clone)]
pub struct CardViewState {
    image_ref: String,
    is_favorite: bool,
    status: ImageStatus,
}

impl CardViewState {
    #[must_use]
    pub fn new(image_ref: String) -> Self {
        Self {
            image_ref,
            is_favorite: false,
            status: ImageStatus::Loading,
        }
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    #[must_use]
    pub fn status(&self) -> &ImageStatus {
        &self.status
    }

    /// Flips the favorite flag and returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Points the card at a new image; the previous image is dropped.
    pub fn replace_image(&mut self, image_ref: String) {
        self.image_ref = image_ref;
        self.status = ImageStatus::Loading;
    }

    /// Applies a finished load for `image_ref`.
    ///
    /// Returns `false` (and changes nothing) when the card has moved on to a
    /// different image since the request was issued.
    pub fn resolve(&mut self, image_ref: &str, result: Result<ImageData, Error>) -> bool {
        if self.image_ref != image_ref {
            return false;
        }
        self.status = match result {
            Ok(data) => ImageStatus::Ready(data),
            Err(Error::Network(err)) => ImageStatus::Failed(err.label().to_string()),
            Err(Error::Decode(_)) => ImageStatus::Failed("Unreadable image".to_string()),
            Err(err) => ImageStatus::Failed(err.to_string()),
        };
        true
    }
}

/// Card states keyed by page index.
///
/// A card is created the first time its page is materialized and lives for
/// the rest of the session, whatever the renderer does with the widget.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: BTreeMap<usize, CardViewState>,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the card for `page` if it does not exist yet.
    ///
    /// Returns the image reference of a newly created card, `None` if the
    /// card already existed (the provider is not consulted in that case).
    pub fn ensure(&mut self, page: usize, provider: &mut dyn ImageProvider) -> Option<String> {
        if self.cards.contains_key(&page) {
            return None;
        }
        let image_ref = provider.next_image();
        self.cards
            .insert(page, CardViewState::new(image_ref.clone()));
        Some(image_ref)
    }

    #[must_use]
    pub fn get(&self, page: usize) -> Option<&CardViewState> {
        self.cards.get(&page)
    }

    pub fn get_mut(&mut self, page: usize) -> Option<&mut CardViewState> {
        self.cards.get_mut(&page)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Pages currently marked as favorite, in page order.
    #[must_use]
    pub fn favorites(&self) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|(_, card)| card.is_favorite())
            .map(|(page, _)| *page)
            .collect()
    }
}

/// Renders the card for `page`.
///
/// `card` is `None` for a page that has not been materialized yet; it renders
/// with a loading placeholder.
pub fn view<'a>(
    page: usize,
    card: Option<&'a CardViewState>,
    transform: CardTransform,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let alpha = transform.alpha;
    let width = transform.apply(sizing::CARD_WIDTH);
    let image_height = transform.apply(sizing::CARD_IMAGE_HEIGHT);
    let padding = transform.apply(spacing::MD);

    let image_area = view_image(
        card.map(CardViewState::status),
        width,
        image_height,
        alpha,
        colors,
    );

    let is_favorite = card.is_some_and(CardViewState::is_favorite);
    let heart_color = if is_favorite {
        colors.favorite
    } else {
        colors.text_primary
    };
    let favorite_button = button(icons::heart(
        is_favorite,
        transform.apply(sizing::ICON_MD),
        fade(heart_color, alpha),
    ))
    .padding(transform.apply(spacing::XS))
    .style(styles::button::icon(colors.text_primary))
    .on_press(Message::FavoriteToggled(page));

    let title = Text::new(card_label(page))
        .size(transform.apply(typography::CARD_TITLE))
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        })
        .color(fade(colors.text_primary, alpha))
        .width(Length::Fill);

    let title_row = Row::new()
        .push(title)
        .push(favorite_button)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    let description = Text::new(CARD_DESCRIPTION)
        .size(transform.apply(typography::BODY))
        .color(fade(colors.text_secondary, alpha));

    let body = Container::new(
        Column::new()
            .push(title_row)
            .push(description)
            .spacing(padding)
            .width(Length::Fill),
    )
    .padding(padding);

    let surface = Container::new(Column::new().push(image_area).push(body))
        .width(Length::Fixed(width))
        .clip(true)
        .style(styles::container::card(colors.card_surface, alpha));

    // Pressing must stay uncaptured so the strip can start a touch scroll.
    mouse_area(surface)
        .on_release(Message::CardTapped(page))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn view_image<'a>(
    status: Option<&'a ImageStatus>,
    width: f32,
    height: f32,
    alpha: f32,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let message = match status {
        Some(ImageStatus::Ready(data)) => {
            return Image::new(data.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .opacity(alpha)
                .into();
        }
        Some(ImageStatus::Loading) | None => {
            Text::new("Loading…").color(fade(colors.text_secondary, alpha))
        }
        Some(ImageStatus::Failed(reason)) => {
            Text::new(reason.as_str()).color(fade(colors.error, alpha))
        }
    };

    Container::new(message.size(typography::CAPTION))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::image_placeholder(
            colors.image_placeholder,
            alpha,
        ))
        .into()
}
