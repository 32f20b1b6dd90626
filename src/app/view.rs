// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::carousel;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub carousel: &'a carousel::State,
    pub colors: &'a ColorScheme,
}

/// Renders the carousel centered on a themed background.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx.carousel.view(ctx.colors).map(Message::Carousel);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::screen(ctx.colors.screen_background))
        .into()
}
