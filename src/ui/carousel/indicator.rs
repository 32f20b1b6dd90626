// SPDX-License-Identifier: MPL-2.0
//! Page position indicator: one dot per page, the current page highlighted.

use super::Message;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Row, Space};
use iced::{Alignment, Element, Length};

pub fn view<'a>(page_count: usize, current_page: usize, colors: &ColorScheme) -> Element<'a, Message> {
    (0..page_count)
        .fold(Row::new(), |row, page| {
            let color = if page == current_page {
                colors.indicator_active
            } else {
                colors.indicator_inactive
            };
            let dot = button(
                Space::new()
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT)),
            )
            .padding(0)
            .style(styles::button::indicator_dot(color))
            .on_press(Message::IndicatorPressed(page));
            row.push(dot)
        })
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .into()
}
