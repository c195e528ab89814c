//! Notifications dropdown

use iced::alignment::Horizontal;
use iced::widget::{Column, column, container, opaque};
use iced::{Element, Fill, Padding};

use enlace_common::i18n::t;

use crate::constants::NOTIFICATION_COUNT;
use crate::style::{
    CARD_PADDING, CONTENT_PADDING, ELEMENT_SPACING, HEADING_SIZE, NOTIFICATIONS_WIDTH,
    SMALL_SPACING, SMALL_TEXT_SIZE, TEXT_SIZE, modal_dialog_style, muted_text_style, shaped_text,
    shaped_text_wrapped,
};
use crate::types::Message;

/// Offset from the top of the window (just below the header)
const DROPDOWN_TOP: f32 = 52.0;

/// Dropdown anchored under the header's notifications button
///
/// Clicks inside the dropdown are captured so they don't close it.
pub fn notifications_dropdown<'a>() -> Element<'a, Message> {
    let items = (1..=NOTIFICATION_COUNT).fold(
        Column::new().spacing(ELEMENT_SPACING),
        |items, n| {
            items.push(
                column![
                    shaped_text_wrapped(t(&format!("notification-{n}-title"))).size(TEXT_SIZE),
                    shaped_text(t(&format!("notification-{n}-time")))
                        .size(SMALL_TEXT_SIZE)
                        .style(muted_text_style),
                ]
                .spacing(SMALL_SPACING),
            )
        },
    );

    let dropdown = container(
        column![shaped_text(t("title-notifications")).size(HEADING_SIZE), items]
            .spacing(ELEMENT_SPACING),
    )
    .padding(CARD_PADDING)
    .width(NOTIFICATIONS_WIDTH)
    .style(modal_dialog_style);

    container(opaque(dropdown))
        .width(Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            top: DROPDOWN_TOP,
            right: CONTENT_PADDING,
            bottom: 0.0,
            left: 0.0,
        })
        .into()
}
