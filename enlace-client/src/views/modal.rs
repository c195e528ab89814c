//! Global modal overlay

use iced::widget::{
    Column, Space, button, center, column, container, mouse_area, opaque, row, scrollable,
};
use iced::{Alignment, Center, Element, Fill};

use enlace_common::i18n::t;
use enlace_common::modal::{Modal, ModalBody};

use crate::style::{
    BUTTON_PADDING, CARD_PADDING, ELEMENT_SPACING, GALLERY_PICTURE_HEIGHT, HEADING_SIZE,
    MODAL_MAX_WIDTH, SMALL_SPACING, SMALL_TEXT_SIZE, TEXT_SIZE, TITLE_SIZE, error_text_style,
    modal_dialog_style, modal_overlay_style, picture_frame_style, shaped_text,
    shaped_text_wrapped, success_text_style, transparent_button_style,
};
use crate::types::Message;

/// Dialog centered over a dimmed backdrop
///
/// Clicking the backdrop dismisses the modal; clicks inside the dialog are
/// captured and never reach the backdrop.
pub fn modal_overlay(modal: &Modal) -> Element<'_, Message> {
    let title_row = row![
        shaped_text(&modal.title).size(HEADING_SIZE).width(Fill),
        button(shaped_text("✕").size(TEXT_SIZE))
            .on_press(Message::CloseModal)
            .style(transparent_button_style),
    ]
    .align_y(Alignment::Center);

    let dialog = container(
        column![title_row, scrollable(modal_body(&modal.body))].spacing(ELEMENT_SPACING),
    )
    .padding(CARD_PADDING)
    .max_width(MODAL_MAX_WIDTH)
    .style(modal_dialog_style);

    opaque(
        mouse_area(center(opaque(dialog)).style(modal_overlay_style))
            .on_press(Message::ModalBackdropClicked),
    )
}

fn modal_body(body: &ModalBody) -> Element<'_, Message> {
    match body {
        ModalBody::Paragraphs(paragraphs) => paragraphs
            .iter()
            .fold(Column::new().spacing(ELEMENT_SPACING), |column, paragraph| {
                column.push(shaped_text_wrapped(paragraph).size(TEXT_SIZE))
            })
            .into(),

        ModalBody::Error { summary, detail } => column![
            shaped_text_wrapped(summary).size(TEXT_SIZE),
            shaped_text_wrapped(detail)
                .size(SMALL_TEXT_SIZE)
                .style(error_text_style),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),

        // Captioned frame standing in for the picture itself
        ModalBody::Picture { alt } => container(shaped_text_wrapped(alt).size(TEXT_SIZE))
            .padding(CARD_PADDING)
            .width(Fill)
            .height(GALLERY_PICTURE_HEIGHT)
            .align_x(Center)
            .align_y(Center)
            .style(picture_frame_style)
            .into(),

        ModalBody::Clearance(document) => {
            let assets = document
                .assets
                .iter()
                .fold(Column::new().spacing(SMALL_SPACING), |list, asset| {
                    let status = shaped_text(asset.status_label()).size(TEXT_SIZE);
                    let status = if asset.returned {
                        status.style(success_text_style)
                    } else {
                        status.style(error_text_style)
                    };
                    list.push(
                        row![shaped_text(format!("• {}:", asset.name)).size(TEXT_SIZE), status]
                            .spacing(SMALL_SPACING),
                    )
                });

            column![
                shaped_text(t("clearance-heading")).size(TITLE_SIZE),
                shaped_text_wrapped(document.statement()).size(TEXT_SIZE),
                assets,
                Space::new().height(BUTTON_PADDING),
                shaped_text_wrapped(document.closing()).size(TEXT_SIZE),
            ]
            .spacing(ELEMENT_SPACING)
            .into()
        }
    }
}
