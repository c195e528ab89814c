//! Documents view

use iced::widget::{Column, column, container};
use iced::{Element, Fill};

use enlace_common::i18n::t;

use crate::style::{
    CARD_PADDING, ELEMENT_SPACING, SECTION_SPACING, SMALL_SPACING, SMALL_TEXT_SIZE, TEXT_SIZE,
    card_style, muted_text_style, panel_title, shaped_text, shaped_text_wrapped,
};
use crate::types::Message;

/// Document entries: (title key, description key)
const DOCUMENTS: &[(&str, &str)] = &[
    ("docs-policies-title", "docs-policies-body"),
    ("docs-handbook-title", "docs-handbook-body"),
    ("docs-forms-title", "docs-forms-body"),
];

pub fn docs_view<'a>() -> Element<'a, Message> {
    let list = DOCUMENTS
        .iter()
        .fold(Column::new().spacing(ELEMENT_SPACING), |list, (title, body)| {
            list.push(
                container(
                    column![
                        shaped_text(t(title)).size(TEXT_SIZE),
                        shaped_text_wrapped(t(body))
                            .size(SMALL_TEXT_SIZE)
                            .style(muted_text_style),
                    ]
                    .spacing(SMALL_SPACING),
                )
                .padding(CARD_PADDING)
                .width(Fill)
                .style(card_style),
            )
        });

    column![panel_title(t("title-docs")), list]
        .spacing(SECTION_SPACING)
        .into()
}
