//! Administration view (management roles only)

use iced::widget::column;
use iced::Element;

use enlace_common::i18n::t;

use crate::style::{SECTION_SPACING, TEXT_SIZE, panel_title, shaped_text_wrapped};
use crate::types::Message;

pub fn admin_view<'a>() -> Element<'a, Message> {
    column![
        panel_title(t("title-admin")),
        shaped_text_wrapped(t("admin-intro")).size(TEXT_SIZE),
        shaped_text_wrapped(t("admin-users")).size(TEXT_SIZE),
        shaped_text_wrapped(t("admin-settings")).size(TEXT_SIZE),
    ]
    .spacing(SECTION_SPACING)
    .into()
}
