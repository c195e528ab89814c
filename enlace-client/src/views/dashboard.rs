//! Home view: quick access, calendar, announcements and gallery

use iced::widget::{Column, Row, Space, button, column, container, row, tooltip};
use iced::{Alignment, Center, Element, Fill};

use enlace_common::ActionGate;
use enlace_common::calendar::{WEEKDAY_HEADERS, month_grid};
use enlace_common::carousel::Carousel;
use enlace_common::i18n::t;

use crate::constants::{GALLERY_COUNT, QUICK_ACCESS_TARGETS, VACANCY_QUICK_ACCESS_TARGET};
use crate::handlers::gallery_alt;
use crate::style::{
    BUTTON_PADDING, CALENDAR_CELL_PADDING, CALENDAR_CELL_WIDTH, CARD_PADDING, CAROUSEL_DOT_SIZE,
    CAROUSEL_HEIGHT, ELEMENT_SPACING, GALLERY_THUMBNAIL_HEIGHT, HEADING_SIZE, SECTION_SPACING,
    SMALL_SPACING, SMALL_TEXT_SIZE, TEXT_SIZE, TOOLTIP_BACKGROUND_PADDING, TOOLTIP_GAP,
    TOOLTIP_PADDING, TOOLTIP_TEXT_SIZE, card_style, carousel_dot_style, muted_text_style,
    panel_title, picture_frame_style, shaped_text, shaped_text_wrapped, today_cell_style,
    tooltip_container_style, transparent_button_style,
};
use crate::types::{Message, ViewConfig};

pub fn dashboard_view<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let gate = &config.dashboard.decisions().vacancy_request_action;

    column![
        panel_title(t("title-dashboard")),
        quick_access_card(gate),
        row![calendar_card(config), announcements_card(config.carousel)]
            .spacing(SECTION_SPACING)
            .width(Fill),
        gallery_card(),
    ]
    .spacing(SECTION_SPACING)
    .into()
}

// ============================================================================
// Quick Access
// ============================================================================

fn quick_access_card<'a>(gate: &'a ActionGate) -> Element<'a, Message> {
    let mut buttons = Row::new().spacing(ELEMENT_SPACING);
    for &target in QUICK_ACCESS_TARGETS {
        let label = shaped_text(quick_access_label(target)).size(TEXT_SIZE);

        if target == VACANCY_QUICK_ACCESS_TARGET
            && let Some(notice) = gate.notice()
        {
            // Disabled, with the denial notice as its tooltip
            buttons = buttons.push(
                tooltip(
                    button(label).padding(BUTTON_PADDING),
                    container(shaped_text(notice).size(TOOLTIP_TEXT_SIZE))
                        .padding(TOOLTIP_BACKGROUND_PADDING)
                        .style(tooltip_container_style),
                    tooltip::Position::Bottom,
                )
                .gap(TOOLTIP_GAP)
                .padding(TOOLTIP_PADDING),
            );
            continue;
        }

        buttons = buttons.push(
            button(label)
                .on_press(Message::QuickAccess(target))
                .padding(BUTTON_PADDING),
        );
    }

    card(t("title-quick-access"), buttons.into())
}

fn quick_access_label(target: &str) -> String {
    match target {
        "hr-update-data-view" => t("quick-access-update-data"),
        "hr-vacancy-request-view" => t("quick-access-vacancy-request"),
        "hr-certificates-view" => t("quick-access-certificates"),
        "docs-policies" => t("quick-access-policies"),
        other => other.to_string(),
    }
}

// ============================================================================
// Calendar
// ============================================================================

fn calendar_card<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let grid = month_grid(config.calendar, config.today);

    let navigation = row![
        button(shaped_text("‹").size(HEADING_SIZE))
            .on_press(Message::CalendarPrevious)
            .style(transparent_button_style),
        shaped_text(grid.title.clone())
            .size(TEXT_SIZE)
            .width(Fill)
            .align_x(Center),
        button(shaped_text("›").size(HEADING_SIZE))
            .on_press(Message::CalendarNext)
            .style(transparent_button_style),
    ]
    .align_y(Alignment::Center);

    let headers = WEEKDAY_HEADERS.iter().fold(Row::new(), |row, header| {
        row.push(
            container(
                shaped_text(*header)
                    .size(SMALL_TEXT_SIZE)
                    .style(muted_text_style),
            )
            .center_x(CALENDAR_CELL_WIDTH),
        )
    });

    let mut weeks = Column::new().spacing(SMALL_SPACING);
    for week in grid.weeks() {
        let cells = week.iter().fold(Row::new(), |row, cell| {
            let cell: Element<'a, Message> = match cell {
                Some(day) => {
                    let label = container(shaped_text(day.day.to_string()).size(SMALL_TEXT_SIZE))
                        .padding(CALENDAR_CELL_PADDING)
                        .center_x(CALENDAR_CELL_WIDTH);
                    if day.is_today {
                        label.style(today_cell_style).into()
                    } else {
                        label.into()
                    }
                }
                None => Space::new().width(CALENDAR_CELL_WIDTH).into(),
            };
            row.push(cell)
        });
        weeks = weeks.push(cells);
    }

    card(
        t("title-calendar"),
        column![navigation, headers, weeks]
            .spacing(ELEMENT_SPACING)
            .into(),
    )
}

// ============================================================================
// Announcements
// ============================================================================

fn announcements_card(carousel: Option<&Carousel>) -> Element<'_, Message> {
    let Some(carousel) = carousel else {
        return card(
            t("title-announcements"),
            shaped_text(t("announcements-empty"))
                .style(muted_text_style)
                .into(),
        );
    };

    let (title, body) = announcement(carousel.current());
    let slide = container(
        column![
            shaped_text(title).size(HEADING_SIZE),
            shaped_text_wrapped(body).size(TEXT_SIZE),
        ]
        .spacing(SMALL_SPACING),
    )
    .width(Fill)
    .height(CAROUSEL_HEIGHT);

    let dots = (0..carousel.slide_count()).fold(Row::new().spacing(SMALL_SPACING), |row, index| {
        row.push(
            button(Space::new())
                .on_press(Message::CarouselGoTo(index))
                .width(CAROUSEL_DOT_SIZE)
                .height(CAROUSEL_DOT_SIZE)
                .style(carousel_dot_style(carousel.is_current(index))),
        )
    });

    let controls = row![
        button(shaped_text("‹").size(HEADING_SIZE))
            .on_press(Message::CarouselPrevious)
            .style(transparent_button_style),
        Space::new().width(Fill),
        dots,
        Space::new().width(Fill),
        button(shaped_text("›").size(HEADING_SIZE))
            .on_press(Message::CarouselNext)
            .style(transparent_button_style),
    ]
    .align_y(Alignment::Center);

    card(
        t("title-announcements"),
        column![slide, controls].spacing(ELEMENT_SPACING).into(),
    )
}

/// Title and body of announcement slide `index`
fn announcement(index: usize) -> (String, String) {
    let n = index + 1;
    (
        t(&format!("announcement-{n}-title")),
        t(&format!("announcement-{n}-body")),
    )
}

// ============================================================================
// Gallery
// ============================================================================

fn gallery_card<'a>() -> Element<'a, Message> {
    let thumbnails = (0..GALLERY_COUNT).fold(Row::new().spacing(ELEMENT_SPACING), |row, index| {
        let frame = container(shaped_text_wrapped(gallery_alt(index)).size(SMALL_TEXT_SIZE))
            .padding(CALENDAR_CELL_PADDING)
            .width(Fill)
            .height(GALLERY_THUMBNAIL_HEIGHT)
            .align_x(Center)
            .align_y(Center)
            .style(picture_frame_style);
        row.push(
            button(frame)
                .on_press(Message::ShowGalleryItem(index))
                .width(Fill)
                .style(transparent_button_style),
        )
    });

    card(t("title-gallery"), thumbnails.into())
}

/// Bordered card with a heading
fn card<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        column![shaped_text(title).size(HEADING_SIZE), content].spacing(ELEMENT_SPACING),
    )
    .padding(CARD_PADDING)
    .width(Fill)
    .style(card_style)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ANNOUNCEMENT_COUNT;

    #[test]
    fn test_announcements_are_localized() {
        for index in 0..ANNOUNCEMENT_COUNT {
            let (title, body) = announcement(index);
            assert!(!title.starts_with("announcement-"));
            assert!(!body.starts_with("announcement-"));
        }
    }
}
