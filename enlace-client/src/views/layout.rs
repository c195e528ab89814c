//! Main application layout: sidebar, header and the active view

use iced::widget::{
    Column, Space, button, column, container, mouse_area, pick_list, row, scrollable, stack,
    tooltip,
};
use iced::{Alignment, Center, Element, Fill};

use enlace_common::i18n::t;
use enlace_common::{Decisions, Role, ViewId};

use super::admin::admin_view;
use super::dashboard::dashboard_view;
use super::docs::docs_view;
use super::hr::hr_view;
use super::indicators::indicators_view;
use super::modal::modal_overlay;
use super::notifications::notifications_dropdown;
use crate::style::{
    AVATAR_SIZE, AVATAR_TEXT_SIZE, BORDER_WIDTH, CONTENT_PADDING, ELEMENT_SPACING, HEADER_PADDING,
    HEADING_SIZE, NAV_LINK_PADDING, NAV_SPACING, SIDEBAR_PADDING, SIDEBAR_WIDTH, SMALL_SPACING,
    SMALL_TEXT_SIZE, SPACER_SIZE_LARGE, TEXT_SIZE, TOOLTIP_BACKGROUND_PADDING, TOOLTIP_GAP,
    TOOLTIP_PADDING, TOOLTIP_TEXT_SIZE, avatar_style, content_background_style, muted_text_style,
    nav_link_style, separator_style, shaped_text, sidebar_panel_style, tooltip_container_style,
    transparent_button_style,
};
use crate::types::{Message, ViewConfig};

/// Render the whole window
///
/// The base layout catches clicks no control captured (closing the
/// notifications dropdown); the dropdown and the modal are layered on top.
pub fn main_layout(config: ViewConfig<'_>) -> Element<'_, Message> {
    let decisions = config.dashboard.decisions();

    let body = row![
        sidebar(&config),
        column![header(decisions), separator(), active_view(&config)]
            .width(Fill)
            .height(Fill),
    ]
    .width(Fill)
    .height(Fill);

    let mut layers: Vec<Element<'_, Message>> = vec![
        mouse_area(container(body).style(content_background_style))
            .on_press(Message::ContentClicked)
            .into(),
    ];

    if config.ui_state.notifications_open {
        layers.push(notifications_dropdown());
    }

    if let Some(modal) = config.modal.current() {
        layers.push(modal_overlay(modal));
    }

    stack(layers).width(Fill).height(Fill).into()
}

// ============================================================================
// Sidebar
// ============================================================================

fn sidebar<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let dashboard = config.dashboard;
    let decisions = dashboard.decisions();
    let router = dashboard.router();

    let avatar = container(shaped_text(&decisions.avatar_initial).size(AVATAR_TEXT_SIZE))
        .center(AVATAR_SIZE)
        .style(avatar_style);

    let profile = column![
        avatar,
        shaped_text(&decisions.display_name).size(HEADING_SIZE),
        shaped_text(&decisions.role_label)
            .size(SMALL_TEXT_SIZE)
            .style(muted_text_style),
    ]
    .spacing(SMALL_SPACING)
    .align_x(Center)
    .width(Fill);

    let mut nav = Column::new().spacing(NAV_SPACING);
    for view in ViewId::ALL {
        // Admin is the only top-level view some roles cannot see
        if view == ViewId::Admin && !decisions.admin_menu_visible {
            continue;
        }
        nav = nav.push(
            button(shaped_text(nav_label(view)).size(TEXT_SIZE))
                .on_press(Message::SwitchView(view))
                .padding(NAV_LINK_PADDING)
                .width(Fill)
                .style(nav_link_style(router.is_active(view))),
        );
    }

    let role_selector = column![
        shaped_text(t("label-role-selector"))
            .size(SMALL_TEXT_SIZE)
            .style(muted_text_style),
        pick_list(
            Role::ALL.to_vec(),
            Some(dashboard.session().role),
            Message::RoleSelected,
        )
        .text_size(TEXT_SIZE)
        .width(Fill),
    ]
    .spacing(SMALL_SPACING);

    let content = column![
        profile,
        Space::new().height(SPACER_SIZE_LARGE),
        nav,
        Space::new().height(Fill),
        role_selector,
    ]
    .spacing(ELEMENT_SPACING)
    .padding(SIDEBAR_PADDING)
    .height(Fill);

    container(content)
        .width(SIDEBAR_WIDTH)
        .height(Fill)
        .style(sidebar_panel_style)
        .into()
}

/// Sidebar label for a top-level view
pub fn nav_label(view: ViewId) -> String {
    match view {
        ViewId::Dashboard => t("nav-dashboard"),
        ViewId::Hr => t("nav-hr"),
        ViewId::Docs => t("nav-docs"),
        ViewId::Indicators => t("nav-indicators"),
        ViewId::Admin => t("nav-admin"),
    }
}

// ============================================================================
// Header
// ============================================================================

fn header(decisions: &Decisions) -> Element<'_, Message> {
    let notifications_button = tooltip(
        button(shaped_text(t("button-notifications")).size(TEXT_SIZE))
            .on_press(Message::NotificationsToggled)
            .style(transparent_button_style),
        container(shaped_text(t("tooltip-notifications")).size(TOOLTIP_TEXT_SIZE))
            .padding(TOOLTIP_BACKGROUND_PADDING)
            .style(tooltip_container_style),
        tooltip::Position::Bottom,
    )
    .gap(TOOLTIP_GAP)
    .padding(TOOLTIP_PADDING);

    row![
        shaped_text(&decisions.welcome_message).size(HEADING_SIZE),
        Space::new().width(Fill),
        notifications_button,
    ]
    .align_y(Alignment::Center)
    .padding(HEADER_PADDING)
    .into()
}

// ============================================================================
// Content
// ============================================================================

fn active_view<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let view = match config.dashboard.router().active_view() {
        ViewId::Dashboard => dashboard_view(config),
        ViewId::Hr => hr_view(config),
        ViewId::Docs => docs_view(),
        ViewId::Indicators => indicators_view(config.dashboard.decisions()),
        ViewId::Admin => admin_view(),
    };

    scrollable(container(view).padding(CONTENT_PADDING).width(Fill))
        .height(Fill)
        .into()
}

/// Horizontal separator line
pub fn separator<'a>() -> Element<'a, Message> {
    container(Space::new().width(Fill).height(BORDER_WIDTH))
        .width(Fill)
        .height(BORDER_WIDTH)
        .style(separator_style)
        .into()
}
