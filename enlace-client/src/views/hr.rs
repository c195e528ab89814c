//! HR view: sub-navigation and the seven HR sub-views
//!
//! Sub-navigation entries and sections are shown or hidden from the
//! permission decisions; the vacancy submit button is disabled (with the
//! denial notice) for roles that may not request vacancies.

use iced::widget::{
    Column, Space, button, checkbox, column, container, row, text_editor, text_input, tooltip,
};
use iced::{Alignment, Element, Fill};

use enlace_common::i18n::t;
use enlace_common::{Decisions, HrSubView};

use crate::style::{
    BUTTON_PADDING, CARD_PADDING, DESCRIPTION_EDITOR_HEIGHT, ELEMENT_SPACING, FORM_MAX_WIDTH,
    HEADING_SIZE, INPUT_PADDING, NAV_SPACING, SECTION_SPACING, SMALL_SPACING, SMALL_TEXT_SIZE,
    SUB_NAV_WIDTH, TEXT_SIZE, TOOLTIP_BACKGROUND_PADDING, TOOLTIP_GAP, TOOLTIP_PADDING,
    TOOLTIP_TEXT_SIZE, card_style, muted_text_style, panel_title, shaped_text,
    shaped_text_wrapped, sub_nav_link_style, tooltip_container_style,
};
use crate::types::{AssistTrigger, Message, ViewConfig};

pub fn hr_view<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let decisions = config.dashboard.decisions();
    let active = config.dashboard.router().hr_sub_view();

    let content = match active {
        HrSubView::UpdateData => update_data_view(decisions),
        HrSubView::VacancyRequest => vacancy_request_view(config),
        HrSubView::Recruitment => recruitment_view(decisions),
        HrSubView::Payroll => payroll_view(decisions),
        HrSubView::Evaluation => evaluation_view(decisions),
        HrSubView::Termination => termination_view(config),
        HrSubView::Certificates => certificates_view(),
    };

    column![
        panel_title(t("title-hr")),
        row![
            sub_navigation(config),
            container(content).width(Fill).max_width(FORM_MAX_WIDTH),
        ]
        .spacing(SECTION_SPACING),
    ]
    .spacing(SECTION_SPACING)
    .into()
}

// ============================================================================
// Sub-navigation
// ============================================================================

fn sub_navigation<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let decisions = config.dashboard.decisions();
    let router = config.dashboard.router();

    let links = HrSubView::ALL
        .into_iter()
        .filter(|sub_view| sub_nav_visible(*sub_view, decisions))
        .fold(Column::new().spacing(NAV_SPACING), |links, sub_view| {
            links.push(
                button(shaped_text(sub_nav_label(sub_view)).size(TEXT_SIZE))
                    .on_press(Message::SwitchHrSubView(sub_view))
                    .width(Fill)
                    .style(sub_nav_link_style(router.is_sub_view_active(sub_view))),
            )
        });

    container(links)
        .padding(CARD_PADDING)
        .width(SUB_NAV_WIDTH)
        .style(card_style)
        .into()
}

/// Whether a sub-navigation entry is shown for these decisions
pub fn sub_nav_visible(sub_view: HrSubView, decisions: &Decisions) -> bool {
    match sub_view {
        HrSubView::VacancyRequest => decisions.vacancy_request_link_visible,
        HrSubView::Payroll => decisions.payroll_link_visible,
        HrSubView::Termination => decisions.termination_visible,
        HrSubView::UpdateData
        | HrSubView::Recruitment
        | HrSubView::Evaluation
        | HrSubView::Certificates => true,
    }
}

fn sub_nav_label(sub_view: HrSubView) -> String {
    match sub_view {
        HrSubView::UpdateData => t("hr-nav-update-data"),
        HrSubView::VacancyRequest => t("hr-nav-vacancy-request"),
        HrSubView::Recruitment => t("hr-nav-recruitment"),
        HrSubView::Payroll => t("hr-nav-payroll"),
        HrSubView::Evaluation => t("hr-nav-evaluation"),
        HrSubView::Termination => t("hr-nav-termination"),
        HrSubView::Certificates => t("hr-nav-certificates"),
    }
}

// ============================================================================
// Sub-views
// ============================================================================

fn update_data_view(decisions: &Decisions) -> Element<'_, Message> {
    section(
        t("hr-nav-update-data"),
        column![
            paragraph(t("hr-update-data-intro")),
            labelled(t("label-name"), &decisions.display_name),
            labelled(t("label-role"), &decisions.role_label),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),
    )
}

fn vacancy_request_view<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    let gate = &config.dashboard.decisions().vacancy_request_action;
    let loading = config.assist.is_loading(AssistTrigger::VacancyDescription);

    let title_input = text_input(&t("placeholder-vacancy-title"), &config.vacancy_form.title)
        .on_input(Message::VacancyTitleChanged)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let description = text_editor(config.vacancy_description)
        .placeholder(t("placeholder-vacancy-description"))
        .on_action(Message::VacancyDescriptionAction)
        .height(DESCRIPTION_EDITOR_HEIGHT)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    // Disabled with a loading label while a call is in flight
    let generate_label = if loading {
        t("button-generating")
    } else {
        t("button-generate-description")
    };
    let generate = button(shaped_text(generate_label).size(TEXT_SIZE))
        .on_press_maybe((!loading).then_some(Message::GenerateDescriptionPressed))
        .padding(BUTTON_PADDING);

    let submit_label = shaped_text(t("button-submit-vacancy")).size(TEXT_SIZE);
    let submit: Element<'a, Message> = match gate.notice() {
        Some(notice) => tooltip(
            button(submit_label).padding(BUTTON_PADDING),
            container(shaped_text(notice).size(TOOLTIP_TEXT_SIZE))
                .padding(TOOLTIP_BACKGROUND_PADDING)
                .style(tooltip_container_style),
            tooltip::Position::Bottom,
        )
        .gap(TOOLTIP_GAP)
        .padding(TOOLTIP_PADDING)
        .into(),
        None => button(submit_label)
            .on_press(Message::VacancySubmitPressed)
            .padding(BUTTON_PADDING)
            .into(),
    };

    section(
        t("hr-nav-vacancy-request"),
        column![
            field(t("label-vacancy-title"), title_input.into()),
            field(t("label-vacancy-description"), description.into()),
            row![generate, Space::new().width(Fill), submit].align_y(Alignment::Center),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),
    )
}

fn recruitment_view(decisions: &Decisions) -> Element<'_, Message> {
    let mut content = column![paragraph(t("hr-recruitment-intro"))].spacing(ELEMENT_SPACING);

    if decisions.employee_management_visible {
        content = content.push(subsection(
            t("hr-employee-management-title"),
            t("hr-employee-management-body"),
        ));
    }

    section(t("hr-nav-recruitment"), content.into())
}

fn payroll_view(decisions: &Decisions) -> Element<'_, Message> {
    let body = if decisions.payroll_link_visible {
        t("hr-payroll-intro")
    } else {
        t("permission-denied")
    };
    section(t("hr-nav-payroll"), paragraph(body))
}

fn evaluation_view(decisions: &Decisions) -> Element<'_, Message> {
    let mut content = column![paragraph(t("hr-evaluation-intro"))].spacing(ELEMENT_SPACING);

    if decisions.team_evaluation_visible {
        content = content.push(
            button(shaped_text(t("button-evaluate-team")).size(TEXT_SIZE))
                .on_press(Message::EvaluateTeamPressed)
                .padding(BUTTON_PADDING),
        );
    }

    section(t("hr-nav-evaluation"), content.into())
}

fn termination_view<'a>(config: &ViewConfig<'a>) -> Element<'a, Message> {
    if !config.dashboard.decisions().termination_visible {
        return section(t("hr-nav-termination"), paragraph(t("permission-denied")));
    }

    let form = config.termination_form;

    let name_input = text_input(&t("placeholder-employee-name"), &form.employee_name)
        .on_input(Message::TerminationEmployeeChanged)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let last_day_input = text_input(&t("placeholder-last-day"), &form.last_day)
        .on_input(Message::TerminationLastDayChanged)
        .padding(INPUT_PADDING)
        .size(TEXT_SIZE);

    let checklist = form
        .assets
        .iter()
        .enumerate()
        .fold(Column::new().spacing(SMALL_SPACING), |list, (index, asset)| {
            list.push(
                checkbox(asset.returned)
                    .label(asset.name.as_str())
                    .on_toggle(move |returned| Message::AssetToggled(index, returned))
                    .size(TEXT_SIZE)
                    .text_shaping(iced::widget::text::Shaping::Advanced),
            )
        });

    section(
        t("hr-nav-termination"),
        column![
            field(t("label-employee-name"), name_input.into()),
            field(t("label-last-day"), last_day_input.into()),
            field(t("label-asset-checklist"), checklist.into()),
            button(shaped_text(t("button-generate-clearance")).size(TEXT_SIZE))
                .on_press(Message::GenerateClearancePressed)
                .padding(BUTTON_PADDING),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),
    )
}

fn certificates_view<'a>() -> Element<'a, Message> {
    section(
        t("hr-nav-certificates"),
        column![
            paragraph(t("hr-certificates-intro")),
            shaped_text(t("hr-certificate-employment")).size(TEXT_SIZE),
            shaped_text(t("hr-certificate-income")).size(TEXT_SIZE),
            shaped_text(t("hr-certificate-vacation")).size(TEXT_SIZE),
        ]
        .spacing(ELEMENT_SPACING)
        .into(),
    )
}

// ============================================================================
// Helpers
// ============================================================================

fn section<'a>(title: String, content: Element<'a, Message>) -> Element<'a, Message> {
    container(column![shaped_text(title).size(HEADING_SIZE), content].spacing(ELEMENT_SPACING))
        .padding(CARD_PADDING)
        .width(Fill)
        .style(card_style)
        .into()
}

fn subsection<'a>(title: String, body: String) -> Element<'a, Message> {
    column![
        shaped_text(title).size(TEXT_SIZE),
        shaped_text_wrapped(body)
            .size(SMALL_TEXT_SIZE)
            .style(muted_text_style),
    ]
    .spacing(SMALL_SPACING)
    .into()
}

fn paragraph<'a>(body: String) -> Element<'a, Message> {
    shaped_text_wrapped(body).size(TEXT_SIZE).into()
}

fn field<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    column![
        shaped_text(label)
            .size(SMALL_TEXT_SIZE)
            .style(muted_text_style),
        input,
    ]
    .spacing(SMALL_SPACING)
    .into()
}

fn labelled<'a>(label: String, value: &'a str) -> Element<'a, Message> {
    row![
        shaped_text(label)
            .size(TEXT_SIZE)
            .style(muted_text_style)
            .width(FORM_MAX_WIDTH / 4.0),
        shaped_text(value).size(TEXT_SIZE),
    ]
    .spacing(ELEMENT_SPACING)
    .into()
}
