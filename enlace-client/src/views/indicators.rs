//! Indicators view
//!
//! General indicators for everyone; the HR analytics block only for roles
//! with analytics access.

use iced::widget::{Row, column, container};
use iced::{Element, Fill};

use enlace_common::Decisions;
use enlace_common::i18n::t;

use crate::style::{
    CARD_PADDING, ELEMENT_SPACING, HEADING_SIZE, SECTION_SPACING, SMALL_SPACING, SMALL_TEXT_SIZE,
    TITLE_SIZE, card_style, muted_text_style, panel_title, shaped_text, shaped_text_wrapped,
};
use crate::types::Message;

const GENERAL_INDICATORS: &[(&str, &str)] = &[
    ("indicator-headcount", "indicator-headcount-value"),
    ("indicator-open-vacancies", "indicator-open-vacancies-value"),
    ("indicator-training-hours", "indicator-training-hours-value"),
];

const HR_ANALYTICS: &[(&str, &str)] = &[
    ("indicator-turnover", "indicator-turnover-value"),
    ("indicator-absenteeism", "indicator-absenteeism-value"),
    ("indicator-payroll-cost", "indicator-payroll-cost-value"),
];

pub fn indicators_view(decisions: &Decisions) -> Element<'_, Message> {
    let mut content = column![
        panel_title(t("title-indicators")),
        indicator_row(GENERAL_INDICATORS),
    ]
    .spacing(SECTION_SPACING);

    if decisions.hr_analytics_visible {
        content = content.push(
            column![
                shaped_text(t("title-hr-analytics")).size(HEADING_SIZE),
                shaped_text_wrapped(t("hr-analytics-intro"))
                    .size(SMALL_TEXT_SIZE)
                    .style(muted_text_style),
                indicator_row(HR_ANALYTICS),
            ]
            .spacing(ELEMENT_SPACING),
        );
    }

    content.into()
}

fn indicator_row<'a>(indicators: &[(&str, &str)]) -> Element<'a, Message> {
    indicators
        .iter()
        .fold(Row::new().spacing(ELEMENT_SPACING), |row, (label, value)| {
            row.push(
                container(
                    column![
                        shaped_text(t(label))
                            .size(SMALL_TEXT_SIZE)
                            .style(muted_text_style),
                        shaped_text(t(value)).size(TITLE_SIZE),
                    ]
                    .spacing(SMALL_SPACING),
                )
                .padding(CARD_PADDING)
                .width(Fill)
                .style(card_style),
            )
        })
        .into()
}
