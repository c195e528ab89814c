//! Month calendar widget model
//!
//! A [`MonthCursor`] selects the displayed month; [`month_grid`] turns it into
//! a grid of day cells. Weeks start on Monday. "Today" is passed in so the
//! grid stays a pure function of its inputs.

use chrono::{Datelike, NaiveDate};

/// Spanish month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Weekday column headers, Monday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"];

/// Displayed year and zero-based month (0 = January)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Cursor for a zero-based month; `None` if `month` is not in `0..12`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    /// Cursor on the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Following month, rolling December over into January of the next year
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year.saturating_add(1),
                month: 0,
            }
        } else {
            Self {
                month: self.month + 1,
                ..self
            }
        }
    }

    /// Preceding month, rolling January back into December of the previous year
    #[must_use]
    pub fn previous(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year.saturating_sub(1),
                month: 11,
            }
        } else {
            Self {
                month: self.month - 1,
                ..self
            }
        }
    }

    /// Heading such as "Octubre 2026"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize], self.year)
    }

    fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }
}

/// One day of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// Day of month, starting at 1
    pub day: u32,
    /// Whether this is the real current date
    pub is_today: bool,
}

/// Rendered month: blanks before the first day, then one cell per day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub title: String,
    /// Empty cells before day 1 (0 when the month starts on Monday)
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl CalendarGrid {
    /// Cells grouped into Monday-first weeks, padded with `None`
    pub fn weeks(&self) -> Vec<[Option<DayCell>; 7]> {
        let cells: Vec<Option<DayCell>> = (0..self.leading_blanks)
            .map(|_| None)
            .chain(self.days.iter().copied().map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }
}

/// Build the grid for a month, highlighting `today` when it falls inside it
///
/// Months outside chrono's representable range produce an empty grid.
pub fn month_grid(cursor: MonthCursor, today: NaiveDate) -> CalendarGrid {
    let title = cursor.title();
    let (Some(first), Some(next_first)) = (cursor.first_day(), cursor.next().first_day()) else {
        return CalendarGrid {
            title,
            leading_blanks: 0,
            days: Vec::new(),
        };
    };

    let days_in_month = (next_first - first).num_days() as u32;
    let shows_today = MonthCursor::containing(today) == cursor;

    CalendarGrid {
        title,
        leading_blanks: first.weekday().num_days_from_monday(),
        days: (1..=days_in_month)
            .map(|day| DayCell {
                day,
                is_today: shows_today && day == today.day(),
            })
            .collect(),
    }
}
