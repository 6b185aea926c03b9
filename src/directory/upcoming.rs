use crate::models::upcoming::CONGRATULATION_FORMAT;
use crate::models::{Record, UpcomingBirthday};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Congratulation entry for `record` if its next birthday is at most
/// `window_days` days after `today`.
///
/// The window is checked against the birthday itself; the weekend shift is
/// applied afterwards and may land past the window.
pub(super) fn congratulation_for(
    record: &Record,
    today: NaiveDate,
    window_days: u32,
) -> Option<UpcomingBirthday> {
    let birthday = record.birthday()?;

    let mut candidate = birthday.occurrence_in(today.year())?;
    if candidate < today {
        candidate = birthday.occurrence_in(today.year() + 1)?;
    }

    let days_left = (candidate - today).num_days();
    if !(0..=i64::from(window_days)).contains(&days_left) {
        return None;
    }

    let congratulation = next_working_day(candidate)?;
    Some(UpcomingBirthday {
        name: record.name().to_string(),
        congratulation_date: congratulation.format(CONGRATULATION_FORMAT).to_string(),
    })
}

/// Saturday and Sunday move to the following Monday.
fn next_working_day(date: NaiveDate) -> Option<NaiveDate> {
    let shift = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => 0,
    };
    date.checked_add_days(Days::new(shift))
}
