//! Hebrew lunisolar calendar.
//!
//! Months are numbered from Nisan (1) to Adar / Adar I (12), with Adar II
//! (13) in leap years. The year number changes at Tishri (7), so a year
//! runs 7, 8, .., 12 (13), 1, .., 6.
//!
//! The first day of each year depends on the molad of Tishri and on the
//! postponement rules (dehiyyot). [`HebrewYear`] evaluates the molad-based
//! elapsed-day count for the four years those rules look at once, then
//! answers year-length and month-length queries from it.

use taqvim_time::{civil_day_number, clamp_civil_day, jd_from_day_number};

use crate::calendar::{Calendar, saturating_year};
use crate::types::{CalendarDate, CalendarId};

/// JD of the Hebrew calendar epoch; day counts below are offsets from it.
pub const HEBREW_EPOCH: f64 = 347_995.5;

const EPOCH_DAY: i64 = 347_995;

/// Hebrew leap-year rule: 7 leap years in each 19-year Metonic cycle.
pub fn is_leap(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Months in a Hebrew year: 13 in leap years, 12 otherwise.
pub fn months_in_year(year: i32) -> u32 {
    if is_leap(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishri, with the rule that moves
/// Rosh Hashanah off Sunday, Wednesday and Friday.
fn elapsed_days(year: i64) -> i64 {
    let months = (235 * year - 234).div_euclid(19);
    let parts = 12_084 + 13_753 * months;
    let mut day = months * 29 + parts.div_euclid(25_920);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day += 1;
    }
    day
}

/// One Hebrew year with its postponement inputs evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HebrewYear {
    year: i32,
    // elapsed_days for year-1, year, year+1, year+2
    elapsed: [i64; 4],
}

impl HebrewYear {
    pub fn new(year: i32) -> Self {
        let y = i64::from(year);
        Self {
            year,
            elapsed: [
                elapsed_days(y - 1),
                elapsed_days(y),
                elapsed_days(y + 1),
                elapsed_days(y + 2),
            ],
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Second postponement for the year whose elapsed days sit at
    /// `self.elapsed[i]`, given its neighbours.
    fn postponement(&self, i: usize) -> i64 {
        let (last, present, next) = (self.elapsed[i - 1], self.elapsed[i], self.elapsed[i + 1]);
        if next - present == 356 {
            2
        } else if present - last == 382 {
            1
        } else {
            0
        }
    }

    /// Civil day number of 1 Tishri, the first day of the year.
    pub fn new_year_day(&self) -> i64 {
        EPOCH_DAY + self.elapsed[1] + self.postponement(1) + 2
    }

    /// Days in the year: 353-355 for common years, 383-385 for leap years.
    pub fn days_in_year(&self) -> u32 {
        let this = self.elapsed[1] + self.postponement(1);
        let next = self.elapsed[2] + self.postponement(2);
        (next - this) as u32
    }

    pub fn is_leap(&self) -> bool {
        is_leap(self.year)
    }

    pub fn months_in_year(&self) -> u32 {
        months_in_year(self.year)
    }

    /// Days in `month`, or 0 when the month does not exist this year.
    ///
    /// Heshvan (8) and Kislev (9) absorb the year-length variation.
    pub fn days_in_month(&self, month: u32) -> u32 {
        if month == 0 || month > self.months_in_year() {
            return 0;
        }
        let year_days = self.days_in_year();
        match month {
            2 | 4 | 6 | 10 | 13 => 29,
            12 if !self.is_leap() => 29,
            8 if year_days % 10 != 5 => 29,
            9 if year_days % 10 == 3 => 29,
            _ => 30,
        }
    }

    /// Civil day number of `day` in `month` of this year.
    pub fn day_number(&self, month: u32, day: u32) -> i64 {
        let mut dn = self.new_year_day() - 1 + i64::from(day);
        if month < 7 {
            for m in (7..=self.months_in_year()).chain(1..month) {
                dn += i64::from(self.days_in_month(m));
            }
        } else {
            for m in 7..month {
                dn += i64::from(self.days_in_month(m));
            }
        }
        dn
    }
}

/// Civil day number of a Hebrew date.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    HebrewYear::new(year).day_number(month, day)
}

/// Hebrew date of a civil day number, clamped into the civil-day range.
pub fn from_day_number(dn: i64) -> CalendarDate {
    let dn = clamp_civil_day(dn);
    // mean-year estimate starts at or before the true year
    let count = (i128::from(dn - EPOCH_DAY) * 98_496).div_euclid(35_975_351);
    let mut year = saturating_year(i64::try_from(count - 1).unwrap_or(i64::MIN));
    while let Some(next) = year.checked_add(1) {
        if dn < HebrewYear::new(next).new_year_day() {
            break;
        }
        year = next;
        tracing::trace!(dn, year, "hebrew year search step");
    }

    let hy = HebrewYear::new(year);
    let mut month = if dn < hy.day_number(1, 1) { 7 } else { 1 };
    while dn > hy.day_number(month, hy.days_in_month(month)) {
        month += 1;
    }
    let day = dn - hy.day_number(month, 1) + 1;

    CalendarDate::new(year, month, day as u32)
}

/// Hebrew calendar adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hebrew;

impl Calendar for Hebrew {
    fn id(&self) -> CalendarId {
        CalendarId::Hebrew
    }

    fn to_jd(&self, date: CalendarDate) -> f64 {
        jd_from_day_number(day_number(date.year, date.month, date.day))
    }

    fn from_jd(&self, jd: f64) -> CalendarDate {
        from_day_number(civil_day_number(jd))
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap(year)
    }

    fn days_in_month(&self, year: i32, month: u32) -> u32 {
        HebrewYear::new(year).days_in_month(month)
    }

    fn months_in_year(&self, year: i32) -> u32 {
        months_in_year(year)
    }

    fn days_in_year(&self, year: i32) -> u32 {
        HebrewYear::new(year).days_in_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::Gregorian;

    #[test]
    fn seven_leaps_per_metonic_cycle() {
        for start in [1, 5700, 5784] {
            let count = (start..start + 19).filter(|&y| is_leap(y)).count();
            assert_eq!(count, 7, "cycle starting {start}");
        }
    }

    #[test]
    fn rosh_hashanah_5784() {
        let jd = Hebrew.to_jd(CalendarDate::new(5784, 7, 1));
        assert_eq!(Gregorian.from_jd(jd), CalendarDate::new(2023, 9, 16));
    }

    #[test]
    fn rosh_hashanah_5785() {
        let jd = Hebrew.to_jd(CalendarDate::new(5785, 7, 1));
        assert_eq!(Gregorian.from_jd(jd), CalendarDate::new(2024, 10, 3));
    }

    #[test]
    fn passover_5784() {
        let jd = Gregorian.to_jd(CalendarDate::new(2024, 4, 23));
        assert_eq!(Hebrew.from_jd(jd), CalendarDate::new(5784, 1, 15));
    }

    #[test]
    fn year_lengths() {
        let expected = [355, 353, 384, 355, 383, 355, 354, 385, 355, 354];
        for (i, &len) in expected.iter().enumerate() {
            let year = 5780 + i as i32;
            assert_eq!(HebrewYear::new(year).days_in_year(), len, "year {year}");
        }
    }

    #[test]
    fn year_length_in_allowed_set() {
        for year in 1..6000 {
            let len = HebrewYear::new(year).days_in_year();
            assert!(
                matches!(len, 353..=355 | 383..=385),
                "year {year}: {len} days"
            );
            assert_eq!(len >= 383, is_leap(year), "year {year}");
        }
    }

    #[test]
    fn months_sum_to_year_length() {
        for year in [5783, 5784, 5785, 5787] {
            let hy = HebrewYear::new(year);
            let total: u32 = (1..=hy.months_in_year()).map(|m| hy.days_in_month(m)).sum();
            assert_eq!(total, hy.days_in_year(), "year {year}");
        }
    }

    #[test]
    fn adar_ii_only_in_leap_years() {
        assert_eq!(Hebrew.days_in_month(5784, 13), 29);
        assert_eq!(Hebrew.days_in_month(5785, 13), 0);
        assert_eq!(Hebrew.days_in_month(5785, 0), 0);
    }

    #[test]
    fn year_changes_at_tishri() {
        let last = CalendarDate::new(5784, 6, 29);
        let next = Hebrew.from_jd(Hebrew.to_jd(last) + 1.0);
        assert_eq!(next, CalendarDate::new(5785, 7, 1));
    }
}
