//! Maha Dasha timeline built from a conductor series.
//!
//! Each age in the series closes a nine-year Maha Dasha ruled by the planet
//! at the same position in the bottom values. Ages below nine open before
//! birth and get their Antar rows from the backward walk.

use anka_time::{DateError, NaiveDate, add_years};
use chrono::Datelike;

use crate::error::DashaError;
use crate::planet::Planet;

use super::forward::{forward, maha_interval};
use super::retro::retro;
use super::types::{DashaRow, DateInterval, MAHA_SPAN_YEARS};

/// One Maha Dasha in a person's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MahaDashaEntry {
    /// Ruling planet.
    pub planet: Planet,
    /// Age at which the period ends.
    pub age: i32,
    pub birth: NaiveDate,
    /// `[birth + (age - 9)y, birth + age y)`.
    pub span: DateInterval,
    /// Started before the birth date.
    pub pre_birth: bool,
}

impl MahaDashaEntry {
    pub fn new(birth: NaiveDate, age: i32, planet: Planet) -> Result<Self, DashaError> {
        let span = maha_interval(birth, age)?;
        Ok(Self {
            planet,
            age,
            birth,
            span,
            pre_birth: span.start < birth,
        })
    }

    /// Antar Dasha rows inside this Maha Dasha.
    pub fn antar_rows(&self) -> Result<Vec<DashaRow>, DashaError> {
        antar_rows(self.birth, self.planet.number(), self.age)
    }
}

/// Antar rows for the Maha Dasha ending at `age`.
///
/// Forward partition for `age >= 9`, pre-birth walk otherwise.
pub fn antar_rows(birth: NaiveDate, planet_id: u8, age: i32) -> Result<Vec<DashaRow>, DashaError> {
    if age >= MAHA_SPAN_YEARS {
        forward(birth, age, planet_id)
    } else {
        retro(birth, planet_id, age)
    }
}

/// Pair each series age with the planet number at the same position.
///
/// Extra elements on either side are ignored.
pub fn maha_timeline(
    birth: NaiveDate,
    series: &[u32],
    planets: &[u8],
) -> Result<Vec<MahaDashaEntry>, DashaError> {
    series
        .iter()
        .zip(planets)
        .map(|(&age, &id)| {
            let planet = Planet::from_number(id).ok_or(DashaError::InvalidPeriodId(id))?;
            let age = i32::try_from(age).map_err(|_| DateError::OutOfRange)?;
            MahaDashaEntry::new(birth, age, planet)
        })
        .collect()
}

/// The entry whose span contains `date`, if any.
pub fn active_entry(entries: &[MahaDashaEntry], date: NaiveDate) -> Option<&MahaDashaEntry> {
    entries.iter().find(|e| e.span.contains(date))
}

/// Age in whole calendar years on `date`.
pub fn age_on(birth: NaiveDate, date: NaiveDate) -> Result<i32, DashaError> {
    let mut age = date.year() - birth.year();
    if add_years(birth, age)? > date {
        age -= 1;
    }
    Ok(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn timeline_pairs_ages_with_planets() {
        let birth = ymd(1990, 6, 15);
        let series = [8, 17, 26];
        let planets = [3, 3, 7];
        let entries = maha_timeline(birth, &series, &planets).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries[0].pre_birth);
        assert!(!entries[1].pre_birth);
        assert_eq!(entries[1].span.start, ymd(1998, 6, 15));
        assert_eq!(entries[1].span.end, ymd(2007, 6, 15));
        assert_eq!(entries[2].planet, Planet::Ketu);
    }

    #[test]
    fn entries_are_contiguous_for_nine_year_steps() {
        let birth = ymd(1990, 6, 15);
        let entries = maha_timeline(birth, &[9, 18, 27], &[1, 2, 3]).unwrap();
        for pair in entries.windows(2) {
            assert_eq!(pair[0].span.end, pair[1].span.start);
        }
        assert!(!entries[0].pre_birth);
        assert_eq!(entries[0].span.start, birth);
    }

    #[test]
    fn antar_rows_switch_on_age() {
        let birth = ymd(1990, 6, 15);
        let pre = MahaDashaEntry::new(birth, 2, Planet::Surya).unwrap();
        let rows = pre.antar_rows().unwrap();
        assert!(rows[0].is_empty());
        assert_eq!(rows[8].to(), Some(ymd(1992, 6, 15)));

        let post = MahaDashaEntry::new(birth, 27, Planet::Surya).unwrap();
        let rows = post.antar_rows().unwrap();
        assert_eq!(rows[0].from(), Some(ymd(2008, 6, 15)));
        assert_eq!(rows[8].to(), Some(ymd(2017, 6, 15)));
    }

    #[test]
    fn invalid_planet_number_rejected() {
        let r = maha_timeline(ymd(1990, 6, 15), &[9], &[0]);
        assert_eq!(r, Err(DashaError::InvalidPeriodId(0)));
    }

    #[test]
    fn active_entry_found() {
        let birth = ymd(1990, 6, 15);
        let entries = maha_timeline(birth, &[9, 18, 27], &[1, 2, 3]).unwrap();
        let e = active_entry(&entries, ymd(2000, 1, 1)).unwrap();
        assert_eq!(e.planet, Planet::Chandra);
        assert!(active_entry(&entries, ymd(2030, 1, 1)).is_none());
    }

    #[test]
    fn age_on_birthday_boundary() {
        let birth = ymd(1990, 6, 15);
        assert_eq!(age_on(birth, ymd(2017, 6, 14)).unwrap(), 26);
        assert_eq!(age_on(birth, ymd(2017, 6, 15)).unwrap(), 27);
        assert_eq!(age_on(ymd(2000, 2, 29), ymd(2001, 2, 28)).unwrap(), 0);
        assert_eq!(age_on(ymd(2000, 2, 29), ymd(2001, 3, 1)).unwrap(), 1);
    }
}
