//! The nine dasha planets and their fixed nominal day counts.
//!
//! Each planet is identified by a number 1..=9 (the numerology index that
//! selects it) and carries a nominal duration used purely as a
//! proportionality weight. The nominal days of all nine sum to 9 × 365.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::DashaError;

/// The 9 dasha planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Planet {
    Surya,
    Chandra,
    Guru,
    Rahu,
    Budh,
    Shukra,
    Ketu,
    Shani,
    Mangal,
}

/// All 9 planets in id order (1..=9).
pub const ALL_PLANETS: [Planet; 9] = [
    Planet::Surya,
    Planet::Chandra,
    Planet::Guru,
    Planet::Rahu,
    Planet::Budh,
    Planet::Shukra,
    Planet::Ketu,
    Planet::Shani,
    Planet::Mangal,
];

/// Fixed traversal order, by planet id.
pub const CANONICAL_SEQUENCE: [u8; 9] = [1, 2, 9, 4, 3, 8, 5, 7, 6];

/// Sum of all nominal days (9 × 365).
pub const TOTAL_NOMINAL_DAYS: u32 = 3285;

impl Planet {
    /// Look up a planet by its id (1..=9).
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Surya),
            2 => Some(Self::Chandra),
            3 => Some(Self::Guru),
            4 => Some(Self::Rahu),
            5 => Some(Self::Budh),
            6 => Some(Self::Shukra),
            7 => Some(Self::Ketu),
            8 => Some(Self::Shani),
            9 => Some(Self::Mangal),
            _ => None,
        }
    }

    /// Id of the planet (1..=9).
    pub const fn number(self) -> u8 {
        match self {
            Self::Surya => 1,
            Self::Chandra => 2,
            Self::Guru => 3,
            Self::Rahu => 4,
            Self::Budh => 5,
            Self::Shukra => 6,
            Self::Ketu => 7,
            Self::Shani => 8,
            Self::Mangal => 9,
        }
    }

    /// Display name, upper case.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "SURYA",
            Self::Chandra => "CHANDRA",
            Self::Guru => "GURU",
            Self::Rahu => "RAHU",
            Self::Budh => "BUDH",
            Self::Shukra => "SHUKRA",
            Self::Ketu => "KETU",
            Self::Shani => "SHANI",
            Self::Mangal => "MANGAL",
        }
    }

    /// English name of the planet.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Guru => "Jupiter",
            Self::Rahu => "Rahu",
            Self::Budh => "Mercury",
            Self::Shukra => "Venus",
            Self::Ketu => "Ketu",
            Self::Shani => "Saturn",
            Self::Mangal => "Mars",
        }
    }

    /// Nominal period length in days.
    pub const fn nominal_days(self) -> u32 {
        match self {
            Self::Surya => 164,
            Self::Chandra => 274,
            Self::Guru => 438,
            Self::Rahu => 493,
            Self::Budh => 465,
            Self::Shukra => 547,
            Self::Ketu => 192,
            Self::Shani => 520,
            Self::Mangal => 192,
        }
    }

    /// Catalogue entry for this planet.
    pub const fn definition(self) -> PeriodDefinition {
        PeriodDefinition {
            planet: self,
            nominal_days: self.nominal_days(),
        }
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = DashaError;

    /// Parse a planet name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DashaError::UnknownPlanet(s.to_string()))
    }
}

/// One entry of the period catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodDefinition {
    pub planet: Planet,
    pub nominal_days: u32,
}

impl PeriodDefinition {
    /// Planet id (1..=9).
    pub const fn id(&self) -> u8 {
        self.planet.number()
    }

    pub const fn name(&self) -> &'static str {
        self.planet.name()
    }
}

/// The period catalogue in id order.
pub const PERIOD_CATALOGUE: [PeriodDefinition; 9] = [
    Planet::Surya.definition(),
    Planet::Chandra.definition(),
    Planet::Guru.definition(),
    Planet::Rahu.definition(),
    Planet::Budh.definition(),
    Planet::Shukra.definition(),
    Planet::Ketu.definition(),
    Planet::Shani.definition(),
    Planet::Mangal.definition(),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_round_trip() {
        for p in ALL_PLANETS {
            assert_eq!(Planet::from_number(p.number()), Some(p));
        }
        assert_eq!(Planet::from_number(0), None);
        assert_eq!(Planet::from_number(10), None);
    }

    #[test]
    fn catalogue_in_id_order() {
        for (i, def) in PERIOD_CATALOGUE.iter().enumerate() {
            assert_eq!(def.id() as usize, i + 1);
            assert_eq!(def.nominal_days, def.planet.nominal_days());
        }
    }

    #[test]
    fn nominal_days_sum_to_nine_years() {
        let total: u32 = ALL_PLANETS.iter().map(|p| p.nominal_days()).sum();
        assert_eq!(total, TOTAL_NOMINAL_DAYS);
        assert_eq!(total, 9 * 365);
    }

    #[test]
    fn canonical_sequence_is_permutation() {
        let mut ids = CANONICAL_SEQUENCE;
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn english_names() {
        assert_eq!(Planet::Guru.english_name(), "Jupiter");
        assert_eq!(Planet::Rahu.english_name(), "Rahu");
        assert_eq!(Planet::Shani.english_name(), "Saturn");
    }

    #[test]
    fn parse_names() {
        assert_eq!("SURYA".parse::<Planet>().unwrap(), Planet::Surya);
        assert_eq!(" mangal ".parse::<Planet>().unwrap(), Planet::Mangal);
        assert!(matches!(
            "Pluto".parse::<Planet>(),
            Err(DashaError::UnknownPlanet(_))
        ));
    }
}
