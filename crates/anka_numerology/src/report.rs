//! Everything derived from one birth date (and optionally a name).

use anka_time::{NaiveDate, format_ddmmyyyy};

use crate::chaldean::{ChaldeanNumbers, chaldean};
use crate::conductor::{
    SERIES_LEN, bottom_values, conductor, conductor_base, conductor_series, driver, soul_number,
};
use crate::error::NumerologyError;
use crate::loshu::LoShuGrid;
use crate::planes::{Plane, formed_planes};

/// Full numerology profile for a birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerologyReport {
    pub birth: NaiveDate,
    /// Digit counts of the date alone.
    pub grid: LoShuGrid,
    pub driver: u32,
    pub conductor: u32,
    pub conductor_base: u32,
    /// Ages at which successive Maha Dashas end.
    pub conductor_series: [u32; SERIES_LEN],
    /// Planet number ruling each series entry.
    pub bottom_values: [u8; SERIES_LEN],
    pub soul_number: u32,
    /// Planes formed by `grid`.
    pub planes: Vec<&'static Plane>,
    pub name_numbers: Option<ChaldeanNumbers>,
}

impl NumerologyReport {
    pub fn for_birth(birth: NaiveDate, name: Option<&str>) -> Result<Self, NumerologyError> {
        let grid = LoShuGrid::for_date(birth);
        let conductor = conductor(birth);
        let base = conductor_base(conductor);
        let name_numbers = name.map(chaldean).transpose()?;

        Ok(Self {
            birth,
            grid,
            driver: driver(birth),
            conductor,
            conductor_base: base,
            conductor_series: conductor_series(base),
            bottom_values: bottom_values(birth),
            soul_number: soul_number(birth),
            planes: formed_planes(&grid),
            name_numbers,
        })
    }

    /// Grid with the driver and conductor counted once more.
    pub fn display_grid(&self) -> LoShuGrid {
        self.grid.with_driver_conductor(self.driver, self.conductor)
    }

    /// Birth date as `DD/MM/YYYY`.
    pub fn formatted_birth(&self) -> String {
        format_ddmmyyyy(self.birth)
    }
}
