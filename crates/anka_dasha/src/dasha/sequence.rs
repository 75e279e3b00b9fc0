//! Rotation of the fixed planet traversal order.

use crate::error::DashaError;
use crate::planet::{CANONICAL_SEQUENCE, PERIOD_CATALOGUE, PeriodDefinition, Planet};

/// The canonical sequence rotated so that `start_id` comes first.
///
/// Fails with [`DashaError::InvalidPeriodId`] for ids outside 1..=9.
pub fn rotate(start_id: u8) -> Result<[PeriodDefinition; 9], DashaError> {
    Planet::from_number(start_id)
        .map(rotate_planet)
        .ok_or(DashaError::InvalidPeriodId(start_id))
}

/// Same as [`rotate`] for an already-validated planet.
pub fn rotate_planet(planet: Planet) -> [PeriodDefinition; 9] {
    let start = CANONICAL_SEQUENCE
        .iter()
        .position(|&id| id == planet.number())
        .unwrap_or(0);
    std::array::from_fn(|i| {
        let id = CANONICAL_SEQUENCE[(start + i) % CANONICAL_SEQUENCE.len()];
        PERIOD_CATALOGUE[(id - 1) as usize]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::ALL_PLANETS;

    #[test]
    fn rotation_starts_with_requested_id() {
        for id in 1..=9u8 {
            let seq = rotate(id).unwrap();
            assert_eq!(seq[0].id(), id);
        }
    }

    #[test]
    fn rotation_is_permutation() {
        for id in 1..=9u8 {
            let mut ids: Vec<u8> = rotate(id).unwrap().iter().map(|d| d.id()).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        }
    }

    #[test]
    fn rotation_keeps_cyclic_order() {
        let ids: Vec<u8> = rotate(3).unwrap().iter().map(|d| d.id()).collect();
        assert_eq!(ids, vec![3, 8, 5, 7, 6, 1, 2, 9, 4]);
    }

    #[test]
    fn rotation_from_first_is_identity() {
        let ids: Vec<u8> = rotate(1).unwrap().iter().map(|d| d.id()).collect();
        assert_eq!(ids, CANONICAL_SEQUENCE.to_vec());
    }

    #[test]
    fn invalid_ids_rejected() {
        assert_eq!(rotate(0), Err(DashaError::InvalidPeriodId(0)));
        assert_eq!(rotate(10), Err(DashaError::InvalidPeriodId(10)));
    }

    #[test]
    fn planet_rotation_matches_id_rotation() {
        for p in ALL_PLANETS {
            assert_eq!(rotate_planet(p), rotate(p.number()).unwrap());
        }
    }
}
