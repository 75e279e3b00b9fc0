//! Lo Shu planes: three-digit lines of the grid.

use crate::loshu::LoShuGrid;

/// A named line of three grid digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plane {
    pub name: &'static str,
    pub digits: [u32; 3],
    pub description: &'static str,
}

impl Plane {
    /// All three digits occur at least once.
    pub fn is_formed(&self, grid: &LoShuGrid) -> bool {
        self.digits.iter().all(|&d| grid.has(d))
    }
}

pub static PLANES: [Plane; 8] = [
    Plane {
        name: "Thought Plane",
        digits: [4, 3, 8],
        description: "Excellent intellect: analytical, imaginative, clear thinking.",
    },
    Plane {
        name: "Will Power Plane",
        digits: [9, 5, 1],
        description: "Strong willpower, leadership, inner strength.",
    },
    Plane {
        name: "Action Plane",
        digits: [2, 7, 6],
        description: "Emotionally intelligent and responsible in actions.",
    },
    Plane {
        name: "Mental Plane",
        digits: [4, 9, 2],
        description: "Strategic thinker with vision and emotional intelligence.",
    },
    Plane {
        name: "Emotional Plane",
        digits: [3, 5, 7],
        description: "Emotionally expressive, intuitive, and spiritually wise.",
    },
    Plane {
        name: "Practical Plane",
        digits: [8, 1, 6],
        description: "Grounded, reliable, executes tasks with leadership.",
    },
    Plane {
        name: "Silver Plane",
        digits: [2, 5, 8],
        description: "Emotionally aware and instinctively good with finances.",
    },
    Plane {
        name: "Golden Plane",
        digits: [4, 5, 6],
        description: "Emotionally mature, disciplined, balanced and composed under pressure.",
    },
];

/// Planes whose digits are all present in `grid`, in table order.
pub fn formed_planes(grid: &LoShuGrid) -> Vec<&'static Plane> {
    PLANES.iter().filter(|p| p.is_formed(grid)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn will_power_plane_formed() {
        let grid = LoShuGrid::from_digits(&[1, 5, 0, 6, 1, 9, 9, 0]);
        let names: Vec<&str> = formed_planes(&grid).iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Will Power Plane"]);
    }

    #[test]
    fn full_grid_forms_every_plane() {
        let grid = LoShuGrid::from_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(formed_planes(&grid).len(), PLANES.len());
    }

    #[test]
    fn empty_grid_forms_none() {
        assert!(formed_planes(&LoShuGrid::default()).is_empty());
    }
}
