use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;

use crate::error::ParseHeuristicError;

/// The fixed set of cost estimates a solve can be guided by. The same function also prices every
/// step between adjacent cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeuristicKind {
    /// `|ax - bx| + |ay - by|`
    #[default]
    Manhattan,
    /// `(ax - bx)^2 + (ay - by)^2`. Not admissible, paths found with it may be suboptimal.
    EuclideanSquared,
    /// Always 0, which turns the search into plain uniform-cost ordering.
    Zero,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::Manhattan,
        HeuristicKind::EuclideanSquared,
        HeuristicKind::Zero,
    ];

    pub fn estimate(self, p1: &Point, p2: &Point) -> f32 {
        // Widened before any arithmetic, squared deltas outgrow i32 past 46340 cells.
        let delta_x = (p1.x - p2.x).unsigned_abs() as f32;
        let delta_y = (p1.y - p2.y).unsigned_abs() as f32;
        match self {
            HeuristicKind::Manhattan => delta_x + delta_y,
            HeuristicKind::EuclideanSquared => delta_x * delta_x + delta_y * delta_y,
            HeuristicKind::Zero => 0.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::EuclideanSquared => "euclidean-squared",
            HeuristicKind::Zero => "zero",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        HeuristicKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| ParseHeuristicError {
                name: s.to_owned(),
            })
    }
}
