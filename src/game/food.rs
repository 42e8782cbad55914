use super::grid::{Bounds, Position};
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// The single piece of food on the grid.  `position` is `None` only when
/// there was nowhere left to put it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct Food {
    position: Option<Position>,
}

impl Food {
    #[cfg(test)]
    pub(super) fn at(position: Position) -> Food {
        Food {
            position: Some(position),
        }
    }

    pub(super) fn position(&self) -> Option<Position> {
        self.position
    }

    /// Move the food to a random free cell.  If every cell is occupied, the
    /// food is removed from the grid and an error is returned.
    pub(super) fn respawn<R: Rng>(
        &mut self,
        bounds: Bounds,
        occupied: &HashSet<Position>,
        rng: &mut R,
    ) -> Result<Position, FoodError> {
        match generate_position(bounds, occupied, rng) {
            Ok(pos) => {
                self.position = Some(pos);
                Ok(pos)
            }
            Err(e) => {
                self.position = None;
                Err(e)
            }
        }
    }
}

/// Pick a uniformly random cell within `bounds` that is not in `occupied` by
/// drawing cells until a free one turns up.
pub(super) fn generate_position<R: Rng>(
    bounds: Bounds,
    occupied: &HashSet<Position>,
    rng: &mut R,
) -> Result<Position, FoodError> {
    if bounds.positions().all(|p| occupied.contains(&p)) {
        return Err(FoodError::Exhausted);
    }
    loop {
        let pos = Position::new(
            rng.random_range(0..i32::from(bounds.width)),
            rng.random_range(0..i32::from(bounds.height)),
        );
        if !occupied.contains(&pos) {
            return Ok(pos);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(super) enum FoodError {
    #[error("no free cell left to place food in")]
    Exhausted,
}
