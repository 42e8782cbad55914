/// A cell on the grid.  Coordinates are signed so that a head which has left
/// the grid can still be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// The dimensions of the grid.  The top-left cell is at (0, 0), and `y`
/// increases downwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Bounds {
    pub(crate) const fn new(width: u16, height: u16) -> Bounds {
        Bounds { width, height }
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..i32::from(self.width)).contains(&pos.x) && (0..i32::from(self.height)).contains(&pos.y)
    }

    pub(crate) fn center(self) -> Position {
        Position::new(i32::from(self.width / 2), i32::from(self.height / 2))
    }

    /// Iterate over every cell of the grid in row-major order
    pub(crate) fn positions(self) -> impl Iterator<Item = Position> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
