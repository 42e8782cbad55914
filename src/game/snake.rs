use super::direction::Direction;
use super::grid::{Bounds, Position};
use crate::consts;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Snake state
///
/// The snake lives on a grid with the given bounds; its head may briefly leave
/// the grid, which counts as a collision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of all of the cells in the snake's body behind the head,
    /// nearest to the head first.
    pub(super) body: VecDeque<Position>,

    /// How many more movements should extend the snake instead of dragging
    /// its tail along
    pub(super) grow_pending: usize,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,

    /// Number of food items eaten
    pub(super) score: u32,

    pub(super) bounds: Bounds,
}

impl Snake {
    /// Create a new snake consisting of just a head at the center of
    /// `bounds`, facing right.  It will grow to its starting length over the
    /// next [`INITIAL_GROWTH`][consts::INITIAL_GROWTH] movements.
    pub(super) fn new(bounds: Bounds) -> Snake {
        Snake {
            head: bounds.center(),
            body: VecDeque::new(),
            grow_pending: consts::INITIAL_GROWTH,
            direction: Direction::Right,
            score: 0,
            bounds,
        }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Iterate over every cell of the snake, head first
    pub(super) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(super) fn occupied(&self) -> HashSet<Position> {
        self.positions().collect()
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        }
    }

    /// Change the snake's direction to `direction`, unless that would make it
    /// double back onto itself, in which case nothing happens.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Move the snake forwards one cell in the current direction.  The tail
    /// stays put if growth is pending.
    pub(super) fn advance(&mut self) {
        self.body.push_front(self.head);
        self.head = self.direction.advance(self.head);
        if self.grow_pending > 0 {
            self.grow_pending -= 1;
        } else {
            let _ = self.body.pop_back();
        }
    }

    /// Record a meal: the snake gets one cell longer over the next movement
    /// and scores a point.
    pub(super) fn grow(&mut self) {
        self.grow_pending += 1;
        self.score += 1;
    }

    /// Report whether the head has left the grid or run into the body
    pub(super) fn collision(&self) -> Option<Collision> {
        if !self.bounds.contains(self.head) {
            Some(Collision::Wall)
        } else if self.body.contains(&self.head) {
            Some(Collision::SelfCollision)
        } else {
            None
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Snake::new(self.bounds);
    }
}

/// What the snake ran into
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Collision {
    Wall,
    SelfCollision,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::Wall => write!(f, "hit the wall"),
            Collision::SelfCollision => write!(f, "ran into itself"),
        }
    }
}
