mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::grid::Bounds;
use self::direction::Direction;
use self::food::Food;
use self::grid::Position;
use self::snake::{Collision, Snake};
use crate::app::AppState;
use crate::command::Command;
use crate::config::GridConfig;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    snake: Snake,
    food: Food,
    status: Status,
    bounds: Bounds,
    /// Terminal columns per grid cell
    cell_width: u16,
    tick_period: Duration,
    next_tick: Option<Instant>,
    /// The most recent direction key pressed since the last tick
    intent: Option<Direction>,
    /// Whether the last frame drawn had room for the board.  The game is held
    /// still while it doesn't.
    board_visible: bool,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &GridConfig) -> Self {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &GridConfig, rng: R) -> Game<R> {
        let bounds = config.bounds();
        log::info!(
            "Starting a new game on a {}×{} grid at {} ticks per second",
            bounds.width,
            bounds.height,
            config.tick_rate
        );
        let mut game = Game {
            rng,
            snake: Snake::new(bounds),
            food: Food::default(),
            status: Status::Running,
            bounds,
            cell_width: config.cell_width.get(),
            tick_period: config.tick_period(),
            next_tick: None,
            intent: None,
            board_visible: true,
        };
        game.place_food();
        game
    }

    /// Wait for either the next tick or an input event, whichever comes
    /// first, and handle it.  Once the game is over, or while the terminal is
    /// too small to show the board, there are no ticks, and this just waits
    /// for input (including resize events).
    pub(crate) fn process_input(&mut self) -> io::Result<Option<AppState>> {
        if self.running() && self.board_visible {
            let period = self.tick_period;
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn tick(&mut self) {
        if !self.board_visible {
            return;
        }
        if let Some(direction) = self.intent.take() {
            self.apply_direction_intent(direction);
        }
        self.update();
    }

    /// Advance the game by one tick: move the snake, let it eat, and check
    /// whether it crashed.  Does nothing once the game is over.
    pub(crate) fn update(&mut self) {
        if !self.running() {
            return;
        }
        self.snake.advance();
        if self.food.position() == Some(self.snake.head()) {
            self.snake.grow();
            log::debug!(
                "Snake ate food at {:?}; score is now {}",
                self.snake.head(),
                self.snake.score
            );
            self.place_food();
        }
        if let Some(collision) = self.snake.collision() {
            log::info!(
                "Game over: snake {collision} at {:?} with score {} and length {}",
                self.snake.head(),
                self.snake.score,
                self.snake.len()
            );
            self.status = Status::GameOver(collision);
        }
    }

    /// Put the snake & food back to their starting state and resume play
    pub(crate) fn restart(&mut self) {
        log::info!("Restarting game");
        self.snake.reset();
        self.status = Status::Running;
        self.next_tick = None;
        self.intent = None;
        self.place_food();
    }

    fn place_food(&mut self) {
        let occupied = self.snake.occupied();
        match self.food.respawn(self.bounds, &occupied, &mut self.rng) {
            Ok(pos) => log::debug!("Placed food at {pos:?}"),
            Err(e) => {
                log::info!(
                    "Snake filled the board with score {}: {e}",
                    self.snake.score
                );
                self.status = Status::Exhausted;
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<AppState> {
        match (
            self.status,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit) => return Some(AppState::Quit),
            (Status::Running, Command::Up) => self.intent = Some(Direction::Up),
            (Status::Running, Command::Down) => self.intent = Some(Direction::Down),
            (Status::Running, Command::Left) => self.intent = Some(Direction::Left),
            (Status::Running, Command::Right) => self.intent = Some(Direction::Right),
            (Status::GameOver(_) | Status::Exhausted, Command::R) => self.restart(),
            (Status::GameOver(_) | Status::Exhausted, Command::Q) => {
                return Some(AppState::Quit);
            }
            _ => (),
        }
        None
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        let size = self.display_size();
        let fits = area.width >= size.width && area.height >= size.height;
        if fits != self.board_visible {
            if fits {
                log::debug!("Terminal resized to {}×{}; resuming", area.width, area.height);
            } else {
                log::debug!(
                    "Terminal resized to {}×{}; holding the game until it is at least {}×{}",
                    area.width,
                    area.height,
                    size.width,
                    size.height
                );
                // Restart the tick countdown once the board is back
                self.next_tick = None;
            }
            self.board_visible = fits;
        }
        frame.render_widget(&*self, area);
    }

    /// Point the snake in `direction` for its next movement.  Reversals are
    /// ignored, and so is everything once the game is over.
    pub(crate) fn apply_direction_intent(&mut self, direction: Direction) {
        if self.running() {
            self.snake.turn(direction);
        }
    }

    /// Size of the bordered board
    fn block_size(&self) -> Size {
        Size {
            width: self
                .bounds
                .width
                .saturating_mul(self.cell_width)
                .saturating_add(2),
            height: self.bounds.height.saturating_add(2),
        }
    }

    /// Size of the board plus the score bar above it and the two message lines
    /// below
    fn display_size(&self) -> Size {
        let block_size = self.block_size();
        Size {
            width: block_size.width.max(PROMPT_WIDTH),
            height: block_size.height.saturating_add(3),
        }
    }

    fn running(&self) -> bool {
        self.status == Status::Running
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            body: self.snake.positions().collect(),
            food: self.food.position(),
            score: self.snake.score,
            game_over: !self.running(),
            collision: match self.status {
                Status::GameOver(collision) => Some(collision),
                Status::Running | Status::Exhausted => None,
            },
            head_symbol: self.snake.head_symbol(),
        }
    }
}

/// Everything needed to draw one frame of the game
#[derive(Clone, Debug, Eq, PartialEq)]
struct Snapshot {
    /// The snake's cells, head first
    body: Vec<Position>,
    food: Option<Position>,
    score: u32,
    game_over: bool,
    collision: Option<Collision>,
    head_symbol: char,
}

/// Width of [`prompt_line()`]
const PROMPT_WIDTH: u16 = 23;

fn prompt_line() -> Line<'static> {
    Line::from_iter([
        Span::raw(" Restart ("),
        Span::styled("r", consts::KEY_STYLE),
        Span::raw(") — Quit ("),
        Span::styled("q", consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let snapshot = self.snapshot();
        let block_size = self.block_size();
        let display_size = self.display_size();
        if area.width < display_size.width || area.height < display_size.height {
            Line::from(format!(
                "Enlarge the terminal to {}×{}",
                display_size.width, display_size.height
            ))
            .render(area, buf);
            return;
        }

        let display = center_rect(area, display_size);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(block_size.height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", snapshot.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let block_area = center_rect(block_area, block_size);
        Block::bordered().render(block_area, buf);
        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            cell_width: self.cell_width,
            buf,
        };
        for &p in snapshot.body.iter().skip(1) {
            level.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(pos) = snapshot.food {
            level.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with.  A head that went through the wall is
        // off the grid, so mark the last cell it occupied instead.
        match snapshot.collision {
            None => {
                if let Some(&head) = snapshot.body.first() {
                    level.draw_cell(head, snapshot.head_symbol, consts::SNAKE_STYLE);
                }
            }
            Some(Collision::SelfCollision) => {
                if let Some(&head) = snapshot.body.first() {
                    level.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
                }
            }
            Some(Collision::Wall) => {
                if let Some(&neck) = snapshot.body.get(1) {
                    level.draw_cell(neck, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
                }
            }
        }

        if snapshot.game_over {
            let banner = if snapshot.collision.is_some() {
                " — GAME OVER —"
            } else {
                " — BOARD FILLED —"
            };
            Span::from(banner).render(msg1_area, buf);
            prompt_line().render(msg2_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_width: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the first column of the grid cell at `pos` and blank
    /// out the cell's remaining columns, all in `style`.  Cells outside the
    /// canvas are skipped.
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let (Ok(gx), Ok(gy)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        let Some(x) = gx
            .checked_mul(self.cell_width)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(gy).filter(|&y| y < self.area.bottom()) else {
            return;
        };
        for (i, x) in (x..self.area.right())
            .take(usize::from(self.cell_width))
            .enumerate()
        {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(if i == 0 { symbol } else { ' ' });
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Status {
    Running,
    GameOver(Collision),
    /// The snake has filled the board and there are no more cells to place
    /// food in.
    Exhausted,
}
