//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};

/// Default number of columns in the grid
pub(crate) const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default number of rows in the grid
pub(crate) const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Default number of terminal columns used to draw a single grid cell.  Two
/// columns make a cell look roughly square in most terminal fonts.
pub(crate) const DEFAULT_CELL_WIDTH: u16 = 2;

/// Default number of snake movements per second
pub(crate) const DEFAULT_TICK_RATE: u32 = 10;

/// Pending growth of a freshly spawned snake, which starts out as just a head
pub(crate) const INITIAL_GROWTH: usize = 3;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph drawn where the snake crashed
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
