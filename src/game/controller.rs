use anyhow::Result;
use log::{debug, info};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::time::Duration;

use super::{
    action::{Command, Direction},
    board::{Board, Position},
    config::GameConfig,
    food::Food,
    snake::Snake,
};

pub const TITLE_TEXT: &str = "SNAKE GAME";
pub const START_HINT_TEXT: &str = "Click anywhere to start";
pub const GAME_OVER_TEXT: &str = "Game Over";
pub const GAME_OVER_HINT_TEXT: &str = "Press R to restart or Q to quit";

/// What a marker on the canvas stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// Snake segment by index; index 0 is drawn as the head
    Segment(usize),
    Food,
}

/// Fixed places text can be written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextSlot {
    Title,
    Subtitle,
    Score,
}

/// Drawing surface the controller reports to
pub trait Canvas {
    /// Wipe everything, markers included
    fn reset(&mut self);
    /// Wipe the board outline and all text, keeping markers
    fn clear_overlay(&mut self);
    fn draw_board(&mut self, side: i32, cell: i32);
    /// Draw or move a marker
    fn place(&mut self, marker: Marker, position: Position, color: &str);
    fn write(&mut self, slot: TextSlot, text: &str);
}

/// One-shot timer that calls back into [`GameController::on_tick`]
pub trait TickTimer {
    /// Schedule a tick after `delay`, replacing any pending one
    fn arm(&mut self, delay: Duration);
    /// Drop the pending tick, if any
    fn disarm(&mut self);
}

/// Lifecycle of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    StartScreen,
    Playing,
    GameOver,
    Terminated,
}

/// Snake and food owned for the duration of one round
#[derive(Debug, Clone)]
struct Round {
    snake: Snake,
    food: Food,
}

/// Drives rounds of the game in response to input and timer events
pub struct GameController<C, T, R = ThreadRng> {
    config: GameConfig,
    board: Board,
    phase: Phase,
    score: u32,
    round: Option<Round>,
    canvas: C,
    timer: T,
    rng: R,
}

impl<C: Canvas, T: TickTimer> GameController<C, T, ThreadRng> {
    pub fn new(config: GameConfig, canvas: C, timer: T) -> Result<Self> {
        Self::with_rng(config, canvas, timer, rand::thread_rng())
    }
}

impl<C: Canvas, T: TickTimer, R: Rng> GameController<C, T, R> {
    /// Create a controller showing the start screen.
    ///
    /// Fails if `config` does not validate.
    pub fn with_rng(config: GameConfig, canvas: C, timer: T, rng: R) -> Result<Self> {
        config.validate()?;
        let board = config.board();
        let mut controller = Self {
            config,
            board,
            phase: Phase::StartScreen,
            score: 0,
            round: None,
            canvas,
            timer,
            rng,
        };
        controller.show_start_screen();
        Ok(controller)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> Option<&Snake> {
        self.round.as_ref().map(|round| &round.snake)
    }

    pub fn food(&self) -> Option<&Food> {
        self.round.as_ref().map(|round| &round.food)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Route a runtime event to its handler
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Start => self.on_start_click(),
            Command::Turn(direction) => self.on_direction(direction),
            Command::Restart => self.on_restart(),
            Command::Quit => self.on_quit(),
        }
    }

    pub fn on_start_click(&mut self) {
        if self.phase != Phase::StartScreen {
            debug!("Ignoring start in phase {:?}", self.phase);
            return;
        }
        self.start_round();
    }

    /// Advance the round by one step; stale ticks outside a round are dropped
    pub fn on_tick(&mut self) {
        if self.phase != Phase::Playing {
            debug!("Dropping tick in phase {:?}", self.phase);
            return;
        }
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let result = round.snake.step(&round.food, &self.board);

        if result.ate_food {
            self.score += 1;
            round.food.relocate(&self.board, &mut self.rng);
            debug!(
                "Food eaten, score {} length {}, food moved to {:?}",
                self.score,
                round.snake.len(),
                round.food.position
            );

            self.canvas.clear_overlay();
            self.canvas.draw_board(self.board.side(), self.board.cell());
            self.canvas.write(TextSlot::Score, &score_text(self.score));
            self.canvas
                .place(Marker::Food, round.food.position, &round.food.color);
        }

        draw_snake(&mut self.canvas, &round.snake);

        if let Some(collision) = result.collision {
            info!(
                "Game over ({:?}) at {:?} with score {}",
                collision,
                round.snake.head(),
                self.score
            );
            self.phase = Phase::GameOver;
            self.canvas.write(TextSlot::Title, GAME_OVER_TEXT);
            self.canvas.write(TextSlot::Subtitle, GAME_OVER_HINT_TEXT);
            return;
        }

        self.timer.arm(self.config.tick_interval());
    }

    /// Request a new heading, applied on the next tick
    pub fn on_direction(&mut self, direction: Direction) {
        if self.phase != Phase::Playing {
            return;
        }
        if let Some(round) = self.round.as_mut() {
            if !round.snake.turn(direction) {
                debug!("Ignoring turn {:?} along current axis", direction);
            }
        }
    }

    pub fn on_restart(&mut self) {
        match self.phase {
            Phase::Playing | Phase::GameOver => self.start_round(),
            Phase::StartScreen | Phase::Terminated => {
                debug!("Ignoring restart in phase {:?}", self.phase)
            }
        }
    }

    pub fn on_quit(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        info!("Quitting with score {}", self.score);
        self.timer.disarm();
        self.phase = Phase::Terminated;
    }

    fn show_start_screen(&mut self) {
        self.canvas.reset();
        self.canvas.draw_board(self.board.side(), self.board.cell());
        self.canvas.write(TextSlot::Title, TITLE_TEXT);
        self.canvas.write(TextSlot::Subtitle, START_HINT_TEXT);
    }

    fn start_round(&mut self) {
        self.timer.disarm();
        self.canvas.reset();
        self.canvas.draw_board(self.board.side(), self.board.cell());
        self.score = 0;
        self.canvas.write(TextSlot::Score, &score_text(self.score));

        let snake = Snake::new(
            self.config.start_position(),
            self.config.start_direction,
            self.board.cell(),
            self.config.snake_color.as_str(),
        );
        let food = Food::new(
            self.board.random_cell(&mut self.rng),
            self.config.food_color.as_str(),
        );

        draw_snake(&mut self.canvas, &snake);
        self.canvas.place(Marker::Food, food.position, &food.color);
        info!(
            "Round started at {:?}, food at {:?}",
            snake.head(),
            food.position
        );

        self.round = Some(Round { snake, food });
        self.phase = Phase::Playing;
        self.timer.arm(self.config.tick_interval());
    }
}

fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

fn draw_snake<C: Canvas>(canvas: &mut C, snake: &Snake) {
    for (i, pos) in snake.segments().iter().enumerate() {
        canvas.place(Marker::Segment(i), *pos, snake.color());
    }
}
