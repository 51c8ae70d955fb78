use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep_until};

use crate::game::{GameConfig, GameController, TickTimer};
use crate::input::InputHandler;
use crate::render::{Renderer, Scene};

/// One-shot tick deadline polled by the event loop
#[derive(Debug, Default)]
pub struct TickDeadline {
    deadline: Option<Instant>,
}

impl TickDeadline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline once it has fired
    pub fn fire(&mut self) {
        self.deadline = None;
    }
}

impl TickTimer for TickDeadline {
    fn arm(&mut self, delay: Duration) {
        self.deadline = Some(Instant::now() + delay);
    }

    fn disarm(&mut self) {
        self.deadline = None;
    }
}

/// Resolves at the deadline, or never if there is none
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

pub struct HumanMode {
    controller: GameController<Scene, TickDeadline>,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self {
            controller: GameController::new(config, Scene::new(), TickDeadline::new())
                .context("Invalid game configuration")?,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;
        if let Err(err) = &result {
            error!("Game loop failed: {err:#}");
        }

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        info!("Terminal session started");

        while !self.controller.is_terminated() {
            let deadline = self.controller.timer().deadline();

            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(command) = self.input_handler.handle_event(&event) {
                                self.controller.dispatch(command);
                            }
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.controller.on_quit(),
                    }
                }

                // Game logic tick
                _ = wait_for(deadline) => {
                    self.controller.timer_mut().fire();
                    self.controller.on_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.controller.canvas());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.controller.on_quit();
                }
            }
        }

        info!("Terminal session ended with score {}", self.controller.score());
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, Phase};

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default()).unwrap();
        assert_eq!(mode.controller.phase(), Phase::StartScreen);
        assert!(mode.controller.timer().deadline().is_none());
    }

    #[tokio::test]
    async fn test_deadline_arm_and_fire() {
        let mut timer = TickDeadline::new();
        let before = Instant::now();

        timer.arm(Duration::from_millis(200));
        let at = timer.deadline().unwrap();
        assert!(at >= before + Duration::from_millis(200));

        timer.fire();
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn test_start_arms_deadline() {
        let mut mode = HumanMode::new(GameConfig::default()).unwrap();
        mode.controller.dispatch(Command::Start);
        assert!(mode.controller.timer().deadline().is_some());

        mode.controller.dispatch(Command::Quit);
        assert!(mode.controller.timer().deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_for_deadline() {
        let at = Instant::now() + Duration::from_millis(200);
        wait_for(Some(at)).await;
        assert!(Instant::now() >= at);
    }
}
