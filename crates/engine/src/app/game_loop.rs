use tracing::info;

use super::{Canvas, InputEvent, Point};

/// What the loop drives once per tick. Stop requests (quit, Escape) are handled
/// by [`GameLoop`] and never reach the game.
pub trait Game {
    fn handle_input(&mut self, event: InputEvent);
    fn update(&mut self, pointer: Point);
    fn render(&self, canvas: &mut Canvas);
    fn shutdown(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct GameLoop<G> {
    game: G,
    state: LoopState,
    ticks: u64,
}

impl<G: Game> GameLoop<G> {
    pub fn new(game: G) -> Self {
        Self {
            game,
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Runs one tick after the clock wait: dispatch input in arrival order,
    /// update, then draw into `canvas`. A stop request ends the tick on the
    /// spot; events queued behind it are dropped and nothing is drawn.
    pub fn tick<I>(&mut self, events: I, pointer: Point, canvas: &mut Canvas) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if self.state == LoopState::Stopped {
            return self.state;
        }

        for event in events {
            if event.is_stop_request() {
                info!(?event, tick = self.ticks, "stop_requested");
                self.state = LoopState::Stopped;
                return self.state;
            }
            self.game.handle_input(event);
        }

        self.game.update(pointer);
        self.game.render(canvas);
        self.ticks = self.ticks.saturating_add(1);
        self.state
    }

    pub fn shutdown(&mut self) {
        self.state = LoopState::Stopped;
        self.game.shutdown();
    }
}
