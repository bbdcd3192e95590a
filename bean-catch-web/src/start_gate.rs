//! Makes `start_game` a one-shot: a second loop or second set of input
//! listeners would double-step beans and double-spawn on every tap.

#[derive(Debug, Default)]
pub struct StartGate {
    started: bool,
}

impl StartGate {
    /// True for the caller that gets to start the game
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Startup failed, allow another attempt
    pub fn reopen(&mut self) {
        self.started = false;
    }
}
