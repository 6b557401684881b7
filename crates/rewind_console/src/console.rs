//! The read-eval-print loop.

use crate::command::{Command, HELP};
use crate::config::{ConfigError, ConsoleConfig};
use crate::render;
use rewind_tictactoe::{Action, GameStore, Resize};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// A console session around one [`GameStore`].
#[derive(Debug)]
pub struct Console {
    store: GameStore,
    config: ConsoleConfig,
}

impl Console {
    /// Creates a session with a fresh game of the configured size.
    #[instrument(skip(config), fields(board_size = config.board_size()))]
    pub fn new(config: ConsoleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut store = GameStore::with_size(*config.board_size())
            .map_err(|rejection| ConfigError::new(rejection.to_string()))?;
        store.subscribe(|state| {
            debug!(
                current_move = state.current_move(),
                size = state.board_size(),
                status = %state.status(),
                "State changed"
            );
        });
        Ok(Self { store, config })
    }

    /// The underlying store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    /// Reads commands until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        info!("Console session started");
        writeln!(output, "{}", render::frame(self.store.state()))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, output)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Unparsed input");
                    writeln!(output, "{e}. Type `help` for commands.")?;
                }
            }
            output.flush()?;
        }

        info!("Console session ended");
        Ok(())
    }

    /// Runs one command, writing whatever it shows.
    #[instrument(skip(self, output))]
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<Flow> {
        if let Some(action) = command.action() {
            self.dispatch(action);
            self.print_frame(output)?;
            return Ok(Flow::Continue);
        }

        match command {
            Command::History => writeln!(output, "{}", render::history(self.store.state()))?,
            Command::Show => self.print_frame(output)?,
            Command::State => {
                let json = serde_json::to_string_pretty(self.store.state())?;
                writeln!(output, "{json}")?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Play(_)
            | Command::Jump(_)
            | Command::Size(_)
            | Command::Grow
            | Command::Shrink => {}
        }
        Ok(Flow::Continue)
    }

    /// Dispatches an action; rejections are logged and otherwise ignored.
    fn dispatch(&mut self, action: Action) {
        if let Some(size) = self.target_size(action)
            && size > *self.config.max_board_size()
        {
            debug!(size, max = self.config.max_board_size(), "Resize above maximum ignored");
            return;
        }

        if let Err(rejection) = self.store.dispatch(action) {
            debug!(%rejection, ?action, "Action ignored");
        }
    }

    fn target_size(&self, action: Action) -> Option<usize> {
        let current = self.store.state().board_size();
        match action {
            Action::Resize(Resize::To(size)) => Some(size),
            Action::Resize(Resize::Grow) => Some(current + 1),
            Action::Resize(Resize::Shrink) | Action::Play(_) | Action::JumpTo(_) => None,
        }
    }

    fn print_frame<W: Write>(&self, output: &mut W) -> io::Result<()> {
        let state = self.store.state();
        writeln!(output, "{}", render::frame(state))?;
        if *self.config.show_history() {
            writeln!(output, "{}", render::history(state))?;
        }
        Ok(())
    }
}
