//! Scorekeeper: the court-side controller around a [`GameEngine`].
//!
//! Players tap the half of the court belonging to the team that won the
//! rally. Before anyone serves, a tap picks the first server instead. After
//! every command the scorekeeper re-reads the engine and produces a fresh
//! [`CourtView`].

use serde::Serialize;
use sideout_scoring::{GameEngine, RallyError, Side, Team};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::EnumString;
use tracing::{debug, info, instrument, warn};

/// A line command typed at the scorekeeper prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    /// Our team won the rally (or serves first).
    #[strum(serialize = "us", serialize = "you", serialize = "u")]
    Us,
    /// The other team won the rally (or serves first).
    #[strum(serialize = "them", serialize = "they", serialize = "t")]
    Them,
    /// Take back the last rally.
    #[strum(serialize = "undo", serialize = "z")]
    Undo,
    /// Start over with no server chosen.
    #[strum(serialize = "reset")]
    Reset,
    /// Show the court again.
    #[strum(serialize = "status", serialize = "s")]
    Status,
    /// List commands.
    #[strum(serialize = "help", serialize = "?")]
    Help,
    /// Leave the scorekeeper.
    #[strum(serialize = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// Help text listing the commands.
pub const HELP: &str = "\
commands:
  us | you | u      our team won the rally (picks first server before the match)
  them | they | t   their team won the rally (picks first server before the match)
  undo | z          take back the last rally
  reset             start over
  status | s        show the court
  help | ?          this text
  quit | q          leave";

/// What a tap on the court did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// No server was chosen yet; the tapped team now serves first.
    ServerChosen(Team),
    /// The rally was recorded.
    RallyRecorded,
    /// The game is over; taps are ignored until undo or reset.
    Ignored,
}

/// Whether the command loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Print the help text, then read the next command.
    ShowHelp,
    /// Stop.
    Quit,
}

/// Everything a display needs to draw the court after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtView {
    /// Score call, or the choose-server prompt before the match.
    pub score: String,
    /// Team holding serve.
    pub server_team: Team,
    /// Court half the server stands on.
    pub server_side: Side,
    /// True once the game has a winner.
    pub game_over: bool,
    /// True if undo would change anything.
    pub undo_available: bool,
}

impl CourtView {
    /// True if the serve marker belongs in this half of the court.
    pub fn shows_server(&self, team: Team, side: Side) -> bool {
        !self.game_over && team == self.server_team && side == self.server_side
    }

    fn cell(&self, team: Team, side: Side) -> &'static str {
        if self.shows_server(team, side) {
            "[ o ]"
        } else {
            "[   ]"
        }
    }
}

impl fmt::Display for CourtView {
    // Opponents face us, so their even court sits on our left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} {}{}",
            Team::Opponent.to_string(),
            self.cell(Team::Opponent, Side::Even),
            self.cell(Team::Opponent, Side::Odd)
        )?;
        writeln!(f, "      {:^10}", self.score)?;
        write!(
            f,
            "{:>5} {}{}",
            Team::Us.to_string(),
            self.cell(Team::Us, Side::Odd),
            self.cell(Team::Us, Side::Even)
        )?;
        if self.undo_available {
            write!(f, "  (undo)")?;
        }
        Ok(())
    }
}

/// Court-side controller around a game engine.
#[derive(Debug, Clone)]
pub struct Scorekeeper {
    engine: GameEngine,
}

impl Scorekeeper {
    /// Wraps an engine.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine) -> Self {
        Self { engine }
    }

    /// Returns the wrapped engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Handles a tap on `team`'s half of the court.
    ///
    /// # Errors
    ///
    /// Returns [`RallyError::InvalidWinner`] for [`Team::None`], or an
    /// invariant violation surfaced by the engine.
    #[instrument(skip(self))]
    pub fn tap(&mut self, team: Team) -> Result<TapOutcome, RallyError> {
        if !team.is_playing() {
            return Err(RallyError::InvalidWinner(team));
        }
        if !self.engine.current_server_team().is_playing() {
            info!(%team, "First server chosen");
            self.engine.choose_first_server(team);
            return Ok(TapOutcome::ServerChosen(team));
        }
        if self.engine.is_game_over() {
            debug!("Tap ignored, game is over");
            return Ok(TapOutcome::Ignored);
        }
        self.engine.record_rally(team)?;
        Ok(TapOutcome::RallyRecorded)
    }

    /// Takes back the last rally. Returns false if there was nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        self.engine.undo()
    }

    /// Clears the game back to the choose-server prompt.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset_game();
    }

    /// Re-reads every getter of the engine.
    pub fn view(&self) -> CourtView {
        CourtView {
            score: self.engine.format_score(),
            server_team: self.engine.current_server_team(),
            server_side: self.engine.current_server_side(),
            game_over: self.engine.is_game_over(),
            undo_available: self.engine.is_undo_available(),
        }
    }

    /// Applies one typed command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Flow {
        let result = match command {
            Command::Us => self.tap(Team::Us).map(|_| ()),
            Command::Them => self.tap(Team::Opponent).map(|_| ()),
            Command::Undo => {
                if !self.undo() {
                    debug!("Nothing to undo");
                }
                Ok(())
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::Status => Ok(()),
            Command::Help => return Flow::ShowHelp,
            Command::Quit => return Flow::Quit,
        };
        if let Err(e) = result {
            warn!(error = %e, "Command rejected");
        }
        Flow::Continue
    }

    /// Runs the command loop until `quit` or end of input.
    ///
    /// The court is drawn once at the start and again after every command.
    #[instrument(skip_all)]
    pub fn run_session<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> std::io::Result<()> {
        writeln!(output, "{}", self.view())?;
        for line in input.lines() {
            let line = line?;
            let typed = line.trim();
            if typed.is_empty() {
                continue;
            }
            let Ok(command) = Command::from_str(typed) else {
                writeln!(output, "unknown command {:?}, type help", typed)?;
                continue;
            };
            match self.apply(command) {
                Flow::Continue => writeln!(output, "{}", self.view())?,
                Flow::ShowHelp => writeln!(output, "{}", HELP)?,
                Flow::Quit => break,
            }
        }
        output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sideout_scoring::Discipline;

    fn doubles() -> Scorekeeper {
        Scorekeeper::new(GameEngine::new(Discipline::Doubles, 11))
    }

    #[test]
    fn test_first_tap_chooses_server() {
        let mut keeper = doubles();
        assert_eq!(keeper.view().score, "Who Serves First?");
        assert_eq!(
            keeper.tap(Team::Opponent).unwrap(),
            TapOutcome::ServerChosen(Team::Opponent)
        );
        let view = keeper.view();
        assert_eq!(view.score, "0-0-2");
        assert_eq!(view.server_team, Team::Opponent);
        assert!(!view.undo_available);
        assert!(view.shows_server(Team::Opponent, Side::Even));
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::from_str("US").unwrap(), Command::Us);
        assert_eq!(Command::from_str("they").unwrap(), Command::Them);
        assert_eq!(Command::from_str("z").unwrap(), Command::Undo);
        assert_eq!(Command::from_str("q").unwrap(), Command::Quit);
        assert!(Command::from_str("serve").is_err());
    }

    #[test]
    fn test_apply_flow() {
        let mut keeper = doubles();
        assert_eq!(keeper.apply(Command::Us), Flow::Continue);
        assert_eq!(keeper.apply(Command::Us), Flow::Continue);
        assert_eq!(keeper.view().score, "1-0-2");
        assert_eq!(keeper.apply(Command::Undo), Flow::Continue);
        assert_eq!(keeper.view().score, "0-0-2");
        assert_eq!(keeper.apply(Command::Help), Flow::ShowHelp);
        assert_eq!(keeper.apply(Command::Reset), Flow::Continue);
        assert_eq!(keeper.view().server_team, Team::None);
        assert_eq!(keeper.apply(Command::Quit), Flow::Quit);
    }

    #[test]
    fn test_court_rendering_marks_server() {
        let mut keeper = doubles();
        keeper.tap(Team::Us).unwrap();
        keeper.tap(Team::Us).unwrap();
        let rendered = keeper.view().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], " They [   ][   ]");
        assert!(lines[1].contains("1-0-2"));
        assert!(lines[2].starts_with("  You [ o ][   ]"));
        assert!(lines[2].ends_with("(undo)"));
    }

    #[test]
    fn test_session_reads_until_quit() {
        let mut keeper = doubles();
        let input = "them\n\nthem\nbogus\nquit\nus\n".as_bytes();
        let mut output = Vec::new();
        keeper.run_session(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Who Serves First?"));
        assert!(text.contains("1-0-2"));
        assert!(text.contains("unknown command \"bogus\""));
        assert_eq!(keeper.view().score, "1-0-2");
    }
}
