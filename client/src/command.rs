use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    Place(usize),
    Restart,
    Scores,
    Help,
    Quit,
}

impl TerminalCommand {
    /// Cell numbers are 1-based on screen and 0-based on the board.
    pub fn parse(line: &str) -> Result<Self, String> {
        let input = line.trim().to_ascii_lowercase();
        match input.as_str() {
            "r" | "restart" => return Ok(TerminalCommand::Restart),
            "s" | "scores" => return Ok(TerminalCommand::Scores),
            "h" | "help" | "?" => return Ok(TerminalCommand::Help),
            "q" | "quit" | "exit" => return Ok(TerminalCommand::Quit),
            _ => {}
        }

        match input.parse::<usize>() {
            Ok(cell) if (1..=CELL_COUNT).contains(&cell) => Ok(TerminalCommand::Place(cell - 1)),
            Ok(cell) => Err(format!("Cell {} does not exist, pick 1-{}", cell, CELL_COUNT)),
            Err(_) => Err(format!("Unknown command '{}'", line.trim())),
        }
    }
}
