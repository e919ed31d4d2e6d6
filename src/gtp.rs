//! Go Text Protocol (GTP) implementation.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements GTP version 2, allowing the engine to be driven
//! from a terminal or a graphical Go interface.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return GTP protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Set board size (2 to 19)
//! - `clear_board` - Reset the board to empty
//! - `komi <value>` - Set komi
//! - `play <color> <vertex>` - Play a move
//! - `genmove <color>` - Generate and play a move for the given color
//! - `showboard` - Print the current board
//! - `timelimit <seconds>` - Set the solver's wall-clock budget
//! - `solve` - Report the game-theoretic result of the current position

use std::io::{self, BufRead, Write};

use crate::agent::RandomAgent;
use crate::board::{Color, GoBoard};
use crate::constants::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use crate::solver::Solver;

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "solve",
    "timelimit",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game position
    board: GoBoard,
    /// Exact solver behind the `solve` and `timelimit` commands
    solver: Solver,
    /// Random policy behind `genmove`
    agent: RandomAgent,
    /// Komi (kept for protocol compatibility; no scoring rule consults it)
    komi: f32,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine with default settings.
    pub fn new() -> Self {
        Self {
            board: GoBoard::new(DEFAULT_SIZE),
            solver: Solver::new(),
            agent: RandomAgent::new(),
            komi: 7.5,
        }
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            log::debug!("gtp: {command} {args:?}");

            // Execute command
            let (success, message) = self.execute(&command, args);

            // Format and send response
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(stdout, "\n{prefix}{id_str} {message}\n")?;
            stdout.flush()?;

            // Quit if requested
            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let mut chars = trimmed.char_indices();

        if let Some((_, c)) = chars.next() {
            if c.is_ascii_digit() {
                let end = chars
                    .find(|(_, c)| !c.is_ascii_digit())
                    .map(|(i, _)| i)
                    .unwrap_or(trimmed.len());

                if let Ok(id) = trimmed[..end].parse::<u32>() {
                    return (Some(id), trimmed[end..].trim());
                }
            }
        }

        (None, trimmed)
    }

    fn parse_color(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "gozero-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => {
                let commands = KNOWN_COMMANDS.join("\n");
                (true, commands)
            }

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<usize>() {
                    Ok(size) if (MIN_SIZE..=MAX_SIZE).contains(&size) => {
                        self.board = GoBoard::new(size);
                        (true, String::new())
                    }
                    Ok(size) => (
                        false,
                        format!("unacceptable size, {MIN_SIZE} to {MAX_SIZE} supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board = GoBoard::new(self.board.size());
                (true, String::new())
            }

            "komi" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<f32>() {
                    Ok(komi) => {
                        self.komi = komi;
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }

                let Some(color) = Self::parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                let Some(pt) = self.board.parse_coord(args[1]) else {
                    return (false, "invalid vertex".to_string());
                };

                match self.board.play_move(pt, color) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let Some(color) = Self::parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };

                match self.agent.get_move(&self.board, color) {
                    Some(pt) => {
                        // Legal by construction; an apply failure here would
                        // mean the board and its move generator disagree.
                        match self.board.play_move(pt, color) {
                            Ok(()) => (true, self.board.str_coord(pt)),
                            Err(e) => (false, e.to_string()),
                        }
                    }
                    None => {
                        self.board.pass_move(color);
                        (true, "pass".to_string())
                    }
                }
            }

            "showboard" => (true, format!("\n{}", self.board)),

            "timelimit" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<i32>() {
                    Ok(seconds) => {
                        self.solver.set_time_limit(seconds);
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid time limit".to_string()),
                }
            }

            "solve" => (true, self.solver.solve(&mut self.board).to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
