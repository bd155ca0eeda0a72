//! Farm description loader.
//!
//! # Format
//!
//! ```text
//! 3
//! ##start
//! start 0 0
//! ##end
//! end 4 0
//! a 2 0
//! # a comment
//! start-a
//! a-end
//! ```
//!
//! - The first meaningful line is the agent count, a positive integer.
//! - A room is `<name> <x> <y>` with integer coordinates.  Names may not
//!   start with `L` or `#` or contain `-` or spaces.
//! - `##start` / `##end` mark the next room line.  Other `##` commands and
//!   `#` comments are ignored, as are blank lines.
//! - A tunnel is `<name>-<name>`.  Once tunnels begin, room lines are
//!   rejected.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::debug;

use af_graph::{Room, Tunnel};

use crate::{Farm, InputError, InputResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a farm description from a file.
pub fn load_farm(path: &Path) -> InputResult<Farm> {
    let file = std::fs::File::open(path)?;
    load_farm_reader(file)
}

/// Like [`load_farm`] but accepts any `Read` source.
pub fn load_farm_reader<R: Read>(mut reader: R) -> InputResult<Farm> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_farm(&text)
}

/// Parse a farm description from text.
pub fn parse_farm(text: &str) -> InputResult<Farm> {
    let mut p = Parser::default();
    for (i, raw) in text.lines().enumerate() {
        p.line(i + 1, raw.trim_end_matches('\r'))?;
    }
    p.finish(text)
}

// ── Parser state ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Start,
    End,
}

#[derive(Default)]
struct Parser {
    agent_count: Option<u32>,
    rooms:       Vec<Room>,
    names:       FxHashSet<String>,
    tunnels:     Vec<Tunnel>,
    start:       Option<String>,
    end:         Option<String>,
    pending:     Option<(Mark, usize)>,
}

impl Parser {
    fn line(&mut self, n: usize, line: &str) -> InputResult<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if let Some(cmd) = line.strip_prefix("##") {
            return self.command(n, cmd);
        }
        if line.starts_with('#') {
            return Ok(());
        }

        if self.agent_count.is_none() {
            self.agent_count = Some(parse_agent_count(n, line)?);
            return Ok(());
        }

        if line.split_whitespace().nth(1).is_some() {
            self.room(n, line)
        } else if line.contains('-') {
            self.tunnel(n, line)
        } else {
            Err(InputError::parse(n, format!("unrecognised line {line:?}")))
        }
    }

    fn command(&mut self, n: usize, cmd: &str) -> InputResult<()> {
        let mark = match cmd {
            "start" => Mark::Start,
            "end" => Mark::End,
            _ => return Ok(()),
        };
        if self.pending.is_some() {
            return Err(InputError::parse(n, "command must be followed by a room"));
        }
        let taken = match mark {
            Mark::Start => self.start.is_some(),
            Mark::End => self.end.is_some(),
        };
        if taken {
            return Err(InputError::parse(n, format!("duplicate ##{cmd}")));
        }
        self.pending = Some((mark, n));
        Ok(())
    }

    fn room(&mut self, n: usize, line: &str) -> InputResult<()> {
        if !self.tunnels.is_empty() {
            return Err(InputError::parse(n, "room defined after tunnels"));
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, x, y] = fields[..] else {
            return Err(InputError::parse(n, "room must be `<name> <x> <y>`"));
        };
        if name.starts_with('L') || name.starts_with('#') || name.contains('-') {
            return Err(InputError::parse(
                n,
                format!("invalid room name {name:?}: may not start with 'L' or '#' or contain '-'"),
            ));
        }
        let x = parse_coord(n, x)?;
        let y = parse_coord(n, y)?;
        if !self.names.insert(name.to_owned()) {
            return Err(InputError::parse(n, format!("duplicate room {name:?}")));
        }

        if let Some((mark, _)) = self.pending.take() {
            match mark {
                Mark::Start => self.start = Some(name.to_owned()),
                Mark::End => self.end = Some(name.to_owned()),
            }
        }
        self.rooms.push(Room::new(name, x, y));
        Ok(())
    }

    fn tunnel(&mut self, n: usize, line: &str) -> InputResult<()> {
        if let Some((_, at)) = self.pending {
            return Err(InputError::parse(at, "command must be followed by a room"));
        }
        let Some((a, b)) = line.split_once('-') else {
            return Err(InputError::parse(n, "tunnel must be `<name>-<name>`"));
        };
        if a.is_empty() || b.is_empty() || b.contains('-') {
            return Err(InputError::parse(n, "tunnel must be `<name>-<name>`"));
        }
        self.tunnels.push(Tunnel::new(a, b));
        Ok(())
    }

    fn finish(self, text: &str) -> InputResult<Farm> {
        if let Some((_, at)) = self.pending {
            return Err(InputError::parse(at, "command must be followed by a room"));
        }
        let agent_count = self.agent_count.ok_or(InputError::MissingAgentCount)?;
        if self.rooms.is_empty() {
            return Err(InputError::NoRooms);
        }
        let start = self.start.ok_or(InputError::MissingStart)?;
        let end = self.end.ok_or(InputError::MissingEnd)?;

        debug!(
            agents = agent_count,
            rooms = self.rooms.len(),
            tunnels = self.tunnels.len(),
            "parsed farm description",
        );

        Ok(Farm {
            agent_count,
            rooms: self.rooms,
            tunnels: self.tunnels,
            start,
            end,
            lines: text.lines().map(|l| l.trim_end_matches('\r').to_owned()).collect(),
        })
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_agent_count(n: usize, s: &str) -> InputResult<u32> {
    match s.parse::<i64>() {
        Ok(v) if v > 0 => u32::try_from(v)
            .map_err(|_| InputError::parse(n, format!("agent count {v} is too large"))),
        Ok(v) => Err(InputError::parse(n, format!("agent count must be positive, got {v}"))),
        Err(_) => Err(InputError::parse(n, format!("invalid agent count {s:?}"))),
    }
}

fn parse_coord(n: usize, s: &str) -> InputResult<i64> {
    s.parse::<i64>()
        .map_err(|_| InputError::parse(n, format!("invalid coordinate {s:?}")))
}
