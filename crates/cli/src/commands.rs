use crescent_core::{Card, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Pile(usize),
    Card(Card),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Board,
    Place { target: Target, row: Option<Row> },
    Hint,
    Shuffle,
    Direction(Row),
    New,
    Auto,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  board | b                 show piles and foundations
  place <pile|card> [row]   drop a pile top on its foundation (row: ace|king)
  hint | h                  suggest a playable card
  shuffle | s               redeal the cards still in play
  dir <ace|king>            lock the build direction
  new | n                   start a new game
  auto | a                  let the autoplayer finish the game
  help | ?                  this text
  quit | q                  leave";

pub fn parse_row(raw: &str) -> Option<Row> {
    match raw.to_ascii_lowercase().as_str() {
        "a" | "ace" | "up" => Some(Row::Ace),
        "k" | "king" | "down" => Some(Row::King),
        _ => None,
    }
}

fn parse_target(raw: &str) -> Result<Target, String> {
    if let Ok(pile) = raw.parse::<usize>() {
        return Ok(Target::Pile(pile));
    }
    raw.parse::<Card>()
        .map(Target::Card)
        .map_err(|err| format!("bad target '{raw}': {err}"))
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();
    match head.to_ascii_lowercase().as_str() {
        "board" | "b" | "ls" => Ok(Command::Board),
        "place" | "p" => {
            let raw = args.first().ok_or("usage: place <pile|card> [ace|king]")?;
            let target = parse_target(raw)?;
            let row = match args.get(1) {
                Some(raw) => Some(parse_row(raw).ok_or_else(|| format!("bad row '{raw}'"))?),
                None => None,
            };
            Ok(Command::Place { target, row })
        }
        "hint" | "h" => Ok(Command::Hint),
        "shuffle" | "s" => Ok(Command::Shuffle),
        "dir" | "direction" | "d" => {
            let raw = args.first().ok_or("usage: dir <ace|king>")?;
            parse_row(raw)
                .map(Command::Direction)
                .ok_or_else(|| format!("bad row '{raw}'"))
        }
        "new" | "n" => Ok(Command::New),
        "auto" | "a" => Ok(Command::Auto),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'")),
    }
}
