/// One line of user input in the list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scroll down by this many rows, or one viewport when unspecified
    Down(Option<u32>),
    /// Scroll up by this many rows, or one viewport when unspecified
    Up(Option<u32>),
    Top,
    Bottom,
    /// Open the detail view of the account with this id or number
    Open(String),
    Back,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  <enter>, j, down [n]   scroll down (one screen, or n rows)
  k, up [n]              scroll up
  G, end                 jump to the bottom (loads the next page)
  g, top                 jump to the top
  open <account>         show the transactions of an account (id or number)
  back                   return to the account list
  help                   show this text
  q, quit                exit";

/// Parse one input line
pub fn parse(line: &str) -> Result<Command, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = parts.split_first() else {
        return Ok(Command::Down(None));
    };

    let command = match command {
        "j" | "down" => Command::Down(parse_rows(args)?),
        "k" | "up" => Command::Up(parse_rows(args)?),
        "G" | "end" | "bottom" => Command::Bottom,
        "g" | "top" => Command::Top,
        "open" | "o" => match args {
            [account] => Command::Open(account.to_string()),
            _ => return Err("Usage: `open <account id or number>`".to_string()),
        },
        "back" | "b" => Command::Back,
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("Unknown command `{}`. Type `help` for a list.", other)),
    };

    Ok(command)
}

fn parse_rows(args: &[&str]) -> Result<Option<u32>, String> {
    match args {
        [] => Ok(None),
        [rows] => rows
            .parse::<u32>()
            .map(Some)
            .map_err(|_| format!("Invalid row count `{}`", rows)),
        _ => Err("Expected at most one row count".to_string()),
    }
}
