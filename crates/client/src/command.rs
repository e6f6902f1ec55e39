//! Commands accepted by the terminal front end.

use charcat_core::types::DbId;

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,
    Add,
    Rename(DbId),
    Edit(DbId),
    Delete(DbId),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list            show the catalog
  reload          fetch the catalog from the server again
  add             create a character (prompts for each field)
  rename <id>     change a character's name
  edit <id>       change any field of a character
  delete <id>     remove a character (asks for confirmation)
  help            show this message
  quit            leave";

impl Command {
    /// Parse a command line. Errors carry a message suitable for display.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err("Type a command, or `help`".into());
        };

        let command = match verb.to_lowercase().as_str() {
            "list" | "ls" => Command::List,
            "reload" => Command::Reload,
            "add" | "new" => Command::Add,
            "rename" => Command::Rename(parse_id(verb, words.next())?),
            "edit" => Command::Edit(parse_id(verb, words.next())?),
            "delete" | "rm" => Command::Delete(parse_id(verb, words.next())?),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(format!("Unknown command `{other}`; try `help`")),
        };

        match words.next() {
            Some(extra) => Err(format!("Unexpected argument `{extra}`")),
            None => Ok(command),
        }
    }
}

fn parse_id(verb: &str, arg: Option<&str>) -> Result<DbId, String> {
    let arg = arg.ok_or_else(|| format!("Usage: {verb} <id>"))?;
    arg.parse()
        .map_err(|_| format!("`{arg}` is not a character id"))
}
