use jobsearch_core::{Location, Role, UnknownOption};

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    SelectRole(Role),
    SelectLocation(Location),
    /// 1-based card number in "Available Jobs".
    ToggleSave(usize),
    Retry,
    Show,
    ListRoles,
    ListLocations,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`; errors carry a
/// message for the user.
pub fn parse_command(line: &str) -> Result<Option<UiCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, arg) = match line.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "role" | "r" => {
            let role = parse_role(require(arg, "role")?).map_err(|err| err.to_string())?;
            UiCommand::SelectRole(role)
        }
        "location" | "loc" | "l" => {
            let location =
                parse_location(require(arg, "location")?).map_err(|err| err.to_string())?;
            UiCommand::SelectLocation(location)
        }
        "save" | "unsave" | "s" => {
            let raw = require(arg, "save")?;
            match raw.parse::<usize>() {
                Ok(number) if number > 0 => UiCommand::ToggleSave(number),
                _ => return Err(format!("'{raw}' is not a job number")),
            }
        }
        "retry" => UiCommand::Retry,
        "show" => UiCommand::Show,
        "roles" => UiCommand::ListRoles,
        "locations" => UiCommand::ListLocations,
        "help" | "?" => UiCommand::Help,
        "quit" | "exit" | "q" => UiCommand::Quit,
        other => return Err(format!("unknown command '{other}', try `help`")),
    };
    Ok(Some(command))
}

fn require<'a>(arg: &'a str, verb: &str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!("`{verb}` needs an argument, try `help`"))
    } else {
        Ok(arg)
    }
}

/// Role by 1-based number or case-insensitive name.
pub fn parse_role(raw: &str) -> Result<Role, UnknownOption> {
    pick(raw, &Role::ALL)
}

/// Location by 1-based number or case-insensitive name.
pub fn parse_location(raw: &str) -> Result<Location, UnknownOption> {
    pick(raw, &Location::ALL)
}

fn pick<T>(raw: &str, options: &[T]) -> Result<T, UnknownOption>
where
    T: Copy + std::str::FromStr<Err = UnknownOption>,
{
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(number) => number
            .checked_sub(1)
            .and_then(|index| options.get(index))
            .copied()
            .ok_or_else(|| UnknownOption(raw.to_string())),
        Err(_) => raw.parse(),
    }
}
