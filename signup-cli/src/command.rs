//! Line commands understood by the shell.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<field> <value>` or `<field>=<value>`. The key is not checked here.
    Set { key: String, value: String },
    Show,
    Submit,
    Saved,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parse a line. Anything that is not a keyword is a field update.
    ///
    /// The value keeps inner spaces (`city Saint Denis`); only the line
    /// ending and the separator are stripped.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        match line.trim_end() {
            "" => return Command::Empty,
            "show" => return Command::Show,
            "submit" => return Command::Submit,
            "saved" => return Command::Saved,
            "help" | "?" => return Command::Help,
            "quit" | "exit" => return Command::Quit,
            _ => {}
        }

        let split = line.find(['=', ' ']).unwrap_or(line.len());
        let (key, rest) = line.split_at(split);
        let value = rest.get(1..).unwrap_or("");
        Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub const HELP: &str = "\
commands:
  <field> <value>   set a field (also <field>=<value>)
  show              show the form
  submit            register the user
  saved             show the registered user
  help              show this help
  quit              leave
fields: firstname lastname birthDate city email zipCode (birthDate as YYYY-MM-DD)";

#[cfg(test)]
mod tests {
    use super::*;

    fn set(key: &str, value: &str) -> Command {
        Command::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("submit\n"), Command::Submit);
        assert_eq!(Command::parse("  show  "), Command::Show);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("\r\n"), Command::Empty);
    }

    #[test]
    fn test_set_with_space() {
        assert_eq!(Command::parse("city Saint Denis\n"), set("city", "Saint Denis"));
        assert_eq!(Command::parse("lastname  Curie"), set("lastname", " Curie"));
    }

    #[test]
    fn test_set_with_equals() {
        assert_eq!(Command::parse("zipCode=75001"), set("zipCode", "75001"));
        assert_eq!(Command::parse("email="), set("email", ""));
    }

    #[test]
    fn test_set_without_value() {
        assert_eq!(Command::parse("firstname"), set("firstname", ""));
    }
}
