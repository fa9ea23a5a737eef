//! Parsing of shell command lines.

use menu_catalog::{CandidateFields, Course, CourseSelection};

use crate::error::CommandError;

const FILTER_USAGE: &str = "filter <All|Appetizer|Main Course|Dessert|Beverage>";
const ADD_USAGE: &str = "add <course> | <name> | <description> | <price>";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command summary.
    Help,
    /// Show every item with the total count.
    List,
    /// Show the course selector options.
    Courses,
    /// Show the items passing a course selection.
    Filter(CourseSelection),
    /// Validate candidate fields and append the item on success.
    Add(CandidateFields),
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown commands, missing arguments,
    /// malformed `add` lines, and unknown course labels.
    ///
    /// # Example
    ///
    /// ```
    /// use menu_app::shell::Command;
    /// use menu_catalog::{Course, CourseSelection};
    ///
    /// let command = Command::parse("filter main course").expect("valid command");
    /// assert_eq!(
    ///     command,
    ///     Some(Command::Filter(CourseSelection::Course(Course::MainCourse)))
    /// );
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(word, rest)| (word, rest.trim()));

        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "list" | "ls" => Self::List,
            "courses" => Self::Courses,
            "filter" => Self::Filter(parse_selection(rest)?),
            "add" => Self::Add(parse_add(rest)?),
            "quit" | "exit" => Self::Quit,
            _ => {
                return Err(CommandError::UnknownCommand {
                    name: word.to_owned(),
                });
            }
        };
        Ok(Some(command))
    }
}

fn parse_selection(argument: &str) -> Result<CourseSelection, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "filter",
            usage: FILTER_USAGE,
        });
    }
    Ok(argument.parse::<CourseSelection>()?)
}

fn parse_add(argument: &str) -> Result<CandidateFields, CommandError> {
    if argument.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "add",
            usage: ADD_USAGE,
        });
    }

    let fields: Vec<&str> = argument.split('|').collect();
    let [course, name, description, price] = fields.as_slice() else {
        return Err(CommandError::FieldCount {
            found: fields.len(),
        });
    };

    // An empty course segment stands for "nothing selected" and is left for
    // the validator to reject.
    let selected = match course.trim() {
        "" => None,
        label => Some(label.parse::<Course>()?),
    };

    Ok(CandidateFields {
        name: (*name).to_owned(),
        description: (*description).to_owned(),
        price_text: (*price).to_owned(),
        course: selected,
    })
}
