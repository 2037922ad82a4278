//! Line-oriented event scripts
//!
//! Lets a terminal or a test drive the controller from text:
//!
//! ```text
//! # comments and blank lines are skipped
//! type 0 4      # write '4' into slot 0
//! type 1 #      # write '#' into slot 1
//! type 2
//! key 2 Backspace
//! set 1234
//! clear
//! ```
//!
//! Arguments are taken literally, so `#` only starts a comment as the first
//! word of a line or once every argument of the command has been read. A
//! `type` line without a character clears the slot.

use crate::error::ScriptError;
use crate::slot::event::SlotEvent;
use crate::types::Key;
use std::str::SplitWhitespace;

/// Parse a single script line
///
/// `line_number` is 1-based and only used for error reporting. Returns
/// `Ok(None)` for blank and comment lines.
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<SlotEvent>, ScriptError> {
    let mut words = line.split_whitespace();

    let command = match words.next() {
        Some(command) if !is_comment(command) => command,
        _ => return Ok(None),
    };

    let event = match command {
        "type" => {
            let index = parse_index(line_number, words.next())?;
            let text = words.next().unwrap_or_default();
            SlotEvent::entered(index, text)
        }
        "key" => {
            let index = parse_index(line_number, words.next())?;
            let name = words.next().ok_or_else(|| ScriptError::MissingArgument {
                line: line_number,
                argument: "key".to_string(),
            })?;
            SlotEvent::KeyPressed {
                index,
                key: Key::from(name),
            }
        }
        "clear" => SlotEvent::Clear,
        "set" => SlotEvent::SetCode {
            code: words.next().unwrap_or_default().to_string(),
        },
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_number,
                command: other.to_string(),
            })
        }
    };

    expect_end(line_number, words)?;
    Ok(Some(event))
}

/// Parse a whole script into events
///
/// Stops at the first malformed line.
pub fn parse_script(script: &str) -> Result<Vec<SlotEvent>, ScriptError> {
    let mut events = Vec::new();
    for (offset, line) in script.lines().enumerate() {
        if let Some(event) = parse_line(offset + 1, line)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn is_comment(word: &str) -> bool {
    word.starts_with('#')
}

/// Anything left after the arguments must be a trailing comment
fn expect_end(line_number: usize, mut words: SplitWhitespace<'_>) -> Result<(), ScriptError> {
    match words.next() {
        Some(word) if !is_comment(word) => Err(ScriptError::UnexpectedArgument {
            line: line_number,
            value: word.to_string(),
        }),
        _ => Ok(()),
    }
}

fn parse_index(line_number: usize, word: Option<&str>) -> Result<usize, ScriptError> {
    let word = word.ok_or_else(|| ScriptError::MissingArgument {
        line: line_number,
        argument: "index".to_string(),
    })?;
    word.parse().map_err(|_| ScriptError::InvalidIndex {
        line: line_number,
        value: word.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_type_with_and_without_character() {
        assert_eq!(
            parse_line(1, "type 2 7").unwrap(),
            Some(SlotEvent::entered(2, "7"))
        );
        assert_eq!(
            parse_line(1, "type 2").unwrap(),
            Some(SlotEvent::entered(2, ""))
        );
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(
            parse_line(1, "key 3 Backspace").unwrap(),
            Some(SlotEvent::backspace(3))
        );
        assert_eq!(
            parse_line(1, "key 0 Tab").unwrap(),
            Some(SlotEvent::KeyPressed {
                index: 0,
                key: Key::Other("Tab".to_string())
            })
        );
    }

    #[test]
    fn test_hash_is_a_character_in_argument_position() {
        assert_eq!(
            parse_line(1, "type 0 #").unwrap(),
            Some(SlotEvent::entered(0, "#"))
        );
        assert_eq!(
            parse_line(1, "type 0 # hash key").unwrap_err(),
            ScriptError::UnexpectedArgument {
                line: 1,
                value: "hash".to_string()
            }
        );
        assert_eq!(
            parse_line(1, "type 0 # #hash key").unwrap(),
            Some(SlotEvent::entered(0, "#"))
        );
        assert_eq!(
            parse_line(1, "set #12").unwrap(),
            Some(SlotEvent::SetCode {
                code: "#12".to_string()
            })
        );
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert_eq!(
            parse_line(5, "type 0 1 2").unwrap_err(),
            ScriptError::UnexpectedArgument {
                line: 5,
                value: "2".to_string()
            }
        );
        assert_eq!(
            parse_line(6, "clear now").unwrap_err(),
            ScriptError::UnexpectedArgument {
                line: 6,
                value: "now".to_string()
            }
        );
        assert!(parse_line(7, "key 1 Backspace Tab").is_err());
    }

    #[test]
    fn test_comments_and_blank_lines() {
        assert_eq!(parse_line(1, "").unwrap(), None);
        assert_eq!(parse_line(1, "   # note").unwrap(), None);
        assert_eq!(parse_line(1, "#type 0 1").unwrap(), None);
        assert_eq!(
            parse_line(1, "clear # reset").unwrap(),
            Some(SlotEvent::Clear)
        );
        assert_eq!(
            parse_line(1, "type 2 7 # note").unwrap(),
            Some(SlotEvent::entered(2, "7"))
        );
    }

    #[test]
    fn test_errors_carry_line_numbers() {
        assert_eq!(
            parse_line(4, "press 1").unwrap_err(),
            ScriptError::UnknownCommand {
                line: 4,
                command: "press".to_string()
            }
        );
        assert_eq!(
            parse_line(2, "type x 1").unwrap_err(),
            ScriptError::InvalidIndex {
                line: 2,
                value: "x".to_string()
            }
        );
        assert_eq!(
            parse_line(9, "key 1").unwrap_err(),
            ScriptError::MissingArgument {
                line: 9,
                argument: "key".to_string()
            }
        );
    }

    #[test]
    fn test_parse_script() {
        let events = parse_script("type 0 1\n\nset 42\nkey 1 backspace\n").unwrap();
        assert_eq!(
            events,
            vec![
                SlotEvent::entered(0, "1"),
                SlotEvent::SetCode {
                    code: "42".to_string()
                },
                SlotEvent::backspace(1),
            ]
        );

        let err = parse_script("type 0 1\nbogus\n").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCommand { line: 2, .. }));
    }
}
