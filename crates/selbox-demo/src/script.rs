#![forbid(unsafe_code)]

//! Input script parsing.
//!
//! A script is whitespace-separated tokens, each one input event:
//!
//! | Token         | Event                                   |
//! |---------------|-----------------------------------------|
//! | `tab`         | Tab                                     |
//! | `shift-tab`   | Shift+Tab                               |
//! | `enter`       | Enter                                   |
//! | `space`       | Space                                   |
//! | `up` / `down` | arrow keys                              |
//! | `esc`         | Escape                                  |
//! | `click`       | left click on the container             |
//! | `option:N`    | left click on option `N` (0-based)      |
//! | `hover:N`     | pointer moved onto option `N`           |
//! | `badge:VALUE` | left click on the remove mark of VALUE  |
//! | `clear`       | left click on the clear button          |
//! | `blur`        | the host lost focus                     |

use selbox::{
    Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind, OptionValue,
    SelectTarget,
};
use std::fmt;

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(KeyCode, Modifiers),
    Click(SelectTarget),
    Hover(usize),
    Blur,
}

impl Step {
    /// The event to dispatch, plus the pointer target for mouse steps.
    pub fn event(&self) -> (Event, Option<SelectTarget>) {
        match self {
            Self::Key(code, modifiers) => (
                Event::Key(KeyEvent::new(*code).with_modifiers(*modifiers)),
                None,
            ),
            Self::Click(target) => (
                Event::Mouse(MouseEvent::new(
                    MouseEventKind::Down(MouseButton::Left),
                    0,
                    0,
                )),
                Some(target.clone()),
            ),
            Self::Hover(index) => (
                Event::Mouse(MouseEvent::new(MouseEventKind::Moved, 0, 0)),
                Some(SelectTarget::Option(*index)),
            ),
            Self::Blur => (Event::Focus(false), None),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(KeyCode::Tab, m) if m.contains(Modifiers::SHIFT) => f.write_str("shift-tab"),
            Self::Key(KeyCode::Tab, _) => f.write_str("tab"),
            Self::Key(KeyCode::Enter, _) => f.write_str("enter"),
            Self::Key(KeyCode::Char(' '), _) => f.write_str("space"),
            Self::Key(KeyCode::Up, _) => f.write_str("up"),
            Self::Key(KeyCode::Down, _) => f.write_str("down"),
            Self::Key(KeyCode::Escape, _) => f.write_str("esc"),
            Self::Key(code, _) => write!(f, "{code:?}"),
            Self::Click(SelectTarget::Container) => f.write_str("click"),
            Self::Click(SelectTarget::Option(index)) => write!(f, "option:{index}"),
            Self::Click(SelectTarget::Badge(value)) => write!(f, "badge:{value}"),
            Self::Click(SelectTarget::ClearButton) => f.write_str("clear"),
            Self::Hover(index) => write!(f, "hover:{index}"),
            Self::Blur => f.write_str("blur"),
        }
    }
}

/// Script parse failure. Positions are 1-based token numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    UnknownToken { position: usize, token: String },
    BadIndex { position: usize, token: String },
    MissingValue { position: usize, token: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken { position, token } => {
                write!(f, "token {position}: unknown input '{token}'")
            }
            Self::BadIndex { position, token } => {
                write!(f, "token {position}: '{token}' needs a non-negative index")
            }
            Self::MissingValue { position, token } => {
                write!(f, "token {position}: '{token}' needs a value")
            }
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parse a whole script.
pub fn parse(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| parse_token(i + 1, token))
        .collect()
}

fn parse_token(position: usize, token: &str) -> Result<Step, ScriptError> {
    let key = |code: KeyCode| -> Result<Step, ScriptError> {
        Ok(Step::Key(code, Modifiers::NONE))
    };
    match token {
        "tab" => key(KeyCode::Tab),
        "shift-tab" => Ok(Step::Key(KeyCode::Tab, Modifiers::SHIFT)),
        "enter" => key(KeyCode::Enter),
        "space" => key(KeyCode::Char(' ')),
        "up" => key(KeyCode::Up),
        "down" => key(KeyCode::Down),
        "esc" => key(KeyCode::Escape),
        "click" => Ok(Step::Click(SelectTarget::Container)),
        "clear" => Ok(Step::Click(SelectTarget::ClearButton)),
        "blur" => Ok(Step::Blur),
        _ => {
            let Some((name, arg)) = token.split_once(':') else {
                return Err(ScriptError::UnknownToken {
                    position,
                    token: token.to_owned(),
                });
            };
            let index = || {
                arg.parse::<usize>().map_err(|_| ScriptError::BadIndex {
                    position,
                    token: token.to_owned(),
                })
            };
            match name {
                "option" => Ok(Step::Click(SelectTarget::Option(index()?))),
                "hover" => Ok(Step::Hover(index()?)),
                "badge" if arg.is_empty() => Err(ScriptError::MissingValue {
                    position,
                    token: token.to_owned(),
                }),
                "badge" => Ok(Step::Click(SelectTarget::Badge(parse_value(arg)))),
                _ => Err(ScriptError::UnknownToken {
                    position,
                    token: token.to_owned(),
                }),
            }
        }
    }
}

/// Integers become numeric keys, anything else a text key.
fn parse_value(arg: &str) -> OptionValue {
    arg.parse::<i64>()
        .map(OptionValue::from)
        .unwrap_or_else(|_| OptionValue::from(arg))
}
