//! Host Line Commands
//!
//! Parses one line of terminal input into a command for the analysis panel.
//! Lines starting with `:` are directives; anything else is query text for
//! the active input mode.

use std::str::FromStr;

use thiserror::Error;

use legal_lens_client::{ContactSubmission, InquiryType};
use legal_lens_core::InputMode;

/// One parsed line of terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// `:mode <text|pasted|url>`
    Mode(InputMode),
    /// `:reset`
    Reset,
    /// `:quit`
    Quit,
    /// `:contact name|email|inquiry|message[|company]`
    Contact(ContactSubmission),
    /// Any other line: fill the active buffer and submit it
    Submit(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostParseError {
    #[error("Unknown command: :{0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    InvalidArgument(String),
}

const MODE_USAGE: &str = ":mode <text|pasted|url>";
const CONTACT_USAGE: &str = ":contact name|email|inquiry|message[|company]";

impl FromStr for HostCommand {
    type Err = HostParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let Some(directive) = line.trim_start().strip_prefix(':') else {
            return Ok(HostCommand::Submit(line.to_string()));
        };

        let (name, rest) = match directive.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (directive.trim(), ""),
        };

        match name {
            "mode" => {
                if rest.is_empty() {
                    return Err(HostParseError::Usage(MODE_USAGE));
                }
                rest.parse::<InputMode>()
                    .map(HostCommand::Mode)
                    .map_err(HostParseError::InvalidArgument)
            }
            "reset" => Ok(HostCommand::Reset),
            "quit" | "q" => Ok(HostCommand::Quit),
            "contact" => parse_contact(rest).map(HostCommand::Contact),
            other => Err(HostParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_contact(args: &str) -> Result<ContactSubmission, HostParseError> {
    let fields: Vec<&str> = args.split('|').map(str::trim).collect();
    if !(4..=5).contains(&fields.len()) {
        return Err(HostParseError::Usage(CONTACT_USAGE));
    }

    let inquiry_type = fields[2]
        .parse::<InquiryType>()
        .map_err(HostParseError::InvalidArgument)?;

    Ok(ContactSubmission {
        name: fields[0].to_string(),
        email: fields[1].to_string(),
        company: fields.get(4).map(|c| c.to_string()).unwrap_or_default(),
        inquiry_type: Some(inquiry_type),
        message: fields[3].to_string(),
    })
}
