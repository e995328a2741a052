// Command dispatcher: maps a parsed action plus flags to the right
// validator/builder pair, hands the resulting request to the transport
// and the response to the reporter. Stateless across calls; every
// invocation is independent.

use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use thiserror::Error;

use crate::api::Transport;
use crate::cli::Cli;
use crate::input::{normalize_date, resolve_color};
use crate::report::{self, Outcome};
use crate::request::{Credentials, Endpoints, GraphSpec, PixelEntry, RequestSpec, DEFAULT_GRAPH_NAME};
use crate::ui::GraphPrompter;

/// The five routable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateUser,
    CreateGraph,
    AddPixel,
    DeleteGraph,
    GetUser,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A flag the chosen action needs was absent or empty. No request
    /// is issued.
    #[error("the --{0} argument is required for this action")]
    MissingArgument(&'static str),
    /// The positional action is not one of the known names.
    #[error("invalid action {0:?}: choose from create_user, create_graph, add_pixel, delete_graph, get_user")]
    InvalidAction(String),
}

impl FromStr for Action {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_user" => Ok(Action::CreateUser),
            "create_graph" => Ok(Action::CreateGraph),
            "add_pixel" => Ok(Action::AddPixel),
            "delete_graph" => Ok(Action::DeleteGraph),
            "get_user" => Ok(Action::GetUser),
            other => Err(CliError::InvalidAction(other.to_string())),
        }
    }
}

/// Run one invocation end to end: validate, build, execute, interpret.
/// `today` is injected so date defaulting stays testable, and the
/// prompter covers the interactive unit/color questions for
/// `create_graph` when the flags are omitted.
pub fn run(
    cli: &Cli,
    endpoints: &Endpoints,
    transport: &dyn Transport,
    prompter: &mut dyn GraphPrompter,
    today: NaiveDate,
) -> Result<Outcome> {
    let action = Action::from_str(&cli.action)?;
    let request = prepare(action, cli, endpoints, prompter, today)?;
    let response = transport.execute(&request)?;
    let outcome = report::interpret(action, &request.url, &response)?;
    Ok(outcome)
}

/// Validation and request construction; no I/O beyond the prompter.
fn prepare(
    action: Action,
    cli: &Cli,
    endpoints: &Endpoints,
    prompter: &mut dyn GraphPrompter,
    today: NaiveDate,
) -> Result<RequestSpec> {
    let creds = Credentials {
        username: cli.username.clone(),
        token: cli.token.clone(),
    };

    match action {
        Action::CreateUser => Ok(endpoints.create_user(&creds)),
        Action::GetUser => Ok(endpoints.get_user(&creds.username)),
        Action::CreateGraph => {
            let graph_id = require(&cli.graph_id, "graph_id")?;
            let unit = match &cli.unit {
                Some(unit) => unit.clone(),
                None => prompter.unit()?,
            };
            // A color given on the command line must be valid as-is;
            // only the interactive path re-prompts.
            let color = match &cli.color {
                Some(raw) => resolve_color(raw)?.to_string(),
                None => prompter.color()?,
            };
            let graph = GraphSpec {
                id: graph_id,
                name: cli.name.clone().unwrap_or_else(|| DEFAULT_GRAPH_NAME.to_string()),
                unit,
                color,
            };
            Ok(endpoints.create_graph(&creds, &graph))
        }
        Action::AddPixel => {
            // quantity and date are checked before graph_id to match
            // the argument-error ordering users see.
            let quantity = require(&cli.quantity, "quantity")?;
            let raw_date = require(&cli.date, "date")?;
            let graph_id = require(&cli.graph_id, "graph_id")?;
            let entry = PixelEntry {
                date: normalize_date(&raw_date, today)?,
                quantity,
            };
            Ok(endpoints.add_pixel(&creds, &graph_id, &entry))
        }
        Action::DeleteGraph => {
            let graph_id = require(&cli.graph_id, "graph_id")?;
            Ok(endpoints.delete_graph(&creds, &graph_id))
        }
    }
}

fn require(value: &Option<String>, flag: &'static str) -> Result<String, CliError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.clone()),
        _ => Err(CliError::MissingArgument(flag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_actions_parse() {
        assert_eq!("create_user".parse::<Action>().unwrap(), Action::CreateUser);
        assert_eq!("add_pixel".parse::<Action>().unwrap(), Action::AddPixel);
        assert_eq!("get_user".parse::<Action>().unwrap(), Action::GetUser);
    }

    #[test]
    fn unknown_action_is_invalid() {
        assert_eq!(
            "drop_table".parse::<Action>(),
            Err(CliError::InvalidAction("drop_table".into()))
        );
    }

    #[test]
    fn empty_flag_value_counts_as_missing() {
        assert_eq!(
            require(&Some(String::new()), "date"),
            Err(CliError::MissingArgument("date"))
        );
        assert_eq!(require(&None, "date"), Err(CliError::MissingArgument("date")));
        assert_eq!(require(&Some("x".into()), "date").unwrap(), "x");
    }
}
