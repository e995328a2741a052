// UI layer: interactive prompts via `dialoguer` for the two graph
// fields that may be omitted from the command line. The retry loop
// lives here, at the console boundary; the validation it leans on
// (`resolve_color`) is pure and tested separately.

use anyhow::Result;
use dialoguer::Input;

use crate::input::{resolve_color, COLOR_ALIASES};

/// Source of the unit and color answers for `create_graph`. The
/// console implementation below asks the user; tests supply scripted
/// answers instead.
pub trait GraphPrompter {
    fn unit(&mut self) -> Result<String>;
    /// Must return a canonical color token.
    fn color(&mut self) -> Result<String>;
}

/// Prompts on the terminal, re-asking for the color until it resolves.
pub struct ConsolePrompter;

impl GraphPrompter for ConsolePrompter {
    fn unit(&mut self) -> Result<String> {
        let unit: String = Input::new()
            .with_prompt("Pick a unit for your graph e.g commit, kilogram, calory, hour")
            .interact_text()?;
        Ok(unit)
    }

    fn color(&mut self) -> Result<String> {
        loop {
            let raw: String = Input::new()
                .with_prompt(format!("Pick a color from the list [{}]", color_menu()))
                .interact_text()?;
            match resolve_color(&raw) {
                Ok(color) => return Ok(color.to_string()),
                Err(err) => println!("{err}"),
            }
        }
    }
}

/// "shibafu (green), momiji (red), ..." for the color prompt.
fn color_menu() -> String {
    COLOR_ALIASES
        .iter()
        .map(|(alias, canonical)| format!("{canonical} ({alias})"))
        .collect::<Vec<_>>()
        .join(", ")
}
