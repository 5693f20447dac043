//! Interactive terminal calculator.
//!
//! A line-edited front-end over the calculator core. Fields are edited
//! with `set`, solvers run by name, and a bare Enter repeats the
//! default action for whichever group you touched last - the terminal
//! analogue of pressing Enter inside a form field.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! # Commands
//!
//! - `set <field> <value>` - edit a field (flow, concentration,
//!   massloss, area, intensity, runoff, coeff)
//! - `show` - list all fields
//! - `massloss` / `concentration` / `flow` - soil solvers
//! - `runoff` / `area` / `intensity` - runoff solvers
//! - `clear [soil|runoff]` - blank a group (or everything) and hide its
//!   result panel
//! - `example` - load the worked-example values
//! - `help` - show available commands
//! - `quit` - exit

use hydrocalc_core::{
    default_action, dispatch, Action, FieldId, FieldState, Message, Panel, ResultPresenter,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Prints panel updates straight to the terminal, errors flagged.
struct TerminalPresenter;

impl ResultPresenter for TerminalPresenter {
    fn show(&mut self, panel: Panel, message: &Message) {
        let label = match panel {
            Panel::Soil => "soil",
            Panel::Runoff => "runoff",
        };
        if message.is_error {
            println!("[{label}] error: {}", message.headline);
        } else {
            println!("[{label}] {}", message.headline);
            if let Some(detail) = &message.detail {
                println!("         {detail}");
            }
        }
    }

    fn hide(&mut self, panel: Panel) {
        let label = match panel {
            Panel::Soil => "soil",
            Panel::Runoff => "runoff",
        };
        println!("[{label}] cleared");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Soil-Loss & Rainfall-Runoff Calculator");
    println!("Type 'help' for available commands.\n");

    let mut fields = FieldState::new();
    let mut presenter = TerminalPresenter;
    let mut last_touched: Option<FieldId> = None;

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {e}");
            return;
        }
    };

    loop {
        let readline = rl.readline("calc> ");
        match readline {
            Ok(line) => {
                let parts: Vec<&str> = line.split_whitespace().collect();

                if parts.is_empty() {
                    // Bare Enter: default action for the group last edited
                    match last_touched {
                        Some(id) => dispatch(default_action(id), &mut fields, &mut presenter),
                        None => println!("Nothing to do yet - 'set' a field first."),
                    }
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match parts[0].to_lowercase().as_str() {
                    "set" => {
                        last_touched = set_field(&parts, &mut fields).or(last_touched);
                    }
                    "show" => show_fields(&fields),
                    "massloss" | "ml" => {
                        dispatch(Action::SolveMassLoss, &mut fields, &mut presenter);
                    }
                    "concentration" | "conc" => {
                        dispatch(Action::SolveConcentration, &mut fields, &mut presenter);
                    }
                    "flow" => dispatch(Action::SolveFlow, &mut fields, &mut presenter),
                    "runoff" => dispatch(Action::SolveRunoffVolume, &mut fields, &mut presenter),
                    "area" => dispatch(Action::SolveRequiredArea, &mut fields, &mut presenter),
                    "intensity" => dispatch(Action::SolveIntensity, &mut fields, &mut presenter),
                    "clear" => {
                        let action = match parts.get(1).copied() {
                            Some("soil") => Action::ClearSoil,
                            Some("runoff") => Action::ClearRunoff,
                            _ => Action::ClearAll,
                        };
                        dispatch(action, &mut fields, &mut presenter);
                    }
                    "example" | "ex" => {
                        dispatch(Action::LoadExample, &mut fields, &mut presenter);
                        show_fields(&fields);
                    }
                    "help" | "h" => print_help(),
                    "quit" | "exit" | "q" => break,
                    other => println!("Unknown command '{other}'. Type 'help' for commands."),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }
    }
}

/// Handle `set <field> <value>`; returns the edited field on success.
fn set_field(parts: &[&str], fields: &mut FieldState) -> Option<FieldId> {
    let (Some(name), Some(value)) = (parts.get(1), parts.get(2)) else {
        println!("Usage: set <field> <value>");
        return None;
    };
    let Some(id) = FieldId::from_name(&name.to_lowercase()) else {
        println!(
            "Unknown field '{name}'. Fields: flow, concentration, massloss, area, intensity, runoff, coeff"
        );
        return None;
    };
    fields.set_text(id, value);
    Some(id)
}

fn show_fields(fields: &FieldState) {
    for id in FieldId::ALL {
        let shown = if fields.is_blank(id) {
            "—"
        } else {
            fields.raw(id)
        };
        println!("  {:<13} {shown}", id.name());
    }
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> <value>  edit a field");
    println!("  show                 list all fields");
    println!("  massloss             mass loss from flow and concentration");
    println!("  concentration        concentration from flow and mass loss");
    println!("  flow                 flow from concentration and mass loss");
    println!("  runoff               runoff volume from area, intensity, coeff");
    println!("  area                 required area from runoff and intensity");
    println!("  intensity            rainfall intensity from runoff and area");
    println!("  clear [soil|runoff]  blank a group (default: everything)");
    println!("  example              load worked-example values");
    println!("  quit                 exit");
    println!();
    println!("A bare Enter solves the forward relation of the group you");
    println!("last edited (mass loss for soil fields, runoff volume for");
    println!("runoff fields).");
}
