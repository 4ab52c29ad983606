//! `rpal personas`: list the built-in persona catalog.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use readpal_core::persona::PersonaRegistry;
use readpal_types::persona::DEFAULT_PERSONA_KEY;

use crate::state::AppState;

/// Print the persona catalog as a table (or JSON with `--json`).
///
/// The reserved generic coach is listed first so users discover the
/// no-selection path.
pub fn list_personas(state: &AppState, json: bool) -> Result<()> {
    let coach = PersonaRegistry::neutral_coach();

    if json {
        let mut all = vec![&coach];
        all.extend(state.registry.iter());
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    table.add_row(vec![
        Cell::new(DEFAULT_PERSONA_KEY).fg(Color::Yellow),
        Cell::new(&coach.name).fg(Color::Cyan),
        Cell::new(&coach.description),
    ]);

    for persona in state.registry.iter() {
        let desc = truncate(&persona.description, 70);

        table.add_row(vec![
            Cell::new(&persona.key).fg(Color::White),
            Cell::new(&persona.name).fg(Color::Cyan),
            Cell::new(desc),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} persona{}. Start chatting with: {}",
        style(state.registry.len() + 1).bold(),
        if state.registry.is_empty() { "" } else { "s" },
        style("rpal chat --persona <key>").yellow()
    );
    println!();

    Ok(())
}

/// Cap a cell at `max` characters, counting by char, not byte.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
