// qualis/src/commands/inspect.rs
//
// USE CASE: Inspect a recipient file (columns, sample rows, detected mapping).

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Table};
use std::path::Path;

use qualis_core::infrastructure::config::load_project_config;

use super::{import_session, load_recipients};

pub async fn execute(project_dir: &Path, file: &Path, limit: usize) -> anyhow::Result<()> {
    let config = load_project_config(project_dir)?;
    let mut session = import_session(&config)?;
    load_recipients(&mut session, file).await?;

    let roster = session.roster();
    println!("\n🔍 Inspecting '{}'", file.display());
    println!("   Columns: [{}]", roster.columns().join(", "));

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("id").add_attribute(Attribute::Bold)];
    header.extend(
        roster
            .columns()
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for row in roster.rows().iter().take(limit) {
        let mut cells = vec![Cell::new(row.id)];
        cells.extend(roster.columns().iter().map(|c| match row.get(c) {
            Some(value) => Cell::new(value),
            None => Cell::new(""),
        }));
        table.add_row(cells);
    }
    println!("{table}");
    if roster.len() > limit {
        println!("   ... {} more rows", roster.len() - limit);
    }

    let mapping = session.mapping();
    println!("🧭 Mapping:");
    println!("   Name   ➜ {}", mapping.name_column);
    println!("   Course ➜ {}", mapping.course_column);
    println!(
        "   Date   ➜ {}",
        mapping.date_column.as_deref().unwrap_or("(template date)")
    );

    Ok(())
}
