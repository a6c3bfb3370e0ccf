//! Text and table output formatting for notes.

use devnotes_core::Note;

use crate::constants::SUMMARY_MAX;
use crate::ui::theme::{styled, styles, PIN};
use crate::ui::{header, hint, kv, simple_table, summary, Column, UiContext};

use super::json::{note_json, notes_json};

/// Print notes in the order given (callers pass the display projection).
pub fn print_note_list(
    ctx: &UiContext,
    notes: &[Note],
    command: &str,
    context: Option<&str>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&notes_json(notes))?);
        return Ok(());
    }

    if notes.is_empty() {
        if !quiet {
            println!("No notes found.");
            if ctx.mode.is_pretty() {
                println!("{}", hint(ctx, "devnotes add \"your note\""));
            }
        }
        return Ok(());
    }

    if ctx.mode.is_pretty() && !quiet {
        println!("{}", header(ctx, command, context));
        println!();
    }

    let columns = [Column::new(""), Column::new("ID"), Column::new("Content")];
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| {
            vec![
                pin_marker(ctx, note),
                note.id().to_string(),
                summary(note.content(), SUMMARY_MAX),
            ]
        })
        .collect();
    println!("{}", simple_table(ctx, &columns, &rows));
    Ok(())
}

/// Print a single note.
pub fn print_note(ctx: &UiContext, note: &Note) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&note_json(note))?);
        return Ok(());
    }

    let pinned = if note.is_fixed() { "yes" } else { "no" };
    println!("{}", kv(ctx, "ID", note.id()));
    println!("{}", kv(ctx, "Pinned", pinned));
    println!();
    println!("{}", note.content());
    Ok(())
}

fn pin_marker(ctx: &UiContext, note: &Note) -> String {
    if !note.is_fixed() {
        return if ctx.mode.is_pretty() {
            String::new()
        } else {
            "-".to_string()
        };
    }
    if ctx.mode.is_pretty() {
        styled(PIN.get(ctx.unicode), styles::pin(), ctx.color)
    } else {
        PIN.ascii.to_string()
    }
}
