use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::read_note_content;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let existing = store
        .get(&args.id)
        .map(|note| note.content().to_string())
        .ok_or_else(|| CliError::note_not_found(&args.id))?;

    let content = read_note_content(args.content.clone(), args.no_input, Some(&existing))?;
    store.update(&args.id, content)?;

    if !ctx.quiet() {
        println!("Updated note {}", args.id);
    }
    Ok(())
}
