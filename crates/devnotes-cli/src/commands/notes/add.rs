use log::info;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::read_note_content;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let content = read_note_content(args.content.clone(), args.no_input, None)?;

    let mut store = ctx.open_store()?;
    let note = store.add(content)?;
    info!("event=cli_add id={}", note.id());

    if ctx.quiet() {
        println!("{}", note.id());
    } else {
        println!("Added note {}", note.id());
    }
    Ok(())
}
