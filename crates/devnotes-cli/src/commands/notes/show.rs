use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::print_note;
use crate::ui::UiContext;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let note = store
        .get(&args.id)
        .ok_or_else(|| CliError::note_not_found(&args.id))?;

    let ui = UiContext::for_command(ctx.cli(), args.json, None);
    print_note(&ui, note)
}
