use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::print_note_list;

use super::list_ui;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui = list_ui(ctx, args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    print_note_list(&ui, &store.display(), "list", None, ctx.quiet())
}
