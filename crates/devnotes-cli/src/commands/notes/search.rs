use devnotes_core::project_for_display;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::print_note_list;

use super::list_ui;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui = list_ui(ctx, args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let matches = project_for_display(&store.search(&args.query));
    print_note_list(&ui, &matches, "search", Some(&args.query), ctx.quiet())
}
