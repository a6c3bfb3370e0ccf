use crate::app::AppContext;
use crate::cli::IdArgs;
use crate::errors::CliError;

pub fn handle_pin(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let fixed = store
        .toggle_fixed(&args.id)?
        .ok_or_else(|| CliError::note_not_found(&args.id))?;

    if !ctx.quiet() {
        let verb = if fixed { "Pinned" } else { "Unpinned" };
        println!("{} note {}", verb, args.id);
    }
    Ok(())
}
