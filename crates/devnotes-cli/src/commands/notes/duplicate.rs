use crate::app::AppContext;
use crate::cli::IdArgs;
use crate::errors::CliError;

pub fn handle_duplicate(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let copy = store
        .duplicate(&args.id)?
        .ok_or_else(|| CliError::note_not_found(&args.id))?;

    if ctx.quiet() {
        println!("{}", copy.id());
    } else {
        println!("Duplicated note {} as {}", args.id, copy.id());
    }
    Ok(())
}
