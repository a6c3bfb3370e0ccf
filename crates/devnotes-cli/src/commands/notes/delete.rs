use crate::app::AppContext;
use crate::cli::IdArgs;
use crate::ui::{badge, Badge, UiContext};

/// Delete is idempotent: an unknown id is reported but is not an error.
pub fn handle_delete(ctx: &AppContext, args: &IdArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let removed = store.delete(&args.id)?;

    if !ctx.quiet() {
        let ui = UiContext::for_command(ctx.cli(), false, None);
        if removed {
            println!("{}", badge(&ui, Badge::Ok, &format!("Deleted note {}", args.id)));
        } else {
            println!(
                "{}",
                badge(
                    &ui,
                    Badge::Warn,
                    &format!("No note with id \"{}\"; nothing deleted", args.id)
                )
            );
        }
    }
    Ok(())
}
