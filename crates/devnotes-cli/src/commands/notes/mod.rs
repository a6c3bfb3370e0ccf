//! Note command handlers.

mod add;
mod delete;
mod duplicate;
mod edit;
mod export;
mod list;
mod pin;
mod search;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use duplicate::handle_duplicate;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use pin::handle_pin;
pub use search::handle_search;
pub use show::handle_show;

use crate::app::AppContext;
use crate::helpers::parse_output_format;
use crate::ui::UiContext;

/// Build the UI context for list-style output, honoring the configured default format.
fn list_ui(ctx: &AppContext, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
    let format = match format {
        Some(value) => Some(value),
        None if json => None,
        None => ctx.default_format()?,
    };
    let parsed = parse_output_format(format)?;
    if json && parsed.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    Ok(UiContext::for_command(ctx.cli(), json, parsed))
}
