use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use devnotes_core::VERSION;

/// DevNotes - quick local notes you can pin, search and export
#[derive(Parser)]
#[command(name = "devnotes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the notes store file
    #[arg(short, long, global = true, env = "DEVNOTES_PATH")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the notes store should live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Note content (read from stdin or prompted when omitted)
    #[arg(value_name = "CONTENT")]
    pub content: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New content (read from stdin or prompted when omitted)
    #[arg(value_name = "CONTENT")]
    pub content: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for commands that only take a note ID
#[derive(Args)]
pub struct IdArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (csv, json)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Write to a file instead of stdout. Without a value, or when PATH is a
    /// directory, the file is named notes.csv (notes.json for json)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub output: Option<Option<String>>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at a notes store
    Init(InitArgs),

    /// Add a new note
    Add(AddArgs),

    /// Replace the content of a note
    Edit(EditArgs),

    /// Pin or unpin a note
    Pin(IdArgs),

    /// Delete a note
    Delete(IdArgs),

    /// Copy a note into a new, unpinned note
    Duplicate(IdArgs),

    /// List notes, pinned first
    List(ListArgs),

    /// Search note content
    Search(SearchArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Export all notes (csv or json)
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
