//! DevNotes CLI - quick local notes you can pin, search and export
//!
//! This is the command-line front end for DevNotes. Each subcommand opens
//! the note store, performs one operation and exits.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use log::debug;

use app::AppContext;
use cli::{Cli, Commands};
use commands::{init, misc, notes};
use errors::CliError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = AppContext::new(&cli);
    match dispatch(&ctx) {
        Ok(()) => Ok(()),
        Err(err) => match CliError::classify(&err) {
            Some(cli_err) => cli_err.exit(),
            None => Err(err),
        },
    }
}

fn dispatch(ctx: &AppContext) -> anyhow::Result<()> {
    let command = &ctx.cli().command;
    debug!("event=cli_dispatch command={}", command_name(command));
    match command {
        Commands::Init(args) => init::handle_init(ctx, args),
        Commands::Add(args) => notes::handle_add(ctx, args),
        Commands::Edit(args) => notes::handle_edit(ctx, args),
        Commands::Pin(args) => notes::handle_pin(ctx, args),
        Commands::Delete(args) => notes::handle_delete(ctx, args),
        Commands::Duplicate(args) => notes::handle_duplicate(ctx, args),
        Commands::List(args) => notes::handle_list(ctx, args),
        Commands::Search(args) => notes::handle_search(ctx, args),
        Commands::Show(args) => notes::handle_show(ctx, args),
        Commands::Export(args) => notes::handle_export(ctx, args),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init(_) => "init",
        Commands::Add(_) => "add",
        Commands::Edit(_) => "edit",
        Commands::Pin(_) => "pin",
        Commands::Delete(_) => "delete",
        Commands::Duplicate(_) => "duplicate",
        Commands::List(_) => "list",
        Commands::Search(_) => "search",
        Commands::Show(_) => "show",
        Commands::Export(_) => "export",
        Commands::Completions(_) => "completions",
    }
}
