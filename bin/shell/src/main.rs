//! Quill Shell Binary
//!
//! Runs an interactive shell against a fresh in-memory quill instance.
//! Nothing is persisted: members, posts and tokens die with the process.

mod args;
mod command;
mod shell;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    quill_core::log(args.level()).map_err(|e| anyhow::anyhow!("{}", e))?;
    let quill = quill_service::Quill::new(args.config()?);
    shell::Shell::from(quill).run()
}
