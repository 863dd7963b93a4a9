//! Command dispatch and handler modules.

mod check;
mod sorted;
mod summary;
mod tree;
mod watch;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Tree {
            report,
            depth,
            format,
        } => tree::exec(&report, depth, &format),
        Command::Sorted { report, format } => sorted::exec(&report, &format),
        Command::Summary { report } => summary::exec(&report),
        Command::Check { report } => check::exec(&report),
        Command::Watch { report, view } => watch::exec(&report, &view, cli.verbose).await,
    }
}
