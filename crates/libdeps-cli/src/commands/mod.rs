//! Command dispatch and handler modules.

mod check;
mod resolve;
mod tree;
mod versions;

use libdeps_core::config::{CandidateOrder, GlobalConfig};
use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = GlobalConfig::load()?;
    tracing::debug!("using manifest {}", cli.manifest.display());

    match cli.command {
        Command::Resolve {
            root,
            json,
            descending,
        } => resolve::exec(&cli.manifest, &root, json, descending, &config),
        Command::Tree {
            root,
            depth,
            why,
            inverted,
            descending,
        } => tree::exec(&cli.manifest, &root, depth, why, inverted, descending, &config),
        Command::Versions { name } => versions::exec(&cli.manifest, &name),
        Command::Check { descending } => check::exec(&cli.manifest, descending, &config),
    }
}

/// `--descending` wins over the configured order.
fn candidate_order(descending: bool, config: &GlobalConfig) -> CandidateOrder {
    if descending {
        CandidateOrder::Descending
    } else {
        config.resolve.candidate_order
    }
}
