//! `hpyconf stamp` command

use std::path::Path;

use anyhow::Result;

use hpyconf::stamp;
use hpyconf::util::config::load_config;
use hpyconf::util::context::resolve_root;

pub fn execute(root: &Path) -> Result<()> {
    let root = resolve_root(root);
    let config = load_config(&root);
    let layout = config.layout();

    let outcome = stamp::materialize(&root, &layout)?;

    if !outcome.info.revision_known() {
        tracing::warn!("revision metadata unavailable; artifacts carry the sentinel value");
    }

    println!(
        "stamped version {} (revision {})",
        outcome.info.version, outcome.info.git_revision
    );
    println!("  wrote {}", outcome.header.display());
    println!("  wrote {}", outcome.module.display());

    Ok(())
}
