//! `hpyconf plan` command

use std::path::Path;

use anyhow::Result;

use crate::cli::PlanArgs;
use hpyconf::core::Implementation;
use hpyconf::plan::BuildPlan;
use hpyconf::util::config::load_config;
use hpyconf::util::context::resolve_root;
use hpyconf::util::fs::write_string;

pub fn execute(root: &Path, args: PlanArgs) -> Result<()> {
    let root = resolve_root(root);
    let config = load_config(&root);

    // Implementation: CLI overrides config, otherwise probe the interpreter
    let implementation = match args.implementation.or(config.plan.implementation) {
        Some(name) => Implementation::from_name(&name),
        None => {
            let python = args
                .python
                .or(config.plan.python)
                .unwrap_or_else(|| "python3".to_string());
            Implementation::detect(&python)?
        }
    };

    let plan = BuildPlan::from_env(&implementation);
    tracing::debug!(
        "planned {} extension(s) for implementation `{}`",
        plan.extension_count(),
        implementation
    );

    let json = plan.to_json(args.pretty)?;
    match args.output {
        Some(path) => {
            write_string(&path, &json)?;
            println!("wrote build plan to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
