use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::Cli;
use crate::config::render_config;

pub fn handle_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "zkvault", &mut std::io::stdout());
    Ok(())
}

pub fn handle_config(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if !ctx.quiet() {
        let state = if path.exists() { "" } else { " (not found, using defaults)" };
        println!("# {}{}", path.display(), state);
    }
    print!("{}", render_config(ctx.config()?)?);
    Ok(())
}
