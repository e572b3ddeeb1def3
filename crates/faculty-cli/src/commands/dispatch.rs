use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Summary(args) => commands::summary::handle(&args, ctx, flags).await,
        Commands::Performance(args) => commands::performance::handle(&args, ctx, flags).await,
        Commands::Trends(args) => commands::trends::handle(&args, ctx, flags).await,
        Commands::Overdue(args) => commands::overdue::handle(&args, ctx, flags).await,
        Commands::Validate(args) => commands::validate::handle(&args, flags),
    }
}
