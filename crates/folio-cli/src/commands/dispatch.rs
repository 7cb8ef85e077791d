use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Index(args) => super::index::handle(&args, ctx, flags).await,
        Commands::Show(args) => super::show::handle(&args, ctx, flags).await,
        Commands::Check(args) => super::check::handle(&args, ctx, flags).await,
    }
}
