use clap::Parser;
use jujuquery::commands::search::handlers::handle_search;
use jujuquery::context::{AppContext, GlobalArgs};
use jujuquery::format;

#[derive(Parser)]
#[command(name = "juju-search")]
#[command(about = "Juju search interface to charmstore", long_about = None)]
#[command(version)]
struct Cli {
    /// Charm name or filter; `~` and `*` search the whole charmstore
    charm: String,

    #[command(flatten)]
    global: GlobalArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::from_args(&cli.global);
    format::init_tracing(ctx.verbosity);

    handle_search(&ctx, &cli.charm).await;
}
