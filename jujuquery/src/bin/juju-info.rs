use clap::Parser;
use jujuquery::commands::info::handlers::handle_info;
use jujuquery::context::{AppContext, GlobalArgs};
use jujuquery::format;

#[derive(Parser)]
#[command(name = "juju-info")]
#[command(about = "Juju info interface to charmstore", long_about = None)]
#[command(version)]
struct Cli {
    /// Charm identifier, e.g. cs:trusty/mysql
    charm: String,

    #[command(flatten)]
    global: GlobalArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::from_args(&cli.global);
    format::init_tracing(ctx.verbosity);

    handle_info(&ctx, &cli.charm).await;
}
