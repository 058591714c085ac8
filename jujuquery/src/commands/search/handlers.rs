use super::*;

/// Handle `juju-search`
pub async fn handle_search(ctx: &AppContext, query: &str) {
    match search(ctx, query).await {
        Ok(report) => match format::format_output(&report, ctx.format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                format::error(ctx, &format!("Error formatting output: {}", e));
                std::process::exit(1);
            }
        },
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}
