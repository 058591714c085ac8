use super::*;

/// Handle `juju-info`
pub async fn handle_info(ctx: &AppContext, charm: &str) {
    match info(ctx, charm).await {
        Ok(info) => match format::format_output(&info, ctx.format) {
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
