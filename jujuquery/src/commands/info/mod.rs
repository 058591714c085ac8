use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, Formattable};
use libjujuquery::{CharmInfo, CharmRef};

pub mod handlers;

impl Formattable for CharmInfo {
    fn format_pretty(&self) -> String {
        self.render()
    }
}

/// Look up a single charm and fetch its README.
pub async fn info(ctx: &AppContext, charm: &str) -> Result<CharmInfo, String> {
    let reference: CharmRef = charm.parse().map_err(|e: libjujuquery::QueryError| e.to_string())?;

    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Using charmstore: {}", ctx.charmstore_url),
    );

    let query = ctx.query()?;
    let formatter = format::create_formatter(ctx);

    let spinner = formatter.spinner(&format!("Fetching {}...", reference));
    let result: libjujuquery::Result<CharmInfo> = async {
        let entity = query.get(reference.as_str()).await?;
        query.info(Some(&entity)).await
    }
    .await;
    spinner.finish_and_clear();

    let info = result.map_err(|e| e.to_string())?;
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("{} {}", format::checkmark(ctx), info.id),
    );
    Ok(info)
}
