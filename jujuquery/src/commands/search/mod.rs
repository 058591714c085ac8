use crate::context::{AppContext, VerbosityLevel};
use crate::format::{self, Formattable};
use libjujuquery::{Origin, SeriesBuckets};
use serde::Serialize;

pub mod handlers;

/// Outcome of one `juju-search` run
#[derive(Debug, Serialize)]
pub struct SearchReport {
    /// Filter as typed by the user
    pub query: String,
    /// Term sent to the charmstore
    pub term: String,
    /// Whether results came from an exact lookup or a text search
    pub origin: Origin,
    pub total_results: usize,
    pub buckets: SeriesBuckets,
}

impl Formattable for SearchReport {
    fn format_pretty(&self) -> String {
        self.buckets.render()
    }
}

/// Dispatch `query` and group the results by series.
pub async fn search(ctx: &AppContext, query: &str) -> Result<SearchReport, String> {
    format::print(
        ctx,
        VerbosityLevel::VeryVerbose,
        &format!("Using charmstore: {}", ctx.charmstore_url),
    );

    let client = ctx.query()?;
    let formatter = format::create_formatter(ctx);

    let spinner = formatter.spinner("Searching charmstore...");
    let context = match client.dispatch(query).await {
        Ok(context) => {
            formatter.finish_progress(
                spinner,
                &format!(
                    "Found {} result(s) for '{}'",
                    context.results().len(),
                    context.term()
                ),
            );
            context
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.to_string());
        }
    };

    let spinner = formatter.spinner("Fetching charm details...");
    let buckets = client.bucketize(Some(&context)).await;
    spinner.finish_and_clear();
    let buckets = buckets.map_err(|e| e.to_string())?;

    Ok(SearchReport {
        query: query.to_string(),
        term: context.term().to_string(),
        origin: context.origin(),
        total_results: buckets.len(),
        buckets,
    })
}
