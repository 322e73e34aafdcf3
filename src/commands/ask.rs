use crate::cli::QueryArgs;
use crate::config::Config;
use crate::core::processor::{Response, route};
use crate::utils::OutputStyle;
use crate::utils::error::AppResult;
use anyhow::Result;
use tracing::debug;

pub fn handle_ask_command(config: &Config, args: &QueryArgs) -> Result<()> {
    super::for_each_query(args.query_text(), |query| {
        let response = route(query);
        debug!(%query, "routed query");
        let text = render_for_display(&response, config.general.pretty_json)?;
        OutputStyle::print_response(&response, &text);
        Ok(())
    })
}

/// Router output, with payloads optionally indented
pub fn render_for_display(response: &Response, pretty_json: bool) -> AppResult<String> {
    match response {
        Response::Calculation(calculation) if pretty_json => calculation.to_json_pretty(),
        other => Ok(other.render()),
    }
}
