use crate::cli::QueryArgs;
use crate::core::processor::route;
use crate::utils::OutputStyle;
use anyhow::Result;
use tracing::debug;

pub fn handle_eval_command(args: &QueryArgs) -> Result<()> {
    super::for_each_query(args.query_text(), |query| {
        let response = route(query);
        let answer = response.answer();
        debug!(%query, %answer, "evaluated query");
        OutputStyle::print_response(&response, &answer);
        Ok(())
    })
}
