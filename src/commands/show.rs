use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::{IssueError, IssueResult};
use crate::fetch::fetch_issue_detail;
use crate::formatting::issue_to_json;
use crate::logging::log_info;
use crate::models::parse_issue_number;
use crate::timeline::render_timeline;

pub async fn handle_show(context: &mut CliContext, matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_show_impl(context, matches).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_show_impl(context: &mut CliContext, matches: &ArgMatches) -> IssueResult<()> {
    let arg = matches
        .get_one::<String>("number")
        .ok_or_else(|| IssueError::InvalidInput("Issue number is required".to_string()))?;
    let number = parse_issue_number(arg)
        .ok_or_else(|| IssueError::InvalidInput(format!("invalid issue number {:?}", arg)))?;

    let client = context.client()?;
    let cache = context.cache();
    log_info(&format!("show {}#{}", context.project(), number));

    if context.json() {
        let issue = fetch_issue_detail(client.as_ref(), &cache, number).await?;
        println!("{}", issue_to_json(&issue, context.project())?);
        return Ok(());
    }

    let view = render_timeline(client.as_ref(), &cache, number, context.render_options()).await?;
    print!("{}", view);
    Ok(())
}
