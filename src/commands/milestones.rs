use colored::*;

use crate::cli_context::CliContext;
use crate::client::IssueTracker;
use crate::error::IssueResult;
use crate::formatting::format_milestones;
use crate::models::sort_by_due_date;

pub async fn handle_milestones(context: &mut CliContext) -> Result<(), Box<dyn std::error::Error>> {
    handle_milestones_impl(context).await.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_milestones_impl(context: &mut CliContext) -> IssueResult<()> {
    let client = context.client()?;

    let mut milestones = client.list_open_milestones().await?;
    if milestones.is_empty() {
        eprintln!("{}", "No open milestones.".dimmed());
        return Ok(());
    }

    sort_by_due_date(&mut milestones);
    print!("{}", format_milestones(&milestones));
    Ok(())
}
