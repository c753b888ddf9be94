use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;

use issue_cli::cli_context::{CliContext, CliContextBuilder};
use issue_cli::commands::{handle_bulk, handle_milestones, handle_search, handle_show};
use issue_cli::error::IssueResult;
use issue_cli::logging::{init_logging, log_error, log_panic_info};

fn build_cli() -> Command {
    Command::new("issue")
        .about("Search, read and bulk-inspect GitHub issues from the command line")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("project")
                .short('p')
                .long("project")
                .value_name("OWNER/REPO")
                .help("GitHub project (default golang/go)")
                .global(true)
        )
        .arg(
            Arg::new("api")
                .long("api")
                .value_name("URL")
                .help("GitHub API root")
                .global(true)
        )
        .arg(
            Arg::new("token")
                .long("token")
                .value_name("FILE")
                .help("Read the GitHub token from FILE")
                .global(true)
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print issues as JSON")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .help("Print bodies verbatim, without wrapping")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .arg(
            Arg::new("wrap")
                .short('w')
                .long("wrap")
                .value_name("COLS")
                .help("Wrap bodies at COLS characters")
                .value_parser(clap::value_parser!(usize))
                .global(true)
        )
        .arg(
            Arg::new("interactive")
                .short('a')
                .long("interactive")
                .help("Use the wider interactive wrap width")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("search")
                .about("List open issues matching a query")
                .long_about(
                    "List open issues matching a query.\n\n\
                     Queries made only of milestone:, no:milestone, state:, assignee:, author:, \
                     mentions:, label: and sort: terms use the issue listing; anything else \
                     goes to GitHub search."
                )
                .arg(
                    Arg::new("query")
                        .help("Search query, e.g. milestone:Go1.5 label:NeedsFix")
                        .required(true)
                        .num_args(1..)
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_name("ORDER")
                        .help("Sort by title (default) or number")
                        .value_parser(["title", "number"])
                )
        )
        .subcommand(
            Command::new("show")
                .about("Show an issue with its comments and events")
                .arg(
                    Arg::new("number")
                        .help("Issue number, e.g. 1234 or #1234")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("bulk")
                .about("Preview the shared metadata of several issues")
                .arg(
                    Arg::new("items")
                        .help("Issue numbers, or a search query")
                        .required(true)
                        .num_args(1..)
                )
        )
        .subcommand(
            Command::new("milestones")
                .about("List open milestones by due date")
        )
}

fn build_context(matches: &ArgMatches) -> IssueResult<CliContext> {
    let mut builder = CliContextBuilder::new()
        .interactive(matches.get_flag("interactive"))
        .raw(matches.get_flag("raw"))
        .json(matches.get_flag("json"));

    if let Some(project) = matches.get_one::<String>("project") {
        builder = builder.with_project(project.as_str());
    }
    if let Some(api) = matches.get_one::<String>("api") {
        builder = builder.with_api_root(api.as_str());
    }
    if let Some(token_file) = matches.get_one::<String>("token") {
        builder = builder.with_token_file(token_file.as_str());
    }
    if let Some(width) = matches.get_one::<usize>("wrap") {
        builder = builder.wrap_width(*width);
    }

    builder.build()
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} could not initialize logging: {}", "Warning:".yellow(), e);
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let matches = build_cli().get_matches();

    let mut context = match build_context(&matches) {
        Ok(context) => context,
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("{} {}", "Error:".red(), e);
            process::exit(1);
        }
    };

    let result = match matches.subcommand() {
        Some(("search", sub_matches)) => handle_search(&mut context, sub_matches).await,
        Some(("show", sub_matches)) => handle_show(&mut context, sub_matches).await,
        Some(("bulk", sub_matches)) => handle_bulk(&mut context, sub_matches).await,
        Some(("milestones", _)) => handle_milestones(&mut context).await,
        _ => {
            eprintln!("Unknown command. Use 'issue --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("{} {}", "Error:".red(), e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["issue", "show", "#8786", "--raw", "-p", "rsc/github"])
            .unwrap();
        assert!(matches.get_flag("raw"));
        assert_eq!(matches.get_one::<String>("project").unwrap(), "rsc/github");

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "show");
        assert_eq!(sub.get_one::<String>("number").unwrap(), "#8786");
    }

    #[test]
    fn test_search_query_words() {
        let matches = build_cli()
            .try_get_matches_from(["issue", "search", "milestone:Go1.5", "label:NeedsFix", "--sort", "number"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let words: Vec<_> = sub.get_many::<String>("query").unwrap().collect();
        assert_eq!(words, ["milestone:Go1.5", "label:NeedsFix"]);
        assert_eq!(sub.get_one::<String>("sort").unwrap(), "number");
    }
}
