use std::{
    env,
    io::{self, IsTerminal},
    process::ExitCode,
};

use crate::cli::{Args, ColorChoice, Format};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter::{Debug, Info};
use newcommits::{
    console::OsConsole,
    domain::{
        commands::{self, ListOptions, Outcome},
        console::Console,
        format::OutputFormat,
        git::{BranchName, LogOptions},
    },
    git::{GitCli, GitCliConfig},
};
use simple_logger::SimpleLogger;

mod cli;

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { Debug } else { Info };
    if let Err(err) = SimpleLogger::new().with_level(log_level).init() {
        eprintln!("couldn't initialize logging: {err}");
    }

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let console = OsConsole {};
    let git = GitCli::new(GitCliConfig::new(args.repo.clone()));

    let options = list_options(&args);

    let outcome = commands::new_commits(&git, &console, &options);

    match outcome.context("couldn't list new commits")? {
        Outcome::Listed => Ok(ExitCode::SUCCESS),
        Outcome::ParentNotFound(branch) => {
            console.eprintln(format!(
                "couldn't determine the parent branch of {}, pass one with --parent",
                &*branch
            ))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn list_options(args: &Args) -> ListOptions {
    ListOptions {
        parent: args.parent.as_deref().map(BranchName::from),
        format: match args.format {
            Format::Oneline => OutputFormat::Oneline,
            Format::Short => OutputFormat::Short,
            Format::Table => OutputFormat::Table,
            Format::Json => OutputFormat::Json,
        },
        color: use_color(args.color),
        log: LogOptions {
            reverse: args.reverse,
            no_merges: args.no_merges,
            max_count: args.max_count,
        },
        count: args.count,
        print_parent: args.print_parent,
        show_parent: args.show_parent,
    }
}

fn use_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none(),
    }
}
