//! Interactive terminal front end for the classbook address book.
//!
//! Reads one command per line from stdin, prints the command feedback and the
//! currently visible person list, and stops on `exit` or end of input.

use anyhow::{Context, Result};
use clap::Parser;
use classbook_core::logic::messages::format_person;
use classbook_core::{
    init_logging, open_db, AppConfig, CommandService, Person, PersonRepository,
    SqlitePersonRepository,
};
use log::{info, warn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Classbook - keep track of students, teachers and attendance
#[derive(Parser, Debug)]
#[command(name = "classbook")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file; missing file means defaults
    #[arg(long, default_value = classbook_core::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// SQLite file holding the address book (overrides `data_file`)
    #[arg(long)]
    data: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides `log_level`)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;
    let base = config_base_dir(&args.config)?;

    let level = args.log_level.as_deref().unwrap_or(&config.log_level);
    if let Some(log_dir) = config.resolve_log_dir(&base) {
        if let Err(err) = init_logging(level, &log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let data_file = args
        .data
        .clone()
        .unwrap_or_else(|| config.resolve_data_file(&base));
    if let Some(parent) = data_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("cannot create data directory `{}`", parent.display()))?;
    }

    let mut conn = open_db(&data_file)
        .with_context(|| format!("cannot open address book `{}`", data_file.display()))?;
    let repo = SqlitePersonRepository::try_new(&mut conn)?;
    let mut service = CommandService::load(repo)
        .with_context(|| format!("cannot load address book `{}`", data_file.display()))?;

    info!("event=session_start module=cli status=ok");
    run_session(&mut service, io::stdin().lock(), io::stdout().lock())?;
    info!("event=session_end module=cli status=ok");
    Ok(())
}

fn config_base_dir(config: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    Ok(match config.parent() {
        Some(parent) => cwd.join(parent),
        None => cwd,
    })
}

fn run_session<R: PersonRepository>(
    service: &mut CommandService<R>,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "Welcome to Classbook! Type `help` to see all commands.")?;
    print_persons(&mut out, &service.filtered_person_list())?;

    for line in input.lines() {
        let line = line.context("cannot read input")?;
        match service.execute(&line) {
            Ok(result) => {
                writeln!(out, "{}", result.feedback())?;
                if result.exit() {
                    break;
                }
                if !result.show_help() {
                    print_persons(&mut out, &service.filtered_person_list())?;
                }
            }
            Err(err) => {
                warn!("event=command_rejected module=cli status=error");
                writeln!(out, "{err}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn print_persons(out: &mut impl Write, persons: &[&Person]) -> io::Result<()> {
    if persons.is_empty() {
        return writeln!(out, "(no persons to show)");
    }
    for (position, person) in persons.iter().enumerate() {
        writeln!(out, "{}. {}", position + 1, format_person(person))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use classbook_core::{help_summary, open_db_in_memory};

    #[test]
    fn session_prints_feedback_and_stops_at_exit() {
        let mut conn = open_db_in_memory().unwrap();
        let repo = SqlitePersonRepository::try_new(&mut conn).unwrap();
        let mut service = CommandService::load(repo).unwrap();

        let input = "clear\nbogus\nexit\nlist\n".as_bytes();
        let mut out = Vec::new();
        run_session(&mut service, input, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Address book has been cleared!"));
        assert!(text.contains("(no persons to show)"));
        assert!(text.contains("Unknown command"));
        assert!(text.ends_with("Exiting Classbook as requested ...\n"));
    }

    #[test]
    fn help_text_lists_sort() {
        assert!(help_summary().contains("sort"));
    }
}
