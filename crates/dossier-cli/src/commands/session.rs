//! Interactive session loop.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use dossier_application::{SessionController, View};
use dossier_core::synthesis::{GenderFilter, RegionFilter};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use url::Url;

use super::generate::generate_with_progress;
use crate::context::AppContext;
use crate::render;

const COMMANDS: [&str; 12] = [
    "generate", "region", "gender", "stream", "archive", "select", "show", "share", "export",
    "back", "help", "quit",
];

/// One parsed input line.
#[derive(Debug, PartialEq)]
pub enum ReplCommand {
    Generate,
    Region(RegionFilter),
    Gender(GenderFilter),
    Stream,
    Archive,
    Select(String),
    Show,
    Share,
    Export,
    Back,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => ReplCommand::Empty,
        "generate" | "g" => ReplCommand::Generate,
        "region" => match arg.parse() {
            Ok(filter) => ReplCommand::Region(filter),
            Err(_) => ReplCommand::Invalid("usage: region <name|All> (see `dossier regions`)".to_string()),
        },
        "gender" => match arg.parse() {
            Ok(filter) => ReplCommand::Gender(filter),
            Err(_) => ReplCommand::Invalid(
                "usage: gender <Male|Female|Non-binary|All>".to_string(),
            ),
        },
        "stream" => ReplCommand::Stream,
        "archive" => ReplCommand::Archive,
        "select" if !arg.is_empty() => ReplCommand::Select(arg.to_string()),
        "select" => ReplCommand::Invalid("usage: select <id>".to_string()),
        "show" => ReplCommand::Show,
        "share" => ReplCommand::Share,
        "export" => ReplCommand::Export,
        "back" => ReplCommand::Back,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => ReplCommand::Invalid(format!("unknown command '{}', try 'help'", other)),
    }
}

/// Completion and hints for the command words.
struct ReplHelper;

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split_whitespace().next().unwrap_or("");
        if COMMANDS.contains(&word) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}

fn print_help() {
    let rows = [
        ("generate", "synthesize a persona with the current filters"),
        ("region <R|All>", "pin a region or draw from the pool"),
        ("gender <G|All>", "constrain the gender"),
        ("stream", "show the live stream"),
        ("archive", "list the history"),
        ("select <ID>", "show a history entry"),
        ("show", "show the active dossier"),
        ("share", "print the share link of the active dossier"),
        ("export", "print the plain-text summary"),
        ("back", "leave a shared dossier and return to the feed"),
        ("quit", "exit"),
    ];
    for (cmd, text) in rows {
        println!("  {:<16} {}", cmd.bright_cyan(), text.bright_black());
    }
}

async fn print_active(session: &SessionController) {
    match session.active_persona().await {
        Some(persona) => println!("{}", render::dossier(&persona)),
        None => println!("{}", "No personas generated yet. Try 'generate'.".bright_black()),
    }
}

async fn prompt(session: &SessionController) -> String {
    let filter = session.filter().await;
    format!(
        "dossier [{} | {} | {}]> ",
        session.view().await,
        filter.region,
        filter.gender
    )
}

pub async fn run(ctx: &AppContext, address: Option<&Url>) -> Result<()> {
    let session = ctx.session(address)?;

    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper));

    println!("{}", "Dossier session. Type 'help' for commands.".bright_black());
    if session.view().await == View::Shared {
        println!("{}", "Viewing a shared dossier ('back' returns to the feed).".yellow());
    }
    print_active(&session).await;

    loop {
        let line = match rl.readline(&prompt(&session).await) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        if !line.trim().is_empty() {
            let _ = rl.add_history_entry(line.as_str());
        }

        match parse_command(&line) {
            ReplCommand::Empty => {}
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::Invalid(message) => println!("{}", message.yellow()),
            ReplCommand::Generate => match generate_with_progress(&session).await {
                Ok(persona) => println!("{}", render::dossier(&persona)),
                Err(e) => println!("{} {}", "Synthesis failed:".red(), e),
            },
            ReplCommand::Region(region) => {
                let mut filter = session.filter().await;
                filter.region = region;
                session.set_filter(filter).await;
            }
            ReplCommand::Gender(gender) => {
                let mut filter = session.filter().await;
                filter.gender = gender;
                session.set_filter(filter).await;
            }
            ReplCommand::Stream => {
                session.show_live_stream().await;
                print_active(&session).await;
            }
            ReplCommand::Archive => {
                session.show_archive().await;
                let active = session.active_persona().await.map(|p| p.id);
                println!(
                    "{}",
                    render::history_listing(&session.history().await, active.as_deref())
                );
            }
            ReplCommand::Select(id) => match session.select(&id).await {
                Ok(persona) => println!("{}", render::dossier(&persona)),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            ReplCommand::Show => print_active(&session).await,
            ReplCommand::Share => match session.share_link(None).await {
                Ok(url) => println!("{}", url),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            ReplCommand::Export => match session.export_dossier(None).await {
                Ok(text) => println!("{}", text),
                Err(e) => println!("{}", e.to_string().yellow()),
            },
            ReplCommand::Back => {
                let url = session.return_to_feed().await;
                println!("{} {}", "Address:".bright_black(), url);
                print_active(&session).await;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::persona::Gender;

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_command("region new zealand"),
            ReplCommand::Region(RegionFilter::Only("New Zealand".to_string()))
        );
        assert!(matches!(parse_command("region Atlantis"), ReplCommand::Invalid(_)));
        assert!(matches!(parse_command("gender other"), ReplCommand::Invalid(_)));
        assert_eq!(parse_command("region all"), ReplCommand::Region(RegionFilter::All));
        assert_eq!(
            parse_command("gender non-binary"),
            ReplCommand::Gender(GenderFilter::Only(Gender::NonBinary))
        );
        assert!(matches!(parse_command("region"), ReplCommand::Invalid(_)));
        assert!(matches!(parse_command("gender robot"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("  GENERATE "), ReplCommand::Generate);
        assert_eq!(parse_command("select p1"), ReplCommand::Select("p1".to_string()));
        assert!(matches!(parse_command("select"), ReplCommand::Invalid(_)));
        assert_eq!(parse_command("back"), ReplCommand::Back);
        assert_eq!(parse_command(""), ReplCommand::Empty);
        assert_eq!(parse_command("exit"), ReplCommand::Quit);
        assert!(matches!(parse_command("dance"), ReplCommand::Invalid(_)));
    }

    #[test]
    fn test_every_command_word_parses() {
        for word in COMMANDS {
            let line = match word {
                "region" => "region All".to_string(),
                "gender" => "gender All".to_string(),
                "select" => "select x".to_string(),
                other => other.to_string(),
            };
            assert!(
                !matches!(parse_command(&line), ReplCommand::Invalid(_)),
                "{word} not recognised"
            );
        }
    }
}
