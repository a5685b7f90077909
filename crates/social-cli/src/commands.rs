//! Command surface: argument definitions and the handlers behind them
//!
//! Logical failures (unknown id, rejected status, missing platforms) are
//! printed and the command still returns `Ok`. Only storage faults escape.

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, Command};
use serde::Serialize;
use social_core::{
    CampaignInput, CampaignWorkflow, ContentStatus, Draft, EntryId, Platform, SocialError,
};
use std::io::Write;

const STATUS_VALUES: [&str; 4] = ["draft", "approved", "posted", "archived"];
const DEFAULT_LIST_LIMIT: &str = "20";

#[derive(Serialize)]
struct CreatedEntry<'a> {
    id: String,
    platforms: &'a [Platform],
    drafts: &'a [Draft],
}

pub fn build_cli() -> Command {
    Command::new("social-agent")
        .version("1.0.0")
        .about("Compass Ent social content agent")
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("DIR")
                .global(true)
                .help("Entry store directory (overrides SOCIAL_MEDIA_DB)"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("create")
                .about("Generate content drafts for a campaign")
                .arg(Arg::new("topic").long("topic").required(true).help("Content topic"))
                .arg(
                    Arg::new("platforms")
                        .long("platforms")
                        .required(true)
                        .help("youtube,instagram,tiktok (comma-separated)"),
                )
                .arg(Arg::new("due-date").long("due-date").default_value("").help("YYYY-MM-DD"))
                .arg(Arg::new("artist").long("artist").default_value("").help("Artist or brand"))
                .arg(Arg::new("style").long("style").default_value("").help("Music style"))
                .arg(Arg::new("tone").long("tone").default_value("").help("Tone and manner"))
                .arg(Arg::new("goal").long("goal").default_value("").help("Campaign goal"))
                .arg(Arg::new("event").long("event").default_value("").help("Event or campaign name"))
                .arg(Arg::new("hashtags").long("hashtags").default_value("").help("tag1,tag2 hints"))
                .arg(
                    Arg::new("use-llm")
                        .long("use-llm")
                        .help("Draft with the OpenAI API when OPENAI_API_KEY is set")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List entries")
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_parser(STATUS_VALUES)
                        .help("Status filter"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(clap::value_parser!(usize))
                        .default_value(DEFAULT_LIST_LIMIT),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show one entry")
                .arg(Arg::new("id").long("id").required(true)),
        )
        .subcommand(
            Command::new("status")
                .about("Change an entry's status")
                .arg(Arg::new("id").long("id").required(true))
                .arg(
                    Arg::new("status")
                        .long("status")
                        .required(true)
                        .help("draft, approved, posted or archived"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export entries for automation")
                .arg(
                    Arg::new("status")
                        .long("status")
                        .value_parser(STATUS_VALUES)
                        .default_value("approved"),
                )
                .arg(
                    Arg::new("platform")
                        .long("platform")
                        .value_parser(["youtube", "instagram", "tiktok"]),
                ),
        )
        .subcommand(Command::new("stats").about("Count entries per status"))
}

/// Dispatch the parsed subcommand
pub async fn run<W: Write>(workflow: &CampaignWorkflow, matches: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("create", args)) => cmd_create(workflow, args, out).await,
        Some(("list", args)) => cmd_list(workflow, args, out),
        Some(("show", args)) => cmd_show(workflow, args, out),
        Some(("status", args)) => cmd_status(workflow, args, out),
        Some(("export", args)) => cmd_export(workflow, args, out),
        Some(("stats", _)) => cmd_stats(workflow, out),
        _ => {
            writeln!(out, "No command specified. Use --help for options.")?;
            Ok(())
        }
    }
}

fn arg<'a>(args: &'a ArgMatches, name: &str) -> &'a str {
    args.get_one::<String>(name).map(String::as_str).unwrap_or("")
}

fn optional(args: &ArgMatches, name: &str) -> Option<String> {
    let value = arg(args, name).trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Print a business-rule rejection, propagate anything fatal
fn report<W: Write>(error: SocialError, out: &mut W) -> anyhow::Result<()> {
    if error.is_fatal() {
        return Err(error.into());
    }
    writeln!(out, "error: {}", error)?;
    Ok(())
}

async fn cmd_create<W: Write>(workflow: &CampaignWorkflow, args: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    let platforms = Platform::parse_list(arg(args, "platforms"));
    if platforms.is_empty() {
        writeln!(
            out,
            "error: enter at least one supported platform (youtube/instagram/tiktok)"
        )?;
        return Ok(());
    }

    let due_date = match optional(args, "due-date") {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                writeln!(out, "error: --due-date must be YYYY-MM-DD, got '{}'", raw)?;
                return Ok(());
            }
        },
        None => None,
    };

    let input = CampaignInput {
        topic: arg(args, "topic").to_string(),
        artist: optional(args, "artist"),
        style: optional(args, "style"),
        tone: optional(args, "tone"),
        goal: optional(args, "goal"),
        event: optional(args, "event"),
        due_date,
        hashtags: optional(args, "hashtags"),
        platforms,
    };

    let entry = match workflow.create_entry(&input, args.get_flag("use-llm")).await {
        Ok(entry) => entry,
        Err(e) => return report(e, out),
    };

    writeln!(out, "saved_id={}", entry.id())?;
    let created = CreatedEntry {
        id: entry.id().to_string(),
        platforms: entry.platforms(),
        drafts: entry.drafts(),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&created)?)?;
    Ok(())
}

fn cmd_list<W: Write>(workflow: &CampaignWorkflow, args: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    let status = match optional(args, "status") {
        Some(raw) => Some(raw.parse::<ContentStatus>()?),
        None => None,
    };
    let limit = args.get_one::<usize>("limit").copied().unwrap_or(20);

    for entry in workflow.store().list_entries(status, limit)? {
        writeln!(
            out,
            "[{}] {} | {} | {} | {}",
            entry.status(),
            entry.id(),
            entry
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry.topic,
            Platform::join(entry.platforms())
        )?;
    }
    Ok(())
}

fn cmd_show<W: Write>(workflow: &CampaignWorkflow, args: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    let entry = match EntryId::from_string(arg(args, "id")) {
        Ok(id) => workflow.store().get_entry(&id)?,
        Err(e) => {
            log::debug!("{}", e);
            None
        }
    };

    match entry {
        Some(entry) => writeln!(out, "{}", serde_json::to_string_pretty(&entry)?)?,
        None => writeln!(out, "No entry found with that ID.")?,
    }
    Ok(())
}

fn cmd_status<W: Write>(workflow: &CampaignWorkflow, args: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    const FAILED: &str = "status change failed (unknown id or status value)";
    let raw_id = arg(args, "id");

    let status = match arg(args, "status").trim().parse::<ContentStatus>() {
        Ok(status) => status,
        Err(e) => {
            writeln!(out, "{}: {}", FAILED, e)?;
            return Ok(());
        }
    };

    let Ok(id) = EntryId::from_string(raw_id) else {
        writeln!(out, "{}", FAILED)?;
        return Ok(());
    };

    match workflow.store().set_status(&id, status) {
        Ok(Some(_)) => writeln!(out, "updated={}, status={}", id, status)?,
        Ok(None) => writeln!(out, "{}", FAILED)?,
        Err(e) if !e.is_fatal() => writeln!(out, "{}: {}", FAILED, e)?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn cmd_export<W: Write>(workflow: &CampaignWorkflow, args: &ArgMatches, out: &mut W) -> anyhow::Result<()> {
    let status = arg(args, "status").parse::<ContentStatus>()?;
    let platform = match optional(args, "platform") {
        Some(raw) => Some(raw.parse::<Platform>()?),
        None => None,
    };

    let payload = workflow.store().export_entries(status, platform)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}

fn cmd_stats<W: Write>(workflow: &CampaignWorkflow, out: &mut W) -> anyhow::Result<()> {
    let counts = workflow.store().status_counts()?;

    for status in ContentStatus::ALL {
        writeln!(out, "{:<9} {}", status, counts.get(status))?;
    }
    writeln!(out, "{:<9} {}", "total", counts.total())?;
    Ok(())
}
