use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use gemtally_core::parse_report;
use gemtally_report::{
    SortKey, SortOrder, ValidatedInput, format_summary, format_table, iso_to_ddmmyyyy,
    sort_people, today_ddmmyyyy, validate_inputs,
};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod state;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GEMTALLY_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "gemtally", version = VERSION, about = "Summarise pasted sales reports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct ReportArgs {
    /// Report message file (reads stdin when omitted or `-`)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Sales goal (falls back to report.default_goal in config)
    #[arg(long, short)]
    goal: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the GOAL / Total / OT / GEM summary
    Summary {
        #[command(flatten)]
        report: ReportArgs,

        /// Report date, DD/MM/YYYY (default: today)
        #[arg(long, conflicts_with = "iso_date")]
        date: Option<String>,

        /// Report date, YYYY-MM-DD
        #[arg(long)]
        iso_date: Option<String>,

        /// Emit the parsed result and summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the per-person table (tab separated)
    Table {
        #[command(flatten)]
        report: ReportArgs,

        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        #[arg(long, value_enum)]
        order: Option<OrderArg>,
    },

    /// Manage ~/.gemtally/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Sales,
    Gems,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortKey {
    fn from(a: SortArg) -> Self {
        match a {
            SortArg::Sales => SortKey::Sales,
            SortArg::Gems => SortKey::GemTotal,
        }
    }
}

impl From<OrderArg> for SortOrder {
    fn from(a: OrderArg) -> Self {
        match a {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "gemtally={lvl},gemtally_core={lvl},gemtally_report={lvl}",
                lvl = cfg.log.level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(version = VERSION, "starting");

    match cli.command {
        Command::Summary {
            report,
            date,
            iso_date,
            json,
        } => {
            let date = match (date, iso_date) {
                (Some(d), _) => d,
                (None, Some(iso)) => iso_to_ddmmyyyy(&iso)
                    .with_context(|| format!("invalid --iso-date {iso} (expected YYYY-MM-DD)"))?,
                (None, None) => today_ddmmyyyy(),
            };
            let input = validated(&report, &date, &cfg)?;
            let result = parse_report(&input.message, input.goal);
            info!(
                people = result.people.len(),
                total = result.total_sales,
                gems = result.gem_grand_total,
                "report parsed"
            );
            let summary = format_summary(&result, &input.goal_text, &input.date);

            if json {
                let out = serde_json::json!({ "result": result, "summary": summary });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{summary}");
            }
        }

        Command::Table {
            report,
            sort,
            order,
        } => {
            let input = validated(&report, &today_ddmmyyyy(), &cfg)?;
            let mut result = parse_report(&input.message, input.goal);
            let key = sort.map(SortKey::from).unwrap_or(cfg.report.sort_by);
            let order = order.map(SortOrder::from).unwrap_or(cfg.report.sort_order);
            sort_people(&mut result.people, key, order);
            println!("{}", format_table(&result.people));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// `--goal` as typed, else the configured default via f64 `Display`.
fn resolve_goal(flag: Option<&str>, default_goal: Option<f64>) -> Result<String> {
    match (flag, default_goal) {
        (Some(g), _) => Ok(g.to_string()),
        (None, Some(g)) => Ok(g.to_string()),
        (None, None) => bail!("no goal given (pass --goal or set report.default_goal)"),
    }
}

/// Resolve the goal, read the message and run input validation.
fn validated(args: &ReportArgs, date: &str, cfg: &config::Config) -> Result<ValidatedInput> {
    let goal = resolve_goal(args.goal.as_deref(), cfg.report.default_goal)?;
    let message = state::read_message(args.input.as_deref())?;

    validate_inputs(date, &goal, &message).map_err(|errors| {
        let lines: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
        anyhow!("Please fix the errors before submitting:\n{}", lines.join("\n"))
    })
}
