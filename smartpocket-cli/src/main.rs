use anyhow::{Context, Result, bail};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use smartpocket_core::{Category, Direction, SavingsGoal, Summary, Transaction};
use smartpocket_voice::interpret;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commit;
mod config;
mod render;
mod state;

use commit::Committed;
use config::Config;
use state::{GoalStore, Ledger};

#[derive(Parser, Debug)]
#[command(name = "smartpocket", version, about = "Track pocket money from spoken or typed phrases")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret a phrase and print the result without saving it
    Parse {
        /// The phrase, e.g. `I spent ₹100 on lunch`
        #[arg(required = true)]
        words: Vec<String>,

        /// Print the interpretation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interpret a phrase and save it (transaction or goal deposit)
    Log {
        #[arg(required = true)]
        words: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Add a transaction from explicit fields
    Add {
        #[arg(long)]
        amount: f64,

        /// income or expense
        #[arg(long, default_value = "expense")]
        direction: Direction,

        /// food, entertainment, transport, shopping, education, health or other
        #[arg(long, default_value = "other")]
        category: Category,

        #[arg(long)]
        note: Option<String>,
    },

    /// Savings goals
    Goals {
        #[command(subcommand)]
        command: GoalsCommand,
    },

    /// Balance, totals, expense breakdown and recent transactions
    Summary {
        /// Number of recent transactions to show (default: from config)
        #[arg(long)]
        recent: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Write a default config.toml into the SmartPocket home directory
    InitConfig,
}

#[derive(Subcommand, Debug)]
enum GoalsCommand {
    /// List goals with progress
    List,

    /// Create a goal
    Add {
        #[arg(required = true)]
        title: Vec<String>,

        #[arg(long)]
        target: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let home = state::ensure_smartpocket_home()?;
    let cfg = config::load_config(&home)?;
    debug!(home = %home.display(), "loaded config");

    match cli.command {
        Command::Parse { words, json } => {
            let text = words.join(" ");
            let goals = GoalStore::in_dir(&home).list_goals().await?;
            let interpretation = interpret(&text, &goals);
            if json {
                println!("{}", serde_json::to_string_pretty(&interpretation)?);
            } else {
                println!(
                    "{}",
                    render::interpretation(&interpretation, &cfg.display.currency_symbol)
                );
            }
        }

        Command::Log { words, yes } => {
            log_phrase(&home, &cfg, &words.join(" "), yes).await?;
        }

        Command::Add {
            amount,
            direction,
            category,
            note,
        } => {
            if amount <= 0.0 || !amount.is_finite() {
                bail!("amount must be positive (got {})", amount);
            }
            let txn = Transaction::new(
                new_id("tx"),
                Local::now().date_naive(),
                amount,
                direction,
                category,
                note.unwrap_or_default(),
            );
            let row = render::transaction_row(&txn, &cfg.display.currency_symbol);
            Ledger::in_dir(&home).append(txn).await?;
            println!("Saved: {}", row);
        }

        Command::Goals { command } => match command {
            GoalsCommand::List => {
                let goals = GoalStore::in_dir(&home).load().await?;
                if goals.is_empty() {
                    println!("No goals yet. Add one: smartpocket goals add <title> --target <amount>");
                }
                for g in &goals {
                    println!("{}", render::goal_row(g, &cfg.display.currency_symbol));
                }
            }
            GoalsCommand::Add { title, target } => {
                let title = title.join(" ").trim().to_string();
                if target <= 0.0 || !target.is_finite() {
                    bail!("target must be positive (got {})", target);
                }
                let goal = SavingsGoal::new(new_id("goal"), title, target);
                let row = render::goal_row(&goal, &cfg.display.currency_symbol);
                GoalStore::in_dir(&home).add(goal).await?;
                println!("Added: {}", row);
            }
        },

        Command::Summary { recent, json } => {
            let txns = Ledger::in_dir(&home).load().await?;
            let summary =
                Summary::from_transactions(&txns, recent.unwrap_or(cfg.display.recent_limit));
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render::summary(&summary, &cfg.display.currency_symbol));
            }
        }

        Command::InitConfig => {
            let (path, written) = config::init_config(&home)?;
            if written {
                println!("Wrote {}", path.display());
            } else {
                println!("Config already exists: {}", path.display());
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,smartpocket=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_millis())
}

fn confirm(label: &str) -> Result<bool> {
    print!("{} [y/N]: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s).context("read confirmation")?;
    Ok(matches!(s.trim().to_lowercase().as_str(), "y" | "yes"))
}

async fn log_phrase(home: &Path, cfg: &Config, text: &str, yes: bool) -> Result<()> {
    let currency = &cfg.display.currency_symbol;
    let lookup = GoalStore::in_dir(home).list_goals().await?;

    let interpretation = interpret(text, &lookup);
    println!("{}", render::interpretation(&interpretation, currency));

    let ask = |label: &str| -> Result<bool> {
        if yes {
            return Ok(true);
        }
        // stdin blocks; keep it off the runtime's worker
        tokio::task::block_in_place(|| confirm(label))
    };
    let committed = commit::commit(
        home,
        cfg,
        interpretation,
        new_id("tx"),
        Local::now().date_naive(),
        ask,
    )
    .await?;

    match committed {
        Committed::Deposited(goal) => println!("Saved: {}", render::goal_row(&goal, currency)),
        // the rendered interpretation already says which goal was missing
        Committed::GoalNotFound => {}
        Committed::Saved(_) => println!("Saved."),
        Committed::Discarded => println!("Discarded."),
    }

    Ok(())
}
