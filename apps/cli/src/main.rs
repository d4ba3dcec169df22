mod category_style;
mod commands;
mod config;
mod events;
mod main_lib;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use config::Config;
use main_lib::{build_state, init_tracing};
use synkr_core::utils::today_local;

#[derive(Parser)]
#[command(name = "synkr", version, about = "Synkr - tasks, goals and achievements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tasks scheduled for a day.
    Today {
        /// Day to show, as YYYY-MM-DD. Defaults to the local date.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List goals with their steps and progress.
    Goals,
    /// List the achievement catalog and what has been earned.
    Achievements,
    /// Mark a goal step as completed.
    CompleteStep {
        /// Goal id.
        #[arg(long)]
        goal: String,
        /// Step id.
        #[arg(long)]
        step: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(&config);

    let state = build_state(&config)?;
    let account = state
        .account_service
        .sign_in(&config.email, &config.credential)?;
    tracing::debug!(account_id = %account.id, "Signed in");

    let output = match cli.command {
        Commands::Today { date } => {
            commands::today(&state, &account, date.unwrap_or_else(today_local), cli.json)?
        }
        Commands::Goals => commands::goals(&state, &account, cli.json)?,
        Commands::Achievements => commands::achievements(&state, &account, cli.json)?,
        Commands::CompleteStep { goal, step } => {
            commands::complete_step(&state, &account, &goal, &step, cli.json)?
        }
    };
    print!("{output}");

    state.account_service.sign_out()?;
    Ok(())
}
