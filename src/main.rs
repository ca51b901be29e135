mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, FoodAction, PlanAction, ProfileAction};
use nutrilife::error::NutriError;
use nutrilife::output;
use std::process;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("NUTRILIFE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nutrilife=warn"));
    let json_logs = std::env::var("NUTRILIFE_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    // stdout carries the JSON envelope, so logs go to stderr
    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Food { .. } => "food",
        Commands::Status => "status",
        Commands::Profile { .. } => "profile",
        Commands::Plan { .. } => "plan",
        Commands::Config { .. } => "config",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let name = command_name(&cli.command);
    let human = cli.human;

    let result = match cli.command {
        Commands::Init { force } => cmd::init::run(force, human),
        Commands::Food { action } => match action {
            FoodAction::List => cmd::food::run_list(human),
            FoodAction::Add {
                name,
                calories,
                protein,
                carbs,
                fats,
                at,
            } => cmd::food::run_add(&name, [calories, protein, carbs, fats], at, human),
            FoodAction::Quick { food, at } => cmd::food::run_quick(&food, at, human),
            FoodAction::Catalog { search } => cmd::food::run_catalog(search.as_deref(), human),
            FoodAction::Remove { id, yes } => cmd::food::run_remove(id, yes, human),
            FoodAction::Reset { yes } => cmd::food::run_reset(yes, human),
        },
        Commands::Status => cmd::status::run(human),
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd::profile::run_show(human),
            ProfileAction::Set { key, value } => cmd::profile::run_set(&key, &value, human),
        },
        Commands::Plan { action } => match action {
            PlanAction::Generate => cmd::plan::run_generate(human),
            PlanAction::Regenerate { yes } => cmd::plan::run_regenerate(yes, human),
            PlanAction::Show => cmd::plan::run_show(human),
            PlanAction::Like => cmd::plan::run_like(human),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "nutrilife", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        let code = e
            .downcast_ref::<NutriError>()
            .map(NutriError::code)
            .unwrap_or("general_error");
        let err = output::error(name, code, &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
