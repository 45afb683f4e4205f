//! rank-explorer - Interactive terminal front end.
//!
//! Loads the configured dataset, prints the first ranking and then applies
//! weight edits read from stdin, one command per line.

use std::io::{self, Write};
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use rank_explorer::adapters::cli::HELP;
use rank_explorer::adapters::{DatasetFile, PrometheeEngineFactory, TerminalCommand, TerminalPublisher};
use rank_explorer::application::{
    AdjustWeightCommand, AdjustWeightHandler, CycleOutcome, LoadDatasetCommand, LoadDatasetHandler,
    RankingSession, RecomputeRankingCommand, RecomputeRankingHandler, SessionSettings,
    WeightAdjustment,
};
use rank_explorer::config::{AppConfig, LoggingConfig};
use rank_explorer::ports::RankingPublisher;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let settings = SessionSettings::from_config(&config)?;
    let factory = PrometheeEngineFactory::from_config(&config.engine)?;
    info!(
        worker_threads = factory.worker_threads(),
        dataset = %config.data.dataset_path.display(),
        "Starting rank-explorer"
    );

    let session = Arc::new(RankingSession::new(Arc::new(factory), settings));
    let publisher: Arc<dyn RankingPublisher> = Arc::new(TerminalPublisher::new(io::stdout()));

    let load = LoadDatasetHandler::new(session.clone(), publisher.clone());
    let adjust = AdjustWeightHandler::new(session.clone(), publisher.clone());
    let recompute = RecomputeRankingHandler::new(session.clone(), publisher.clone());

    let dataset = DatasetFile::read(&config.data.dataset_path).await?;
    load.handle(LoadDatasetCommand {
        alternatives: dataset.alternatives,
        criteria: dataset.criteria,
    })
    .await?;

    prompt()?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }

        let command = match line.parse::<TerminalCommand>() {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                prompt()?;
                continue;
            }
        };

        let result = match command {
            TerminalCommand::Quit => break,
            TerminalCommand::Help => {
                println!("{}", HELP);
                Ok(None)
            }
            TerminalCommand::Weights => {
                print_weights(&session).await;
                Ok(None)
            }
            TerminalCommand::Recompute => recompute
                .handle(RecomputeRankingCommand)
                .await
                .map(Some),
            TerminalCommand::Set { criterion, value } => adjust
                .handle(AdjustWeightCommand {
                    criterion,
                    adjustment: WeightAdjustment::Set(value),
                })
                .await
                .map(Some),
            TerminalCommand::Nudge {
                criterion,
                direction,
            } => adjust
                .handle(AdjustWeightCommand {
                    criterion,
                    adjustment: WeightAdjustment::Nudge(direction),
                })
                .await
                .map(Some),
        };

        match result {
            Ok(Some(CycleOutcome::NotReady)) => println!("Engine not ready"),
            Ok(_) => {}
            Err(err) => {
                error!(error = %err, "Command failed");
                println!("Error: {}", err);
            }
        }
        prompt()?;
    }

    Ok(())
}

async fn print_weights(session: &RankingSession) {
    let labels = session.criterion_labels().await.unwrap_or_default();
    let weights = session.weights().await.unwrap_or_default();
    for (i, (label, weight)) in labels.iter().zip(&weights).enumerate() {
        println!("{:>3}  {:<20} {:.1}", i + 1, label, weight);
    }
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
