//! Strikewise command line: screen a universe file or analyze one ticker.

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;
use strikewise::config::load_strategy_configs;
use strikewise::logging;
use strikewise::models::filters::FilterSet;
use strikewise::models::screening::ScreeningResults;
use strikewise::screener::ScreeningEngine;
use strikewise::services::InMemoryMarketData;
use strikewise::strategies::StrategyRegistry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "strikewise")]
#[command(about = "Rank stocks for options-selling strategies", long_about = None)]
struct Cli {
    /// Directory holding `<key>_config.json` strategy files
    #[arg(long, global = true, env = "STRATEGY_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Print raw JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter, score and rank a universe of stocks
    Screen {
        /// JSON universe file
        #[arg(long, env = "UNIVERSE_FILE")]
        universe: PathBuf,

        #[arg(long, default_value = "PCS")]
        strategy: String,

        /// Filter overrides as a JSON object, replacing the strategy defaults
        #[arg(long)]
        filters: Option<String>,

        /// Show only the first N results
        #[arg(long)]
        top: Option<usize>,
    },
    /// Produce a trade analysis for one ticker
    Analyze {
        #[arg(long, env = "UNIVERSE_FILE")]
        universe: PathBuf,

        #[arg(long)]
        ticker: String,

        #[arg(long, default_value = "PCS")]
        strategy: String,
    },
    /// List available strategies
    Strategies,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging_with("warn");

    let cli = Cli::parse();

    let registry = match cli.config_dir {
        Some(ref dir) => StrategyRegistry::from_configs(&load_strategy_configs(dir)?),
        None => StrategyRegistry::with_builtin(),
    };
    let engine = ScreeningEngine::new(registry);

    match cli.command {
        Commands::Screen {
            universe,
            strategy,
            filters,
            top,
        } => {
            let provider = InMemoryMarketData::from_json_file(&universe)?;
            let filters = filters
                .map(|raw| serde_json::from_str::<FilterSet>(&raw))
                .transpose()?;

            let mut results = engine.screen(&strategy, filters, provider.stocks())?;
            info!(results = results.len(), "Screening finished");
            if let Some(n) = top {
                results.stocks.truncate(n);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results);
            }
        }
        Commands::Analyze {
            universe,
            ticker,
            strategy,
        } => {
            let provider = InMemoryMarketData::from_json_file(&universe)?;
            let analysis = engine.analyze(&strategy, &ticker, &provider)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                println!("{} - {}", analysis.ticker, analysis.trade_recommendation);
                println!("  Score:        {:.1}", analysis.strategy_score);
                println!(
                    "  Strikes:      {:.2} / {:.2}",
                    analysis.recommended_strikes.short, analysis.recommended_strikes.long
                );
                println!("  Credit:       ${:.2}", analysis.estimated_premium);
                println!("  Max risk:     ${:.2}", analysis.max_risk);
                println!("  Return:       {:.1}%", analysis.return_on_risk);
                println!("  POP:          {:.1}%", analysis.probability_of_profit);
                println!("  Risk:         {}", analysis.risk_assessment);
                for note in &analysis.notes {
                    println!("  - {}", note);
                }
            }
        }
        Commands::Strategies => {
            for strategy in engine.registry().iter() {
                println!("{:<6} {}", strategy.key(), strategy.name());
            }
        }
    }

    Ok(())
}

fn print_results(results: &ScreeningResults) {
    println!(
        "{} | {} | {}",
        results.result_id(),
        results.metadata.strategy_module,
        results.filters.summary()
    );
    println!("{:>4}  {:<8} {:>7} {:>10} {:>8} {:>6}", "#", "Ticker", "Score", "Price", "IV Rank", "RSI");
    for (i, ranked) in results.stocks.iter().enumerate() {
        println!(
            "{:>4}  {:<8} {:>7.1} {:>10.2} {:>8.1} {:>6.1}",
            i + 1,
            ranked.stock.ticker,
            ranked.score,
            ranked.stock.price,
            ranked.stock.iv_rank,
            ranked.stock.rsi
        );
    }
}
