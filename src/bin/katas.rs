//! Katas Binary
//!
//! Classifies poker hands, reads account blocks, and builds CSS selectors
//! from the command line.

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use colored::*;
use katas::account::AccountNumber;
use katas::account::Grid;
use katas::cards::Hand;
use katas::evaluation::Evaluator;
use katas::evaluation::Ranking;
use katas::selector::Selector;
use std::io::Read;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log at debug level (KATAS_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand)]
enum Query {
    #[command(
        about = "Classify a 5-card poker hand, e.g. `A♠ 4♠ 3♠ 5♠ 2♠` or `Ts Js Qs Ks As`",
        alias = "hand"
    )]
    Poker {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    #[command(
        about = "Read the account number drawn in a 3-row block, from FILE or stdin",
        alias = "ocr"
    )]
    Account { file: Option<std::path::PathBuf> },
    #[command(about = "Draw the 3-row block for an account number", alias = "draw")]
    Glyphs {
        #[arg(required = true)]
        number: u64,
    },
    #[command(
        about = "Build a selector from name=value parts joined by + > ~ or _ (descendant)",
        alias = "css"
    )]
    Selector {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        parts: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    katas::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    match args.query {
        Query::Poker { cards } => {
            let hand = Hand::try_from(cards.join(" ").as_str())
                .map_err(anyhow::Error::msg)
                .context("invalid hand")?;
            let ranking = Evaluator::from(hand).find_ranking();
            log::info!("{} => {}", hand, ranking);
            match args.json {
                true => println!(
                    "{}",
                    serde_json::json!({
                        "hand": hand.to_string(),
                        "ranking": ranking,
                        "value": u8::from(ranking),
                    })
                ),
                false => println!("{}  {}", hand, paint(ranking)),
            }
        }
        Query::Account { file } => {
            let ref mut block = String::new();
            match file {
                Some(ref path) => {
                    *block = std::fs::read_to_string(path)
                        .with_context(|| format!("reading {}", path.display()))?
                }
                None => {
                    std::io::stdin()
                        .read_to_string(block)
                        .context("reading stdin")?;
                }
            }
            let number = AccountNumber::try_from(block.as_str()).context("invalid account block")?;
            match args.json {
                true => println!(
                    "{}",
                    serde_json::json!({
                        "account": number.to_string(),
                        "value": u32::from(number),
                    })
                ),
                false => println!("{}", number),
            }
        }
        Query::Glyphs { number } => {
            let number = AccountNumber::try_from(number)?;
            match args.json {
                true => println!(
                    "{}",
                    serde_json::json!({
                        "account": number.to_string(),
                        "block": Grid::from(number).to_string(),
                    })
                ),
                false => print!("{}", Grid::from(number)),
            }
        }
        Query::Selector { parts } => {
            let tokens = parts.iter().map(String::as_str).collect::<Vec<&str>>();
            let selector = Selector::try_from(tokens.as_slice())?;
            match args.json {
                true => println!("{}", serde_json::json!({ "selector": selector.stringify() })),
                false => println!("{}", selector),
            }
        }
    }
    Ok(())
}

fn paint(ranking: Ranking) -> ColoredString {
    let name = ranking.to_string();
    match ranking {
        Ranking::StraightFlush | Ranking::FourOfKind => name.magenta().bold(),
        Ranking::FullHouse | Ranking::Flush | Ranking::Straight => name.green(),
        Ranking::ThreeOfKind | Ranking::TwoPairs => name.cyan(),
        Ranking::OnePair => name.white(),
        Ranking::HighCard => name.dimmed(),
    }
}
