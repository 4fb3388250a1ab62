// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod parser;

use anyhow::{anyhow, Error};
use clap::{App, Arg, ArgMatches};
use config::Config;
use controller::{Controller, ToTable};
use csv_ratings::CsvController;
use engine::{Engine, Recommendation};
use log::LevelFilter;
use memory::MemoryController;
use parser::Statement;
use simplelog::{TermLogger, TerminalMode};
use std::{fmt::Display, str::FromStr};

macro_rules! prompt {
    ($ed:ident, $db:expr) => {{
        use rustyline::error::ReadlineError;

        let msg = format!("({}) {}", $db, PROMPT);

        match $ed.readline(&msg) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, Error> {
    raw.parse()
        .map_err(|_| anyhow!("Invalid {} id '{}' for this dataset", what, raw))
}

fn print_recommendations<I: Display>(user: &str, recommendations: Vec<Recommendation<I>>) {
    if recommendations.is_empty() {
        println!("No recommendations found for user({})", user);
        return;
    }

    let ranked: Vec<_> = recommendations
        .into_iter()
        .map(|r| (r.item, format!("{:.4}", r.score)))
        .collect();

    println!("{}", ranked.to_table());
}

fn print_help() {
    println!("Available statements:");
    println!("recommend(<user>)             Top-N recommendations, configured N");
    println!("recommend(<user>, <n>)        Top-n recommendations");
    println!("predict(<user>, <item>)       Predicted score of a single item");
    println!("similarity(<item>, <item>)    Cosine similarity between two items");
    println!("similar(<item>, <k>)          The k items most similar to <item>");
    println!("ratings(<user>)               Ratings given by <user>");
    println!("users | items                 List known users or items");
    println!("h | help                      Shows this help");
    println!("v | version                   Shows the version");
    println!("q | quit                      Quit");
}

fn run_statement<U, I>(engine: &Engine<U, I>, stmt: Statement) -> Result<(), Error>
where
    U: Ord + Clone + Display + FromStr,
    I: Ord + Clone + Display + FromStr,
{
    match stmt {
        Statement::Recommend(user, top_n) => {
            let id: U = parse_id(&user, "user")?;
            let recommendations = match top_n {
                Some(top_n) => engine.recommend(&id, top_n)?,
                None => engine.recommend_default(&id)?,
            };

            print_recommendations(&user, recommendations);
        }

        Statement::Predict(user, item) => {
            let user_id: U = parse_id(&user, "user")?;
            let item_id: I = parse_id(&item, "item")?;

            match engine.predict(&user_id, &item_id)? {
                Some(predicted) => println!("Predicted score is {:.4}", predicted),
                None => println!("No rated item is similar to item({})", item),
            }
        }

        Statement::Similarity(item_a, item_b) => {
            let id_a: I = parse_id(&item_a, "item")?;
            let id_b: I = parse_id(&item_b, "item")?;

            println!("Similarity is {:.6}", engine.similarity(&id_a, &id_b)?);
        }

        Statement::Similar(item, k) => {
            let id: I = parse_id(&item, "item")?;
            let similar: Vec<_> = engine
                .similar_items(&id, k)?
                .into_iter()
                .map(|(other, sim)| (other, format!("{:.6}", sim)))
                .collect();

            if similar.is_empty() {
                println!("No item is similar to item({})", item);
            } else {
                println!("{}", similar.to_table());
            }
        }

        Statement::Ratings(user) => {
            let id: U = parse_id(&user, "user")?;
            match engine.grid().row(&id) {
                Some(ratings) if !ratings.is_empty() => println!("{}", ratings.to_table()),
                Some(_) => println!("No ratings found for user({})", user),
                None => println!("Couldn't find user({})", user),
            }
        }

        Statement::Users => {
            let users: Vec<_> = engine.grid().users().map(ToString::to_string).collect();
            println!("{}", users.join(", "));
        }

        Statement::Items => {
            let items: Vec<_> = engine.grid().items().map(ToString::to_string).collect();
            println!("{}", items.join(", "));
        }
    }

    Ok(())
}

fn shell<U, I>(engine: &Engine<U, I>, name: &str) -> Result<(), Error>
where
    U: Ord + Clone + Display + FromStr,
    I: Ord + Clone + Display + FromStr,
{
    let mut rl = rustyline::Editor::<()>::new();

    loop {
        let opt: String = prompt!(rl, name)?;

        match opt.trim() {
            "?" | "h" | "help" => print_help(),

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(stmt) => {
                    if let Err(e) = run_statement(engine, stmt) {
                        log::error!("{}", e);
                    }
                }

                None => println!("Invalid syntax! Type 'help' to list statements"),
            },
        }
    }

    Ok(())
}

fn run<C, U, I>(controller: C, config: &Config, matches: &ArgMatches) -> Result<(), Error>
where
    C: Controller<UserId = U, ItemId = I>,
    U: Ord + Clone + Display + FromStr,
    I: Ord + Clone + Display + FromStr,
{
    let engine = Engine::with_controller(&controller, config)?;

    match matches.value_of("user") {
        Some(user) => {
            let id: U = parse_id(user, "user")?;
            let recommendations = match matches.value_of("top") {
                Some(top_n) => engine.recommend(&id, top_n.parse()?)?,
                None => engine.recommend_default(&id)?,
            };

            print_recommendations(user, recommendations);
            Ok(())
        }

        None => {
            println!("Welcome to item-cf {}", VERSION);
            println!("Type 'help' to list the available statements");
            shell(&engine, controller.name())
        }
    }
}

fn init_logger(config: &Config, verbosity: u64) -> Result<(), Error> {
    let level = match verbosity {
        0 => LevelFilter::from_str(&config.log.level)
            .map_err(|_| anyhow!("Invalid log level '{}'", config.log.level))?,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed)?;
    Ok(())
}

fn main() -> Result<(), Error> {
    let matches = App::new("item-cf")
        .version(VERSION)
        .about("Item based collaborative filtering recommendations")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .takes_value(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::with_name("ratings")
                .short("r")
                .long("ratings")
                .value_name("CSV")
                .takes_value(true)
                .help("user,item,rating records, the built-in sample is used if missing"),
        )
        .arg(
            Arg::with_name("no-headers")
                .long("no-headers")
                .requires("ratings")
                .help("The ratings file has no header row"),
        )
        .arg(
            Arg::with_name("user")
                .short("u")
                .long("user")
                .value_name("ID")
                .takes_value(true)
                .help("Print recommendations for this user and exit"),
        )
        .arg(
            Arg::with_name("top")
                .short("n")
                .long("top")
                .value_name("N")
                .takes_value(true)
                .requires("user")
                .help("How many recommendations to print"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .get_matches();

    let config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    init_logger(&config, matches.occurrences_of("verbose"))?;

    match matches.value_of("ratings") {
        Some(path) => {
            let has_headers = !matches.is_present("no-headers");
            run(CsvController::from_path(path, has_headers)?, &config, &matches)
        }

        None => run(MemoryController::sample(), &config, &matches),
    }
}
