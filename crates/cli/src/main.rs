mod commands;
mod config;
mod view;

use anyhow::Context;
use commands::{parse_command, Command, Target, HELP};
use config::load_game_config;
use crescent_autoplay::{write_json, AutoplayConfig, Autoplayer};
use crescent_core::{AnchorId, Card, Game, GameConfig, GameError, ReshuffleOutcome, Row};
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    config: Option<PathBuf>,
    trace: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--config" | "-c" => {
                if let Some(value) = args.get(idx + 1) {
                    options.config = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--trace" => {
                if let Some(value) = args.get(idx + 1) {
                    options.trace = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            other => warn!("ignoring argument '{other}'"),
        }
        idx += 1;
    }
    options
}

fn build_config(options: &CliOptions) -> anyhow::Result<GameConfig> {
    let mut config = match options.config.as_deref() {
        Some(path) => load_game_config(path)?,
        None => GameConfig::default(),
    };
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    Ok(config)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let outcome = if options.auto {
        run_auto(&options)
    } else {
        run_interactive(&options)
    };
    if let Err(err) = outcome {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn autoplay(game: &mut Game, trace: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = AutoplayConfig {
        seed: game.seed(),
        layout: game.config().layout,
        ..AutoplayConfig::default()
    };
    let result = Autoplayer::new(config).play(game)?;
    println!("{}", result.to_text_report());
    if let Some(path) = trace {
        write_json(path, &result).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

fn run_auto(options: &CliOptions) -> anyhow::Result<()> {
    let mut game = Game::new(build_config(options)?)?;
    autoplay(&mut game, options.trace.as_ref())
}

fn run_interactive(options: &CliOptions) -> anyhow::Result<()> {
    let mut game = Game::new(build_config(options)?)?;
    print_events(&mut game);
    println!("{}", view::render_board(game.state()));
    println!("type 'help' for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        match command {
            Command::Quit => return Ok(()),
            Command::Help => println!("{HELP}"),
            Command::Board => println!("{}", view::render_board(game.state())),
            Command::Auto => autoplay(&mut game, options.trace.as_ref())?,
            other => {
                if let Err(err) = apply(&mut game, other) {
                    println!("{err}");
                }
                print_events(&mut game);
                println!("{}", view::render_board(game.state()));
            }
        }
    }
}

fn apply(game: &mut Game, command: Command) -> Result<(), GameError> {
    match command {
        Command::Place { target, row } => {
            let Some(card) = resolve_target(game, target) else {
                println!("no such card on top of a pile");
                return Ok(());
            };
            if !game.on_pickup(card) {
                println!("{card} is covered");
                return Ok(());
            }
            let rows = match row {
                Some(row) => vec![row],
                None => Row::ORDER.to_vec(),
            };
            let nearby: Vec<AnchorId> = rows
                .into_iter()
                .map(|row| AnchorId::new(row, card.suit))
                .collect();
            game.attempt_placement(card, &nearby)?;
        }
        Command::Hint => match game.request_hint() {
            Some(card) => println!("try {card}"),
            None => println!("no moves; try 'shuffle'"),
        },
        Command::Shuffle => {
            if let ReshuffleOutcome::Reshuffled { piles } = game.request_reshuffle()? {
                debug!("reshuffle produced {} piles", piles.len());
            }
        }
        Command::Direction(row) => game.choose_direction(row)?,
        Command::New => game.request_new_game()?,
        Command::Board | Command::Auto | Command::Help | Command::Quit => {}
    }
    Ok(())
}

fn resolve_target(game: &Game, target: Target) -> Option<Card> {
    match target {
        Target::Pile(index) => game.state().piles().get(index)?.top(),
        Target::Card(card) => Some(card).filter(|card| game.state().locate(*card).is_some()),
    }
}

fn print_events(game: &mut Game) {
    for event in game.drain_events() {
        println!("* {}", view::describe_event(&event));
    }
}
