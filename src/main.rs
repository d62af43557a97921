// src/main.rs
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat::{BattleConsole, BattleResult, Monster, MonsterKind, SeededRng};
use error::{GameError, handle_error};
use hero::{Class, Player, SkillCatalog};
use quests::QuestLog;
use terminal_quest::{Game, GameConfig, Profile, TextConsole};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Turn-based battles in the terminal
#[derive(Parser, Debug)]
#[command(name = "terminal_quest", version, about = "Fight monsters, level up, finish quests")]
struct Args {
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file
    #[arg(short, long, default_value = "terminal_quest.json")]
    config: PathBuf,

    /// Profile file to load and save
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Class for a new character
    #[arg(long)]
    class: Option<Class>,

    /// Fight this monster every time instead of a random one
    #[arg(short, long)]
    monster: Option<String>,

    /// Stop after this many battles
    #[arg(short, long)]
    battles: Option<u32>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        match e.downcast_ref::<GameError>() {
            Some(game_error) => eprintln!("{}", handle_error(game_error)),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = GameConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(class) = args.class {
        config.class = class;
    }
    if let Some(path) = args.profile {
        config.profile = path;
    }

    let fixed_monster = args
        .monster
        .as_deref()
        .map(|name| {
            name.parse::<MonsterKind>()
                .map_err(|_| GameError::UnknownMonster(name.to_string()))
        })
        .transpose()?;

    let profile = match Profile::load(&config.profile)? {
        Some(profile) if profile.player.is_alive() => profile,
        _ => {
            let player = Player::new(&config.player_name, config.class, &SkillCatalog::standard());
            info!(class = %config.class, "starting a new character");
            Profile::new(player, QuestLog::new())
        }
    };

    let rng = config.seed.map(SeededRng::new).unwrap_or_else(SeededRng::from_entropy);
    info!(seed = rng.seed(), "rng ready");

    let stdin = io::stdin();
    let mut console = TextConsole::new(stdin.lock(), io::stdout());
    let mut game = Game::new(profile, rng, config.combat);

    console.narrate(&format!(
        "Welcome, {} the {} (level {}, {} gold).",
        game.player.name,
        game.player.class,
        game.player.level(),
        game.player.gold()
    ));

    let mut fought = 0;
    loop {
        let monster = match fixed_monster {
            Some(kind) => Monster::new(kind),
            None => game.random_monster(),
        };
        let result = game.encounter(&mut console, monster);
        fought += 1;

        match result {
            BattleResult::Defeat => {
                console.narrate("Your journey ends here.");
                break;
            }
            BattleResult::Error => {
                warn!("stopping after a failed battle");
                break;
            }
            BattleResult::Victory | BattleResult::Escaped => {}
        }

        if args.battles.is_some_and(|limit| fought >= limit) {
            break;
        }
        if !console
            .confirm("Fight another monster?")
            .context("Failed to read from the console")?
        {
            break;
        }
    }

    let path = config.profile.clone();
    if game.player.is_alive() {
        game.into_profile()
            .save(&path)
            .with_context(|| format!("Failed to save profile to {}", path.display()))?;
        println!("Progress saved to {}.", path.display());
    }
    Ok(())
}
