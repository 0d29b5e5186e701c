mod display;
mod import;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use crate::display::{
    display_combinations, display_draws, display_import_summary, display_latest, display_scores,
};
use crate::import::parse_date;
use lotto_db::db::{count_draws, db_path, fetch_all_draws, fetch_last_draws, insert_draw, latest_round, migrate, open_db};
use lotto_db::models::{validate_draw, Draw, PICK_COUNT};
use lotto_db::rusqlite::Connection;
use lotto_engine::input::parse_optional_pick;
use lotto_engine::{
    best_combinations, compute_scores, load_config, parse_pick, rank_numbers,
    weighted_random_combinations, EngineConfig, Preferences, Ranking, ScoreBoard,
};

#[derive(Parser)]
#[command(name = "lotto", about = "Recommandation de grilles Lotto 6/45")]
struct Cli {
    /// Configuration du moteur (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importer l'historique depuis un fichier JSON
    Import {
        /// Chemin vers le fichier JSON
        #[arg(short, long, default_value = "lotto-data.json")]
        file: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,

    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Afficher les scores par numéro (fréquence, chauds, Markov)
    Stats {
        /// Nombre de numéros à afficher
        #[arg(short, long, default_value = "45")]
        top: usize,
    },

    /// Meilleures grilles équilibrées (recherche exhaustive)
    Best {
        /// Numéro imposé dans chaque grille (1-45)
        #[arg(short, long)]
        required: Option<String>,
    },

    /// Grilles aléatoires pondérées par les scores
    Random {
        /// Numéro favori, présent dans chaque grille (1-45)
        #[arg(short, long)]
        like: Option<String>,

        /// Numéro à exclure (1-45)
        #[arg(short, long)]
        dislike: Option<String>,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Ajouter un tirage manuellement
    Add,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { top } => cmd_stats(&conn, &config, top),
        Command::Best { required } => cmd_best(&conn, &config, required.as_deref()),
        Command::Random { like, dislike, seed } => {
            let prefs = Preferences {
                liked: parse_optional_pick(like.as_deref()),
                disliked: parse_optional_pick(dislike.as_deref()),
            };
            cmd_random(&conn, &config, &prefs, seed)
        }
        Command::Add => cmd_add(&conn),
    }
}

/// Historique complet, scores et classement. `None` si la base est vide.
fn load_analysis(conn: &Connection, config: &EngineConfig) -> Result<Option<(Vec<Draw>, ScoreBoard, Ranking)>> {
    if count_draws(conn)? == 0 {
        println!("Base vide. Lancez d'abord : lotto import");
        return Ok(None);
    }
    let draws = fetch_all_draws(conn)?;
    let board = compute_scores(&draws, config);
    let ranking = rank_numbers(&board);
    Ok(Some((draws, board, ranking)))
}

fn cmd_import(conn: &Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_json(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &Connection, last: u32) -> Result<()> {
    if count_draws(conn)? == 0 {
        println!("Base vide. Lancez d'abord : lotto import");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    if let Some(round) = latest_round(conn)? {
        println!("Dernier tirage en base : n°{round}");
    }
    Ok(())
}

fn cmd_stats(conn: &Connection, config: &EngineConfig, top: usize) -> Result<()> {
    let Some((draws, _, ranking)) = load_analysis(conn, config)? else {
        return Ok(());
    };
    display_latest(&draws[0]);
    display_scores(&ranking, top, draws.len());
    Ok(())
}

fn cmd_best(conn: &Connection, config: &EngineConfig, required: Option<&str>) -> Result<()> {
    let Some((draws, _, ranking)) = load_analysis(conn, config)? else {
        return Ok(());
    };
    let required = required.and_then(parse_pick);
    let combos = best_combinations(&ranking, required, config);

    display_latest(&draws[0]);
    let title = match required {
        Some(n) => format!("✨ Meilleures grilles pour le tirage n°{} (avec {n})", draws[0].round + 1),
        None => format!("✨ Meilleures grilles pour le tirage n°{}", draws[0].round + 1),
    };
    display_combinations(&title, &combos, &ranking, false);
    Ok(())
}

fn cmd_random(conn: &Connection, config: &EngineConfig, prefs: &Preferences, seed: Option<u64>) -> Result<()> {
    let Some((_, board, ranking)) = load_analysis(conn, config)? else {
        return Ok(());
    };
    let combos = weighted_random_combinations(&board, prefs, config, seed);
    if combos.len() < config.result_count {
        println!(
            "Seulement {} grille(s) équilibrée(s) trouvée(s) en {} essais.",
            combos.len(),
            config.max_attempts
        );
    }
    display_combinations("🎲 Grilles pondérées", &combos, &ranking, true);
    Ok(())
}

fn cmd_add(conn: &Connection) -> Result<()> {
    println!("Ajout d'un tirage manuellement\n");

    let round: u32 = prompt("Numéro du tirage (ex: 1102) : ")?
        .parse()
        .context("Numéro de tirage invalide")?;
    let date = parse_date(&prompt("Date (AAAA-MM-JJ) : ")?)?;
    let numbers = prompt_numbers()?;
    let bonus = prompt_bonus()?;

    validate_draw(&numbers, bonus)?;

    let draw = Draw {
        round,
        numbers,
        bonus,
        date,
    };

    println!("\nTirage à insérer :");
    display_draws(std::slice::from_ref(&draw));

    let confirm = prompt("\nConfirmer l'insertion ? (o/n) : ")?;
    if confirm.trim().to_lowercase() == "o" {
        let inserted = insert_draw(conn, &draw)?;
        if inserted {
            println!("Tirage inséré avec succès.");
        } else {
            println!("Ce tirage existe déjà (doublon ignoré).");
        }
    } else {
        println!("Insertion annulée.");
    }

    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        bail!("Entrée fermée");
    }
    Ok(input.trim().to_string())
}

fn prompt_numbers() -> Result<[u8; PICK_COUNT]> {
    loop {
        let input = prompt("6 numéros (séparés par des espaces, 1-45) : ")?;
        let nums: Result<Vec<u8>, _> = input.split_whitespace().map(|s| s.parse::<u8>()).collect();
        match nums {
            Ok(v) if v.len() == PICK_COUNT => {
                let mut arr = [0u8; PICK_COUNT];
                arr.copy_from_slice(&v);
                arr.sort();
                if validate_draw(&arr, 1).is_ok() {
                    return Ok(arr);
                }
                println!("Numéros invalides (1-45, pas de doublons). Réessayez.");
            }
            _ => println!("Entrez exactement 6 numéros. Réessayez."),
        }
    }
}

fn prompt_bonus() -> Result<u8> {
    loop {
        let input = prompt("Numéro bonus (1-45) : ")?;
        match parse_pick(&input) {
            Some(n) => return Ok(n),
            None => println!("Bonus invalide (1-45). Réessayez."),
        }
    }
}
