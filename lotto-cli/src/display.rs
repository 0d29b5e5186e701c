use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::import::ImportResult;
use lotto_db::models::Draw;
use lotto_engine::{Combination, Ranking};

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:2}", n))
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Couleur des boules par dizaine, comme sur les bulletins.
fn number_color(n: u8) -> Color {
    match n {
        1..=10 => Color::Yellow,
        11..=20 => Color::Blue,
        21..=30 => Color::Red,
        31..=40 => Color::Grey,
        _ => Color::Green,
    }
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Tirage", "Date", "Numéros", "Bonus"]);

    for draw in draws {
        let mut sorted = draw.numbers;
        sorted.sort();

        table.add_row(vec![
            Cell::new(draw.round),
            Cell::new(draw.date.format("%Y-%m-%d")),
            Cell::new(join_numbers(&sorted)),
            Cell::new(format!("{:2}", draw.bonus)).fg(number_color(draw.bonus)),
        ]);
    }

    println!("{table}");
}

pub fn display_latest(draw: &Draw) {
    println!(
        "\nDernier tirage : n°{} ({})  {}  + {}",
        draw.round,
        draw.date.format("%Y-%m-%d"),
        join_numbers(&draw.numbers),
        draw.bonus
    );
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Total tirages lus : {}", result.total_records);
    println!("  Insérés           : {}", result.inserted);
    println!("  Doublons ignorés  : {}", result.skipped);
    if result.errors > 0 {
        println!("  Erreurs           : {}", result.errors);
    }
    if let Some(update) = &result.last_update {
        println!("  Mise à jour source: {}", update);
    }
}

pub fn display_scores(ranking: &Ranking, top: usize, window: usize) {
    println!("\n📊 Scores sur {} tirages\n", window);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Rang", "Numéro", "Fréquence", "Chaud", "Markov", "Total", "Sorties", "Récentes", "Transitions",
        ]);

    for entry in ranking.top(top) {
        let s = &entry.score;
        table.add_row(vec![
            Cell::new(entry.rank),
            Cell::new(format!("{:2}", entry.number)).fg(number_color(entry.number)),
            Cell::new(format!("{:.1}", s.frequency)),
            Cell::new(format!("{:.1}", s.hot)),
            Cell::new(format!("{:.1}", s.markov)),
            Cell::new(format!("{:.1}", s.total)),
            Cell::new(s.details.total_appearance),
            Cell::new(s.details.recent_appearance),
            Cell::new(s.details.markov_raw),
        ]);
    }
    println!("{table}");
}

/// Numéros d'une grille avec leur rang au classement, ex. "17(3)".
fn numbers_with_rank(combo: &Combination, ranking: &Ranking) -> String {
    combo
        .numbers
        .iter()
        .map(|&n| match ranking.rank_of(n) {
            Some(rank) => format!("{n}({rank})"),
            None => n.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_combinations(title: &str, combos: &[Combination], ranking: &Ranking, lettered: bool) {
    println!("\n{title}\n");

    if combos.is_empty() {
        println!("Aucune grille équilibrée trouvée.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Numéros", "Numéros (rang)", "Score", "Somme", "Impair:Pair"]);

    for combo in combos {
        let label = if lettered {
            char::from(b'A' + (combo.rank - 1) as u8).to_string()
        } else {
            combo.rank.to_string()
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(join_numbers(&combo.numbers)),
            Cell::new(numbers_with_rank(combo, ranking)),
            Cell::new(format!("{:.1}", combo.score)),
            Cell::new(combo.sum),
            Cell::new(combo.odd_even_ratio()),
        ]);
    }
    println!("{table}");
}
