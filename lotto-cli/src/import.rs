use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use lotto_db::rusqlite::Connection;
use serde::Deserialize;
use std::path::Path;

use lotto_db::db::insert_draw;
use lotto_db::models::{validate_draw, Draw, PICK_COUNT};

/// Fichier d'historique : `{ "latestRound", "lastUpdate", "data": [...] }`, plus récent d'abord.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFile {
    #[serde(default)]
    pub latest_round: Option<u32>,
    #[serde(default)]
    pub last_update: Option<String>,
    pub data: Vec<DrawRecord>,
}

#[derive(Debug, Deserialize)]
pub struct DrawRecord {
    pub round: u32,
    pub numbers: Vec<u8>,
    pub bonus: u8,
    pub date: String,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .with_context(|| format!("Format de date invalide: '{}'", raw))
}

fn parse_record(record: &DrawRecord) -> Result<Draw> {
    if record.numbers.len() != PICK_COUNT {
        bail!(
            "Tirage {} : {} numéros au lieu de {}",
            record.round,
            record.numbers.len(),
            PICK_COUNT
        );
    }
    let mut numbers = [0u8; PICK_COUNT];
    numbers.copy_from_slice(&record.numbers);
    numbers.sort();

    validate_draw(&numbers, record.bonus)
        .with_context(|| format!("Tirage {} invalide", record.round))?;

    Ok(Draw {
        round: record.round,
        numbers,
        bonus: record.bonus,
        date: parse_date(&record.date)?,
    })
}

pub struct ImportResult {
    pub total_records: u32,
    pub inserted: u32,
    pub skipped: u32,
    pub errors: u32,
    pub last_update: Option<String>,
}

pub fn import_history(conn: &Connection, history: &HistoryFile) -> Result<ImportResult> {
    let tx = conn.unchecked_transaction()
        .context("Impossible de démarrer la transaction")?;

    let mut result = ImportResult {
        total_records: 0,
        inserted: 0,
        skipped: 0,
        errors: 0,
        last_update: history.last_update.clone(),
    };

    for record in &history.data {
        result.total_records += 1;
        match parse_record(record) {
            Ok(draw) => match insert_draw(&tx, &draw) {
                Ok(true) => result.inserted += 1,
                Ok(false) => result.skipped += 1,
                Err(e) => {
                    log::warn!("Erreur insertion tirage {}: {:#}", record.round, e);
                    result.errors += 1;
                }
            },
            Err(e) => {
                log::warn!("Tirage rejeté: {:#}", e);
                result.errors += 1;
            }
        }
    }

    tx.commit().context("Échec du commit")?;

    if let Some(latest) = history.latest_round {
        log::debug!("Dernier tirage annoncé par la source : {}", latest);
    }
    log::info!(
        "Import : {} lus, {} insérés, {} doublons, {} erreurs",
        result.total_records,
        result.inserted,
        result.skipped,
        result.errors
    );
    Ok(result)
}

pub fn import_json(conn: &Connection, path: &Path) -> Result<ImportResult> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible d'ouvrir {:?}", path))?;
    let history: HistoryFile = serde_json::from_str(&json)
        .with_context(|| format!("Historique JSON invalide {:?}", path))?;
    import_history(conn, &history)
}
