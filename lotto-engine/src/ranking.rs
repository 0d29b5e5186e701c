use serde::Serialize;

use crate::scoring::{NumberScore, ScoreBoard};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedEntry {
    pub number: u8,
    pub score: NumberScore,
    /// Position 1-based dans le classement.
    pub rank: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn top(&self, k: usize) -> &[RankedEntry] {
        &self.entries[..k.min(self.entries.len())]
    }

    /// `None` si le classement est vide ou le numéro absent.
    pub fn rank_of(&self, number: u8) -> Option<usize> {
        self.entries.iter().find(|e| e.number == number).map(|e| e.rank)
    }

    pub fn get(&self, number: u8) -> Option<&RankedEntry> {
        self.entries.iter().find(|e| e.number == number)
    }
}

/// Tri décroissant par score total. Le tri est stable et part de l'ordre croissant des
/// numéros : à égalité, le plus petit numéro passe devant.
pub fn rank_numbers(board: &ScoreBoard) -> Ranking {
    let mut scores: Vec<NumberScore> = board.records().to_vec();
    scores.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));

    let entries = scores
        .into_iter()
        .enumerate()
        .map(|(i, score)| RankedEntry {
            number: score.number,
            score,
            rank: i + 1,
        })
        .collect();

    Ranking { entries }
}
