use anyhow::{bail, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Numéros possibles : 1..=45.
pub const POOL_SIZE: usize = 45;

/// Numéros principaux par tirage.
pub const PICK_COUNT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draw {
    pub round: u32,
    pub numbers: [u8; PICK_COUNT],
    pub bonus: u8,
    pub date: NaiveDate,
}

impl Draw {
    pub fn contains(&self, n: u8) -> bool {
        self.numbers.contains(&n)
    }
}

pub fn is_valid_number(n: u8) -> bool {
    (1..=POOL_SIZE as u8).contains(&n)
}

pub fn validate_draw(numbers: &[u8; PICK_COUNT], bonus: u8) -> Result<()> {
    for &n in numbers {
        if !is_valid_number(n) {
            bail!("Numéro {} hors limites (1-45)", n);
        }
    }
    if !is_valid_number(bonus) {
        bail!("Bonus {} hors limites (1-45)", bonus);
    }
    for i in 0..numbers.len() {
        for j in (i + 1)..numbers.len() {
            if numbers[i] == numbers[j] {
                bail!("Numéro en double : {}", numbers[i]);
            }
        }
    }
    Ok(())
}
