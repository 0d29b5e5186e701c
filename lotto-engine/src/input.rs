use lotto_db::models::is_valid_number;

/// Numéro saisi par l'utilisateur (favori, exclu, imposé). Tout ce qui n'est pas un entier
/// de 1 à 45 vaut "pas de préférence".
pub fn parse_pick(raw: &str) -> Option<u8> {
    let value: i64 = raw.trim().parse().ok()?;
    u8::try_from(value).ok().filter(|&n| is_valid_number(n))
}

pub fn parse_optional_pick(raw: Option<&str>) -> Option<u8> {
    raw.and_then(parse_pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_picks() {
        assert_eq!(parse_pick("1"), Some(1));
        assert_eq!(parse_pick("45"), Some(45));
        assert_eq!(parse_pick(" 17 "), Some(17));
    }

    #[test]
    fn test_invalid_picks_are_absent() {
        for raw in ["", "0", "46", "-3", "abc", "7.5", "300", "99999999999999999999"] {
            assert_eq!(parse_pick(raw), None, "'{raw}'");
        }
    }

    #[test]
    fn test_optional_pick() {
        assert_eq!(parse_optional_pick(None), None);
        assert_eq!(parse_optional_pick(Some("12")), Some(12));
        assert_eq!(parse_optional_pick(Some("x")), None);
    }
}
