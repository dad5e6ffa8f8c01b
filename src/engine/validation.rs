use crate::domain::{Points, TeamSlot};
use crate::engine::errors::EngineError;

/// Разобрать ввод очков команды за раунд.
///
/// Пустая строка – 0. Иначе целое число >= 0.
pub fn parse_round_input(input: &str, team: TeamSlot) -> Result<Points, EngineError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Points::ZERO);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| EngineError::InvalidRoundInput(team))?;

    if value < 0 {
        return Err(EngineError::InvalidRoundInput(team));
    }

    Ok(Points(value))
}

/// Проверить пару вводов раунда целиком: обе строки корректны и хотя бы одна не ноль.
pub fn validate_round_inputs(
    team1_input: &str,
    team2_input: &str,
) -> Result<(Points, Points), EngineError> {
    let team1 = parse_round_input(team1_input, TeamSlot::First)?;
    let team2 = parse_round_input(team2_input, TeamSlot::Second)?;

    if team1.is_zero() && team2.is_zero() {
        return Err(EngineError::EmptyRound);
    }

    Ok((team1, team2))
}

/// Разобрать нзуль игрока. `None` – поле пустое (нзуля нет).
///
/// Берётся числовой префикс строки, как у `parseFloat`: `"12abc"` – 12,
/// знак и дробная часть допускаются. Строка без числа или бесконечность
/// дают 0.
pub fn parse_nzol(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let value = numeric_prefix(trimmed)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    Some(value)
}

/// Самый длинный префикс вида `[+-]цифры[.цифры][e[+-]цифры]`.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Выплата по нзулю: значение × множитель, округлённое до целого.
pub fn nzol_payout(value: f64, multiplier: i64) -> Points {
    Points((value * multiplier as f64).round() as i64)
}
