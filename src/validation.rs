use chrono::{NaiveDate, Utc};

use crate::errors::{FieldViolation, ValidationError};
use crate::structs::input::{NewPerson, RawPersonInput};

pub const NICKNAME_MAX_CHARS: usize = 32;
pub const NAME_MAX_CHARS: usize = 100;
pub const STACK_ENTRY_MAX_CHARS: usize = 32;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks every field constraint and collects all violations before
/// failing, so the caller can report them in one response. Violation
/// fields use the wire names (`apelido`, `nome`, `nascimento`, `stack`).
pub fn validate(input: RawPersonInput) -> Result<NewPerson, ValidationError> {
    let mut violations = Vec::new();

    let nickname = required_text("apelido", input.nickname, NICKNAME_MAX_CHARS, &mut violations);
    let name = required_text("nome", input.name, NAME_MAX_CHARS, &mut violations);

    let birth_date = match input.birth_date {
        None => {
            violations.push(FieldViolation::new("nascimento", "is required"));
            None
        }
        Some(raw) => match NaiveDate::parse_from_str(&raw, BIRTH_DATE_FORMAT) {
            Ok(date) if date > Utc::now().date_naive() => {
                violations.push(FieldViolation::new("nascimento", "must not be in the future"));
                None
            }
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::new(
                    "nascimento",
                    "must be a YYYY-MM-DD calendar date",
                ));
                None
            }
        },
    };

    if let Some(stacks) = &input.stacks {
        for (position, stack) in stacks.iter().enumerate() {
            if stack.is_empty() {
                violations.push(FieldViolation::new(
                    format!("stack[{position}]"),
                    "must not be empty",
                ));
            } else if stack.chars().count() > STACK_ENTRY_MAX_CHARS {
                violations.push(FieldViolation::new(
                    format!("stack[{position}]"),
                    format!("must be at most {STACK_ENTRY_MAX_CHARS} characters"),
                ));
            }
        }
    }

    match (nickname, name, birth_date) {
        (Some(nickname), Some(name), Some(birth_date)) if violations.is_empty() => Ok(NewPerson {
            nickname,
            name,
            birth_date,
            stacks: input.stacks,
        }),
        _ => Err(ValidationError { violations }),
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
        Some(text) if text.is_empty() => {
            violations.push(FieldViolation::new(field, "must not be empty"));
            None
        }
        Some(text) if text.chars().count() > max_chars => {
            violations.push(FieldViolation::new(
                field,
                format!("must be at most {max_chars} characters"),
            ));
            None
        }
        Some(text) => Some(text),
    }
}
