//! Game-code grammar shared by every game.
//!
//! A code is hyphen-joined fields: a fixed number of positional fields, an
//! optional category that may itself contain hyphens, and the slug last.
//!
//! ```text
//! <f1>-<f2>-...-<fK>-<category-with-hyphens>-<slug>
//! ```
//!
//! Slugs contain hyphens too, so the slug is matched as the longest
//! dictionary entry that ends the code rather than the last bare field.

use crate::error::CodeError;
use crate::slug::{self, SLUG_DICTIONARY, Seed};

/// Separator between fields.
pub const SEPARATOR: char = '-';

/// The decomposed fields of a game code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFields<'a> {
    /// The fixed positional fields, in order.
    pub prefix: Vec<&'a str>,
    /// The category span, re-joined with hyphens. `None` for layouts
    /// without a category.
    pub category: Option<String>,
    /// The decoded seed.
    pub seed: Seed,
}

impl<'a> CodeFields<'a> {
    /// Splits `code` into `prefix_len` positional fields, an optional
    /// category and the terminal slug.
    ///
    /// # Errors
    ///
    /// Returns a `CodeError` when the code is empty, has too few fields,
    /// has an empty positional field or category, has extra fields in a
    /// layout without a category, or ends in something that is not a slug.
    pub fn parse(
        code: &'a str,
        prefix_len: usize,
        with_category: bool,
    ) -> Result<Self, CodeError> {
        if code.is_empty() {
            return Err(CodeError::Empty);
        }

        let (head, seed) = split_slug(code)?;
        let fields: Vec<&'a str> = match head {
            Some(head) => head.split(SEPARATOR).collect(),
            None => Vec::new(),
        };

        let expected = prefix_len + usize::from(with_category);
        if fields.len() < expected || (!with_category && fields.len() != expected) {
            return Err(CodeError::MissingFields {
                expected: expected + 1,
                found: fields.len() + 1,
            });
        }

        let prefix = fields[..prefix_len].to_vec();
        let category = if with_category {
            let joined = fields[prefix_len..].join("-");
            if joined.is_empty() {
                return Err(CodeError::EmptyCategory);
            }
            Some(joined)
        } else {
            None
        };

        Ok(Self {
            prefix,
            category,
            seed,
        })
    }

    /// The positional field at `index`, rejecting empty text.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::EmptyField` if the field is empty or absent.
    pub fn field(&self, index: usize, name: &'static str) -> Result<&'a str, CodeError> {
        match self.prefix.get(index) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(CodeError::EmptyField(name)),
        }
    }

    /// The category span, for layouts that carry one.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::EmptyCategory` when the layout has no category.
    pub fn category(&self) -> Result<&str, CodeError> {
        self.category.as_deref().ok_or(CodeError::EmptyCategory)
    }
}

/// Splits a trailing dictionary slug off `code`.
///
/// Returns the text before the slug (without its separator), or `None`
/// when the whole code is a slug. Longer slugs win, so a code ending in
/// `bet-bet-bet` never resolves to a shorter suffix.
fn split_slug(code: &str) -> Result<(Option<&str>, Seed), CodeError> {
    let mut best: Option<(&'static str, Option<&str>)> = None;
    for entry in SLUG_DICTIONARY {
        let Some(rest) = code.strip_suffix(entry) else {
            continue;
        };
        let head = if rest.is_empty() {
            None
        } else if let Some(stripped) = rest.strip_suffix(SEPARATOR) {
            Some(stripped)
        } else {
            continue;
        };
        if best.is_none_or(|(current, _)| entry.len() > current.len()) {
            best = Some((entry, head));
        }
    }

    let Some((entry, head)) = best else {
        let last = code.rsplit(SEPARATOR).next().unwrap_or(code);
        return Err(CodeError::UnknownSlug(last.to_owned()));
    };
    let seed = slug::decode(entry).ok_or_else(|| CodeError::UnknownSlug(entry.to_owned()))?;
    Ok((head, seed))
}

/// Parses a strict unsigned decimal field and checks `min..=max`.
///
/// # Errors
///
/// Returns `CodeError::InvalidNumber` for non-decimal text (signs and
/// whitespace included) and `CodeError::OutOfRange` for values outside the
/// bounds.
pub fn parse_bounded(field: &'static str, raw: &str, min: u32, max: u32) -> Result<u32, CodeError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodeError::InvalidNumber {
            field,
            value: raw.to_owned(),
        });
    }
    let value: u32 = raw.parse().map_err(|_| CodeError::InvalidNumber {
        field,
        value: raw.to_owned(),
    })?;
    check_bounds(field, value, min, max)
}

/// Checks `value` against inclusive bounds.
///
/// # Errors
///
/// Returns `CodeError::OutOfRange` if `value` is outside `min..=max`.
pub fn check_bounds(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32, CodeError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CodeError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Parses a `0`/`1` flag field.
///
/// # Errors
///
/// Returns `CodeError::UnknownVariant` for anything else.
pub fn parse_flag(field: &'static str, raw: &str) -> Result<bool, CodeError> {
    match raw {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(CodeError::UnknownVariant {
            field,
            value: raw.to_owned(),
        }),
    }
}

/// Joins fields with the separator and appends the seed's slug.
#[must_use]
pub fn join(fields: &[&str], seed: Seed) -> String {
    let mut code = String::new();
    for field in fields {
        code.push_str(field);
        code.push(SEPARATOR);
    }
    code.push_str(seed.slug());
    code
}
