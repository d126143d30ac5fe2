//! Slug generation and validation for the reference tables.

use crate::error::CoreError;

/// Maximum slug length accepted by the lookup tables.
pub const MAX_SLUG_LEN: usize = 100;

/// Fold the accented letters used in Spanish names to their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'ä' | 'â' => 'a',
        'é' | 'è' | 'ë' | 'ê' => 'e',
        'í' | 'ì' | 'ï' | 'î' => 'i',
        'ó' | 'ò' | 'ö' | 'ô' => 'o',
        'ú' | 'ù' | 'ü' | 'û' => 'u',
        'ñ' => 'n',
        other => other,
    }
}

/// Generate a URL-safe slug from a display name.
///
/// Lower-cases, folds accents, replaces every other character with a hyphen,
/// collapses consecutive hyphens and trims them from both ends.
pub fn generate_slug(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_hyphen = false;

    for c in name.to_lowercase().chars().map(fold_accent) {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    result.trim_matches('-').to_string()
}

/// Validate a slug (non-empty, bounded, lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("El slug no puede estar vacío".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "El slug no puede superar {MAX_SLUG_LEN} caracteres"
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "El slug solo admite letras minúsculas, números y guiones".into(),
        ));
    }
    Ok(())
}

/// Use the explicit slug when given, otherwise derive one from `name`.
pub fn resolve_slug(explicit: Option<&str>, name: &str) -> Result<String, CoreError> {
    let slug = match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.to_string(),
        None => generate_slug(name),
    };
    validate_slug(&slug)?;
    Ok(slug)
}
