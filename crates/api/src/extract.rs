//! Request extractors that reject with the standard error envelope.
//!
//! axum's built-in `Json`, `Query`, and `Path` reject with plain-text bodies;
//! these wrappers route their rejections through [`AppError`] instead.
//! [`ValidatedJson`] additionally runs the DTO's `validator` rules.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use bolsa_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// `Query<T>` with envelope rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// `Path<T>` with envelope rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// JSON body deserialized into `T` and checked with [`Validate`].
///
/// Malformed JSON yields `400 BAD_REQUEST`; rule violations yield
/// `400 VALIDATION_ERROR` listing every offending field.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(validation_error)?;
        Ok(ValidatedJson(value))
    }
}

/// Flatten validator output into a single `campo: mensaje` list, sorted by field.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = to_camel_case(&field);
            errs.iter()
                .map(|e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("no es válido ({})", e.code));
                    format!("{field}: {msg}")
                })
                .collect::<Vec<_>>()
        })
        .collect();
    fields.sort();

    AppError::Core(CoreError::Validation(format!(
        "Error de validación: {}",
        fields.join(", ")
    )))
}

/// Field names are reported the way clients send them.
fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 3, message = "es demasiado corto"))]
        nombre_empresa: String,
        #[validate(email(message = "debe ser un email válido"))]
        email_contacto: String,
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("carta_presentacion"), "cartaPresentacion");
        assert_eq!(to_camel_case("titulo"), "titulo");
    }

    #[test]
    fn validation_errors_list_every_field() {
        let sample = Sample {
            nombre_empresa: "ab".into(),
            email_contacto: "nope".into(),
        };
        let err = validation_error(sample.validate().unwrap_err());
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg))
                if msg == "Error de validación: emailContacto: debe ser un email válido, nombreEmpresa: es demasiado corto"
        );
    }
}
