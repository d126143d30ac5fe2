//! Coordinate checks for job locations picked on the map.

use crate::error::CoreError;

/// Validate an optional latitude/longitude pair.
///
/// Both must be present or both absent, and each must fall inside its range.
pub fn validate_coordinates(latitud: Option<f64>, longitud: Option<f64>) -> Result<(), CoreError> {
    match (latitud, longitud) {
        (None, None) => Ok(()),
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                return Err(CoreError::Validation(
                    "latitud: debe estar entre -90 y 90".into(),
                ));
            }
            if !(-180.0..=180.0).contains(&lon) {
                return Err(CoreError::Validation(
                    "longitud: debe estar entre -180 y 180".into(),
                ));
            }
            Ok(())
        }
        _ => Err(CoreError::Validation(
            "latitud y longitud deben indicarse juntas".into(),
        )),
    }
}
