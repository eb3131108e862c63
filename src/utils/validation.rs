//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! que no se expresan con los derives de `validator`.

use chrono::{DateTime, Utc};
use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de teléfono (básico)
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 7 || digits > 15 {
        let mut error = ValidationError::new("phone");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar número de pasaporte (clave de negocio de clientes)
pub fn validate_passport(value: &str) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < 5 || len > 20 {
        let mut error = ValidationError::new("passport");
        error.add_param("value".into(), &value.to_string());
        error.add_param("length".into(), &"5-20 characters".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un rango de fechas sea coherente (inicio <= fin)
pub fn validate_date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), ValidationError> {
    if start > end {
        let mut error = ValidationError::new("date_range");
        error.add_param("start".into(), &start.to_rfc3339());
        error.add_param("end".into(), &end.to_rfc3339());
        return Err(error);
    }
    Ok(())
}

/// Validar que un kilometraje no sea negativo
pub fn validate_km(value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        let mut error = ValidationError::new("km");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("test").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("+34 600 111 222").is_ok());
        assert!(validate_phone("123").is_err());
    }

    #[test]
    fn test_validate_passport() {
        assert!(validate_passport("X1234567").is_ok());
        assert!(validate_passport("AB1").is_err());
        assert!(validate_passport(&"A".repeat(25)).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let start = Utc.with_ymd_and_hms(2023, 9, 20, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2023, 9, 25, 0, 0, 0).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        // Un rango de longitud cero es válido
        assert!(validate_date_range(start, start).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }

    #[test]
    fn test_validate_km() {
        assert!(validate_km(0).is_ok());
        assert!(validate_km(5200).is_ok());
        assert!(validate_km(-1).is_err());
    }
}
