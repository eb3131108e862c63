//! Utilidades del sistema
//!
//! Manejo de errores, JWT y helpers de validación compartidos.

pub mod errors;
pub mod jwt;
pub mod validation;
