//! Servicio de autenticación
//!
//! Verifica credenciales contra la tabla de usuarios y emite el JWT
//! que la consola guarda en el navegador.

use sqlx::PgPool;

use crate::models::user::{User, UserStatus};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthService {
    users: UserRepository,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt,
        }
    }

    /// Verifica usuario y contraseña; devuelve el token y el usuario.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        if user.status != UserStatus::Active {
            return Err(AppError::Unauthorized(
                "Usuario inactivo o suspendido".to_string(),
            ));
        }

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando contraseña: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, user.role, user.branch_id, &self.jwt)?;
        Ok((token, user))
    }
}

/// Hashear una contraseña con bcrypt
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::Hash(format!("Error hasheando contraseña: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_verifies() {
        let hash = hash_password("secreto123").unwrap();
        assert!(bcrypt::verify("secreto123", &hash).unwrap());
        assert!(!bcrypt::verify("otro", &hash).unwrap());
    }
}
