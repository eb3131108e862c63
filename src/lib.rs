//! Backend de la consola administrativa de alquiler de vehículos
//!
//! El núcleo es el motor de reservas y consistencia de flota: el resolutor
//! de disponibilidad, el controlador del ciclo de vida de reservas y el
//! sincronizador de estado de flota, todos detrás de puertos de
//! almacenamiento explícitos. Alrededor, la API REST de la consola:
//! autenticación JWT, CRUD de empresas, sucursales, usuarios, vehículos y
//! clientes, y el dashboard de estadísticas.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
