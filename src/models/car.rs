//! Modelo de Car
//!
//! Este módulo contiene el struct Car y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL de la tabla `cars`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Car principal - mapea exactamente a la tabla cars
///
/// `body_type`, `fuel_type` y `transmission` son conjuntos abiertos de
/// strings: el inventario puede introducir categorías nuevas en cualquier
/// momento y el catálogo nunca las rechaza.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i32,
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub mileage: i32,
    pub image_url: String,
    pub fuel_type: String,
    pub transmission: String,
    pub body_type: String,
    pub color: String,
    pub description: String,
    pub features: Json<Vec<String>>,
    pub sold: bool,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un vehículo nuevo (sin id ni created_at,
/// los asigna la base de datos y no se mutan después)
#[derive(Debug, Clone)]
pub struct NewCar {
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub mileage: i32,
    pub image_url: String,
    pub fuel_type: String,
    pub transmission: String,
    pub body_type: String,
    pub color: String,
    pub description: String,
    pub features: Vec<String>,
    pub sold: bool,
}

/// Cambios parciales sobre un vehículo existente.
/// Los campos en None conservan el valor actual de la fila.
#[derive(Debug, Clone, Default)]
pub struct CarChanges {
    pub title: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub mileage: Option<i32>,
    pub image_url: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub body_type: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub sold: Option<bool>,
}
