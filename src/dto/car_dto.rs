//! DTOs de vehículos para la API
//!
//! Los requests llegan en camelCase (el formato que envía el front del
//! showroom); las responses salen con los nombres de columna, igual que
//! las filas crudas que servía la función original.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::Car;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    pub year: i32,

    pub price: f64,

    pub mileage: i32,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub fuel_type: String,

    #[serde(default)]
    pub transmission: String,

    #[serde(default)]
    pub body_type: String,

    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub sold: bool,
}

/// Request para actualizar un vehículo existente.
/// Los campos ausentes conservan su valor actual.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    pub year: Option<i32>,
    pub price: Option<f64>,
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

/// Parámetros de la vista admin del inventario
#[derive(Debug, Deserialize)]
pub struct InventoryQueryParams {
    pub search: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: String,
    pub title: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: String,
    pub mileage: i32,
    pub image_url: String,
    pub fuel_type: String,
    pub transmission: String,
    pub body_type: String,
    pub color: String,
    pub description: String,
    pub features: Vec<String>,
    pub sold: bool,
    pub created_at: String,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.to_string(),
            title: car.title,
            make: car.make,
            model: car.model,
            year: car.year,
            price: car.price.to_string(),
            mileage: car.mileage,
            image_url: car.image_url,
            fuel_type: car.fuel_type,
            transmission: car.transmission,
            body_type: car.body_type,
            color: car.color,
            description: car.description,
            features: car.features.0,
            sold: car.sold,
            created_at: car.created_at.to_rfc3339(),
        }
    }
}

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
