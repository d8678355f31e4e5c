//! Controller del inventario (panel admin)

use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::car_dto::{ApiResponse, CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::models::car::{CarChanges, NewCar};
use crate::repositories::car_repository::CarRepository;
use crate::services::catalog_service;
use crate::utils::errors::{not_found_error, validation_error, AppResult};
use crate::utils::validation;

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    /// Inventario completo para el panel, vendidos incluidos.
    /// `search` aplica solo el predicado de texto de la vista admin.
    pub async fn list(&self, search: Option<String>) -> AppResult<Vec<CarResponse>> {
        let cars = self.repository.list_all().await?;

        let cars = match search {
            Some(term) => catalog_service::search_inventory(cars, &term),
            None => cars,
        };

        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn create(
        &self,
        request: CreateCarRequest,
    ) -> AppResult<ApiResponse<CarResponse>> {
        request.validate()?;
        validate_listing_fields(
            &request.title,
            &request.make,
            &request.model,
            Some(request.year),
            Some(request.price),
            Some(request.mileage),
        )?;

        let car = self
            .repository
            .create(NewCar {
                title: request.title,
                make: request.make,
                model: request.model,
                year: request.year,
                price: to_price(request.price)?,
                mileage: request.mileage,
                image_url: request.image_url,
                fuel_type: request.fuel_type,
                transmission: request.transmission,
                body_type: request.body_type,
                color: request.color,
                description: request.description,
                features: request.features,
                sold: request.sold,
            })
            .await?;

        log::info!("🚗 Vehículo creado: id={} '{}'", car.id, car.title);

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<CarResponse> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(CarResponse::from(car))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateCarRequest,
    ) -> AppResult<ApiResponse<CarResponse>> {
        request.validate()?;
        if let Some(year) = request.year {
            if validation::validate_model_year(year).is_err() {
                return Err(validation_error("year", "año fuera del rango plausible"));
            }
        }
        if let Some(price) = request.price {
            if validation::validate_non_negative(price).is_err() {
                return Err(validation_error("price", "el precio no puede ser negativo"));
            }
        }
        if let Some(mileage) = request.mileage {
            if validation::validate_non_negative(mileage).is_err() {
                return Err(validation_error("mileage", "el kilometraje no puede ser negativo"));
            }
        }

        let changes = CarChanges {
            title: request.title,
            make: request.make,
            model: request.model,
            year: request.year,
            price: request.price.map(to_price).transpose()?,
            mileage: request.mileage,
            image_url: request.image_url,
            fuel_type: request.fuel_type,
            transmission: request.transmission,
            body_type: request.body_type,
            color: request.color,
            description: request.description,
            features: request.features,
            sold: request.sold,
        };

        let car = self.repository.update(id, changes).await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("🗑️ Vehículo eliminado: id={}", id);
        Ok(())
    }

    pub async fn toggle_sold(&self, id: i32) -> AppResult<ApiResponse<CarResponse>> {
        let car = self.repository.toggle_sold(id).await?;
        log::info!("🔄 Vehículo id={} marcado sold={}", car.id, car.sold);

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Estado del vehículo actualizado".to_string(),
        ))
    }
}

/// Validación de frontera para los campos del listado. Las categorías
/// abiertas (carrocería, combustible, transmisión) no se validan: el
/// inventario puede traer valores nuevos en cualquier momento.
fn validate_listing_fields(
    title: &str,
    make: &str,
    model: &str,
    year: Option<i32>,
    price: Option<f64>,
    mileage: Option<i32>,
) -> AppResult<()> {
    if validation::validate_not_empty(title).is_err() {
        return Err(validation_error("title", "el título es requerido"));
    }
    if validation::validate_not_empty(make).is_err() {
        return Err(validation_error("make", "la marca es requerida"));
    }
    if validation::validate_not_empty(model).is_err() {
        return Err(validation_error("model", "el modelo es requerido"));
    }
    if let Some(year) = year {
        if validation::validate_model_year(year).is_err() {
            return Err(validation_error("year", "año fuera del rango plausible"));
        }
    }
    if let Some(price) = price {
        if validation::validate_non_negative(price).is_err() {
            return Err(validation_error("price", "el precio no puede ser negativo"));
        }
    }
    if let Some(mileage) = mileage {
        if validation::validate_non_negative(mileage).is_err() {
            return Err(validation_error("mileage", "el kilometraje no puede ser negativo"));
        }
    }
    Ok(())
}

fn to_price(value: f64) -> AppResult<Decimal> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| validation_error("price", "valor de precio inválido"))
}
