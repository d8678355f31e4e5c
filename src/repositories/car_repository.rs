//! Repositorio de la tabla cars
//!
//! Única puerta de acceso al almacenamiento canónico de vehículos.
//! El motor de filtrado trabaja siempre sobre snapshots de `list_all`,
//! nunca contra la base directamente.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::car::{Car, CarChanges, NewCar};
use crate::utils::errors::{not_found_error, AppResult};

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Snapshot completo del inventario, más recientes primero
    pub async fn list_all(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn create(&self, new_car: NewCar) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (title, make, model, year, price, mileage, image_url,
                              fuel_type, transmission, body_type, color, description,
                              features, sold)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(new_car.title)
        .bind(new_car.make)
        .bind(new_car.model)
        .bind(new_car.year)
        .bind(new_car.price)
        .bind(new_car.mileage)
        .bind(new_car.image_url)
        .bind(new_car.fuel_type)
        .bind(new_car.transmission)
        .bind(new_car.body_type)
        .bind(new_car.color)
        .bind(new_car.description)
        .bind(Json(new_car.features))
        .bind(new_car.sold)
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    /// Actualización parcial: los campos ausentes conservan el valor
    /// actual de la fila. created_at no se toca nunca.
    pub async fn update(&self, id: i32, changes: CarChanges) -> AppResult<Car> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET title = $2, make = $3, model = $4, year = $5, price = $6,
                mileage = $7, image_url = $8, fuel_type = $9, transmission = $10,
                body_type = $11, color = $12, description = $13, features = $14,
                sold = $15
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(changes.title.unwrap_or(current.title))
        .bind(changes.make.unwrap_or(current.make))
        .bind(changes.model.unwrap_or(current.model))
        .bind(changes.year.unwrap_or(current.year))
        .bind(changes.price.unwrap_or(current.price))
        .bind(changes.mileage.unwrap_or(current.mileage))
        .bind(changes.image_url.unwrap_or(current.image_url))
        .bind(changes.fuel_type.unwrap_or(current.fuel_type))
        .bind(changes.transmission.unwrap_or(current.transmission))
        .bind(changes.body_type.unwrap_or(current.body_type))
        .bind(changes.color.unwrap_or(current.color))
        .bind(changes.description.unwrap_or(current.description))
        .bind(Json(changes.features.unwrap_or(current.features.0)))
        .bind(changes.sold.unwrap_or(current.sold))
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Car", &id.to_string()));
        }

        Ok(())
    }

    /// Alternar el flag de vendido. Sin máquina de estados: cualquier
    /// transición es válida en cualquier momento.
    pub async fn toggle_sold(&self, id: i32) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            "UPDATE cars SET sold = NOT sold WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(car)
    }
}
