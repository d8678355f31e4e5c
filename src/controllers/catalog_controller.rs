//! Controller del catálogo público
//!
//! Toma un snapshot del inventario y delega el filtrado al motor puro.
//! Los vendidos nunca salen en el listado público; la ficha individual
//! sí resuelve vehículos vendidos (la página de detalle los muestra).

use sqlx::PgPool;

use crate::dto::car_dto::CarResponse;
use crate::dto::catalog_dto::FacetsResponse;
use crate::repositories::car_repository::CarRepository;
use crate::services::catalog_service::{self, FilterQuery};
use crate::utils::errors::{not_found_error, AppResult};

pub struct CatalogController {
    repository: CarRepository,
}

impl CatalogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn browse(&self, query: FilterQuery) -> AppResult<Vec<CarResponse>> {
        let snapshot = self.repository.list_all().await?;
        let filtered = catalog_service::filter_catalog(snapshot, &query);

        Ok(filtered.into_iter().map(CarResponse::from).collect())
    }

    /// Vocabularios de facetas: se recalculan sobre la colección vigente
    /// en cada request, sin caché (el inventario puede cambiar debajo).
    /// Se derivan de los vehículos disponibles, que es lo que ve el
    /// buscador público.
    pub async fn facets(&self) -> AppResult<FacetsResponse> {
        let snapshot = self.repository.list_all().await?;
        let available = catalog_service::filter_catalog(snapshot, &FilterQuery::default());

        Ok(FacetsResponse {
            makes: catalog_service::distinct_makes(&available),
            body_types: catalog_service::distinct_body_types(&available),
        })
    }

    pub async fn detail(&self, id: i32) -> AppResult<CarResponse> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Car", &id.to_string()))?;

        Ok(CarResponse::from(car))
    }
}
