//! DTOs del catálogo público

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::services::catalog_service::FilterQuery;

/// Parámetros de búsqueda/facetas del catálogo.
/// Un parámetro ausente, vacío o con el valor reservado "all" significa
/// "no filtrar por esta faceta" (mismo centinela que usa el selector
/// del front).
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQueryParams {
    pub search: Option<String>,
    pub make: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub body_type: Option<String>,
}

impl CatalogQueryParams {
    pub fn into_filter_query(self) -> FilterQuery {
        let price_range = if self.price_min.is_none() && self.price_max.is_none() {
            None
        } else {
            let min = self
                .price_min
                .and_then(Decimal::from_f64_retain)
                .unwrap_or(Decimal::ZERO);
            let max = self
                .price_max
                .and_then(Decimal::from_f64_retain)
                .unwrap_or(Decimal::MAX);
            Some((min, max))
        };

        FilterQuery {
            search_term: self.search.unwrap_or_default(),
            make: facet_value(self.make),
            price_range,
            body_type: facet_value(self.body_type),
        }
    }
}

/// Normaliza el centinela "all"/vacío a None
fn facet_value(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != "all")
}

/// Vocabularios de facetas derivados del inventario vigente
#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub makes: Vec<String>,
    pub body_types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_means_no_facet_filter() {
        let params = CatalogQueryParams {
            make: Some("all".to_string()),
            body_type: Some("".to_string()),
            ..Default::default()
        };

        let query = params.into_filter_query();
        assert!(query.make.is_none());
        assert!(query.body_type.is_none());
        assert!(query.price_range.is_none());
    }

    #[test]
    fn test_missing_price_bound_defaults_to_open_end() {
        let params = CatalogQueryParams {
            price_min: Some(200_000.0),
            ..Default::default()
        };

        let query = params.into_filter_query();
        let (min, max) = query.price_range.unwrap();
        assert_eq!(min, Decimal::from(200_000));
        assert_eq!(max, Decimal::MAX);
    }
}
