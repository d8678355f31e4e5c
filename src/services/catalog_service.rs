//! Motor de filtrado del catálogo
//!
//! Funciones puras sobre un snapshot del inventario: no mutan los
//! registros, no re-ordenan (filtro estable) y no guardan estado entre
//! invocaciones. Pueden llamarse concurrentemente sin coordinación.

use rust_decimal::Decimal;

use crate::models::car::Car;

/// Criterios activos de una sesión de búsqueda del catálogo.
/// `None` (o `search_term` vacío) significa "no filtrar por esta faceta".
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    pub search_term: String,
    pub make: Option<String>,
    pub price_range: Option<(Decimal, Decimal)>,
    pub body_type: Option<String>,
}

/// Filtra el catálogo público: conjunción AND de todos los predicados
/// activos. Los vehículos vendidos quedan fuera siempre, independiente
/// de la query. El orden relativo de entrada se conserva.
pub fn filter_catalog(cars: Vec<Car>, query: &FilterQuery) -> Vec<Car> {
    let term = query.search_term.to_lowercase();

    cars.into_iter()
        .filter(|car| !car.sold)
        .filter(|car| term.is_empty() || matches_search(car, &term))
        .filter(|car| match &query.make {
            Some(make) => car.make == *make,
            None => true,
        })
        .filter(|car| match query.price_range {
            Some((min, max)) => min <= car.price && car.price <= max,
            None => true,
        })
        .filter(|car| match &query.body_type {
            Some(body_type) => car.body_type == *body_type,
            None => true,
        })
        .collect()
}

/// Búsqueda de texto de la vista admin: solo el predicado de texto,
/// los vendidos también aparecen (el panel gestiona todo el inventario).
pub fn search_inventory(cars: Vec<Car>, term: &str) -> Vec<Car> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return cars;
    }

    cars.into_iter()
        .filter(|car| matches_search(car, &term))
        .collect()
}

/// Vocabulario de marcas seleccionables: valores distintos presentes en
/// la colección actual sin filtrar, orden lexicográfico ascendente.
/// Se recalcula en cada llamada: es función pura de los datos vigentes.
pub fn distinct_makes(cars: &[Car]) -> Vec<String> {
    distinct_sorted(cars.iter().map(|car| car.make.clone()))
}

/// Vocabulario de carrocerías seleccionables, mismas reglas que las marcas.
pub fn distinct_body_types(cars: &[Car]) -> Vec<String> {
    distinct_sorted(cars.iter().map(|car| car.body_type.clone()))
}

/// Match de texto: substring case-insensitive sobre título, marca o
/// modelo (OR entre los tres campos). `term` ya llega en minúsculas.
fn matches_search(car: &Car, term: &str) -> bool {
    car.title.to_lowercase().contains(term)
        || car.make.to_lowercase().contains(term)
        || car.model.to_lowercase().contains(term)
}

fn distinct_sorted(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut distinct: Vec<String> = values.collect();
    distinct.sort();
    distinct.dedup();
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sqlx::types::Json;

    fn car(id: i32, make: &str, model: &str, price: i64, body_type: &str, sold: bool) -> Car {
        Car {
            id,
            title: format!("2019 {} {}", make, model),
            make: make.to_string(),
            model: model.to_string(),
            year: 2019,
            price: Decimal::from(price),
            mileage: 60_000,
            image_url: String::new(),
            fuel_type: "Petrol".to_string(),
            transmission: "Automatic".to_string(),
            body_type: body_type.to_string(),
            color: "Silver".to_string(),
            description: String::new(),
            features: Json(Vec::new()),
            sold,
            created_at: Utc::now(),
        }
    }

    fn ids(cars: &[Car]) -> Vec<i32> {
        cars.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_sold_cars_never_listed() {
        let cars = vec![
            car(1, "BMW", "320i", 300_000, "Sedan", false),
            car(2, "BMW", "X3", 700_000, "SUV", true),
            car(3, "Audi", "A4", 450_000, "Sedan", false),
        ];

        let result = filter_catalog(cars, &FilterQuery::default());
        assert!(result.iter().all(|c| !c.sold));
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_output_is_ordered_subsequence_of_input() {
        let cars = vec![
            car(5, "Toyota", "Hilux", 500_000, "Bakkie", false),
            car(2, "BMW", "320i", 300_000, "Sedan", false),
            car(9, "Audi", "A4", 450_000, "Sedan", false),
        ];

        let result = filter_catalog(cars, &FilterQuery::default());
        // filtro estable: mismo orden relativo, sin duplicados ni inventos
        assert_eq!(ids(&result), vec![5, 2, 9]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let cars = vec![
            car(1, "BMW", "320i", 300_000, "Sedan", false),
            car(2, "Audi", "A4", 900_000, "Sedan", true),
            car(3, "Ford", "Fiesta", 200_000, "Hatchback", false),
        ];
        let query = FilterQuery {
            search_term: String::new(),
            make: None,
            price_range: Some((Decimal::from(0), Decimal::from(500_000))),
            body_type: None,
        };

        let once = filter_catalog(cars.clone(), &query);
        let twice = filter_catalog(once.clone(), &query);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_facets_combine_as_and_conjunction() {
        let a = car(1, "BMW", "320i", 300_000, "Sedan", false);
        let b = car(2, "Audi", "A4", 900_000, "Sedan", false);

        let query = FilterQuery {
            search_term: String::new(),
            make: Some("BMW".to_string()),
            price_range: Some((Decimal::from(0), Decimal::from(500_000))),
            body_type: None,
        };

        let result = filter_catalog(vec![a, b], &query);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_search_term_is_case_insensitive_over_three_fields() {
        let cars = vec![
            car(1, "Mercedes Benz", "C300 AMG", 430_000, "Sedan", false),
            car(2, "BMW", "X3 MSPORT", 850_000, "SUV", false),
            car(3, "Ford", "Fiesta Titanium", 200_000, "Hatchback", false),
        ];

        // matchea por marca
        let by_make = filter_catalog(
            cars.clone(),
            &FilterQuery { search_term: "mercedes".to_string(), ..Default::default() },
        );
        assert_eq!(ids(&by_make), vec![1]);

        // matchea por modelo
        let by_model = filter_catalog(
            cars.clone(),
            &FilterQuery { search_term: "MSPORT".to_string(), ..Default::default() },
        );
        assert_eq!(ids(&by_model), vec![2]);

        // matchea por título
        let by_title = filter_catalog(
            cars,
            &FilterQuery { search_term: "2019 ford".to_string(), ..Default::default() },
        );
        assert_eq!(ids(&by_title), vec![3]);
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let cars = vec![
            car(1, "BMW", "320i", 200_000, "Sedan", false),
            car(2, "BMW", "330i", 400_000, "Sedan", false),
            car(3, "BMW", "M3", 400_001, "Sedan", false),
        ];
        let query = FilterQuery {
            price_range: Some((Decimal::from(200_000), Decimal::from(400_000))),
            ..Default::default()
        };

        let result = filter_catalog(cars, &query);
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_make_match_is_exact_and_case_sensitive() {
        let cars = vec![
            car(1, "BMW", "320i", 300_000, "Sedan", false),
            car(2, "bmw", "318i", 250_000, "Sedan", false),
        ];
        let query = FilterQuery { make: Some("BMW".to_string()), ..Default::default() };

        // la marca viene de un conjunto controlado derivado de los datos,
        // por eso la igualdad es exacta
        let result = filter_catalog(cars, &query);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_no_matches_is_an_empty_result_not_an_error() {
        let cars = vec![car(1, "BMW", "320i", 300_000, "Sedan", false)];
        let query = FilterQuery { make: Some("Lada".to_string()), ..Default::default() };

        assert!(filter_catalog(cars, &query).is_empty());
    }

    #[test]
    fn test_admin_search_includes_sold_vehicles() {
        let cars = vec![
            car(1, "BMW", "320i", 300_000, "Sedan", true),
            car(2, "Audi", "A4", 450_000, "Sedan", false),
        ];

        let all = search_inventory(cars.clone(), "");
        assert_eq!(ids(&all), vec![1, 2]);

        let bmw = search_inventory(cars, "bmw");
        assert_eq!(ids(&bmw), vec![1]);
    }

    #[test]
    fn test_distinct_makes_sorted_without_duplicates() {
        let cars = vec![
            car(1, "BMW", "320i", 300_000, "Sedan", false),
            car(2, "Audi", "A4", 450_000, "Sedan", false),
            car(3, "BMW", "X3", 850_000, "SUV", true),
            car(4, "Toyota", "Hilux", 500_000, "Bakkie", false),
        ];

        // función pura: deriva de la colección que se le pase, tal cual
        assert_eq!(distinct_makes(&cars), vec!["Audi", "BMW", "Toyota"]);
    }

    #[test]
    fn test_distinct_body_types_sorted() {
        let cars = vec![
            car(1, "Toyota", "Hilux", 500_000, "Bakkie", false),
            car(2, "BMW", "X3", 850_000, "SUV", false),
            car(3, "Audi", "A4", 450_000, "Sedan", false),
            car(4, "Ford", "Ranger", 600_000, "Bakkie", false),
        ];

        assert_eq!(distinct_body_types(&cars), vec!["Bakkie", "SUV", "Sedan"]);
    }
}
