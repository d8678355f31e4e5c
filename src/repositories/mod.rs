//! Repositorios de acceso a datos

pub mod car_repository;
