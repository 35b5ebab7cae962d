pub mod maintenance_repository;
