pub mod spare_part_repository;
