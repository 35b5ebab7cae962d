pub mod filter_spare_parts;
pub mod get_low_stock_spare_parts;
pub mod get_spare_part_filter_options;
pub mod get_spare_part_stats;
pub mod get_spare_parts_by_category;
