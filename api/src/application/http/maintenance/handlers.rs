pub mod filter_services;
pub mod get_maintenance_filter_options;
pub mod get_maintenance_stats;
pub mod get_most_requested_services;
pub mod get_quick_services;
pub mod get_services_by_category;
