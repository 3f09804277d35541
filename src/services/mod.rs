pub mod address_service;
pub mod check_service;
pub mod volume_service;
