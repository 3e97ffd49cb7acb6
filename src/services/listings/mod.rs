pub mod listing_service;
