pub mod listing_repo;
