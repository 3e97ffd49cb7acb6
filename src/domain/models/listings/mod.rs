pub mod listing_details;
