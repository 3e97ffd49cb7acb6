pub mod listing_request;
