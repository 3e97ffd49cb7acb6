pub mod review_request;
