pub mod review_repo;
