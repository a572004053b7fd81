mod home_tests;
mod listing_tests;
mod search_tests;
