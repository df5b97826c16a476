mod detail_tests;
mod listing_tests;
