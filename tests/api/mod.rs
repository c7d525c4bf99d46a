mod users_test;
mod versions_test;
