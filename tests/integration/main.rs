//! HTTP integration tests. Each test gets its own throwaway database.

mod auth_test;
mod comment_test;
mod helpers;
mod post_test;
