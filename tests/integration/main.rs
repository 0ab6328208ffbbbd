//! Integration tests for the glen binary

mod helpers;

mod config_test;
mod render_test;
mod run_test;
