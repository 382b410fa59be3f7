//! Integration suite for the assembled engine.

mod helpers;

mod booking_test;
mod concurrency_test;
mod reaper_test;
mod schedule_test;
