//! End-to-end tests for the OCC server surface.

mod api_test;
mod helpers;
mod ws_test;
