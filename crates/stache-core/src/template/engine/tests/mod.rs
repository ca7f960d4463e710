//! Tests for template engine
//!
//! Organized into focused submodules for better maintainability.

use super::*;

// Test helper functions
mod helpers;


// Rendering tests
mod render_basic;

// Escaping and error tests
mod errors;
