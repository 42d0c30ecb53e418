//! Unit tests for the menu's pure parts.
