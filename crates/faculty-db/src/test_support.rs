//! Shared test utilities for faculty-db unit tests.
