//! Shared fixtures for sbox-store unit tests.
