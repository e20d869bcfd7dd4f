// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Matchday: authenticated client for the matches backend.
//!
//! This crate signs in with email/password, owns the session lifecycle
//! (token hydration, login, logout, background refresh, change
//! notification), lists matches page by page, and exports the full match
//! dataset to a dated CSV file.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
