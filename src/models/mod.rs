// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the matches backend.

pub mod matches;
pub mod tokens;
pub mod user;

pub use matches::{Match, Player, Team};
pub use tokens::{TokenResponse, TokensData};
pub use user::{UserData, UserResponse};
