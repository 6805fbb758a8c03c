// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Mileage: hiking and walking mileage from a Strava activity dump
//!
//! This crate fetches an athlete's full activity list from Strava into a
//! local JSON snapshot, and charts annual and monthly hiking/walking
//! mileage from that snapshot.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;
