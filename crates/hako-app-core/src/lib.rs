// SPDX-License-Identifier: Apache-2.0
//! Shared application services for Hako tools (locale selection, prefs).
//! Keeps engine and tool layers free of ambient globals.

pub mod locale;
pub mod prefs;
