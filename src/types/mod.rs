// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token values
//!
//! Public types are re-exported from lib.rs.

pub mod tokens;
