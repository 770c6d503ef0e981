// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for the Label Grab application.

pub mod classes;
pub mod layout;
