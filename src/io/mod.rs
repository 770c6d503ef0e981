// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for images, class configurations and UI definitions.

pub mod media;
pub mod serialization;
