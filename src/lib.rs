// SPDX-FileCopyrightText: Copyright (C) 2026 nowplay contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Facade that re-exports the sub-crates of the workspace.

pub use nowplay_core as core;

#[cfg(feature = "json")]
pub use nowplay_core_json as core_json;
