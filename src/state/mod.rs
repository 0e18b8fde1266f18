// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-level state that is not trailed.

pub mod statistics;
