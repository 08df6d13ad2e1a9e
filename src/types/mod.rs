// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource references and the duck-typed status they resolve to.

pub mod condition;
pub mod resource;

pub use condition::{Condition, DuckStatus, ReadinessStatus};
pub use resource::ResourceReference;
