// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Core data model: annotations, the annotation store, and the
//! pointer-drag drawing session.

pub mod annotation;
pub mod session;
pub mod store;
