// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O: the key-value persistence sink, annotation export, and image
//! loading.

pub mod media;
pub mod serialization;
pub mod storage;
