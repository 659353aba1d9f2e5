// SPDX-FileCopyrightText: The pagechrome authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation and overview

#![allow(rustdoc::invalid_rust_codeblocks)] // Do not interpret code blocks, e.g. license comments.
#![doc = include_str!("../README.md")]
