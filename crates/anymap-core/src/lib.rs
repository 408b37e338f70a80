/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all anymap libraries
//!
//! It currently contains
//!
//! - A byte stream reader that works over in-memory buffers and buffered files
//! - The RGB pixel buffer decoders write into
//! - Decoder options
//! - A logging facade that forwards to the `log` crate when the `log` feature is enabled
//!
//! # Features
//!  - `log`: Route logging macros to the [`log`](https://docs.rs/log) crate.
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]
#![macro_use]

pub mod buffer;
pub mod bytestream;
pub mod log;
pub mod options;
