// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch processing pipeline shared by the CLI and tests.
//!
//! Every regular file in an input directory is loaded as a point cloud,
//! triangulated, integrated against the z = 0 plane and written out as an
//! OBJ mesh. Each successful file appends a `Filename,Volume` record to a
//! run log named after the run's Unix timestamp. Failures are isolated per
//! file and reported in the returned [`BatchReport`].
//!
//! Processing is strictly sequential.

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod run_log;

pub use batch::{list_input_files, run_batch, BatchReport, BatchRunner, FileFailure};
pub use config::BatchConfig;
pub use error::{Error, FailureKind, Result};
pub use pipeline::{mesh_path_for, process_file, ProcessedFile};
pub use run_log::{log_file_name, unix_timestamp, BatchLog, VolumeRecord, LOG_HEADER};
