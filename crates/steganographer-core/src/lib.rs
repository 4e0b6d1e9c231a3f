//! # Steganographer Core API
//!
//! Hides one file inside the pixels of an image and finds it again. The bits
//! of the file are scattered over all pixels, color channels and bit-planes
//! in an order derived from a password, so only the same password finds them.
//!
//! Every long running job is an [`Operation`][op] that advances one segment at
//! a time:
//! - [`Encoder`][enc] writes a header and the file into an image
//! - [`Decoder`][dec] reads the file back into an output folder
//! - [`Analyzer`][ana] estimates whether an image carries hidden data at all
//!
//! Operations are either driven by hand, by [`run`][run] or on a background
//! thread via [`Steganographer::spawn`][spawn].
//!
//! # Usage Examples
//!
//! ## Hide a file inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! steganographer_core::api::hide::prepare()
//!     .with_file("Cargo.toml")        // will hide this file inside the image
//!     .with_password("SuperSecret42") // only this password reveals the file again
//!     .with_image("tests/images/plain/carrier-image.png")
//!     .with_output(temp_dir.path().join("image-with-a-file-inside.png"))
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Unveil a file from an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let secret_image = temp_dir.path().join("secret.png");
//!
//! steganographer_core::api::hide::prepare()
//!     .with_file("Cargo.toml")
//!     .with_password("SuperSecret42")
//!     .with_image("tests/images/plain/carrier-image.png")
//!     .with_output(&secret_image)
//!     .execute()
//!     .expect("Failed to hide file in image");
//!
//! let unveiled = steganographer_core::api::unveil::prepare()
//!     .from_secret_file(&secret_image)
//!     .using_password("SuperSecret42")
//!     .into_output_folder(temp_dir.path())
//!     .execute()
//!     .expect("Failed to unveil file from image");
//!
//! assert_eq!(unveiled.file_name().unwrap(), "Cargo.toml");
//! ```
//!
//! [op]: ./transfer/enum.Operation.html
//! [enc]: ./transfer/struct.Encoder.html
//! [dec]: ./transfer/struct.Decoder.html
//! [ana]: ./transfer/struct.Analyzer.html
//! [run]: ./transfer/fn.run.html
//! [spawn]: ./struct.Steganographer.html#method.spawn

#![warn(clippy::redundant_else)]

pub mod api;
pub mod commands;
pub mod error;
pub mod media;
pub mod result;
pub mod steganographer;
pub mod transfer;

pub use crate::error::SteganoError;
pub use crate::media::payload::{HiddenPayload, PayloadHeader};
pub use crate::media::{HostImage, Persist, StegoOptions};
pub use crate::result::Result;
pub use crate::steganographer::{Steganographer, TaskHandle, TaskOutcome};
pub use crate::transfer::{
    Analyzer, CancellationToken, Decoder, Encoder, Operation, Outcome, Segmented, Verdict,
};
