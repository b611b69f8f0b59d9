//! Smart-dimming gamma table generation for MTP-calibrated AMOLED panels.
//!
//! Each panel leaves the factory with a few bytes of per-unit calibration
//! (MTP offsets) describing how far its drive voltages deviate from the
//! panel family's "center cell". This crate turns those bytes into a
//! register-ready gamma table for every brightness level the display
//! driver supports, so that every panel hits the same luminance curve.
//!
//! # Pipeline
//!
//! ```text
//! raw MTP bytes ──► mtp::MtpOffsets ─┐
//!                                    ├─► voltage::ReferenceVoltages (11 points + VT)
//! center cell  ──► mtp::CenterCell ──┘              │
//!                                                   ▼
//!                                       gray_scale::GrayScale (256 levels)
//!                                                   │
//!        revision::RevisionProfile ──► assembler::Calibration::gamma_for(cd)
//!                                                   │
//!                                                   ▼
//!                                  context::SmartDimContext (per-level cache)
//!                                                   │
//!                                                   ▼
//!                                  conf::SmartDimConf (driver-facing wrapper)
//! ```
//!
//! # Modules
//!
//! - [`point`]: reference points, colour channels, `Rgb<T>`
//! - [`fixed`]: truncating fixed-point helpers (`BIT_SHIFT` = 22)
//! - [`mtp`]: MTP sorting and signed-magnitude decoding, center-cell defaults
//! - [`voltage`]: per-point voltage adjustment
//! - [`gray_scale`]: 256-level interpolation
//! - [`curve`]: gamma curve tables (1.9 / 2.15 / 2.2 at 350 or 360 cd)
//! - [`search`]: candela → gray-level bracketing search
//! - [`gamma`]: register byte encoding, RGB and MTP corrections
//! - [`revision`]: per-revision calibration profiles and registry
//! - [`tables`]: shipped calibration data
//! - [`assembler`]: per-brightness table assembly
//! - [`context`]: init-once cache and lookup
//! - [`conf`]: `smartdim_conf`-shaped wrapper and [`SmartDimming`] trait
//! - [`config`]: runtime panel configuration
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls
//! - `defmt`: `defmt::Format` derives and defmt log output
//! - `tracing`: log output through `tracing` (desktop tooling)
//! - `serde`: serde derives on configuration types

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)] // panel part numbers in doc comments

#[macro_use]
mod log;

pub mod assembler;
pub mod conf;
pub mod config;
pub mod context;
pub mod curve;
pub mod error;
pub mod fixed;
pub mod gamma;
pub mod gray_scale;
pub mod mtp;
pub mod point;
pub mod revision;
pub mod search;
pub mod tables;
pub mod voltage;

// Top-level re-exports for convenience
pub use assembler::{AssemblyMode, Calibration};
pub use conf::{SmartDimConf, SmartDimming};
pub use config::PanelConfig;
pub use context::{LuxEntry, SmartDimContext, MAX_LUX_ENTRIES};
pub use curve::{CurveTable, GammaCurve, SearchCurve};
pub use error::SmartDimError;
pub use gamma::{offset_cal, GammaSetting, GAMMA_SET_MAX};
pub use gray_scale::GrayScale;
pub use mtp::{CenterCell, MtpOffsets, PanelFamily, RegisterFields};
pub use point::{Channel, RefPoint, Rgb};
pub use revision::{LdiRevision, PanelModel, RevisionProfile};
pub use voltage::ReferenceVoltages;
