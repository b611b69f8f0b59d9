//! AMOLED panel glue for the smart-dimming engine.
//!
//! Everything between the DSI host and [`smartdim`]: reading the panel ID
//! and MTP dump, mapping backlight levels to candela, initialising smart
//! dimming on first use and framing the gamma register write.
//!
//! # Architecture
//!
//! ```text
//! backlight level (0..=255)
//!         ↓
//! CandelaLuxMap      → candela + AID/ELVSS command index
//!         ↓
//! PanelDimming       → lazy MTP read + SmartDimConf::init
//!         ↓
//! DsiHost::write     → [0xCA, gamma bytes…]
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` impls
//! - `defmt`: `defmt::Format` derives and defmt log output
//!
//! # Example
//!
//! ```no_run
//! use panel::{CandelaLuxMap, DsiHost, PanelDimming};
//! use smartdim::PanelModel;
//!
//! async fn example<H: DsiHost>(host: H, map: CandelaLuxMap) {
//!     let mut panel = PanelDimming::new(host, PanelModel::S6e88a0, map);
//!     let _ = panel.set_brightness(255).await;
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(async_fn_in_trait)] // Embassy no_std: single-threaded, Send bounds not needed

#[macro_use]
mod log;

pub mod candela_map;
pub mod dimming;
pub mod dsi;
pub mod error;
pub mod mocks;
pub mod shared;

pub use candela_map::{CandelaLuxMap, LuxStep};
pub use dimming::{gamma_command, GammaCommand, PanelDimming};
pub use dsi::DsiHost;
pub use error::{MapError, PanelError};
pub use shared::SharedSmartDim;
