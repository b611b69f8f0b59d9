//! Smart-dimming state shared between tasks.
//!
//! The brightness task and the sysfs-style AID log reader both need the
//! same [`SmartDimConf`]. [`SharedSmartDim`] keeps it behind an
//! `embassy_sync` blocking mutex so a `static` can hold it; pick
//! `CriticalSectionRawMutex` when an interrupt handler also reads it,
//! `NoopRawMutex` for single-executor use.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use smartdim::{SmartDimConf, SmartDimError, SmartDimming};

/// [`SmartDimConf`] behind a blocking mutex.
pub struct SharedSmartDim<M: RawMutex> {
    inner: Mutex<M, RefCell<SmartDimConf>>,
}

impl<M: RawMutex> SharedSmartDim<M> {
    /// Wrap `conf`.
    pub fn new(conf: SmartDimConf) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(conf)),
        }
    }

    /// Run `prepare` then `init` unless already initialised.
    ///
    /// `prepare` fills the MTP buffer and lux table; it is skipped entirely
    /// on later calls.
    pub fn init_once(
        &self,
        prepare: impl FnOnce(&mut SmartDimConf) -> Result<(), SmartDimError>,
    ) -> Result<(), SmartDimError> {
        self.inner.lock(|cell| {
            let mut conf = cell.borrow_mut();
            if conf.is_initialized() {
                return Ok(());
            }
            prepare(&mut conf)?;
            conf.init()
        })
    }

    /// `true` once initialised.
    pub fn is_initialized(&self) -> bool {
        self.inner.lock(|cell| cell.borrow().is_initialized())
    }

    /// See [`SmartDimming::generate_gamma`].
    pub fn generate_gamma(&self, candela: u16, out: &mut [u8]) -> Result<usize, SmartDimError> {
        self.inner
            .lock(|cell| cell.borrow().generate_gamma(candela, out))
    }

    /// See [`SmartDimming::get_min_lux_table`].
    pub fn get_min_lux_table(&self, out: &mut [u8]) -> Result<usize, SmartDimError> {
        self.inner.lock(|cell| cell.borrow().get_min_lux_table(out))
    }

    /// See [`SmartDimming::print_aid_log`].
    pub fn print_aid_log(&self) {
        self.inner.lock(|cell| cell.borrow().print_aid_log());
    }

    /// Read-only access to the state.
    pub fn with<R>(&self, f: impl FnOnce(&SmartDimConf) -> R) -> R {
        self.inner.lock(|cell| f(&cell.borrow()))
    }
}
