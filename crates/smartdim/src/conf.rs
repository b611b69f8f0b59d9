//! Driver-facing wrapper.
//!
//! [`SmartDimConf`] is the object a panel driver keeps: it owns the MTP
//! buffer the driver reads into, the brightness level list and the panel
//! ID, and delegates to [`SmartDimContext`] once initialised. The
//! [`SmartDimming`] trait is the seam the panel crate programs against.

use crate::assembler::{AssemblyMode, Calibration};
use crate::config::PanelConfig;
use crate::context::{SmartDimContext, MAX_LUX_ENTRIES};
use crate::error::SmartDimError;
use crate::gamma::GAMMA_SET_MAX;
use crate::revision::{self, LdiRevision, PanelModel, RevisionProfile};

/// Operations a panel driver needs from the smart-dimming engine.
pub trait SmartDimming {
    /// Build every table. Later calls are no-ops.
    fn init(&mut self) -> Result<(), SmartDimError>;

    /// `true` once [`SmartDimming::init`] has succeeded.
    fn is_initialized(&self) -> bool;

    /// Write the table for `candela` into `out`, returning the byte count.
    fn generate_gamma(&self, candela: u16, out: &mut [u8]) -> Result<usize, SmartDimError>;

    /// Write the minimum-brightness table into `out`.
    fn get_min_lux_table(&self, out: &mut [u8]) -> Result<usize, SmartDimError>;

    /// Log MTP offsets and every cached table.
    fn print_aid_log(&self);
}

/// Panel-side smart-dimming state.
#[derive(Debug, Clone)]
pub struct SmartDimConf {
    model: PanelModel,
    man_id: LdiRevision,
    profile: Option<&'static RevisionProfile>,
    mtp: [u8; GAMMA_SET_MAX],
    lux_tab: heapless::Vec<u16, MAX_LUX_ENTRIES>,
    mode: AssemblyMode,
    vreg: Option<i64>,
    context: Option<SmartDimContext>,
}

impl SmartDimConf {
    /// Empty state for `model`; fill the MTP buffer and lux table, then
    /// call [`SmartDimming::init`].
    pub fn new(model: PanelModel) -> Self {
        Self {
            model,
            man_id: LdiRevision::default(),
            profile: None,
            mtp: [0; GAMMA_SET_MAX],
            lux_tab: heapless::Vec::new(),
            mode: AssemblyMode::default(),
            vreg: None,
            context: None,
        }
    }

    /// State pre-populated from a probe-time config.
    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            man_id: config.ldi_revision,
            lux_tab: config.lux_tab.clone(),
            mode: config.mode,
            vreg: config.vreg(),
            ..Self::new(config.model)
        }
    }

    /// Buffer the raw MTP read lands in, sized for the panel family.
    pub fn mtp_buffer_mut(&mut self) -> &mut [u8] {
        let len = self.model.family().gamma_len();
        self.mtp.get_mut(..len).unwrap_or(&mut [])
    }

    /// Raw MTP bytes.
    pub fn mtp_buffer(&self) -> &[u8] {
        let len = self.model.family().gamma_len();
        self.mtp.get(..len).unwrap_or(&[])
    }

    /// Replace the supported brightness levels.
    pub fn set_lux_table(&mut self, lux_tab: &[u16]) -> Result<(), SmartDimError> {
        self.lux_tab = heapless::Vec::from_slice(lux_tab).map_err(|_| {
            SmartDimError::LuxTableFull {
                capacity: MAX_LUX_ENTRIES,
            }
        })?;
        Ok(())
    }

    /// Supported brightness levels.
    pub fn lux_table(&self) -> &[u16] {
        &self.lux_tab
    }

    /// Record the ID word read from the panel.
    pub fn set_man_id(&mut self, man_id: LdiRevision) {
        self.man_id = man_id;
    }

    /// Panel ID word.
    pub fn man_id(&self) -> LdiRevision {
        self.man_id
    }

    /// Use `profile` instead of the registry's choice.
    pub fn set_profile(&mut self, profile: &'static RevisionProfile) {
        self.profile = Some(profile);
    }

    /// Select the table build mode.
    pub fn set_mode(&mut self, mode: AssemblyMode) {
        self.mode = mode;
    }

    /// Profile `init` will use.
    pub fn profile(&self) -> &'static RevisionProfile {
        self.profile
            .unwrap_or_else(|| revision::lookup(self.model, self.man_id))
    }

    /// Built cache, once initialised.
    pub fn context(&self) -> Option<&SmartDimContext> {
        self.context.as_ref()
    }

    fn ready(&self) -> Result<&SmartDimContext, SmartDimError> {
        self.context.as_ref().ok_or(SmartDimError::NotInitialized)
    }
}

impl SmartDimming for SmartDimConf {
    fn init(&mut self) -> Result<(), SmartDimError> {
        if self.context.is_some() {
            debug!("smart dimming already initialised");
            return Ok(());
        }

        let profile = self.profile();
        info!("ldi revision {}, profile {}", self.man_id.0, profile.name);
        let vreg = self.vreg.unwrap_or(profile.vreg);
        let calibration = Calibration::with_vreg(profile, self.mtp_buffer(), vreg)?;
        self.context = Some(SmartDimContext::with_calibration(
            calibration,
            &self.lux_tab,
            self.mode,
        )?);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    fn generate_gamma(&self, candela: u16, out: &mut [u8]) -> Result<usize, SmartDimError> {
        self.ready()?.generate_gamma(candela).write_to(out)
    }

    fn get_min_lux_table(&self, out: &mut [u8]) -> Result<usize, SmartDimError> {
        self.ready()?.min_lux_table().write_to(out)
    }

    fn print_aid_log(&self) {
        match &self.context {
            Some(ctx) => ctx.print_aid_log(),
            None => warn!("AID log requested before init"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::tables::{s6e3ha2, s6e88a, S6E3HA2_LEVELS, S6E88A_LEVELS};

    fn s6e88a_conf() -> SmartDimConf {
        let mut conf = SmartDimConf::new(PanelModel::S6e88a0);
        conf.set_lux_table(&S6E88A_LEVELS).unwrap();
        conf
    }

    #[test]
    fn mtp_buffer_sized_for_family() {
        assert_eq!(SmartDimConf::new(PanelModel::S6e88a0).mtp_buffer_mut().len(), 33);
        assert_eq!(SmartDimConf::new(PanelModel::S6e3ha2Wqhd).mtp_buffer_mut().len(), 35);
    }

    #[test]
    fn uninitialised_is_an_error() {
        let conf = s6e88a_conf();
        let mut out = [0u8; GAMMA_SET_MAX];
        assert!(!conf.is_initialized());
        assert_eq!(
            conf.generate_gamma(350, &mut out),
            Err(SmartDimError::NotInitialized)
        );
        assert_eq!(
            conf.get_min_lux_table(&mut out),
            Err(SmartDimError::NotInitialized)
        );
        conf.print_aid_log();
    }

    #[test]
    fn generates_after_init() {
        let mut conf = s6e88a_conf();
        conf.init().unwrap();
        let mut out = [0u8; GAMMA_SET_MAX];
        assert_eq!(conf.generate_gamma(350, &mut out).unwrap(), 33);
        assert_eq!(&out[..33], &s6e88a::DEFAULT.center_cell[..]);
        assert_eq!(conf.get_min_lux_table(&mut out).unwrap(), 33);
    }

    #[test]
    fn init_is_idempotent() {
        let mut conf = s6e88a_conf();
        conf.init().unwrap();
        let first = conf.context().unwrap().entries().to_vec();
        conf.mtp_buffer_mut()[6] = 0x05;
        conf.init().unwrap();
        assert_eq!(conf.context().unwrap().entries(), &first[..]);
    }

    #[test]
    fn small_buffer_rejected() {
        let mut conf = s6e88a_conf();
        conf.init().unwrap();
        let mut out = [0u8; 10];
        assert_eq!(
            conf.generate_gamma(350, &mut out),
            Err(SmartDimError::BufferTooSmall { needed: 33 })
        );
    }

    #[test]
    fn empty_lux_table_fails_init() {
        let mut conf = SmartDimConf::new(PanelModel::S6e88a0);
        assert_eq!(conf.init(), Err(SmartDimError::LuxTableEmpty));
        assert!(!conf.is_initialized());
    }

    #[test]
    fn man_id_selects_profile() {
        let mut conf = SmartDimConf::new(PanelModel::S6e3ha2Wqhd);
        assert_eq!(conf.profile().name, s6e3ha2::REV_A.name);
        conf.set_man_id(LdiRevision(0x0040_0003));
        assert_eq!(conf.profile().name, s6e3ha2::REV_C.name);
        conf.set_profile(&s6e3ha2::REV_A);
        assert_eq!(conf.profile().name, s6e3ha2::REV_A.name);
    }

    #[test]
    fn from_config_carries_inputs() {
        let mut cfg = PanelConfig::new(PanelModel::S6e3ha2Wqhd, &S6E3HA2_LEVELS).unwrap();
        cfg.ldi_revision = LdiRevision(0x04);
        cfg.mode = AssemblyMode::Pure;
        let mut conf = SmartDimConf::from_config(&cfg);
        assert_eq!(conf.lux_table(), &S6E3HA2_LEVELS[..]);
        assert_eq!(conf.man_id(), LdiRevision(0x04));
        conf.init().unwrap();
        let ctx = conf.context().unwrap();
        assert_eq!(ctx.mode(), AssemblyMode::Pure);
        assert_eq!(ctx.calibration().profile().name, s6e3ha2::REV_C.name);
    }
}
