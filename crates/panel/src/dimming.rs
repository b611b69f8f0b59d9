//! Brightness control for one panel.
//!
//! [`PanelDimming`] owns the DSI host, the candela map and the
//! smart-dimming state. The first brightness request reads the panel ID
//! and MTP dump and builds every gamma table; later requests only look up
//! the cached table and send it.

use smartdim::{LdiRevision, PanelModel, SmartDimConf, SmartDimError, SmartDimming, GAMMA_SET_MAX};

use crate::candela_map::{CandelaLuxMap, LuxStep};
use crate::dsi::{DsiHost, GAMMA_REGISTER, ID_LEN, ID_REGISTER, MTP_REGISTER};
use crate::error::PanelError;

/// Level-2 key unlock, required before reading the MTP register.
pub const MTP_KEY_ENABLE: [u8; 3] = [0xF0, 0x5A, 0x5A];

/// Level-2 key lock, sent after the MTP read.
pub const MTP_KEY_DISABLE: [u8; 3] = [0xF0, 0xA5, 0xA5];

/// A gamma register write: [`GAMMA_REGISTER`] followed by the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaCommand {
    bytes: [u8; GAMMA_SET_MAX + 1],
    len: usize,
}

impl GammaCommand {
    /// Payload to send, register byte first.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.get(..self.len).unwrap_or(&[])
    }

    /// Table bytes without the register.
    pub fn gamma(&self) -> &[u8] {
        self.as_bytes().get(1..).unwrap_or(&[])
    }
}

/// Frame the cached table for `candela` as a gamma register write.
pub fn gamma_command<S: SmartDimming>(dim: &S, candela: u16) -> Result<GammaCommand, SmartDimError> {
    let mut bytes = [0u8; GAMMA_SET_MAX + 1];
    let (register, table) = bytes.split_at_mut(1);
    if let Some(first) = register.first_mut() {
        *first = GAMMA_REGISTER;
    }
    let written = dim.generate_gamma(candela, table)?;
    Ok(GammaCommand {
        bytes,
        len: written.saturating_add(1),
    })
}

/// Smart-dimming brightness control over a DSI host.
pub struct PanelDimming<H> {
    host: H,
    map: CandelaLuxMap,
    conf: SmartDimConf,
    current: Option<LuxStep>,
}

impl<H: DsiHost> PanelDimming<H> {
    /// Control for a `model` panel on `host`.
    pub fn new(host: H, model: PanelModel, map: CandelaLuxMap) -> Self {
        Self::with_conf(host, SmartDimConf::new(model), map)
    }

    /// Control with pre-populated smart-dimming state (profile or mode
    /// overrides). The lux table is replaced by the map's levels at load.
    pub fn with_conf(host: H, conf: SmartDimConf, map: CandelaLuxMap) -> Self {
        Self {
            host,
            map,
            conf,
            current: None,
        }
    }

    /// Read the driver IC ID word (`ID1 << 16 | ID2 << 8 | ID3`).
    pub async fn read_id(&mut self) -> Result<LdiRevision, PanelError<H::Error>> {
        let mut id = [0u8; ID_LEN];
        let n = self
            .host
            .read(ID_REGISTER, &mut id)
            .await
            .map_err(PanelError::Dsi)?;
        check_read(ID_REGISTER, ID_LEN, n)?;
        let [id1, id2, id3] = id;
        let word = u32::from_be_bytes([0, id1, id2, id3]);
        info!("panel id {}", word);
        Ok(LdiRevision(word))
    }

    /// Read ID and MTP, then build every gamma table. No-op once loaded.
    pub async fn load_smart_dimming(&mut self) -> Result<(), PanelError<H::Error>> {
        if self.conf.is_initialized() {
            return Ok(());
        }

        let man_id = self.read_id().await?;
        self.conf.set_man_id(man_id);

        self.host
            .write(&MTP_KEY_ENABLE)
            .await
            .map_err(PanelError::Dsi)?;
        let expected = self.conf.mtp_buffer().len();
        let read = self
            .host
            .read(MTP_REGISTER, self.conf.mtp_buffer_mut())
            .await
            .map_err(PanelError::Dsi);
        self.host
            .write(&MTP_KEY_DISABLE)
            .await
            .map_err(PanelError::Dsi)?;
        check_read(MTP_REGISTER, expected, read?)?;

        self.conf.set_lux_table(self.map.lux_table())?;
        self.conf.init()?;
        info!("smart dimming loaded, {} levels", self.map.lux_table().len());
        Ok(())
    }

    /// Show backlight level `bl_level`, returning the step it mapped to.
    pub async fn set_brightness(&mut self, bl_level: u8) -> Result<LuxStep, PanelError<H::Error>> {
        self.load_smart_dimming().await?;

        let step = self.map.step(bl_level);
        let cmd = gamma_command(&self.conf, step.candela)?;
        self.host
            .write(cmd.as_bytes())
            .await
            .map_err(PanelError::Dsi)?;
        debug!("bl {} -> {} cd (cmd idx {})", bl_level, step.candela, step.cmd_idx);
        self.current = Some(step);
        Ok(step)
    }

    /// Write the minimum-brightness table.
    pub async fn set_min_brightness(&mut self) -> Result<(), PanelError<H::Error>> {
        self.load_smart_dimming().await?;
        let mut bytes = [0u8; GAMMA_SET_MAX + 1];
        let (register, table) = bytes.split_at_mut(1);
        if let Some(first) = register.first_mut() {
            *first = GAMMA_REGISTER;
        }
        let written = self.conf.get_min_lux_table(table)?;
        let payload = bytes.get(..written.saturating_add(1)).unwrap_or(&[]);
        self.host.write(payload).await.map_err(PanelError::Dsi)?;
        self.current = None;
        Ok(())
    }

    /// Last step sent by [`PanelDimming::set_brightness`].
    pub fn current(&self) -> Option<LuxStep> {
        self.current
    }

    /// Smart-dimming state.
    pub fn conf(&self) -> &SmartDimConf {
        &self.conf
    }

    /// Candela map.
    pub fn map(&self) -> &CandelaLuxMap {
        &self.map
    }

    /// DSI host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable DSI host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Log MTP offsets and every cached table.
    pub fn print_aid_log(&self) {
        self.conf.print_aid_log();
    }
}

fn check_read<E>(register: u8, expected: usize, actual: usize) -> Result<(), PanelError<E>> {
    if actual < expected {
        return Err(PanelError::ShortRead {
            register,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use crate::mocks::MockDsiHost;
    use smartdim::tables::S6E88A_LEVELS;

    fn s6e88a_map() -> CandelaLuxMap {
        let quads: Vec<[u32; 4]> = S6E88A_LEVELS
            .iter()
            .enumerate()
            .map(|(i, &cd)| {
                let from = if i == 0 { 0 } else { 4 * i as u32 + 1 };
                let till = if i + 1 == S6E88A_LEVELS.len() { 255 } else { 4 * i as u32 + 4 };
                [i as u32, from, till, u32::from(cd)]
            })
            .collect();
        CandelaLuxMap::from_quadruples(&quads).unwrap()
    }

    #[test]
    fn gamma_command_prefixes_register() {
        let mut conf = SmartDimConf::new(PanelModel::S6e88a0);
        conf.set_lux_table(&[100, 350]).unwrap();
        conf.init().unwrap();
        let cmd = gamma_command(&conf, 350).unwrap();
        assert_eq!(cmd.as_bytes().len(), 34);
        assert_eq!(cmd.as_bytes()[0], GAMMA_REGISTER);
        assert_eq!(cmd.gamma(), conf.context().unwrap().max_lux_table().as_slice());
    }

    #[test]
    fn gamma_command_needs_init() {
        let conf = SmartDimConf::new(PanelModel::S6e88a0);
        assert_eq!(gamma_command(&conf, 350), Err(SmartDimError::NotInitialized));
    }

    #[test]
    fn short_read_detected() {
        assert_eq!(
            check_read::<()>(MTP_REGISTER, 33, 12),
            Err(PanelError::ShortRead {
                register: MTP_REGISTER,
                expected: 33,
                actual: 12
            })
        );
        assert!(check_read::<()>(MTP_REGISTER, 33, 33).is_ok());
    }

    #[tokio::test]
    async fn first_brightness_loads_tables() {
        let host = MockDsiHost::new().with_register(ID_REGISTER, &[0x40, 0x00, 0x03]);
        let mut panel = PanelDimming::new(host, PanelModel::S6e88a0, s6e88a_map());
        assert!(!panel.conf().is_initialized());

        let step = panel.set_brightness(255).await.unwrap();
        assert_eq!(step.candela, 350);
        assert!(panel.conf().is_initialized());
        assert_eq!(panel.conf().man_id(), LdiRevision(0x0040_0003));
        assert_eq!(panel.current(), Some(step));

        let writes = panel.host().writes();
        assert_eq!(writes[0].as_slice(), &MTP_KEY_ENABLE);
        assert_eq!(writes[1].as_slice(), &MTP_KEY_DISABLE);
        assert_eq!(writes[2][0], GAMMA_REGISTER);
        assert_eq!(writes[2].len(), 34);
    }

    #[tokio::test]
    async fn load_happens_once() {
        let host = MockDsiHost::new().with_register(ID_REGISTER, &[0, 0, 1]);
        let mut panel = PanelDimming::new(host, PanelModel::S6e88a0, s6e88a_map());
        panel.set_brightness(10).await.unwrap();
        panel.set_brightness(200).await.unwrap();
        assert_eq!(panel.host().read_count(), 2);
        assert_eq!(panel.host().writes().len(), 4);
    }
}
