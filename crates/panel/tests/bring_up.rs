//! Panel bring-up against the mock DSI host: lazy load, failures, retries.

#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::arithmetic_side_effects)]

use panel::dimming::{MTP_KEY_DISABLE, MTP_KEY_ENABLE};
use panel::dsi::{GAMMA_REGISTER, ID_REGISTER, MTP_REGISTER};
use panel::mocks::{MockDsiHost, MockError};
use panel::{CandelaLuxMap, PanelDimming, PanelError};
use smartdim::tables::s6e3ha2;
use smartdim::{AssemblyMode, PanelModel, SmartDimConf, SmartDimming};

fn small_map() -> CandelaLuxMap {
    CandelaLuxMap::from_quadruples(&[
        [0, 0, 63, 10],
        [1, 64, 127, 100],
        [2, 128, 254, 250],
        [3, 255, 255, 350],
    ])
    .unwrap()
}

#[tokio::test]
async fn link_failure_surfaces_and_leaves_unloaded() {
    let mut host = MockDsiHost::new();
    host.fail_reads(true);
    let mut panel = PanelDimming::new(host, PanelModel::S6e88a0, small_map());

    let err = panel.set_brightness(200).await.unwrap_err();
    assert_eq!(err, PanelError::Dsi(MockError::Link));
    assert!(!panel.conf().is_initialized());
    assert!(panel.host().writes().is_empty());
    assert_eq!(panel.current(), None);
}

#[tokio::test]
async fn short_mtp_read_relocks_then_retries() {
    let mut host = MockDsiHost::new();
    host.set_short_read(Some(20));
    let mut panel = PanelDimming::new(host, PanelModel::S6e88a0, small_map());

    let err = panel.set_brightness(200).await.unwrap_err();
    assert_eq!(
        err,
        PanelError::ShortRead {
            register: MTP_REGISTER,
            expected: 33,
            actual: 20
        }
    );
    let writes = panel.host().writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].as_slice(), &MTP_KEY_ENABLE);
    assert_eq!(writes[1].as_slice(), &MTP_KEY_DISABLE);

    panel.host_mut().set_short_read(None);
    let step = panel.set_brightness(200).await.unwrap();
    assert_eq!(step.candela, 250);
    assert_eq!(step.cmd_idx, 2);
    assert!(panel.conf().is_initialized());
}

#[tokio::test]
async fn mtp_dump_feeds_calibration() {
    let mut mtp = [0u8; 35];
    mtp[33] = 0x21;
    mtp[34] = 0x83;
    let host = MockDsiHost::new()
        .with_register(ID_REGISTER, &[0x40, 0x00, 0x04])
        .with_register(MTP_REGISTER, &mtp);
    let mut panel = PanelDimming::new(host, PanelModel::S6e3ha2Wqhd, small_map());
    panel.load_smart_dimming().await.unwrap();

    let conf = panel.conf();
    assert_eq!(conf.mtp_buffer(), &mtp[..]);
    assert_eq!(conf.profile().name, s6e3ha2::REV_C.name);
    let ctx = conf.context().unwrap();
    assert_eq!(ctx.calibration().mtp().vt.r, 1);
    assert_eq!(ctx.entries().len(), 4);
}

#[tokio::test]
async fn gamma_write_matches_cache() {
    let mut panel = PanelDimming::new(MockDsiHost::new(), PanelModel::S6e88a0, small_map());
    panel.set_brightness(100).await.unwrap();
    panel.set_brightness(255).await.unwrap();

    let ctx = panel.conf().context().unwrap();
    let writes = panel.host().writes();
    let mid = &writes[writes.len() - 2];
    let top = &writes[writes.len() - 1];
    assert_eq!(mid[0], GAMMA_REGISTER);
    assert_eq!(&mid[1..], ctx.lookup(100).unwrap().as_slice());
    assert_eq!(&top[1..], ctx.max_lux_table().as_slice());
}

#[tokio::test]
async fn pure_mode_and_min_table() {
    let mut conf = SmartDimConf::new(PanelModel::S6e88a0);
    conf.set_mode(AssemblyMode::Pure);
    let mut panel = PanelDimming::with_conf(MockDsiHost::new(), conf, small_map());
    panel.set_min_brightness().await.unwrap();

    let ctx = panel.conf().context().unwrap();
    assert_eq!(ctx.mode(), AssemblyMode::Pure);
    let last = panel.host().writes().last().unwrap();
    assert_eq!(&last[1..], ctx.min_lux_table().as_slice());
    assert_eq!(panel.current(), None);
    panel.print_aid_log();
}

#[test]
fn runs_on_embassy_block_on() {
    let mut panel = PanelDimming::new(MockDsiHost::new(), PanelModel::Ams452ef, small_map());
    let step = embassy_futures::block_on(panel.set_brightness(0)).unwrap();
    assert_eq!(step.candela, 10);
    let mut out = [0u8; 40];
    assert_eq!(panel.conf().generate_gamma(10, &mut out).unwrap(), 33);
}
