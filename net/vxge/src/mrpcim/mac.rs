//! MAC port and packet assist setup.
//!
//! Only knobs set in [`MacConfig`](crate::config::MacConfig) are written; every other
//! bit keeps the value the adapter loaded from flash.

use super::Mrpcim;
use crate::access::{reg_offset, RegisterAccess};
use crate::bits::Field;
use crate::config::{AutonegRate, SwitchPortConfig, WirePortConfig};
use crate::error::Result;
use crate::regs::fields::{
    fau_pa_cfg, ratemgmt_cfg_port, rxmac_cfg0_port, rxmac_cfg2_port, rxmac_link_util_port,
    rxmac_pause_cfg_port, rxmac_rx_pa_cfg0, rxmac_rx_pa_cfg1, tpa_global_cfg, txmac_cfg0_port,
    txmac_gen_cfg1, txmac_link_util_port, xgmac_debounce_port, xgmac_main_cfg_port,
    xmac_gen_cfg,
};
use crate::regs::{SWITCH_PORT, WIRE_PORT_COUNT};

fn flag(bits: u64, field: Field, value: Option<bool>) -> u64 {
    match value {
        Some(true) => bits | field.mask(),
        Some(false) => bits & !field.mask(),
        None => bits,
    }
}

fn value<T: Into<u64>>(bits: u64, field: Field, value: Option<T>) -> u64 {
    match value {
        Some(value) => field.replace(bits, value.into()),
        None => bits,
    }
}

/// Knobs shared by the wire ports and the switch port.
struct PortMacs {
    mtu: Option<u32>,
    tmac_pad: Option<bool>,
    tmac_pad_byte: Option<u8>,
    tmac_util_period: Option<u32>,
    rmac_strip_fcs: Option<bool>,
    rmac_prom_en: Option<bool>,
    rmac_discard_pfrm: Option<bool>,
    rmac_util_period: Option<u32>,
    rmac_pause_gen_en: Option<bool>,
    rmac_pause_rcv_en: Option<bool>,
    rmac_pause_time: Option<u32>,
    limiter_en: Option<bool>,
    max_limit: Option<u8>,
}

macro_rules! port_macs {
    ($config:expr) => {
        PortMacs {
            mtu: $config.mtu,
            tmac_pad: $config.tmac_pad,
            tmac_pad_byte: $config.tmac_pad_byte,
            tmac_util_period: $config.tmac_util_period,
            rmac_strip_fcs: $config.rmac_strip_fcs,
            rmac_prom_en: $config.rmac_prom_en,
            rmac_discard_pfrm: $config.rmac_discard_pfrm,
            rmac_util_period: $config.rmac_util_period,
            rmac_pause_gen_en: $config.rmac_pause_gen_en,
            rmac_pause_rcv_en: $config.rmac_pause_rcv_en,
            rmac_pause_time: $config.rmac_pause_time,
            limiter_en: $config.limiter_en,
            max_limit: $config.max_limit,
        }
    };
}

impl From<&WirePortConfig> for PortMacs {
    fn from(config: &WirePortConfig) -> Self {
        port_macs!(config)
    }
}

impl From<&SwitchPortConfig> for PortMacs {
    fn from(config: &SwitchPortConfig) -> Self {
        port_macs!(config)
    }
}

impl<R: RegisterAccess> Mrpcim<R> {
    /// Programs the wire ports, the switch port and the packet assist blocks from the
    /// MAC configuration. Unset transmit and receive enables are read back from the
    /// hardware and recorded in the configuration.
    pub fn mac_configure(&mut self) -> Result<()> {
        self.require_mrpcim()?;

        for idx in 0..WIRE_PORT_COUNT {
            self.configure_wire_port(idx);
        }
        self.configure_switch_port();
        self.configure_mac_globals();
        Ok(())
    }

    fn update(&mut self, offset: usize, f: impl FnOnce(u64) -> u64) {
        let bits = self.regs.read64(offset);
        self.regs.write64(offset, f(bits));
    }

    /// `(tmac_en, rmac_en)` of `port`, taking unset values from the hardware.
    fn resolve_macs(&self, port: usize, tmac: Option<bool>, rmac: Option<bool>) -> (bool, bool) {
        let tmac = tmac.unwrap_or_else(|| {
            let cfg = self.regs.read64(reg_offset!(txmac_cfg0_port[port]));
            txmac_cfg0_port::TMAC_EN.is_set(cfg)
        });
        let rmac = rmac.unwrap_or_else(|| {
            let cfg = self.regs.read64(reg_offset!(rxmac_cfg0_port[port]));
            rxmac_cfg0_port::RMAC_EN.is_set(cfg)
        });
        (tmac, rmac)
    }

    fn configure_wire_port(&mut self, idx: usize) {
        let wire = self.config.mac.wire_port[idx].clone();
        let port = wire.port(idx);

        let (tmac_en, rmac_en) = self.resolve_macs(port, wire.tmac_en, wire.rmac_en);
        self.config.mac.wire_port[idx].tmac_en = Some(tmac_en);
        self.config.mac.wire_port[idx].rmac_en = Some(rmac_en);

        let main = reg_offset!(xgmac_main_cfg_port[port]);
        if !tmac_en && !rmac_en {
            self.regs.write64(main, 0);
            log::debug!("vxge: wire port {port} has no MAC enabled, port disabled");
            return;
        }
        self.regs.write64(main, xgmac_main_cfg_port::PORT_EN.mask());

        self.configure_port_macs(port, tmac_en, rmac_en, &PortMacs::from(&wire));

        let link = wire.link_stability_period;
        let stability = wire.port_stability_period;
        self.update(reg_offset!(xgmac_debounce_port[port]), |bits| {
            let bits = value(bits, xgmac_debounce_port::PERIOD_LINK_UP, link);
            let bits = value(bits, xgmac_debounce_port::PERIOD_LINK_DOWN, link);
            let bits = value(bits, xgmac_debounce_port::PERIOD_PORT_UP, stability);
            value(bits, xgmac_debounce_port::PERIOD_PORT_DOWN, stability)
        });

        self.update(reg_offset!(ratemgmt_cfg_port[port]), |bits| {
            let mode = wire.autoneg_mode.map(|mode| mode as u64);
            let bits = value(bits, ratemgmt_cfg_port::MODE, mode);
            let rate = wire.autoneg_rate.map(|rate| rate == AutonegRate::Rate10G);
            let bits = flag(bits, ratemgmt_cfg_port::RATE, rate);
            let bits = flag(bits, ratemgmt_cfg_port::FIXED_USE_FSM, wire.fixed_use_fsm);
            let bits = flag(bits, ratemgmt_cfg_port::ANTP_USE_FSM, wire.antp_use_fsm);
            flag(bits, ratemgmt_cfg_port::ANBE_USE_FSM, wire.anbe_use_fsm)
        });

        log::debug!("vxge: wire port {port} tmac_en={tmac_en} rmac_en={rmac_en}");
    }

    fn configure_switch_port(&mut self) {
        let switch = self.config.mac.switch_port.clone();
        let (tmac_en, rmac_en) = self.resolve_macs(SWITCH_PORT, switch.tmac_en, switch.rmac_en);
        self.config.mac.switch_port.tmac_en = Some(tmac_en);
        self.config.mac.switch_port.rmac_en = Some(rmac_en);

        if tmac_en || rmac_en {
            self.configure_port_macs(SWITCH_PORT, tmac_en, rmac_en, &PortMacs::from(&switch));
        }
    }

    fn configure_port_macs(&mut self, port: usize, tmac_en: bool, rmac_en: bool, macs: &PortMacs) {
        self.update(reg_offset!(rxmac_cfg0_port[port]), |bits| {
            let bits = flag(bits, rxmac_cfg0_port::RMAC_EN, Some(rmac_en));
            let bits = flag(bits, rxmac_cfg0_port::STRIP_FCS, macs.rmac_strip_fcs);
            let bits = flag(bits, rxmac_cfg0_port::DISCARD_PFRM, macs.rmac_discard_pfrm);
            value(bits, rxmac_cfg0_port::MAX_PYLD_LEN, macs.mtu)
        });

        self.update(reg_offset!(rxmac_cfg2_port[port]), |bits| {
            flag(bits, rxmac_cfg2_port::PROM_EN, macs.rmac_prom_en)
        });

        self.update(reg_offset!(rxmac_pause_cfg_port[port]), |bits| {
            let bits = flag(bits, rxmac_pause_cfg_port::GEN_EN, macs.rmac_pause_gen_en);
            let bits = flag(bits, rxmac_pause_cfg_port::RCV_EN, macs.rmac_pause_rcv_en);
            let bits = value(bits, rxmac_pause_cfg_port::HIGH_PTIME, macs.rmac_pause_time);
            let bits = flag(bits, rxmac_pause_cfg_port::LIMITER_EN, macs.limiter_en);
            value(bits, rxmac_pause_cfg_port::MAX_LIMIT, macs.max_limit)
        });

        self.update(reg_offset!(rxmac_link_util_port[port]), |bits| {
            value(bits, rxmac_link_util_port::RMAC_UTIL_CFG, macs.rmac_util_period)
        });

        self.update(reg_offset!(txmac_cfg0_port[port]), |bits| {
            let bits = flag(bits, txmac_cfg0_port::TMAC_EN, Some(tmac_en));
            let bits = flag(bits, txmac_cfg0_port::APPEND_PAD, macs.tmac_pad);
            value(bits, txmac_cfg0_port::PAD_BYTE, macs.tmac_pad_byte)
        });

        self.update(reg_offset!(txmac_link_util_port[port]), |bits| {
            value(bits, txmac_link_util_port::TMAC_UTIL_CFG, macs.tmac_util_period)
        });
    }

    fn configure_mac_globals(&mut self) {
        let mac = self.config.mac.clone();

        self.update(reg_offset!(txmac_gen_cfg1), |bits| {
            use txmac_gen_cfg1::*;
            let bits = flag(bits, TMAC_PERMA_STOP_EN, mac.perma_stop_en);
            let bits = flag(bits, TX_SWITCH_DISABLE, mac.tx_switch_dis);
            let bits = flag(bits, LOSSY_SWITCH, mac.lossy_switch_en);
            let bits = flag(bits, LOSSY_WIRE, mac.lossy_wire_en);
            let bits = flag(bits, BLOCK_BCAST_TO_WIRE, mac.bcast_to_wire_dis);
            let bits = flag(bits, BLOCK_BCAST_TO_SWITCH, mac.bcast_to_switch_dis);
            flag(bits, HOST_APPEND_FCS, mac.host_append_fcs_en)
        });

        self.update(reg_offset!(rxmac_rx_pa_cfg0), |bits| {
            use rxmac_rx_pa_cfg0::*;
            let bits = flag(bits, IGNORE_FRAME_ERR, mac.rpa_ignore_frame_err);
            let bits = flag(bits, SUPPORT_SNAP_AB_N, mac.rpa_support_snap_ab_n);
            let bits = flag(bits, SEARCH_FOR_HAO, mac.rpa_search_for_hao);
            let bits = flag(
                bits,
                SUPPORT_MOBILE_IPV6_HDRS,
                mac.rpa_support_ipv6_mobile_hdrs,
            );
            let bits = flag(bits, IPV6_STOP_SEARCHING, mac.rpa_ipv6_stop_searching);
            let bits = flag(bits, NO_PS_IF_UNKNOWN, mac.rpa_no_ps_if_unknown);
            flag(bits, SEARCH_FOR_ETYPE, mac.rpa_search_for_etype)
        });

        self.update(reg_offset!(fau_pa_cfg), |bits| {
            use fau_pa_cfg::*;
            let bits = flag(bits, REPL_L4_COMP_CSUM, mac.rpa_repl_l4_comp_csum);
            let bits = flag(bits, REPL_L3_INCL_CF, mac.rpa_repl_l3_incl_cf);
            flag(bits, REPL_L3_COMP_CSUM, mac.rpa_repl_l3_comp_csum)
        });

        self.update(reg_offset!(rxmac_rx_pa_cfg1), |bits| {
            use rxmac_rx_pa_cfg1::*;
            let bits = flag(bits, REPL_IPV4_TCP_INCL_PH, mac.rpa_repl_ipv4_tcp_incl_ph);
            let bits = flag(bits, REPL_IPV6_TCP_INCL_PH, mac.rpa_repl_ipv6_tcp_incl_ph);
            let bits = flag(bits, REPL_IPV4_UDP_INCL_PH, mac.rpa_repl_ipv4_udp_incl_ph);
            let bits = flag(bits, REPL_IPV6_UDP_INCL_PH, mac.rpa_repl_ipv6_udp_incl_ph);
            let bits = flag(bits, REPL_L4_INCL_CF, mac.rpa_repl_l4_incl_cf);
            flag(bits, REPL_STRIP_VLAN_TAG, mac.rpa_repl_strip_vlan_tag)
        });

        let period = mac.network_stability_period;
        self.update(reg_offset!(xmac_gen_cfg), |bits| {
            let bits = value(bits, xmac_gen_cfg::PERIOD_NTWK_UP, period);
            value(bits, xmac_gen_cfg::PERIOD_NTWK_DOWN, period)
        });

        self.update(reg_offset!(tpa_global_cfg), |bits| {
            let bits = flag(bits, tpa_global_cfg::SUPPORT_SNAP_AB_N, mac.tpa_support_snap_ab_n);
            flag(bits, tpa_global_cfg::ECC_ENABLE_N, mac.tpa_ecc_enable_n)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AutonegMode, MrpcimConfig};
    use crate::error::MrpcimError;
    use crate::mrpcim::tests::info;
    use crate::mrpcim::{AccessRights, DeviceInfo};
    use crate::testing::FakeRegs;

    fn configure(regs: FakeRegs, config: MrpcimConfig) -> Mrpcim<FakeRegs> {
        Mrpcim::initialize(regs, config, info()).unwrap()
    }

    #[test]
    fn idle_ports_are_disabled() {
        let mut regs = FakeRegs::new();
        regs.set(
            reg_offset!(xgmac_main_cfg_port[1]),
            xgmac_main_cfg_port::PORT_EN.mask(),
        );
        let mrpcim = configure(regs, MrpcimConfig::default());

        let regs = mrpcim.regs();
        assert_eq!(regs.writes_to(reg_offset!(xgmac_main_cfg_port[0])), vec![0]);
        assert_eq!(regs.writes_to(reg_offset!(xgmac_main_cfg_port[1])), vec![0]);
        assert!(!regs.written(reg_offset!(rxmac_cfg0_port[0])));
        assert!(!regs.written(reg_offset!(xgmac_debounce_port[1])));
        // The switch port has no main config register write at all.
        assert!(!regs.written(reg_offset!(xgmac_main_cfg_port[2])));
        assert!(!regs.written(reg_offset!(txmac_cfg0_port[2])));

        let mac = &mrpcim.config().mac;
        assert_eq!(mac.wire_port[0].tmac_en, Some(false));
        assert_eq!(mac.wire_port[1].rmac_en, Some(false));
        assert_eq!(mac.switch_port.tmac_en, Some(false));
    }

    #[test]
    fn unset_knobs_keep_flash_values() {
        let flashed_rx = rxmac_cfg0_port::IGNORE_FCS_ERR.mask()
            | rxmac_cfg0_port::STRIP_FCS.mask()
            | rxmac_cfg0_port::MAX_PYLD_LEN.encode(1518);
        let flashed_tx = txmac_cfg0_port::TMAC_EN.mask() | txmac_cfg0_port::PAD_BYTE.encode(0x5a);
        let flashed_pause =
            rxmac_pause_cfg_port::HIGH_PTIME.encode(0x40) | rxmac_pause_cfg_port::RCV_EN.mask();
        let flashed_debounce = xgmac_debounce_port::PERIOD_PORT_UP.encode(4);

        let mut regs = FakeRegs::new();
        regs.set(reg_offset!(rxmac_cfg0_port[0]), flashed_rx);
        regs.set(reg_offset!(txmac_cfg0_port[0]), flashed_tx);
        regs.set(reg_offset!(rxmac_pause_cfg_port[0]), flashed_pause);
        regs.set(reg_offset!(xgmac_debounce_port[0]), flashed_debounce);
        let mrpcim = configure(regs, MrpcimConfig::default());

        let regs = mrpcim.regs();
        assert_eq!(
            regs.get(reg_offset!(xgmac_main_cfg_port[0])),
            xgmac_main_cfg_port::PORT_EN.mask()
        );
        assert_eq!(regs.get(reg_offset!(rxmac_cfg0_port[0])), flashed_rx);
        assert_eq!(regs.get(reg_offset!(txmac_cfg0_port[0])), flashed_tx);
        assert_eq!(regs.get(reg_offset!(rxmac_pause_cfg_port[0])), flashed_pause);
        assert_eq!(regs.get(reg_offset!(xgmac_debounce_port[0])), flashed_debounce);
        assert_eq!(regs.get(reg_offset!(txmac_gen_cfg1)), 0);

        let port = &mrpcim.config().mac.wire_port[0];
        assert_eq!((port.tmac_en, port.rmac_en), (Some(true), Some(false)));
    }

    #[test]
    fn wire_port_knobs_are_programmed() {
        let mut config = MrpcimConfig::default();
        config.mac.wire_port[0] = WirePortConfig {
            mtu: Some(9000),
            autoneg_mode: Some(AutonegMode::Antp),
            autoneg_rate: Some(AutonegRate::Rate10G),
            antp_use_fsm: Some(true),
            link_stability_period: Some(3),
            port_stability_period: Some(5),
            tmac_en: Some(true),
            rmac_en: Some(true),
            tmac_pad: Some(true),
            tmac_pad_byte: Some(0xaa),
            tmac_util_period: Some(7),
            rmac_prom_en: Some(true),
            rmac_strip_fcs: Some(false),
            rmac_util_period: Some(9),
            rmac_pause_gen_en: Some(true),
            rmac_pause_time: Some(128),
            limiter_en: Some(true),
            max_limit: Some(4),
            ..WirePortConfig::default()
        };
        config.mac.wire_port[1] = WirePortConfig {
            port_id: Some(1),
            rmac_en: Some(true),
            tmac_en: Some(false),
            ..WirePortConfig::default()
        };

        let mut regs = FakeRegs::new();
        regs.set(reg_offset!(rxmac_cfg0_port[0]), rxmac_cfg0_port::STRIP_FCS.mask());
        let mrpcim = configure(regs, config);
        let regs = mrpcim.regs();

        let rx = regs.get(reg_offset!(rxmac_cfg0_port[0]));
        assert!(rxmac_cfg0_port::RMAC_EN.is_set(rx));
        assert!(!rxmac_cfg0_port::STRIP_FCS.is_set(rx));
        assert_eq!(rxmac_cfg0_port::MAX_PYLD_LEN.decode(rx), 9000);
        assert!(rxmac_cfg2_port::PROM_EN.is_set(regs.get(reg_offset!(rxmac_cfg2_port[0]))));

        let pause = regs.get(reg_offset!(rxmac_pause_cfg_port[0]));
        assert!(rxmac_pause_cfg_port::GEN_EN.is_set(pause));
        assert!(!rxmac_pause_cfg_port::RCV_EN.is_set(pause));
        assert_eq!(rxmac_pause_cfg_port::HIGH_PTIME.decode(pause), 128);
        assert!(rxmac_pause_cfg_port::LIMITER_EN.is_set(pause));
        assert_eq!(rxmac_pause_cfg_port::MAX_LIMIT.decode(pause), 4);

        assert_eq!(
            rxmac_link_util_port::RMAC_UTIL_CFG
                .decode(regs.get(reg_offset!(rxmac_link_util_port[0]))),
            9
        );
        let tx = regs.get(reg_offset!(txmac_cfg0_port[0]));
        assert!(txmac_cfg0_port::TMAC_EN.is_set(tx));
        assert!(txmac_cfg0_port::APPEND_PAD.is_set(tx));
        assert_eq!(txmac_cfg0_port::PAD_BYTE.decode(tx), 0xaa);
        assert_eq!(
            txmac_link_util_port::TMAC_UTIL_CFG
                .decode(regs.get(reg_offset!(txmac_link_util_port[0]))),
            7
        );

        let debounce = regs.get(reg_offset!(xgmac_debounce_port[0]));
        assert_eq!(xgmac_debounce_port::PERIOD_LINK_UP.decode(debounce), 3);
        assert_eq!(xgmac_debounce_port::PERIOD_LINK_DOWN.decode(debounce), 3);
        assert_eq!(xgmac_debounce_port::PERIOD_PORT_UP.decode(debounce), 5);
        assert_eq!(xgmac_debounce_port::PERIOD_PORT_DOWN.decode(debounce), 5);

        let rate = regs.get(reg_offset!(ratemgmt_cfg_port[0]));
        assert_eq!(ratemgmt_cfg_port::MODE.decode(rate), AutonegMode::Antp as u64);
        assert!(ratemgmt_cfg_port::RATE.is_set(rate));
        assert!(ratemgmt_cfg_port::ANTP_USE_FSM.is_set(rate));
        assert!(!ratemgmt_cfg_port::FIXED_USE_FSM.is_set(rate));

        // Receive only on port 1.
        assert_eq!(
            regs.get(reg_offset!(xgmac_main_cfg_port[1])),
            xgmac_main_cfg_port::PORT_EN.mask()
        );
        assert!(rxmac_cfg0_port::RMAC_EN.is_set(regs.get(reg_offset!(rxmac_cfg0_port[1]))));
        assert!(!txmac_cfg0_port::TMAC_EN.is_set(regs.get(reg_offset!(txmac_cfg0_port[1]))));
    }

    #[test]
    fn switch_port_follows_its_enables() {
        let mut config = MrpcimConfig::default();
        config.mac.switch_port = SwitchPortConfig {
            mtu: Some(1500),
            rmac_pause_rcv_en: Some(true),
            ..SwitchPortConfig::default()
        };
        let mut regs = FakeRegs::new();
        regs.set(reg_offset!(rxmac_cfg0_port[2]), rxmac_cfg0_port::RMAC_EN.mask());
        let mrpcim = configure(regs, config);
        let regs = mrpcim.regs();

        let rx = regs.get(reg_offset!(rxmac_cfg0_port[2]));
        assert!(rxmac_cfg0_port::RMAC_EN.is_set(rx));
        assert_eq!(rxmac_cfg0_port::MAX_PYLD_LEN.decode(rx), 1500);
        assert!(rxmac_pause_cfg_port::RCV_EN
            .is_set(regs.get(reg_offset!(rxmac_pause_cfg_port[2]))));
        assert!(!regs.written(reg_offset!(xgmac_main_cfg_port[2])));
        assert!(!regs.written(reg_offset!(ratemgmt_cfg_port[2])));
        assert_eq!(mrpcim.config().mac.switch_port.rmac_en, Some(true));
        assert_eq!(mrpcim.config().mac.switch_port.tmac_en, Some(false));
    }

    #[test]
    fn global_knobs_are_programmed() {
        let mut config = MrpcimConfig::default();
        config.mac.perma_stop_en = Some(false);
        config.mac.lossy_wire_en = Some(true);
        config.mac.bcast_to_switch_dis = Some(true);
        config.mac.rpa_search_for_etype = Some(true);
        config.mac.rpa_repl_l4_comp_csum = Some(true);
        config.mac.rpa_repl_ipv6_udp_incl_ph = Some(true);
        config.mac.network_stability_period = Some(3);
        config.mac.tpa_ecc_enable_n = Some(true);

        let mut regs = FakeRegs::new();
        regs.set(
            reg_offset!(txmac_gen_cfg1),
            txmac_gen_cfg1::TMAC_PERMA_STOP_EN.mask() | txmac_gen_cfg1::LOSSY_SWITCH.mask(),
        );
        let mrpcim = configure(regs, config);
        let regs = mrpcim.regs();

        assert_eq!(
            regs.get(reg_offset!(txmac_gen_cfg1)),
            txmac_gen_cfg1::LOSSY_SWITCH.mask()
                | txmac_gen_cfg1::LOSSY_WIRE.mask()
                | txmac_gen_cfg1::BLOCK_BCAST_TO_SWITCH.mask()
        );
        assert_eq!(
            regs.get(reg_offset!(rxmac_rx_pa_cfg0)),
            rxmac_rx_pa_cfg0::SEARCH_FOR_ETYPE.mask()
        );
        assert_eq!(
            regs.get(reg_offset!(fau_pa_cfg)),
            fau_pa_cfg::REPL_L4_COMP_CSUM.mask()
        );
        assert_eq!(
            regs.get(reg_offset!(rxmac_rx_pa_cfg1)),
            rxmac_rx_pa_cfg1::REPL_IPV6_UDP_INCL_PH.mask()
        );
        let gen = regs.get(reg_offset!(xmac_gen_cfg));
        assert_eq!(xmac_gen_cfg::PERIOD_NTWK_UP.decode(gen), 3);
        assert_eq!(xmac_gen_cfg::PERIOD_NTWK_DOWN.decode(gen), 3);
        assert_eq!(
            regs.get(reg_offset!(tpa_global_cfg)),
            tpa_global_cfg::ECC_ENABLE_N.mask()
        );
    }

    #[test]
    fn needs_mrpcim_rights() {
        let info = DeviceInfo {
            access_rights: AccessRights::VPATH,
            ..info()
        };
        let mut mrpcim = Mrpcim::attach(FakeRegs::new(), info);
        assert!(matches!(mrpcim.mac_configure(), Err(MrpcimError::PrivilegedOperation)));
        assert_eq!(mrpcim.regs().write_count(), 0);
    }
}
