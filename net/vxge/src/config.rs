//! MRPCIM configuration.
//!
//! Every hardware knob is optional. `None` keeps whatever the adapter loaded from its
//! flash at power-on; `Some` is programmed by `Mrpcim::mac_configure`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::regs::{MAC_PORT_COUNT, VPATH_COUNT, WIRE_PORT_COUNT};

pub const MIN_MTU: u32 = 68;
pub const MAX_MTU: u32 = 9600;
pub const MIN_PAUSE_TIME: u32 = 16;
pub const MAX_PAUSE_TIME: u32 = 0xffff;
pub const MAX_UTIL_PERIOD: u32 = 15;
pub const MAX_STABILITY_PERIOD: u32 = 15;
pub const MAX_NETWORK_STABILITY_PERIOD: u32 = 7;
pub const MAX_MC_PAUSE_THRESHOLD: u32 = 254;
pub const MC_PAUSE_THRESHOLD_COUNT: usize = 16;
pub const MAX_VPATH_PRIORITY: u32 = 16;
pub const MAX_BANDWIDTH: u32 = 100;
pub const MIN_DEVICE_POLL_MILLIS: u64 = 1;
pub const MAX_DEVICE_POLL_MILLIS: u64 = 100_000;
pub const DEFAULT_DEVICE_POLL_MILLIS: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    Sr,
    Sw,
    Lr,
    Lw,
    Er,
    Ew,
}

/// Rate management mode of a port, as programmed into `ratemgmt_cfg_port.MODE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutonegMode {
    Fixed = 0,
    Antp = 1,
    Anbe = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub enum AutonegRate {
    #[serde(rename = "1g")]
    Rate1G,
    #[serde(rename = "10g")]
    Rate10G,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WirePortConfig {
    /// MAC port driven by this entry; the entry index when unset.
    pub port_id: Option<u32>,
    pub media: Option<Media>,
    pub mtu: Option<u32>,
    pub autoneg_mode: Option<AutonegMode>,
    pub autoneg_rate: Option<AutonegRate>,
    pub fixed_use_fsm: Option<bool>,
    pub antp_use_fsm: Option<bool>,
    pub anbe_use_fsm: Option<bool>,
    pub link_stability_period: Option<u32>,
    pub port_stability_period: Option<u32>,
    pub tmac_en: Option<bool>,
    pub rmac_en: Option<bool>,
    pub tmac_pad: Option<bool>,
    pub tmac_pad_byte: Option<u8>,
    pub tmac_util_period: Option<u32>,
    pub rmac_strip_fcs: Option<bool>,
    pub rmac_prom_en: Option<bool>,
    pub rmac_discard_pfrm: Option<bool>,
    pub rmac_util_period: Option<u32>,
    pub rmac_pause_gen_en: Option<bool>,
    pub rmac_pause_rcv_en: Option<bool>,
    pub rmac_pause_time: Option<u32>,
    pub limiter_en: Option<bool>,
    pub max_limit: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwitchPortConfig {
    pub mtu: Option<u32>,
    pub tmac_en: Option<bool>,
    pub rmac_en: Option<bool>,
    pub tmac_pad: Option<bool>,
    pub tmac_pad_byte: Option<u8>,
    pub tmac_util_period: Option<u32>,
    pub rmac_strip_fcs: Option<bool>,
    pub rmac_prom_en: Option<bool>,
    pub rmac_discard_pfrm: Option<bool>,
    pub rmac_util_period: Option<u32>,
    pub rmac_pause_gen_en: Option<bool>,
    pub rmac_pause_rcv_en: Option<bool>,
    pub rmac_pause_time: Option<u32>,
    pub limiter_en: Option<bool>,
    pub max_limit: Option<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MacConfig {
    pub wire_port: [WirePortConfig; WIRE_PORT_COUNT],
    pub switch_port: SwitchPortConfig,
    pub network_stability_period: Option<u32>,
    /// Multicast pause thresholds; validated only, the MAC setup does not program them.
    pub mc_pause_threshold: Vec<u32>,

    pub perma_stop_en: Option<bool>,
    pub tx_switch_dis: Option<bool>,
    pub lossy_switch_en: Option<bool>,
    pub lossy_wire_en: Option<bool>,
    pub bcast_to_wire_dis: Option<bool>,
    pub bcast_to_switch_dis: Option<bool>,
    pub host_append_fcs_en: Option<bool>,

    pub tpa_support_snap_ab_n: Option<bool>,
    pub tpa_ecc_enable_n: Option<bool>,

    pub rpa_ignore_frame_err: Option<bool>,
    pub rpa_support_snap_ab_n: Option<bool>,
    pub rpa_search_for_hao: Option<bool>,
    pub rpa_support_ipv6_mobile_hdrs: Option<bool>,
    pub rpa_ipv6_stop_searching: Option<bool>,
    pub rpa_no_ps_if_unknown: Option<bool>,
    pub rpa_search_for_etype: Option<bool>,
    pub rpa_repl_l4_comp_csum: Option<bool>,
    pub rpa_repl_l3_incl_cf: Option<bool>,
    pub rpa_repl_l3_comp_csum: Option<bool>,
    pub rpa_repl_ipv4_tcp_incl_ph: Option<bool>,
    pub rpa_repl_ipv6_tcp_incl_ph: Option<bool>,
    pub rpa_repl_ipv4_udp_incl_ph: Option<bool>,
    pub rpa_repl_ipv6_udp_incl_ph: Option<bool>,
    pub rpa_repl_l4_incl_cf: Option<bool>,
    pub rpa_repl_strip_vlan_tag: Option<bool>,
}

/// Bandwidth share of one vpath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VpathQos {
    pub priority: u32,
    pub min_bandwidth: u32,
    pub max_bandwidth: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MrpcimConfig {
    /// Budget for register polls, in milliseconds.
    pub device_poll_millis: u64,
    pub emulated_inta: bool,
    pub mac: MacConfig,
    /// QoS per vpath, indexed by vpath id. Missing entries are all zero.
    pub vp_qos: Vec<VpathQos>,
}

impl Default for MrpcimConfig {
    fn default() -> Self {
        Self {
            device_poll_millis: DEFAULT_DEVICE_POLL_MILLIS,
            emulated_inta: false,
            mac: MacConfig::default(),
            vp_qos: Vec::new(),
        }
    }
}

fn range(field: impl Into<String>, value: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError {
            field: field.into(),
            value,
            min,
            max,
        })
    }
}

fn opt_range(field: String, value: Option<u32>, min: u32, max: u32) -> Result<(), ConfigError> {
    match value {
        Some(value) => range(field, value.into(), min.into(), max.into()),
        None => Ok(()),
    }
}

impl WirePortConfig {
    pub fn port(&self, idx: usize) -> usize {
        self.port_id.map_or(idx, |id| id as usize)
    }

    fn check(&self, idx: usize) -> Result<(), ConfigError> {
        let name = |field: &str| format!("mac.wire_port[{idx}].{field}");
        opt_range(name("port_id"), self.port_id, 0, MAC_PORT_COUNT as u32 - 1)?;
        opt_range(name("mtu"), self.mtu, MIN_MTU, MAX_MTU)?;
        opt_range(
            name("link_stability_period"),
            self.link_stability_period,
            0,
            MAX_STABILITY_PERIOD,
        )?;
        opt_range(
            name("port_stability_period"),
            self.port_stability_period,
            0,
            MAX_STABILITY_PERIOD,
        )?;
        opt_range(name("tmac_util_period"), self.tmac_util_period, 0, MAX_UTIL_PERIOD)?;
        opt_range(name("rmac_util_period"), self.rmac_util_period, 0, MAX_UTIL_PERIOD)?;
        opt_range(
            name("rmac_pause_time"),
            self.rmac_pause_time,
            MIN_PAUSE_TIME,
            MAX_PAUSE_TIME,
        )
    }
}

impl SwitchPortConfig {
    fn check(&self) -> Result<(), ConfigError> {
        let name = |field: &str| format!("mac.switch_port.{field}");
        opt_range(name("mtu"), self.mtu, MIN_MTU, MAX_MTU)?;
        opt_range(name("tmac_util_period"), self.tmac_util_period, 0, MAX_UTIL_PERIOD)?;
        opt_range(name("rmac_util_period"), self.rmac_util_period, 0, MAX_UTIL_PERIOD)?;
        opt_range(
            name("rmac_pause_time"),
            self.rmac_pause_time,
            MIN_PAUSE_TIME,
            MAX_PAUSE_TIME,
        )
    }
}

impl MacConfig {
    fn check(&self) -> Result<(), ConfigError> {
        for (idx, port) in self.wire_port.iter().enumerate() {
            port.check(idx)?;
        }
        self.switch_port.check()?;
        opt_range(
            "mac.network_stability_period".into(),
            self.network_stability_period,
            0,
            MAX_NETWORK_STABILITY_PERIOD,
        )?;
        range(
            "mac.mc_pause_threshold.len",
            self.mc_pause_threshold.len() as u64,
            0,
            MC_PAUSE_THRESHOLD_COUNT as u64,
        )?;
        for (idx, threshold) in self.mc_pause_threshold.iter().enumerate() {
            range(
                format!("mac.mc_pause_threshold[{idx}]"),
                (*threshold).into(),
                0,
                MAX_MC_PAUSE_THRESHOLD.into(),
            )?;
        }
        Ok(())
    }
}

impl VpathQos {
    pub fn check(&self, vp_id: usize) -> Result<(), ConfigError> {
        let name = |field: &str| format!("vp_qos[{vp_id}].{field}");
        range(name("priority"), self.priority.into(), 0, MAX_VPATH_PRIORITY.into())?;
        range(
            name("min_bandwidth"),
            self.min_bandwidth.into(),
            0,
            MAX_BANDWIDTH.into(),
        )?;
        range(
            name("max_bandwidth"),
            self.max_bandwidth.into(),
            0,
            MAX_BANDWIDTH.into(),
        )
    }
}

impl MrpcimConfig {
    /// Validates every range; the first offending field is reported.
    pub fn check(&self) -> Result<(), ConfigError> {
        range(
            "device_poll_millis",
            self.device_poll_millis,
            MIN_DEVICE_POLL_MILLIS,
            MAX_DEVICE_POLL_MILLIS,
        )?;
        self.mac.check()?;
        range(
            "vp_qos.len",
            self.vp_qos.len() as u64,
            0,
            VPATH_COUNT as u64,
        )?;
        for (vp_id, qos) in self.vp_qos.iter().enumerate() {
            qos.check(vp_id)?;
        }
        Ok(())
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let config: Self = toml::from_str(data)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// QoS of every vpath, zero where the configuration has no entry.
    pub fn qos_table(&self) -> [VpathQos; VPATH_COUNT] {
        let mut table = [VpathQos::default(); VPATH_COUNT];
        for (slot, qos) in table.iter_mut().zip(&self.vp_qos) {
            *slot = *qos;
        }
        table
    }
}
