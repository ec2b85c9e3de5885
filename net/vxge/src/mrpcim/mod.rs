//! The privileged function of the adapter.
//!
//! Exactly one PCI function owns the MRPCIM block. It programs the MAC ports, the
//! statistics engine, the steering tables and the adapter reset. Every operation checks
//! that the handle was created with MRPCIM rights before touching a register.

mod intr;
mod mac;
mod mdio;
mod rts;
mod snapshot;
mod xpak;

pub use self::intr::{Alarm, AlarmGroup, AlarmLeaf, ALARM_GROUPS};
pub use self::mdio::{devad, MdioOp};
pub use self::rts::{MacAddrEntry, MacAddrMode, RtsAction, RtsEntry};
pub use self::xpak::{DomFlags, XpakAlarm, XpakStats};

use bitflags::bitflags;

use crate::access::{poll, reg_offset, write64_split, PollUntil, RegisterAccess};
use crate::bits::vbit;
use crate::config::{MrpcimConfig, VpathQos};
use crate::error::{MrpcimError, Result};
use crate::regs::fields::{
    bf_sw_reset, mdio_gen_cfg_port, mrpcim_general_cfg2, rdcrdtarb_cfg0, rxmac_pause_cfg_port,
    rxmac_rx_pa_cfg1, sw_reset_cfg1, xgxs_static_cfg_port, xmac_stats_sys_cmd,
};
use crate::regs::{MAC_PORT_COUNT, VPATH_COUNT, WIRE_PORT_COUNT};
use crate::stats::{self, StatsLoc, StatsOp, XmacAggrStats, XmacPortStats};

bitflags! {
    /// What a PCI function may do on the adapter.
    pub struct AccessRights: u32 {
        const VPATH = 1;
        const SRPCIM = 1 << 1;
        const MRPCIM = 1 << 2;
    }
}

/// Every vpath, in the layout of `rxmac_authorize_all_addr`.
pub const ALL_VPATHS: u64 = vbit(!0, 0, VPATH_COUNT as u32);

/// Outstanding PCIe reads allowed when interrupts are emulated INTx.
const EMULATED_INTA_MAX_OUTSTANDING_RDS: u64 = 8;

/// What the device probe learned about the function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceInfo {
    pub access_rights: AccessRights,
    /// Vpaths owned by the function, vpath `n` at `mbit(n)`.
    pub vpath_assignments: u64,
    pub first_vp_id: u32,
    /// Bus address the adapter writes its statistics block to.
    pub stats_dma_addr: u64,
}

pub struct Mrpcim<R> {
    regs: R,
    config: MrpcimConfig,
    qos: [VpathQos; VPATH_COUNT],
    rights: AccessRights,
    vpath_assignments: u64,
    first_vp_id: u32,
    stats_dma_addr: u64,
    phy_prtad: [u32; WIRE_PORT_COUNT],
    dte_prtad: [u32; WIRE_PORT_COUNT],
    xpak: [XpakStats; WIRE_PORT_COUNT],
    initialized: bool,
    resetting: bool,
}

impl<R: RegisterAccess> Mrpcim<R> {
    fn new(regs: R, config: MrpcimConfig, info: DeviceInfo) -> Self {
        Self {
            regs,
            qos: config.qos_table(),
            config,
            rights: info.access_rights,
            vpath_assignments: info.vpath_assignments,
            first_vp_id: info.first_vp_id,
            stats_dma_addr: info.stats_dma_addr,
            phy_prtad: [0; WIRE_PORT_COUNT],
            dte_prtad: [0; WIRE_PORT_COUNT],
            xpak: [XpakStats::default(); WIRE_PORT_COUNT],
            initialized: false,
            resetting: false,
        }
    }

    /// Wraps `regs` without touching the hardware. The handle is not initialized, so
    /// reset is refused until [`Mrpcim::initialize`] has run.
    pub fn attach(regs: R, info: DeviceInfo) -> Self {
        Self::new(regs, MrpcimConfig::default(), info)
    }

    /// Validates `config` and brings the MRPCIM block up: MAC ports, MDIO port
    /// addresses, statistics DMA and vpath authorization.
    pub fn initialize(regs: R, config: MrpcimConfig, info: DeviceInfo) -> Result<Self> {
        if !info.access_rights.contains(AccessRights::MRPCIM) {
            return Err(MrpcimError::PrivilegedOperation);
        }
        config.check()?;

        let mut mrpcim = Self::new(regs, config, info);
        mrpcim.mac_configure()?;
        mrpcim.read_port_addresses();
        mrpcim.program_stats_addr();

        let map = mrpcim_general_cfg2::MRPCIM_STATS_MAP_TO_VPATH;
        mrpcim.regs.modify64(
            reg_offset!(mrpcim_general_cfg2),
            map.mask(),
            map.encode(info.first_vp_id.into()),
        );

        mrpcim.authorize(ALL_VPATHS);

        if mrpcim.config.emulated_inta {
            let rds = rdcrdtarb_cfg0::MAX_OUTSTANDING_RDS;
            mrpcim.regs.modify64(
                reg_offset!(rdcrdtarb_cfg0),
                rds.mask(),
                rds.encode(EMULATED_INTA_MAX_OUTSTANDING_RDS),
            );
        }

        mrpcim.initialized = true;
        log::info!(
            "vxge: mrpcim up, stats mapped to vpath {}, phy prtad {:?}, dte prtad {:?}",
            info.first_vp_id,
            mrpcim.phy_prtad,
            mrpcim.dte_prtad
        );
        Ok(mrpcim)
    }

    pub fn regs(&self) -> &R {
        &self.regs
    }

    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    pub fn into_regs(self) -> R {
        self.regs
    }

    pub fn config(&self) -> &MrpcimConfig {
        &self.config
    }

    pub fn access_rights(&self) -> AccessRights {
        self.rights
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    /// MDIO port address of the PHY behind wire port `port`.
    pub fn phy_prtad(&self, port: usize) -> Option<u32> {
        self.phy_prtad.get(port).copied()
    }

    /// MDIO port address of the DTE XGXS of wire port `port`.
    pub fn dte_prtad(&self, port: usize) -> Option<u32> {
        self.dte_prtad.get(port).copied()
    }

    fn require_mrpcim(&self) -> Result<()> {
        if self.rights.contains(AccessRights::MRPCIM) {
            Ok(())
        } else {
            Err(MrpcimError::PrivilegedOperation)
        }
    }

    fn poll_millis(&self) -> u64 {
        self.config.device_poll_millis
    }

    fn read_port_addresses(&mut self) {
        for port in 0..WIRE_PORT_COUNT {
            let gen = self.regs.read64(reg_offset!(mdio_gen_cfg_port[port]));
            self.phy_prtad[port] = mdio_gen_cfg_port::MDIO_PHY_PRTAD.decode(gen) as u32;

            let xgxs = self.regs.read64(reg_offset!(xgxs_static_cfg_port[port]));
            self.dte_prtad[port] = xgxs_static_cfg_port::MDIO_DTE_PRTAD.decode(xgxs) as u32;
        }
    }

    fn program_stats_addr(&mut self) {
        self.regs
            .write64(reg_offset!(mrpcim_stats_start_host_addr), self.stats_dma_addr);
    }

    fn authorize(&mut self, vpaths: u64) {
        self.regs.write64(reg_offset!(rxmac_authorize_all_addr), vpaths);
        self.regs.write64(reg_offset!(rxmac_authorize_all_vid), vpaths);
    }

    /// Starts a soft reset of the whole adapter. Completion is reported by
    /// [`Mrpcim::reset_poll`].
    pub fn reset(&mut self) -> Result<()> {
        self.require_mrpcim()?;
        if !self.initialized {
            return Err(MrpcimError::NotInitialized);
        }
        if self.resetting {
            return Err(MrpcimError::ResetInProgress);
        }

        let cfg1 = self.regs.read64(reg_offset!(sw_reset_cfg1));
        self.regs
            .write64(reg_offset!(sw_reset_cfg1), cfg1 | sw_reset_cfg1::TYPE.mask());
        self.regs.write64(
            reg_offset!(bf_sw_reset),
            bf_sw_reset::DATA.encode(bf_sw_reset::COMMAND),
        );

        self.resetting = true;
        log::info!("vxge: adapter reset started");
        Ok(())
    }

    /// Restores the MRPCIM state after a reset: MAC ports, MDIO port addresses,
    /// statistics DMA and the vpaths of this function.
    pub fn reset_poll(&mut self) -> Result<()> {
        self.require_mrpcim()?;
        if !self.initialized {
            return Err(MrpcimError::NotInitialized);
        }

        self.resetting = false;
        self.mac_configure()?;
        self.read_port_addresses();
        self.program_stats_addr();
        self.authorize(self.vpath_assignments);

        log::info!("vxge: adapter reset complete");
        Ok(())
    }

    /// Runs one command of the XMAC statistics engine. Reads return the counter word,
    /// every other operation returns 0.
    pub fn stats_access(&mut self, op: StatsOp, loc: StatsLoc, offset: u32) -> Result<u64> {
        self.require_mrpcim()?;

        let cmd = xmac_stats_sys_cmd::OP.encode(op as u64)
            | xmac_stats_sys_cmd::STROBE.mask()
            | xmac_stats_sys_cmd::LOC_SEL.encode(loc.sel())
            | xmac_stats_sys_cmd::OFFSET_SEL.encode(offset.into());
        let at = reg_offset!(xmac_stats_sys_cmd);
        write64_split(&mut self.regs, at, cmd);
        poll(
            &self.regs,
            at,
            xmac_stats_sys_cmd::STROBE.mask(),
            PollUntil::Clear,
            self.poll_millis(),
        )?;

        if op == StatsOp::Read {
            Ok(self.regs.read64(reg_offset!(xmac_stats_sys_data)))
        } else {
            Ok(0)
        }
    }

    pub fn stats_enable(&mut self) -> Result<()> {
        self.set_stats_enable(true)
    }

    pub fn stats_disable(&mut self) -> Result<()> {
        self.set_stats_enable(false)
    }

    fn set_stats_enable(&mut self, enable: bool) -> Result<()> {
        self.require_mrpcim()?;
        let bit = mrpcim_general_cfg2::MRPCIM_STATS_ENABLE.mask();
        self.regs.modify64(
            reg_offset!(mrpcim_general_cfg2),
            bit,
            if enable { bit } else { 0 },
        );
        log::debug!("vxge: mrpcim stats enable = {enable}");
        Ok(())
    }

    /// Zeroes every XMAC counter.
    pub fn stats_clear(&mut self) -> Result<()> {
        self.stats_access(StatsOp::ClearAllStats, StatsLoc::Vpath(0), 0)
            .map(|_| ())
    }

    /// Counters of link aggregator `port`.
    pub fn xmac_aggr_stats(&mut self, port: u32) -> Result<XmacAggrStats> {
        if port as usize >= stats::AGGR_COUNT {
            return Err(MrpcimError::InvalidPort(port));
        }
        XmacAggrStats::read_with(|byte| {
            self.stats_access(StatsOp::Read, StatsLoc::Aggr, stats::aggr_offset(port, byte))
        })
    }

    /// Counters of MAC port `port`, the switch port included.
    pub fn xmac_port_stats(&mut self, port: u32) -> Result<XmacPortStats> {
        if port as usize >= MAC_PORT_COUNT {
            return Err(MrpcimError::InvalidPort(port));
        }
        XmacPortStats::read_with(|byte| {
            self.stats_access(StatsOp::Read, StatsLoc::Port, stats::port_offset(port, byte))
        })
    }

    /// The two programmable global event counters.
    pub fn global_prog_events(&mut self) -> Result<[u64; 2]> {
        Ok([
            self.stats_access(StatsOp::Read, StatsLoc::Aggr, stats::GLOBAL_PROG_EVENT_GNUM0)?,
            self.stats_access(StatsOp::Read, StatsLoc::Aggr, stats::GLOBAL_PROG_EVENT_GNUM1)?,
        ])
    }

    pub fn strip_repl_vlan_tag_enable(&mut self) -> Result<()> {
        self.set_strip_repl_vlan_tag(true)
    }

    pub fn strip_repl_vlan_tag_disable(&mut self) -> Result<()> {
        self.set_strip_repl_vlan_tag(false)
    }

    fn set_strip_repl_vlan_tag(&mut self, enable: bool) -> Result<()> {
        self.require_mrpcim()?;
        if self.config.mac.rpa_repl_strip_vlan_tag == Some(enable) {
            return Ok(());
        }

        let bit = rxmac_rx_pa_cfg1::REPL_STRIP_VLAN_TAG.mask();
        self.regs.modify64(
            reg_offset!(rxmac_rx_pa_cfg1),
            bit,
            if enable { bit } else { 0 },
        );
        self.config.mac.rpa_repl_strip_vlan_tag = Some(enable);
        Ok(())
    }

    fn check_mac_port(port: u32) -> Result<usize> {
        if (port as usize) < MAC_PORT_COUNT {
            Ok(port as usize)
        } else {
            Err(MrpcimError::InvalidPort(port))
        }
    }

    /// Pause frame generation and reception of `port`, as `(tx, rx)`.
    pub fn pause(&self, port: u32) -> Result<(bool, bool)> {
        let port = Self::check_mac_port(port)?;
        self.require_mrpcim()?;

        let cfg = self.regs.read64(reg_offset!(rxmac_pause_cfg_port[port]));
        Ok((
            rxmac_pause_cfg_port::GEN_EN.is_set(cfg),
            rxmac_pause_cfg_port::RCV_EN.is_set(cfg),
        ))
    }

    pub fn set_pause(&mut self, port: u32, tx: bool, rx: bool) -> Result<()> {
        let port = Self::check_mac_port(port)?;
        self.require_mrpcim()?;

        let gen = rxmac_pause_cfg_port::GEN_EN.mask();
        let rcv = rxmac_pause_cfg_port::RCV_EN.mask();
        let mut value = 0;
        if tx {
            value |= gen;
        }
        if rx {
            value |= rcv;
        }
        self.regs
            .modify64(reg_offset!(rxmac_pause_cfg_port[port]), gen | rcv, value);
        Ok(())
    }

    /// Records the bandwidth share of vpath `vp_id`.
    pub fn vpath_qos_set(
        &mut self,
        vp_id: u32,
        priority: u32,
        min_bandwidth: u32,
        max_bandwidth: u32,
    ) -> Result<()> {
        self.require_mrpcim()?;
        if vp_id as usize >= VPATH_COUNT {
            return Err(MrpcimError::VpathNotAvailable(vp_id));
        }

        let qos = VpathQos {
            priority,
            min_bandwidth,
            max_bandwidth,
        };
        qos.check(vp_id as usize)?;
        self.qos[vp_id as usize] = qos;
        Ok(())
    }

    pub fn vpath_qos(&self, vp_id: u32) -> Result<VpathQos> {
        self.qos
            .get(vp_id as usize)
            .copied()
            .ok_or(MrpcimError::VpathNotAvailable(vp_id))
    }
}
