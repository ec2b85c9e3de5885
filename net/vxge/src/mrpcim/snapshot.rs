//! Whole-adapter statistics snapshots.
//!
//! The XMAC blocks come through the statistics engine, everything else is read
//! straight from the debug counter registers of the MRPCIM block.

use super::Mrpcim;
use crate::access::{reg_offset, RegisterAccess};
use crate::error::Result;
use crate::regs::fields::{
    dbg_stat_rx_any_frms, dbg_stat_tx_any_frms, dbg_stats_tpa_tx_path, debug_stats0,
    debug_stats1, debug_stats2, debug_stats3_vplane, debug_stats4_vplane, genstats_count01,
    genstats_count23, genstats_count4, genstats_count5, mrpcim_debug_stats0,
    mrpcim_debug_stats1_vplane, mrpcim_debug_stats2_vplane, mrpcim_debug_stats3_vplane,
    mrpcim_debug_stats4, orp_bs_events, orp_iwarp_events, orp_lro_events,
};
use crate::stats::{MrpcimStats, XmacStats};

impl<R: RegisterAccess> Mrpcim<R> {
    /// Counters of both aggregators and all three MAC ports.
    pub fn xmac_stats(&mut self) -> Result<XmacStats> {
        self.require_mrpcim()?;

        let mut stats = XmacStats::default();
        for (n, aggr) in stats.aggr.iter_mut().enumerate() {
            *aggr = self.xmac_aggr_stats(n as u32)?;
        }
        for (n, port) in stats.port.iter_mut().enumerate() {
            *port = self.xmac_port_stats(n as u32)?;
        }
        Ok(stats)
    }

    /// Reads every MRPCIM counter register, the XMAC blocks and the global event
    /// counters.
    pub fn mrpcim_stats(&mut self) -> Result<MrpcimStats> {
        self.require_mrpcim()?;
        let mut stats = MrpcimStats::default();

        let word = self.regs.read64(reg_offset!(mrpcim_debug_stats0));
        stats.ini_wr_drop = mrpcim_debug_stats0::INI_WR_DROP.decode(word) as u32;
        stats.ini_rd_drop = mrpcim_debug_stats0::INI_RD_DROP.decode(word) as u32;

        for (vp, plane) in stats.vplane.iter_mut().enumerate() {
            let word = self.regs.read64(reg_offset!(mrpcim_debug_stats1_vplane[vp]));
            plane.wrcrdtarb_ph_crdt_depleted =
                mrpcim_debug_stats1_vplane::WRCRDTARB_PH_CRDT_DEPLETED.decode(word) as u32;
            let word = self.regs.read64(reg_offset!(mrpcim_debug_stats2_vplane[vp]));
            plane.wrcrdtarb_pd_crdt_depleted =
                mrpcim_debug_stats2_vplane::WRCRDTARB_PD_CRDT_DEPLETED.decode(word) as u32;
            let word = self.regs.read64(reg_offset!(mrpcim_debug_stats3_vplane[vp]));
            plane.rdcrdtarb_nph_crdt_depleted =
                mrpcim_debug_stats3_vplane::RDCRDTARB_NPH_CRDT_DEPLETED.decode(word) as u32;

            let word = self.regs.read64(reg_offset!(debug_stats3_vplane[vp]));
            plane.depl_ph = debug_stats3_vplane::VPLANE_DEPL_PH.decode(word) as u16;
            plane.depl_nph = debug_stats3_vplane::VPLANE_DEPL_NPH.decode(word) as u16;
            plane.depl_cplh = debug_stats3_vplane::VPLANE_DEPL_CPLH.decode(word) as u16;
            let word = self.regs.read64(reg_offset!(debug_stats4_vplane[vp]));
            plane.depl_pd = debug_stats4_vplane::VPLANE_DEPL_PD.decode(word) as u16;
            plane.depl_npd = debug_stats4_vplane::VPLANE_DEPL_NPD.decode(word) as u16;
            plane.depl_cpld = debug_stats4_vplane::VPLANE_DEPL_CPLD.decode(word) as u16;
        }

        let word = self.regs.read64(reg_offset!(mrpcim_debug_stats4));
        stats.ini_wr_vpin_drop = mrpcim_debug_stats4::INI_WR_VPIN_DROP.decode(word) as u32;
        stats.ini_rd_vpin_drop = mrpcim_debug_stats4::INI_RD_VPIN_DROP.decode(word) as u32;

        let word = self.regs.read64(reg_offset!(genstats_count01));
        stats.genstats_count[0] = genstats_count01::GENSTATS_COUNT0.decode(word) as u32;
        stats.genstats_count[1] = genstats_count01::GENSTATS_COUNT1.decode(word) as u32;
        let word = self.regs.read64(reg_offset!(genstats_count23));
        stats.genstats_count[2] = genstats_count23::GENSTATS_COUNT2.decode(word) as u32;
        stats.genstats_count[3] = genstats_count23::GENSTATS_COUNT3.decode(word) as u32;
        let word = self.regs.read64(reg_offset!(genstats_count4));
        stats.genstats_count[4] = genstats_count4::GENSTATS_COUNT4.decode(word) as u32;
        let word = self.regs.read64(reg_offset!(genstats_count5));
        stats.genstats_count[5] = genstats_count5::GENSTATS_COUNT5.decode(word) as u32;

        let word = self.regs.read64(reg_offset!(debug_stats0));
        stats.rstdrop_cpl = debug_stats0::RSTDROP_CPL.decode(word) as u32;
        stats.rstdrop_msg = debug_stats0::RSTDROP_MSG.decode(word) as u32;
        let word = self.regs.read64(reg_offset!(debug_stats1));
        stats.rstdrop_client[0] = debug_stats1::RSTDROP_CLIENT0.decode(word) as u32;
        stats.rstdrop_client[1] = debug_stats1::RSTDROP_CLIENT1.decode(word) as u32;
        let word = self.regs.read64(reg_offset!(debug_stats2));
        stats.rstdrop_client[2] = debug_stats2::RSTDROP_CLIENT2.decode(word) as u32;

        stats.xmac = self.xmac_stats()?;
        stats.global_prog_events = self.global_prog_events()?;

        stats.orp_lro_events =
            orp_lro_events::ORP_LRO_EVENTS.decode(self.regs.read64(reg_offset!(orp_lro_events)));
        stats.orp_bs_events =
            orp_bs_events::ORP_BS_EVENTS.decode(self.regs.read64(reg_offset!(orp_bs_events)));
        stats.orp_iwarp_events = orp_iwarp_events::ORP_IWARP_EVENTS
            .decode(self.regs.read64(reg_offset!(orp_iwarp_events)));

        let word = self.regs.read64(reg_offset!(dbg_stats_tpa_tx_path));
        stats.tx_permitted_frms = dbg_stats_tpa_tx_path::TX_PERMITTED_FRMS.decode(word) as u32;

        let word = self.regs.read64(reg_offset!(dbg_stat_tx_any_frms));
        stats.tx_any_frms = [
            dbg_stat_tx_any_frms::PORT0.decode(word) as u8,
            dbg_stat_tx_any_frms::PORT1.decode(word) as u8,
            dbg_stat_tx_any_frms::PORT2.decode(word) as u8,
        ];
        let word = self.regs.read64(reg_offset!(dbg_stat_rx_any_frms));
        stats.rx_any_frms = [
            dbg_stat_rx_any_frms::PORT0.decode(word) as u8,
            dbg_stat_rx_any_frms::PORT1.decode(word) as u8,
            dbg_stat_rx_any_frms::PORT2.decode(word) as u8,
        ];

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MrpcimError;
    use crate::mrpcim::tests::{device, info};
    use crate::mrpcim::{AccessRights, DeviceInfo};
    use crate::stats::{self, XmacPortStats};
    use crate::testing::FakeRegs;

    #[test]
    fn xmac_stats_reads_every_block() {
        let mut mrpcim = device();
        let regs = mrpcim.regs_mut();
        regs.stats.insert((17, u64::from(stats::aggr_offset(0, 0x00))), 11);
        regs.stats.insert((17, u64::from(stats::aggr_offset(1, 0x30))), 12);
        regs.stats.insert((17, u64::from(stats::port_offset(2, 0x0a0))), 13);

        let xmac = mrpcim.xmac_stats().unwrap();
        assert_eq!(xmac.aggr[0].tx_frms, 11);
        assert_eq!(xmac.aggr[1].rx_frms, 12);
        assert_eq!(xmac.port[2].rx_ttl_frms, 13);
        assert_eq!(xmac.port[0], XmacPortStats::default());
    }

    #[test]
    fn pio_counters_are_decoded() {
        let mut mrpcim = device();
        let regs = mrpcim.regs_mut();
        regs.set(reg_offset!(mrpcim_debug_stats0), 0x0000_0005_0000_0007);
        regs.set(reg_offset!(mrpcim_debug_stats4), 0x0000_0001_0000_0002);
        regs.set(reg_offset!(mrpcim_debug_stats1_vplane[5]), 9);
        regs.set(reg_offset!(mrpcim_debug_stats3_vplane[16]), 4);
        regs.set(reg_offset!(debug_stats3_vplane[16]), 0x0001_0002_0003_0000);
        regs.set(reg_offset!(debug_stats4_vplane[1]), 0x0004_0005_0006_0000);
        regs.set(reg_offset!(genstats_count01), 0x0000_000a_0000_000b);
        regs.set(reg_offset!(genstats_count5), 0x0000_0000_0000_0042);
        regs.set(reg_offset!(debug_stats1), 0x0000_0003_0000_0004);
        regs.set(reg_offset!(orp_lro_events), 0x1_0000_0000);
        regs.set(reg_offset!(dbg_stats_tpa_tx_path), 77);
        regs.set(reg_offset!(dbg_stat_tx_any_frms), 0x0102_0300_0000_0000);
        regs.set(reg_offset!(dbg_stat_rx_any_frms), 0xff00_0000_0000_0000);
        regs.stats.insert((17, u64::from(stats::GLOBAL_PROG_EVENT_GNUM1)), 6);

        let stats = mrpcim.mrpcim_stats().unwrap();
        assert_eq!((stats.ini_wr_drop, stats.ini_rd_drop), (5, 7));
        assert_eq!((stats.ini_wr_vpin_drop, stats.ini_rd_vpin_drop), (1, 2));
        assert_eq!(stats.genstats_count, [0xb, 0xa, 0, 0, 0, 0x42]);
        assert_eq!(stats.rstdrop_client, [3, 4, 0]);
        assert_eq!(stats.orp_lro_events, 0x1_0000_0000);
        assert_eq!(stats.tx_permitted_frms, 77);
        assert_eq!(stats.tx_any_frms, [1, 2, 3]);
        assert_eq!(stats.rx_any_frms, [0xff, 0, 0]);
        assert_eq!(stats.global_prog_events, [0, 6]);

        // Each vplane reads its own element.
        assert_eq!(stats.vplane[5].wrcrdtarb_ph_crdt_depleted, 9);
        assert_eq!(stats.vplane[0].wrcrdtarb_ph_crdt_depleted, 0);
        assert_eq!(stats.vplane[16].rdcrdtarb_nph_crdt_depleted, 4);
        let plane = stats.vplane[16];
        assert_eq!((plane.depl_ph, plane.depl_nph, plane.depl_cplh), (1, 2, 3));
        assert_eq!(stats.vplane[15].depl_ph, 0);
        let plane = stats.vplane[1];
        assert_eq!((plane.depl_pd, plane.depl_npd, plane.depl_cpld), (4, 5, 6));
    }

    #[test]
    fn snapshots_need_mrpcim_rights() {
        let info = DeviceInfo {
            access_rights: AccessRights::VPATH,
            ..info()
        };
        let mut mrpcim = Mrpcim::attach(FakeRegs::new(), info);
        assert!(matches!(mrpcim.xmac_stats(), Err(MrpcimError::PrivilegedOperation)));
        assert!(matches!(mrpcim.mrpcim_stats(), Err(MrpcimError::PrivilegedOperation)));
    }
}
