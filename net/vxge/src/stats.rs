//! XMAC statistics reached through `xmac_stats_sys_cmd`.
//!
//! Counters are addressed by a location and a word offset. The two aggregators and
//! the three ports share location 17 and are told apart by offset.

use crate::bits::bval32;
use crate::error::Result;
use crate::regs::{MAC_PORT_COUNT, VPATH_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsOp {
    Read = 0,
    ClearStat = 1,
    ClearAllStatsOfLoc = 2,
    ClearAllStats = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsLoc {
    Vpath(u32),
    Aggr,
    Port,
}

impl StatsLoc {
    pub const XMAC: u64 = 17;

    pub fn sel(self) -> u64 {
        match self {
            StatsLoc::Vpath(n) => n.into(),
            StatsLoc::Aggr | StatsLoc::Port => Self::XMAC,
        }
    }
}

pub const AGGR_BASE: u32 = 0x720;
pub const AGGR_STRIDE: u32 = 104;
pub const PORT_BASE: u32 = 0x000;
pub const PORT_STRIDE: u32 = 608;
pub const AGGR_COUNT: usize = 2;

pub const GLOBAL_PROG_EVENT_GNUM0: u32 = 0x7f0 >> 3;
pub const GLOBAL_PROG_EVENT_GNUM1: u32 = 0x7f8 >> 3;

/// Word offset of the counter at `byte` within aggregator `n`.
pub const fn aggr_offset(n: u32, byte: u32) -> u32 {
    (AGGR_BASE + byte + AGGR_STRIDE * n) >> 3
}

/// Word offset of the counter at `byte` within port `n`.
pub const fn port_offset(n: u32, byte: u32) -> u32 {
    (PORT_BASE + byte + PORT_STRIDE * n) >> 3
}

/// Part of a statistics word a counter occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Full,
    Upper,
    Lower,
}

impl Half {
    pub fn extract(self, bits: u64) -> u64 {
        match self {
            Half::Full => bits,
            Half::Upper => bval32(bits, 0).into(),
            Half::Lower => bval32(bits, 32).into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    pub name: &'static str,
    /// Byte offset from the start of the aggregator or port block.
    pub byte: u32,
    pub half: Half,
}

macro_rules! counters {
    (
        $(#[$meta:meta])*
        $name:ident, $table:ident {
            $($field:ident: $byte:literal $half:ident,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub struct $name {
            $(pub $field: u64,)*
        }

        pub const $table: &[Counter] = &[
            $(Counter { name: stringify!($field), byte: $byte, half: Half::$half },)*
        ];

        impl $name {
            /// Builds a snapshot from `read`, which returns the raw statistics word at a
            /// block-relative byte offset.
            pub fn read_with(mut read: impl FnMut(u32) -> Result<u64>) -> Result<Self> {
                Ok(Self {
                    $($field: Half::$half.extract(read($byte)?),)*
                })
            }

            /// Counter values in table order.
            pub fn values(&self) -> Vec<(&'static str, u64)> {
                vec![$((stringify!($field), self.$field)),*]
            }
        }
    };
}

counters! {
    /// Counters of one link aggregator.
    XmacAggrStats, AGGR_COUNTERS {
        tx_frms: 0x00 Full,
        tx_data_octets: 0x08 Full,
        tx_mcast_frms: 0x10 Full,
        tx_bcast_frms: 0x18 Full,
        tx_discarded_frms: 0x20 Full,
        tx_errored_frms: 0x28 Full,
        rx_frms: 0x30 Full,
        rx_data_octets: 0x38 Full,
        rx_mcast_frms: 0x40 Full,
        rx_bcast_frms: 0x48 Full,
        rx_discarded_frms: 0x50 Full,
        rx_errored_frms: 0x58 Full,
        rx_unknown_slow_proto_frms: 0x60 Full,
    }
}

counters! {
    /// Counters of one MAC port.
    XmacPortStats, PORT_COUNTERS {
        tx_ttl_frms: 0x000 Full,
        tx_ttl_octets: 0x008 Full,
        tx_data_octets: 0x010 Full,
        tx_mcast_frms: 0x018 Full,
        tx_bcast_frms: 0x020 Full,
        tx_ucast_frms: 0x028 Full,
        tx_tagged_frms: 0x030 Full,
        tx_vld_ip: 0x038 Full,
        tx_vld_ip_octets: 0x040 Full,
        tx_icmp: 0x048 Full,
        tx_tcp: 0x050 Full,
        tx_rst_tcp: 0x058 Full,
        tx_udp: 0x060 Full,
        tx_unknown_protocol: 0x068 Upper,
        tx_parse_error: 0x068 Lower,
        tx_pause_ctrl_frms: 0x070 Full,
        tx_lacpdu_frms: 0x078 Upper,
        tx_marker_pdu_frms: 0x078 Lower,
        tx_marker_resp_pdu_frms: 0x080 Upper,
        tx_drop_ip: 0x080 Lower,
        tx_xgmii_char1_match: 0x088 Upper,
        tx_xgmii_char2_match: 0x088 Lower,
        tx_xgmii_column1_match: 0x090 Upper,
        tx_xgmii_column2_match: 0x090 Lower,
        tx_drop_frms: 0x098 Upper,
        tx_any_err_frms: 0x098 Lower,
        rx_ttl_frms: 0x0a0 Full,
        rx_vld_frms: 0x0a8 Full,
        rx_offload_frms: 0x0b0 Full,
        rx_ttl_octets: 0x0b8 Full,
        rx_data_octets: 0x0c0 Full,
        rx_offload_octets: 0x0c8 Full,
        rx_vld_mcast_frms: 0x0d0 Full,
        rx_vld_bcast_frms: 0x0d8 Full,
        rx_accepted_ucast_frms: 0x0e0 Full,
        rx_accepted_nucast_frms: 0x0e8 Full,
        rx_tagged_frms: 0x0f0 Full,
        rx_long_frms: 0x0f8 Full,
        rx_usized_frms: 0x100 Full,
        rx_osized_frms: 0x108 Full,
        rx_frag_frms: 0x110 Full,
        rx_jabber_frms: 0x118 Full,
        rx_ttl_64_frms: 0x120 Full,
        rx_ttl_65_127_frms: 0x128 Full,
        rx_ttl_128_255_frms: 0x130 Full,
        rx_ttl_256_511_frms: 0x138 Full,
        rx_ttl_512_1023_frms: 0x140 Full,
        rx_ttl_1024_1518_frms: 0x148 Full,
        rx_ttl_1519_4095_frms: 0x150 Full,
        rx_ttl_4096_8191_frms: 0x158 Full,
        rx_ttl_8192_max_frms: 0x160 Full,
        rx_ttl_gt_max_frms: 0x168 Full,
        rx_ip: 0x170 Full,
        rx_accepted_ip: 0x178 Full,
        rx_ip_octets: 0x180 Full,
        rx_err_ip: 0x188 Full,
        rx_icmp: 0x190 Full,
        rx_tcp: 0x198 Full,
        rx_udp: 0x1a0 Full,
        rx_err_tcp: 0x1a8 Full,
        rx_pause_count: 0x1b0 Full,
        rx_pause_ctrl_frms: 0x1b8 Full,
        rx_unsup_ctrl_frms: 0x1c0 Full,
        rx_fcs_err_frms: 0x1c8 Full,
        rx_in_rng_len_err_frms: 0x1d0 Full,
        rx_out_rng_len_err_frms: 0x1d8 Full,
        rx_drop_frms: 0x1e0 Full,
        rx_discarded_frms: 0x1e8 Full,
        rx_drop_ip: 0x1f0 Full,
        rx_drop_udp: 0x1f8 Full,
        rx_lacpdu_frms: 0x200 Upper,
        rx_marker_pdu_frms: 0x200 Lower,
        rx_marker_resp_pdu_frms: 0x208 Upper,
        rx_unknown_pdu_frms: 0x208 Lower,
        rx_illegal_pdu_frms: 0x210 Upper,
        rx_fcs_discard: 0x210 Lower,
        rx_len_discard: 0x218 Upper,
        rx_switch_discard: 0x218 Lower,
        rx_l2_mgmt_discard: 0x220 Upper,
        rx_rpa_discard: 0x220 Lower,
        rx_trash_discard: 0x228 Upper,
        rx_rts_discard: 0x228 Lower,
        rx_red_discard: 0x230 Upper,
        rx_buff_full_discard: 0x230 Lower,
        rx_xgmii_data_err_cnt: 0x238 Upper,
        rx_xgmii_ctrl_err_cnt: 0x238 Lower,
        rx_xgmii_err_sym: 0x240 Upper,
        rx_xgmii_char1_match: 0x240 Lower,
        rx_xgmii_char2_match: 0x248 Upper,
        rx_xgmii_column1_match: 0x248 Lower,
        rx_xgmii_column2_match: 0x250 Upper,
        rx_local_fault: 0x250 Lower,
        rx_remote_fault: 0x258 Upper,
        rx_jettison: 0x258 Lower,
    }
}

/// Both aggregators and every MAC port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XmacStats {
    pub aggr: [XmacAggrStats; AGGR_COUNT],
    pub port: [XmacPortStats; MAC_PORT_COUNT],
}

/// PCIe credit depletion counters of one vplane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VplaneCredits {
    pub wrcrdtarb_ph_crdt_depleted: u32,
    pub wrcrdtarb_pd_crdt_depleted: u32,
    pub rdcrdtarb_nph_crdt_depleted: u32,
    pub depl_ph: u16,
    pub depl_nph: u16,
    pub depl_cplh: u16,
    pub depl_pd: u16,
    pub depl_npd: u16,
    pub depl_cpld: u16,
}

/// The counters the MRPCIM block keeps in registers, together with the XMAC blocks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MrpcimStats {
    pub ini_rd_drop: u32,
    pub ini_wr_drop: u32,
    pub ini_rd_vpin_drop: u32,
    pub ini_wr_vpin_drop: u32,
    /// `genstats_count0` through `genstats_count5`.
    pub genstats_count: [u32; 6],
    pub rstdrop_cpl: u32,
    pub rstdrop_msg: u32,
    pub rstdrop_client: [u32; 3],
    pub vplane: [VplaneCredits; VPATH_COUNT],
    pub xmac: XmacStats,
    pub global_prog_events: [u64; 2],
    pub orp_lro_events: u64,
    pub orp_bs_events: u64,
    pub orp_iwarp_events: u64,
    pub tx_permitted_frms: u32,
    pub tx_any_frms: [u8; MAC_PORT_COUNT],
    pub rx_any_frms: [u8; MAC_PORT_COUNT],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_words() {
        assert_eq!(aggr_offset(0, 0), 0x720 >> 3);
        assert_eq!(aggr_offset(1, 0x60), (0x720 + 104 + 0x60) >> 3);
        assert_eq!(port_offset(0, 0x258), 0x258 >> 3);
        assert_eq!(port_offset(2, 0x0a0), (0x0a0 + 2 * 608) >> 3);
        assert_eq!(GLOBAL_PROG_EVENT_GNUM0, 0xfe);
        assert_eq!(GLOBAL_PROG_EVENT_GNUM1, 0xff);
        assert_eq!(StatsLoc::Vpath(5).sel(), 5);
        assert_eq!(StatsLoc::Aggr.sel(), StatsLoc::Port.sel());
    }

    #[test]
    fn blocks_do_not_overlap() {
        // Last port word stays below the first aggregator, last aggregator below the
        // global counters.
        let last_port = PORT_COUNTERS.iter().map(|c| c.byte).max().unwrap();
        assert!(port_offset(2, last_port) < aggr_offset(0, 0));
        let last_aggr = AGGR_COUNTERS.iter().map(|c| c.byte).max().unwrap();
        assert!(aggr_offset(1, last_aggr) < GLOBAL_PROG_EVENT_GNUM0);
        assert_eq!(last_aggr + 8, AGGR_STRIDE);
        assert_eq!(last_port + 8, PORT_STRIDE);
    }

    #[test]
    fn shared_words_split_into_halves() {
        for pair in PORT_COUNTERS.windows(2) {
            if pair[0].byte == pair[1].byte {
                assert_eq!((pair[0].half, pair[1].half), (Half::Upper, Half::Lower));
            } else {
                assert!(pair[0].byte < pair[1].byte);
            }
        }
        assert_eq!(Half::Upper.extract(0x1111_2222_3333_4444), 0x1111_2222);
        assert_eq!(Half::Lower.extract(0x1111_2222_3333_4444), 0x3333_4444);
    }

    #[test]
    fn snapshot_reads_each_counter() {
        let stats = XmacPortStats::read_with(|byte| Ok(u64::from(byte) << 32 | 0xbeef)).unwrap();
        assert_eq!(stats.tx_ttl_frms, 0xbeef);
        assert_eq!(stats.tx_ttl_octets, 0x8 << 32 | 0xbeef);
        assert_eq!(stats.tx_unknown_protocol, 0x68);
        assert_eq!(stats.tx_parse_error, 0xbeef);
        assert_eq!(stats.rx_jettison, 0xbeef);
        assert_eq!(stats.values().len(), PORT_COUNTERS.len());

        let aggr = XmacAggrStats::read_with(|byte| Ok(byte.into())).unwrap();
        assert_eq!(aggr.rx_unknown_slow_proto_frms, 0x60);
    }
}
