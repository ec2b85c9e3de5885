//! MRPCIM register block of the X3100 adapter.
//!
//! The block is a flat run of 64-bit registers. Every register keeps the byte offset
//! the hardware decodes, which is checked at compile time below; indexed registers
//! are one element per vpath (17), per MAC port including the switch port (3), per
//! wire port (2) or per GSSC bank (3).

use core::mem::{offset_of, size_of};
use core::ops::{Deref, DerefMut};

use common::io::{Mmio, ReadOnly, WriteOnly};

use crate::bits::Field;
use crate::error::{MrpcimError, Result};

pub mod fields;

/// Size in bytes of the MRPCIM register block.
pub const MRPCIM_REG_SIZE: usize = 0x050e8;

/// Number of vpaths (and vplanes) the adapter exposes.
pub const VPATH_COUNT: usize = 17;
/// Number of MAC ports: two wire ports and the internal switch port.
pub const MAC_PORT_COUNT: usize = 3;
/// Number of wire ports.
pub const WIRE_PORT_COUNT: usize = 2;
/// Index of the switch port in the per-port register arrays.
pub const SWITCH_PORT: usize = 2;

#[repr(C)]
pub struct MrpcimReg {
    // G3 frame buffer controller
    /* 0x00000 */ pub g3fbct_int_status: Mmio<u64>,
    /* 0x00008 */ pub g3fbct_int_mask: Mmio<u64>,
    /* 0x00010 */ pub g3fbct_err_reg: Mmio<u64>,
    /* 0x00018 */ pub g3fbct_err_mask: Mmio<u64>,
    /* 0x00020 */ pub g3fbct_err_alarm: Mmio<u64>,
    /* 0x00028 */ pub g3fbct_dll_training1: Mmio<u64>,
    /* 0x00030 */ pub g3fbct_dll_training2: Mmio<u64>,
    /* 0x00038 */ pub g3fbct_dll_training3: Mmio<u64>,
    /* 0x00040 */ pub g3fbct_dll_training4: Mmio<u64>,
    _unused00048: [u8; 0x009b8],

    // Write DMA, receive descriptor and frame path
    /* 0x00a00 */ pub wrdma_int_status: Mmio<u64>,
    /* 0x00a08 */ pub wrdma_int_mask: Mmio<u64>,
    /* 0x00a10 */ pub rc_alarm_reg: Mmio<u64>,
    /* 0x00a18 */ pub rc_alarm_mask: Mmio<u64>,
    /* 0x00a20 */ pub rc_alarm_alarm: Mmio<u64>,
    /* 0x00a28 */ pub rxdrm_sm_err_reg: Mmio<u64>,
    /* 0x00a30 */ pub rxdrm_sm_err_mask: Mmio<u64>,
    /* 0x00a38 */ pub rxdrm_sm_err_alarm: Mmio<u64>,
    /* 0x00a40 */ pub rxdcm_sm_err_reg: Mmio<u64>,
    /* 0x00a48 */ pub rxdcm_sm_err_mask: Mmio<u64>,
    /* 0x00a50 */ pub rxdcm_sm_err_alarm: Mmio<u64>,
    /* 0x00a58 */ pub rxdwm_sm_err_reg: Mmio<u64>,
    /* 0x00a60 */ pub rxdwm_sm_err_mask: Mmio<u64>,
    /* 0x00a68 */ pub rxdwm_sm_err_alarm: Mmio<u64>,
    /* 0x00a70 */ pub rda_err_reg: Mmio<u64>,
    /* 0x00a78 */ pub rda_err_mask: Mmio<u64>,
    /* 0x00a80 */ pub rda_err_alarm: Mmio<u64>,
    /* 0x00a88 */ pub rda_ecc_db_reg: Mmio<u64>,
    /* 0x00a90 */ pub rda_ecc_db_mask: Mmio<u64>,
    /* 0x00a98 */ pub rda_ecc_db_alarm: Mmio<u64>,
    /* 0x00aa0 */ pub rda_ecc_sg_reg: Mmio<u64>,
    /* 0x00aa8 */ pub rda_ecc_sg_mask: Mmio<u64>,
    /* 0x00ab0 */ pub rda_ecc_sg_alarm: Mmio<u64>,
    /* 0x00ab8 */ pub rqa_err_reg: Mmio<u64>,
    /* 0x00ac0 */ pub rqa_err_mask: Mmio<u64>,
    /* 0x00ac8 */ pub rqa_err_alarm: Mmio<u64>,
    /* 0x00ad0 */ pub frf_alarm_reg: Mmio<u64>,
    /* 0x00ad8 */ pub frf_alarm_mask: Mmio<u64>,
    /* 0x00ae0 */ pub frf_alarm_alarm: Mmio<u64>,
    /* 0x00ae8 */ pub rocrc_alarm_reg: Mmio<u64>,
    /* 0x00af0 */ pub rocrc_alarm_mask: Mmio<u64>,
    /* 0x00af8 */ pub rocrc_alarm_alarm: Mmio<u64>,
    /* 0x00b00 */ pub wde0_alarm_reg: Mmio<u64>,
    /* 0x00b08 */ pub wde0_alarm_mask: Mmio<u64>,
    /* 0x00b10 */ pub wde0_alarm_alarm: Mmio<u64>,
    /* 0x00b18 */ pub wde1_alarm_reg: Mmio<u64>,
    /* 0x00b20 */ pub wde1_alarm_mask: Mmio<u64>,
    /* 0x00b28 */ pub wde1_alarm_alarm: Mmio<u64>,
    /* 0x00b30 */ pub wde2_alarm_reg: Mmio<u64>,
    /* 0x00b38 */ pub wde2_alarm_mask: Mmio<u64>,
    /* 0x00b40 */ pub wde2_alarm_alarm: Mmio<u64>,
    /* 0x00b48 */ pub wde3_alarm_reg: Mmio<u64>,
    /* 0x00b50 */ pub wde3_alarm_mask: Mmio<u64>,
    /* 0x00b58 */ pub wde3_alarm_alarm: Mmio<u64>,
    /* 0x00b60 */ pub rx_w_round_robin: [Mmio<u64>; 5],
    _unused00b88: [u8; 0x00078],
    /* 0x00c00 */ pub rx_queue_priority: [Mmio<u64>; 3],
    /* 0x00c18 */ pub rx_queue_select: [Mmio<u64>; 17],
    _unused00ca0: [u8; 0x00360],

    // PCIe interface and credit arbitration
    /* 0x01000 */ pub pcipif_int_status: Mmio<u64>,
    /* 0x01008 */ pub pcipif_int_mask: Mmio<u64>,
    /* 0x01010 */ pub dbecc_err_reg: Mmio<u64>,
    /* 0x01018 */ pub dbecc_err_mask: Mmio<u64>,
    /* 0x01020 */ pub dbecc_err_alarm: Mmio<u64>,
    /* 0x01028 */ pub sbecc_err_reg: Mmio<u64>,
    /* 0x01030 */ pub sbecc_err_mask: Mmio<u64>,
    /* 0x01038 */ pub sbecc_err_alarm: Mmio<u64>,
    /* 0x01040 */ pub general_err_reg: Mmio<u64>,
    /* 0x01048 */ pub general_err_mask: Mmio<u64>,
    /* 0x01050 */ pub general_err_alarm: Mmio<u64>,
    /* 0x01058 */ pub ini_errors_reg: Mmio<u64>,
    /* 0x01060 */ pub ini_errors_mask: Mmio<u64>,
    /* 0x01068 */ pub ini_errors_alarm: Mmio<u64>,
    /* 0x01070 */ pub dma_errors_reg: Mmio<u64>,
    /* 0x01078 */ pub dma_errors_mask: Mmio<u64>,
    /* 0x01080 */ pub dma_errors_alarm: Mmio<u64>,
    /* 0x01088 */ pub tgt_errors_reg: Mmio<u64>,
    /* 0x01090 */ pub tgt_errors_mask: Mmio<u64>,
    /* 0x01098 */ pub tgt_errors_alarm: Mmio<u64>,
    /* 0x010a0 */ pub config_errors_reg: Mmio<u64>,
    /* 0x010a8 */ pub config_errors_mask: Mmio<u64>,
    /* 0x010b0 */ pub config_errors_alarm: Mmio<u64>,
    /* 0x010b8 */ pub crdt_errors_reg: Mmio<u64>,
    /* 0x010c0 */ pub crdt_errors_mask: Mmio<u64>,
    /* 0x010c8 */ pub crdt_errors_alarm: Mmio<u64>,
    /* 0x010d0 */ pub mrpcim_general_errors_reg: Mmio<u64>,
    /* 0x010d8 */ pub mrpcim_general_errors_mask: Mmio<u64>,
    /* 0x010e0 */ pub mrpcim_general_errors_alarm: Mmio<u64>,
    /* 0x010e8 */ pub pll_errors_reg: Mmio<u64>,
    /* 0x010f0 */ pub pll_errors_mask: Mmio<u64>,
    /* 0x010f8 */ pub pll_errors_alarm: Mmio<u64>,
    /* 0x01100 */ pub mrpcim_ppif_int_status: Mmio<u64>,
    /* 0x01108 */ pub mrpcim_ppif_int_mask: Mmio<u64>,
    /* 0x01110 */ pub wrcrdtarb_cfg0: Mmio<u64>,
    /* 0x01118 */ pub rdcrdtarb_cfg0: Mmio<u64>,
    /* 0x01120 */ pub rdcrdtarb_status0_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x011a8 */ pub rdcrdtarb_status1_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x01230 */ pub mrpcim_debug_stats0: ReadOnly<Mmio<u64>>,
    /* 0x01238 */ pub mrpcim_debug_stats1_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x012c0 */ pub mrpcim_debug_stats2_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x01348 */ pub mrpcim_debug_stats3_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x013d0 */ pub mrpcim_debug_stats4: ReadOnly<Mmio<u64>>,
    _unused013d8: [u8; 0x00428],

    // General configuration, reset and MRPCIM statistics
    /* 0x01800 */ pub mrpcim_general_int_status: Mmio<u64>,
    /* 0x01808 */ pub mrpcim_general_int_mask: Mmio<u64>,
    /* 0x01810 */ pub mrpcim_general_cfg1: Mmio<u64>,
    /* 0x01818 */ pub mrpcim_general_cfg2: Mmio<u64>,
    /* 0x01820 */ pub mrpcim_general_cfg3: Mmio<u64>,
    /* 0x01828 */ pub sw_reset_cfg1: Mmio<u64>,
    /* 0x01830 */ pub sw_reset_status: ReadOnly<Mmio<u64>>,
    /* 0x01838 */ pub bf_sw_reset: WriteOnly<Mmio<u64>>,
    /* 0x01840 */ pub mrpcim_stats_start_host_addr: Mmio<u64>,
    /* 0x01848 */ pub rxmac_authorize_all_addr: Mmio<u64>,
    /* 0x01850 */ pub rxmac_authorize_all_vid: Mmio<u64>,
    /* 0x01858 */ pub genstats_count01: ReadOnly<Mmio<u64>>,
    /* 0x01860 */ pub genstats_count23: ReadOnly<Mmio<u64>>,
    /* 0x01868 */ pub genstats_count4: ReadOnly<Mmio<u64>>,
    /* 0x01870 */ pub genstats_count5: ReadOnly<Mmio<u64>>,
    /* 0x01878 */ pub debug_stats0: ReadOnly<Mmio<u64>>,
    /* 0x01880 */ pub debug_stats1: ReadOnly<Mmio<u64>>,
    /* 0x01888 */ pub debug_stats2: ReadOnly<Mmio<u64>>,
    /* 0x01890 */ pub debug_stats3_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x01918 */ pub debug_stats4_vplane: [ReadOnly<Mmio<u64>>; 17],
    /* 0x019a0 */ pub dbg_stats_tpa_tx_path: ReadOnly<Mmio<u64>>,
    /* 0x019a8 */ pub dbg_stat_tx_any_frms: ReadOnly<Mmio<u64>>,
    /* 0x019b0 */ pub dbg_stat_rx_any_frms: ReadOnly<Mmio<u64>>,
    _unused019b8: [u8; 0x00648],

    // Protocol engine, message and memory controllers
    /* 0x02000 */ pub pcmg1_int_status: Mmio<u64>,
    /* 0x02008 */ pub pcmg1_int_mask: Mmio<u64>,
    /* 0x02010 */ pub pcmg2_int_status: Mmio<u64>,
    /* 0x02018 */ pub pcmg2_int_mask: Mmio<u64>,
    /* 0x02020 */ pub pcmg3_int_status: Mmio<u64>,
    /* 0x02028 */ pub pcmg3_int_mask: Mmio<u64>,
    /* 0x02030 */ pub gcmg1_int_status: Mmio<u64>,
    /* 0x02038 */ pub gcmg1_int_mask: Mmio<u64>,
    /* 0x02040 */ pub gcmg2_int_status: Mmio<u64>,
    /* 0x02048 */ pub gcmg2_int_mask: Mmio<u64>,
    /* 0x02050 */ pub msg_int_status: Mmio<u64>,
    /* 0x02058 */ pub msg_int_mask: Mmio<u64>,
    /* 0x02060 */ pub msg_exc_reg: Mmio<u64>,
    /* 0x02068 */ pub msg_exc_mask: Mmio<u64>,
    /* 0x02070 */ pub msg_exc_alarm: Mmio<u64>,
    /* 0x02078 */ pub msg_err_reg: Mmio<u64>,
    /* 0x02080 */ pub msg_err_mask: Mmio<u64>,
    /* 0x02088 */ pub msg_err_alarm: Mmio<u64>,
    /* 0x02090 */ pub msg_err2_reg: Mmio<u64>,
    /* 0x02098 */ pub msg_err2_mask: Mmio<u64>,
    /* 0x020a0 */ pub msg_err2_alarm: Mmio<u64>,
    /* 0x020a8 */ pub msg_err3_reg: Mmio<u64>,
    /* 0x020b0 */ pub msg_err3_mask: Mmio<u64>,
    /* 0x020b8 */ pub msg_err3_alarm: Mmio<u64>,
    /* 0x020c0 */ pub cp_exc_reg: Mmio<u64>,
    /* 0x020c8 */ pub cp_exc_mask: Mmio<u64>,
    /* 0x020d0 */ pub cp_exc_alarm: Mmio<u64>,
    /* 0x020d8 */ pub cp_err_reg: Mmio<u64>,
    /* 0x020e0 */ pub cp_err_mask: Mmio<u64>,
    /* 0x020e8 */ pub cp_err_alarm: Mmio<u64>,
    /* 0x020f0 */ pub gcp_err_reg: Mmio<u64>,
    /* 0x020f8 */ pub gcp_err_mask: Mmio<u64>,
    /* 0x02100 */ pub gcp_err_alarm: Mmio<u64>,
    /* 0x02108 */ pub psscc_err_reg: Mmio<u64>,
    /* 0x02110 */ pub psscc_err_mask: Mmio<u64>,
    /* 0x02118 */ pub psscc_err_alarm: Mmio<u64>,
    /* 0x02120 */ pub gsscc_err_reg: Mmio<u64>,
    /* 0x02128 */ pub gsscc_err_mask: Mmio<u64>,
    /* 0x02130 */ pub gsscc_err_alarm: Mmio<u64>,
    /* 0x02138 */ pub pxtmc_err_reg: Mmio<u64>,
    /* 0x02140 */ pub pxtmc_err_mask: Mmio<u64>,
    /* 0x02148 */ pub pxtmc_err_alarm: Mmio<u64>,
    /* 0x02150 */ pub gxtmc_err_reg: Mmio<u64>,
    /* 0x02158 */ pub gxtmc_err_mask: Mmio<u64>,
    /* 0x02160 */ pub gxtmc_err_alarm: Mmio<u64>,
    /* 0x02168 */ pub cmc_err_reg: Mmio<u64>,
    /* 0x02170 */ pub cmc_err_mask: Mmio<u64>,
    /* 0x02178 */ pub cmc_err_alarm: Mmio<u64>,
    /* 0x02180 */ pub lso_error_reg: Mmio<u64>,
    /* 0x02188 */ pub lso_error_mask: Mmio<u64>,
    /* 0x02190 */ pub lso_error_alarm: Mmio<u64>,
    /* 0x02198 */ pub pda_alarm_reg: Mmio<u64>,
    /* 0x021a0 */ pub pda_alarm_mask: Mmio<u64>,
    /* 0x021a8 */ pub pda_alarm_alarm: Mmio<u64>,
    /* 0x021b0 */ pub ptm_alarm_reg: Mmio<u64>,
    /* 0x021b8 */ pub ptm_alarm_mask: Mmio<u64>,
    /* 0x021c0 */ pub ptm_alarm_alarm: Mmio<u64>,
    /* 0x021c8 */ pub tpa_error_reg: Mmio<u64>,
    /* 0x021d0 */ pub tpa_error_mask: Mmio<u64>,
    /* 0x021d8 */ pub tpa_error_alarm: Mmio<u64>,
    /* 0x021e0 */ pub tpa_int_status: Mmio<u64>,
    /* 0x021e8 */ pub tpa_int_mask: Mmio<u64>,
    /* 0x021f0 */ pub sm_error_reg: Mmio<u64>,
    /* 0x021f8 */ pub sm_error_mask: Mmio<u64>,
    /* 0x02200 */ pub sm_error_alarm: Mmio<u64>,
    /* 0x02208 */ pub kdfc_err_reg: Mmio<u64>,
    /* 0x02210 */ pub kdfc_err_mask: Mmio<u64>,
    /* 0x02218 */ pub kdfc_err_alarm: Mmio<u64>,
    /* 0x02220 */ pub doorbell_int_status: Mmio<u64>,
    /* 0x02228 */ pub doorbell_int_mask: Mmio<u64>,
    /* 0x02230 */ pub tim_err_reg: Mmio<u64>,
    /* 0x02238 */ pub tim_err_mask: Mmio<u64>,
    /* 0x02240 */ pub tim_err_alarm: Mmio<u64>,
    /* 0x02248 */ pub rtdma_int_status: Mmio<u64>,
    /* 0x02250 */ pub rtdma_int_mask: Mmio<u64>,
    /* 0x02258 */ pub pcc_error_reg: Mmio<u64>,
    /* 0x02260 */ pub pcc_error_mask: Mmio<u64>,
    /* 0x02268 */ pub pcc_error_alarm: Mmio<u64>,
    /* 0x02270 */ pub dam_err_reg: Mmio<u64>,
    /* 0x02278 */ pub dam_err_mask: Mmio<u64>,
    /* 0x02280 */ pub dam_err_alarm: Mmio<u64>,
    /* 0x02288 */ pub fau_ecc_err_reg: Mmio<u64>,
    /* 0x02290 */ pub fau_ecc_err_mask: Mmio<u64>,
    /* 0x02298 */ pub fau_ecc_err_alarm: Mmio<u64>,
    /* 0x022a0 */ pub orp_err_reg: Mmio<u64>,
    /* 0x022a8 */ pub orp_err_mask: Mmio<u64>,
    /* 0x022b0 */ pub orp_err_alarm: Mmio<u64>,
    /* 0x022b8 */ pub mc_int_status: Mmio<u64>,
    /* 0x022c0 */ pub mc_int_mask: Mmio<u64>,
    /* 0x022c8 */ pub mc_err_reg: Mmio<u64>,
    /* 0x022d0 */ pub mc_err_mask: Mmio<u64>,
    /* 0x022d8 */ pub mc_err_alarm: Mmio<u64>,
    /* 0x022e0 */ pub grocrc_alarm_reg: Mmio<u64>,
    /* 0x022e8 */ pub grocrc_alarm_mask: Mmio<u64>,
    /* 0x022f0 */ pub grocrc_alarm_alarm: Mmio<u64>,
    /* 0x022f8 */ pub gssc_err0_reg: [Mmio<u64>; 3],
    /* 0x02310 */ pub gssc_err0_mask: [Mmio<u64>; 3],
    /* 0x02328 */ pub gssc_err0_alarm: [Mmio<u64>; 3],
    /* 0x02340 */ pub gssc_err1_reg: [Mmio<u64>; 3],
    /* 0x02358 */ pub gssc_err1_mask: [Mmio<u64>; 3],
    /* 0x02370 */ pub gssc_err1_alarm: [Mmio<u64>; 3],
    /* 0x02388 */ pub g3cmct_int_status: Mmio<u64>,
    /* 0x02390 */ pub g3cmct_int_mask: Mmio<u64>,
    /* 0x02398 */ pub g3cmct_err_reg: Mmio<u64>,
    /* 0x023a0 */ pub g3cmct_err_mask: Mmio<u64>,
    /* 0x023a8 */ pub g3cmct_err_alarm: Mmio<u64>,
    /* 0x023b0 */ pub g3ifcmd_fb_int_status: Mmio<u64>,
    /* 0x023b8 */ pub g3ifcmd_fb_int_mask: Mmio<u64>,
    /* 0x023c0 */ pub g3ifcmd_fb_err_reg: Mmio<u64>,
    /* 0x023c8 */ pub g3ifcmd_fb_err_mask: Mmio<u64>,
    /* 0x023d0 */ pub g3ifcmd_fb_err_alarm: Mmio<u64>,
    /* 0x023d8 */ pub g3ifcmd_cmu_int_status: Mmio<u64>,
    /* 0x023e0 */ pub g3ifcmd_cmu_int_mask: Mmio<u64>,
    /* 0x023e8 */ pub g3ifcmd_cmu_err_reg: Mmio<u64>,
    /* 0x023f0 */ pub g3ifcmd_cmu_err_mask: Mmio<u64>,
    /* 0x023f8 */ pub g3ifcmd_cmu_err_alarm: Mmio<u64>,
    /* 0x02400 */ pub g3ifcmd_cml_int_status: Mmio<u64>,
    /* 0x02408 */ pub g3ifcmd_cml_int_mask: Mmio<u64>,
    /* 0x02410 */ pub g3ifcmd_cml_err_reg: Mmio<u64>,
    /* 0x02418 */ pub g3ifcmd_cml_err_mask: Mmio<u64>,
    /* 0x02420 */ pub g3ifcmd_cml_err_alarm: Mmio<u64>,
    /* 0x02428 */ pub orp_lro_events: ReadOnly<Mmio<u64>>,
    /* 0x02430 */ pub orp_bs_events: ReadOnly<Mmio<u64>>,
    /* 0x02438 */ pub orp_iwarp_events: ReadOnly<Mmio<u64>>,
    /* 0x02440 */ pub tpa_global_cfg: Mmio<u64>,
    /* 0x02448 */ pub fau_pa_cfg: Mmio<u64>,
    _unused02450: [u8; 0x01bb0],

    // XMAC
    /* 0x04000 */ pub xgmac_int_status: Mmio<u64>,
    /* 0x04008 */ pub xgmac_int_mask: Mmio<u64>,
    /* 0x04010 */ pub xmac_gen_err_reg: Mmio<u64>,
    /* 0x04018 */ pub xmac_gen_err_mask: Mmio<u64>,
    /* 0x04020 */ pub xmac_gen_err_alarm: Mmio<u64>,
    /* 0x04028 */ pub xgxs_gen_err_reg: Mmio<u64>,
    /* 0x04030 */ pub xgxs_gen_err_mask: Mmio<u64>,
    /* 0x04038 */ pub xgxs_gen_err_alarm: Mmio<u64>,
    /* 0x04040 */ pub asic_ntwk_err_reg: Mmio<u64>,
    /* 0x04048 */ pub asic_ntwk_err_mask: Mmio<u64>,
    /* 0x04050 */ pub asic_ntwk_err_alarm: Mmio<u64>,
    /* 0x04058 */ pub xgmac_main_cfg_port: [Mmio<u64>; 3],
    /* 0x04070 */ pub xmac_gen_cfg: Mmio<u64>,
    /* 0x04078 */ pub xmac_stats_sys_cmd: Mmio<u64>,
    /* 0x04080 */ pub xmac_stats_sys_data: ReadOnly<Mmio<u64>>,
    /* 0x04088 */ pub xgxs_static_cfg_port: [Mmio<u64>; 2],
    /* 0x04098 */ pub mdio_gen_cfg_port: [Mmio<u64>; 2],
    /* 0x040a8 */ pub mdio_mgr_access_port: [Mmio<u64>; 2],
    /* 0x040b8 */ pub xgmac_debounce_port: [Mmio<u64>; 3],
    _unused040d0: [u8; 0x00730],

    // RXMAC and receive traffic steering
    /* 0x04800 */ pub rxmac_int_status: Mmio<u64>,
    /* 0x04808 */ pub rxmac_int_mask: Mmio<u64>,
    /* 0x04810 */ pub rxmac_ecc_err_reg: Mmio<u64>,
    /* 0x04818 */ pub rxmac_ecc_err_mask: Mmio<u64>,
    /* 0x04820 */ pub rxmac_ecc_err_alarm: Mmio<u64>,
    /* 0x04828 */ pub rxmac_various_err_reg: Mmio<u64>,
    /* 0x04830 */ pub rxmac_various_err_mask: Mmio<u64>,
    /* 0x04838 */ pub rxmac_various_err_alarm: Mmio<u64>,
    /* 0x04840 */ pub rxmac_cfg0_port: [Mmio<u64>; 3],
    /* 0x04858 */ pub rxmac_cfg2_port: [Mmio<u64>; 3],
    /* 0x04870 */ pub rxmac_pause_cfg_port: [Mmio<u64>; 3],
    /* 0x04888 */ pub rxmac_link_util_port: [Mmio<u64>; 3],
    /* 0x048a0 */ pub rxmac_rx_pa_cfg0: Mmio<u64>,
    /* 0x048a8 */ pub rxmac_rx_pa_cfg1: Mmio<u64>,
    /* 0x048b0 */ pub rts_mgr_steer_ctrl: Mmio<u64>,
    /* 0x048b8 */ pub rts_mgr_steer_data0: Mmio<u64>,
    /* 0x048c0 */ pub rts_mgr_steer_data1: Mmio<u64>,
    /* 0x048c8 */ pub rts_mgr_steer_vpath_vector: Mmio<u64>,
    /* 0x048d0 */ pub ratemgmt_cfg_port: [Mmio<u64>; 3],
    _unused048e8: [u8; 0x00318],

    // TXMAC
    /* 0x04c00 */ pub tmac_int_status: Mmio<u64>,
    /* 0x04c08 */ pub tmac_int_mask: Mmio<u64>,
    /* 0x04c10 */ pub txmac_gen_err_reg: Mmio<u64>,
    /* 0x04c18 */ pub txmac_gen_err_mask: Mmio<u64>,
    /* 0x04c20 */ pub txmac_gen_err_alarm: Mmio<u64>,
    /* 0x04c28 */ pub txmac_ecc_err_reg: Mmio<u64>,
    /* 0x04c30 */ pub txmac_ecc_err_mask: Mmio<u64>,
    /* 0x04c38 */ pub txmac_ecc_err_alarm: Mmio<u64>,
    /* 0x04c40 */ pub txmac_gen_cfg1: Mmio<u64>,
    /* 0x04c48 */ pub txmac_cfg0_port: [Mmio<u64>; 3],
    /* 0x04c60 */ pub txmac_link_util_port: [Mmio<u64>; 3],
    _unused04c78: [u8; 0x00388],

    // Link aggregation
    /* 0x05000 */ pub lag_cfg: Mmio<u64>,
    /* 0x05008 */ pub lag_sys_cfg: Mmio<u64>,
    /* 0x05010 */ pub lag_sys_id: Mmio<u64>,
    /* 0x05018 */ pub lag_active_passive_cfg: Mmio<u64>,
    /* 0x05020 */ pub lag_distrib_dest: Mmio<u64>,
    /* 0x05028 */ pub lag_marker_cfg: Mmio<u64>,
    /* 0x05030 */ pub lag_lacp_cfg: Mmio<u64>,
    /* 0x05038 */ pub lag_timer_cfg_1: Mmio<u64>,
    /* 0x05040 */ pub lag_timer_cfg_2: Mmio<u64>,
    /* 0x05048 */ pub lag_tx_cfg: Mmio<u64>,
    /* 0x05050 */ pub lag_aggr_alt_admin_key: Mmio<u64>,
    /* 0x05058 */ pub lag_aggr_id_cfg: [Mmio<u64>; 2],
    /* 0x05068 */ pub lag_aggr_addr_cfg: [Mmio<u64>; 2],
    /* 0x05078 */ pub lag_aggr_admin_key: [Mmio<u64>; 2],
    /* 0x05088 */ pub lag_port_cfg: [Mmio<u64>; 2],
    /* 0x05098 */ pub lag_port_actor_admin_cfg: [Mmio<u64>; 2],
    /* 0x050a8 */ pub lag_port_actor_admin_state: [Mmio<u64>; 2],
    /* 0x050b8 */ pub lag_port_partner_admin_sys_id: [Mmio<u64>; 2],
    /* 0x050c8 */ pub lag_port_partner_admin_cfg: [Mmio<u64>; 2],
    /* 0x050d8 */ pub lag_port_partner_admin_state: [Mmio<u64>; 2],
}

const _: () = assert!(size_of::<MrpcimReg>() == MRPCIM_REG_SIZE);

/// One entry of the register directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterInfo {
    pub name: &'static str,
    /// Byte offset of the first element.
    pub offset: usize,
    /// Number of elements; 1 for plain registers.
    pub count: usize,
}

macro_rules! count {
    () => {
        1
    };
    ($n:literal) => {
        $n
    };
}

macro_rules! registers {
    ($($name:ident $([$count:literal])? = $offset:literal;)*) => {
        $(const _: () = assert!(offset_of!(MrpcimReg, $name) == $offset);)*

        /// Every register of the block, in address order.
        pub static REGISTERS: &[RegisterInfo] = &[
            $(RegisterInfo {
                name: stringify!($name),
                offset: $offset,
                count: count!($($count)?),
            },)*
        ];
    };
}

registers! {
    // G3 frame buffer controller
    g3fbct_int_status = 0x00000;
    g3fbct_int_mask = 0x00008;
    g3fbct_err_reg = 0x00010;
    g3fbct_err_mask = 0x00018;
    g3fbct_err_alarm = 0x00020;
    g3fbct_dll_training1 = 0x00028;
    g3fbct_dll_training2 = 0x00030;
    g3fbct_dll_training3 = 0x00038;
    g3fbct_dll_training4 = 0x00040;

    // Write DMA, receive descriptor and frame path
    wrdma_int_status = 0x00a00;
    wrdma_int_mask = 0x00a08;
    rc_alarm_reg = 0x00a10;
    rc_alarm_mask = 0x00a18;
    rc_alarm_alarm = 0x00a20;
    rxdrm_sm_err_reg = 0x00a28;
    rxdrm_sm_err_mask = 0x00a30;
    rxdrm_sm_err_alarm = 0x00a38;
    rxdcm_sm_err_reg = 0x00a40;
    rxdcm_sm_err_mask = 0x00a48;
    rxdcm_sm_err_alarm = 0x00a50;
    rxdwm_sm_err_reg = 0x00a58;
    rxdwm_sm_err_mask = 0x00a60;
    rxdwm_sm_err_alarm = 0x00a68;
    rda_err_reg = 0x00a70;
    rda_err_mask = 0x00a78;
    rda_err_alarm = 0x00a80;
    rda_ecc_db_reg = 0x00a88;
    rda_ecc_db_mask = 0x00a90;
    rda_ecc_db_alarm = 0x00a98;
    rda_ecc_sg_reg = 0x00aa0;
    rda_ecc_sg_mask = 0x00aa8;
    rda_ecc_sg_alarm = 0x00ab0;
    rqa_err_reg = 0x00ab8;
    rqa_err_mask = 0x00ac0;
    rqa_err_alarm = 0x00ac8;
    frf_alarm_reg = 0x00ad0;
    frf_alarm_mask = 0x00ad8;
    frf_alarm_alarm = 0x00ae0;
    rocrc_alarm_reg = 0x00ae8;
    rocrc_alarm_mask = 0x00af0;
    rocrc_alarm_alarm = 0x00af8;
    wde0_alarm_reg = 0x00b00;
    wde0_alarm_mask = 0x00b08;
    wde0_alarm_alarm = 0x00b10;
    wde1_alarm_reg = 0x00b18;
    wde1_alarm_mask = 0x00b20;
    wde1_alarm_alarm = 0x00b28;
    wde2_alarm_reg = 0x00b30;
    wde2_alarm_mask = 0x00b38;
    wde2_alarm_alarm = 0x00b40;
    wde3_alarm_reg = 0x00b48;
    wde3_alarm_mask = 0x00b50;
    wde3_alarm_alarm = 0x00b58;
    rx_w_round_robin[5] = 0x00b60;
    rx_queue_priority[3] = 0x00c00;
    rx_queue_select[17] = 0x00c18;

    // PCIe interface and credit arbitration
    pcipif_int_status = 0x01000;
    pcipif_int_mask = 0x01008;
    dbecc_err_reg = 0x01010;
    dbecc_err_mask = 0x01018;
    dbecc_err_alarm = 0x01020;
    sbecc_err_reg = 0x01028;
    sbecc_err_mask = 0x01030;
    sbecc_err_alarm = 0x01038;
    general_err_reg = 0x01040;
    general_err_mask = 0x01048;
    general_err_alarm = 0x01050;
    ini_errors_reg = 0x01058;
    ini_errors_mask = 0x01060;
    ini_errors_alarm = 0x01068;
    dma_errors_reg = 0x01070;
    dma_errors_mask = 0x01078;
    dma_errors_alarm = 0x01080;
    tgt_errors_reg = 0x01088;
    tgt_errors_mask = 0x01090;
    tgt_errors_alarm = 0x01098;
    config_errors_reg = 0x010a0;
    config_errors_mask = 0x010a8;
    config_errors_alarm = 0x010b0;
    crdt_errors_reg = 0x010b8;
    crdt_errors_mask = 0x010c0;
    crdt_errors_alarm = 0x010c8;
    mrpcim_general_errors_reg = 0x010d0;
    mrpcim_general_errors_mask = 0x010d8;
    mrpcim_general_errors_alarm = 0x010e0;
    pll_errors_reg = 0x010e8;
    pll_errors_mask = 0x010f0;
    pll_errors_alarm = 0x010f8;
    mrpcim_ppif_int_status = 0x01100;
    mrpcim_ppif_int_mask = 0x01108;
    wrcrdtarb_cfg0 = 0x01110;
    rdcrdtarb_cfg0 = 0x01118;
    rdcrdtarb_status0_vplane[17] = 0x01120;
    rdcrdtarb_status1_vplane[17] = 0x011a8;
    mrpcim_debug_stats0 = 0x01230;
    mrpcim_debug_stats1_vplane[17] = 0x01238;
    mrpcim_debug_stats2_vplane[17] = 0x012c0;
    mrpcim_debug_stats3_vplane[17] = 0x01348;
    mrpcim_debug_stats4 = 0x013d0;

    // General configuration, reset and MRPCIM statistics
    mrpcim_general_int_status = 0x01800;
    mrpcim_general_int_mask = 0x01808;
    mrpcim_general_cfg1 = 0x01810;
    mrpcim_general_cfg2 = 0x01818;
    mrpcim_general_cfg3 = 0x01820;
    sw_reset_cfg1 = 0x01828;
    sw_reset_status = 0x01830;
    bf_sw_reset = 0x01838;
    mrpcim_stats_start_host_addr = 0x01840;
    rxmac_authorize_all_addr = 0x01848;
    rxmac_authorize_all_vid = 0x01850;
    genstats_count01 = 0x01858;
    genstats_count23 = 0x01860;
    genstats_count4 = 0x01868;
    genstats_count5 = 0x01870;
    debug_stats0 = 0x01878;
    debug_stats1 = 0x01880;
    debug_stats2 = 0x01888;
    debug_stats3_vplane[17] = 0x01890;
    debug_stats4_vplane[17] = 0x01918;
    dbg_stats_tpa_tx_path = 0x019a0;
    dbg_stat_tx_any_frms = 0x019a8;
    dbg_stat_rx_any_frms = 0x019b0;

    // Protocol engine, message and memory controllers
    pcmg1_int_status = 0x02000;
    pcmg1_int_mask = 0x02008;
    pcmg2_int_status = 0x02010;
    pcmg2_int_mask = 0x02018;
    pcmg3_int_status = 0x02020;
    pcmg3_int_mask = 0x02028;
    gcmg1_int_status = 0x02030;
    gcmg1_int_mask = 0x02038;
    gcmg2_int_status = 0x02040;
    gcmg2_int_mask = 0x02048;
    msg_int_status = 0x02050;
    msg_int_mask = 0x02058;
    msg_exc_reg = 0x02060;
    msg_exc_mask = 0x02068;
    msg_exc_alarm = 0x02070;
    msg_err_reg = 0x02078;
    msg_err_mask = 0x02080;
    msg_err_alarm = 0x02088;
    msg_err2_reg = 0x02090;
    msg_err2_mask = 0x02098;
    msg_err2_alarm = 0x020a0;
    msg_err3_reg = 0x020a8;
    msg_err3_mask = 0x020b0;
    msg_err3_alarm = 0x020b8;
    cp_exc_reg = 0x020c0;
    cp_exc_mask = 0x020c8;
    cp_exc_alarm = 0x020d0;
    cp_err_reg = 0x020d8;
    cp_err_mask = 0x020e0;
    cp_err_alarm = 0x020e8;
    gcp_err_reg = 0x020f0;
    gcp_err_mask = 0x020f8;
    gcp_err_alarm = 0x02100;
    psscc_err_reg = 0x02108;
    psscc_err_mask = 0x02110;
    psscc_err_alarm = 0x02118;
    gsscc_err_reg = 0x02120;
    gsscc_err_mask = 0x02128;
    gsscc_err_alarm = 0x02130;
    pxtmc_err_reg = 0x02138;
    pxtmc_err_mask = 0x02140;
    pxtmc_err_alarm = 0x02148;
    gxtmc_err_reg = 0x02150;
    gxtmc_err_mask = 0x02158;
    gxtmc_err_alarm = 0x02160;
    cmc_err_reg = 0x02168;
    cmc_err_mask = 0x02170;
    cmc_err_alarm = 0x02178;
    lso_error_reg = 0x02180;
    lso_error_mask = 0x02188;
    lso_error_alarm = 0x02190;
    pda_alarm_reg = 0x02198;
    pda_alarm_mask = 0x021a0;
    pda_alarm_alarm = 0x021a8;
    ptm_alarm_reg = 0x021b0;
    ptm_alarm_mask = 0x021b8;
    ptm_alarm_alarm = 0x021c0;
    tpa_error_reg = 0x021c8;
    tpa_error_mask = 0x021d0;
    tpa_error_alarm = 0x021d8;
    tpa_int_status = 0x021e0;
    tpa_int_mask = 0x021e8;
    sm_error_reg = 0x021f0;
    sm_error_mask = 0x021f8;
    sm_error_alarm = 0x02200;
    kdfc_err_reg = 0x02208;
    kdfc_err_mask = 0x02210;
    kdfc_err_alarm = 0x02218;
    doorbell_int_status = 0x02220;
    doorbell_int_mask = 0x02228;
    tim_err_reg = 0x02230;
    tim_err_mask = 0x02238;
    tim_err_alarm = 0x02240;
    rtdma_int_status = 0x02248;
    rtdma_int_mask = 0x02250;
    pcc_error_reg = 0x02258;
    pcc_error_mask = 0x02260;
    pcc_error_alarm = 0x02268;
    dam_err_reg = 0x02270;
    dam_err_mask = 0x02278;
    dam_err_alarm = 0x02280;
    fau_ecc_err_reg = 0x02288;
    fau_ecc_err_mask = 0x02290;
    fau_ecc_err_alarm = 0x02298;
    orp_err_reg = 0x022a0;
    orp_err_mask = 0x022a8;
    orp_err_alarm = 0x022b0;
    mc_int_status = 0x022b8;
    mc_int_mask = 0x022c0;
    mc_err_reg = 0x022c8;
    mc_err_mask = 0x022d0;
    mc_err_alarm = 0x022d8;
    grocrc_alarm_reg = 0x022e0;
    grocrc_alarm_mask = 0x022e8;
    grocrc_alarm_alarm = 0x022f0;
    gssc_err0_reg[3] = 0x022f8;
    gssc_err0_mask[3] = 0x02310;
    gssc_err0_alarm[3] = 0x02328;
    gssc_err1_reg[3] = 0x02340;
    gssc_err1_mask[3] = 0x02358;
    gssc_err1_alarm[3] = 0x02370;
    g3cmct_int_status = 0x02388;
    g3cmct_int_mask = 0x02390;
    g3cmct_err_reg = 0x02398;
    g3cmct_err_mask = 0x023a0;
    g3cmct_err_alarm = 0x023a8;
    g3ifcmd_fb_int_status = 0x023b0;
    g3ifcmd_fb_int_mask = 0x023b8;
    g3ifcmd_fb_err_reg = 0x023c0;
    g3ifcmd_fb_err_mask = 0x023c8;
    g3ifcmd_fb_err_alarm = 0x023d0;
    g3ifcmd_cmu_int_status = 0x023d8;
    g3ifcmd_cmu_int_mask = 0x023e0;
    g3ifcmd_cmu_err_reg = 0x023e8;
    g3ifcmd_cmu_err_mask = 0x023f0;
    g3ifcmd_cmu_err_alarm = 0x023f8;
    g3ifcmd_cml_int_status = 0x02400;
    g3ifcmd_cml_int_mask = 0x02408;
    g3ifcmd_cml_err_reg = 0x02410;
    g3ifcmd_cml_err_mask = 0x02418;
    g3ifcmd_cml_err_alarm = 0x02420;
    orp_lro_events = 0x02428;
    orp_bs_events = 0x02430;
    orp_iwarp_events = 0x02438;
    tpa_global_cfg = 0x02440;
    fau_pa_cfg = 0x02448;

    // XMAC
    xgmac_int_status = 0x04000;
    xgmac_int_mask = 0x04008;
    xmac_gen_err_reg = 0x04010;
    xmac_gen_err_mask = 0x04018;
    xmac_gen_err_alarm = 0x04020;
    xgxs_gen_err_reg = 0x04028;
    xgxs_gen_err_mask = 0x04030;
    xgxs_gen_err_alarm = 0x04038;
    asic_ntwk_err_reg = 0x04040;
    asic_ntwk_err_mask = 0x04048;
    asic_ntwk_err_alarm = 0x04050;
    xgmac_main_cfg_port[3] = 0x04058;
    xmac_gen_cfg = 0x04070;
    xmac_stats_sys_cmd = 0x04078;
    xmac_stats_sys_data = 0x04080;
    xgxs_static_cfg_port[2] = 0x04088;
    mdio_gen_cfg_port[2] = 0x04098;
    mdio_mgr_access_port[2] = 0x040a8;
    xgmac_debounce_port[3] = 0x040b8;

    // RXMAC and receive traffic steering
    rxmac_int_status = 0x04800;
    rxmac_int_mask = 0x04808;
    rxmac_ecc_err_reg = 0x04810;
    rxmac_ecc_err_mask = 0x04818;
    rxmac_ecc_err_alarm = 0x04820;
    rxmac_various_err_reg = 0x04828;
    rxmac_various_err_mask = 0x04830;
    rxmac_various_err_alarm = 0x04838;
    rxmac_cfg0_port[3] = 0x04840;
    rxmac_cfg2_port[3] = 0x04858;
    rxmac_pause_cfg_port[3] = 0x04870;
    rxmac_link_util_port[3] = 0x04888;
    rxmac_rx_pa_cfg0 = 0x048a0;
    rxmac_rx_pa_cfg1 = 0x048a8;
    rts_mgr_steer_ctrl = 0x048b0;
    rts_mgr_steer_data0 = 0x048b8;
    rts_mgr_steer_data1 = 0x048c0;
    rts_mgr_steer_vpath_vector = 0x048c8;
    ratemgmt_cfg_port[3] = 0x048d0;

    // TXMAC
    tmac_int_status = 0x04c00;
    tmac_int_mask = 0x04c08;
    txmac_gen_err_reg = 0x04c10;
    txmac_gen_err_mask = 0x04c18;
    txmac_gen_err_alarm = 0x04c20;
    txmac_ecc_err_reg = 0x04c28;
    txmac_ecc_err_mask = 0x04c30;
    txmac_ecc_err_alarm = 0x04c38;
    txmac_gen_cfg1 = 0x04c40;
    txmac_cfg0_port[3] = 0x04c48;
    txmac_link_util_port[3] = 0x04c60;

    // Link aggregation
    lag_cfg = 0x05000;
    lag_sys_cfg = 0x05008;
    lag_sys_id = 0x05010;
    lag_active_passive_cfg = 0x05018;
    lag_distrib_dest = 0x05020;
    lag_marker_cfg = 0x05028;
    lag_lacp_cfg = 0x05030;
    lag_timer_cfg_1 = 0x05038;
    lag_timer_cfg_2 = 0x05040;
    lag_tx_cfg = 0x05048;
    lag_aggr_alt_admin_key = 0x05050;
    lag_aggr_id_cfg[2] = 0x05058;
    lag_aggr_addr_cfg[2] = 0x05068;
    lag_aggr_admin_key[2] = 0x05078;
    lag_port_cfg[2] = 0x05088;
    lag_port_actor_admin_cfg[2] = 0x05098;
    lag_port_actor_admin_state[2] = 0x050a8;
    lag_port_partner_admin_sys_id[2] = 0x050b8;
    lag_port_partner_admin_cfg[2] = 0x050c8;
    lag_port_partner_admin_state[2] = 0x050d8;
}

impl RegisterInfo {
    pub fn find(name: &str) -> Option<&'static RegisterInfo> {
        REGISTERS.iter().find(|info| info.name == name)
    }

    /// Resolves a byte offset to the register holding it and the element index.
    pub fn at(offset: usize) -> Option<(&'static RegisterInfo, usize)> {
        if offset % 8 != 0 {
            return None;
        }
        REGISTERS.iter().find_map(|info| {
            let idx = offset.checked_sub(info.offset)? / 8;
            (idx < info.count).then_some((info, idx))
        })
    }

    pub fn element_offset(&self, idx: usize) -> Option<usize> {
        (idx < self.count).then(|| self.offset + idx * 8)
    }

    /// Bitfields known for this register, if any.
    pub fn fields(&self) -> Option<&'static [(&'static str, Field)]> {
        fields::lookup(self.name)
    }
}

/// Splits `value` into the named fields of `info`. Registers without a field table
/// decode to nothing.
pub fn decode(info: &RegisterInfo, value: u64) -> Vec<(&'static str, u64)> {
    info.fields()
        .unwrap_or(&[])
        .iter()
        .map(|(name, field)| (*name, field.decode(value)))
        .collect()
}

/// A mapped MRPCIM register block.
pub struct MrpcimBar {
    virt: *mut MrpcimReg,
}

impl MrpcimBar {
    /// Wraps the block mapped at `virt`, `size` bytes long.
    ///
    /// # Safety
    ///
    /// `virt` must point to `size` bytes of uncached device memory that stay mapped
    /// for the lifetime of the returned value and are not aliased elsewhere.
    pub unsafe fn new(virt: *mut u8, size: usize) -> Result<Self> {
        if virt.is_null() || virt as usize % 8 != 0 || size < MRPCIM_REG_SIZE {
            return Err(MrpcimError::InvalidMapping {
                addr: virt as usize,
                size,
            });
        }
        Ok(Self { virt: virt.cast() })
    }
}

impl Deref for MrpcimBar {
    type Target = MrpcimReg;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.virt }
    }
}
impl DerefMut for MrpcimBar {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.virt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_ordered_without_overlap() {
        for pair in REGISTERS.windows(2) {
            let end = pair[0].offset + pair[0].count * 8;
            assert!(
                end <= pair[1].offset,
                "{} overlaps {}",
                pair[0].name,
                pair[1].name
            );
        }
        let last = REGISTERS.last().unwrap();
        assert_eq!(last.offset + last.count * 8, MRPCIM_REG_SIZE);
    }

    #[test]
    fn documented_offsets() {
        assert_eq!(offset_of!(MrpcimReg, g3fbct_int_status), 0x00000);
        assert_eq!(offset_of!(MrpcimReg, rx_queue_select), 0x00c18);
        assert_eq!(offset_of!(MrpcimReg, rdcrdtarb_status1_vplane), 0x011a8);
        assert_eq!(offset_of!(MrpcimReg, bf_sw_reset), 0x01838);
        assert_eq!(offset_of!(MrpcimReg, gssc_err1_alarm), 0x02370);
        assert_eq!(offset_of!(MrpcimReg, xmac_stats_sys_cmd), 0x04078);
        assert_eq!(offset_of!(MrpcimReg, mdio_mgr_access_port), 0x040a8);
        assert_eq!(offset_of!(MrpcimReg, rts_mgr_steer_ctrl), 0x048b0);
        assert_eq!(offset_of!(MrpcimReg, txmac_cfg0_port), 0x04c48);
        assert_eq!(offset_of!(MrpcimReg, lag_port_partner_admin_state), 0x050d8);
    }

    #[test]
    fn lookup_by_name_and_offset() {
        let info = RegisterInfo::find("rxmac_cfg0_port").unwrap();
        assert_eq!((info.offset, info.count), (0x4840, 3));
        assert_eq!(info.element_offset(2), Some(0x4850));
        assert_eq!(info.element_offset(3), None);

        let (info, idx) = RegisterInfo::at(0x4850).unwrap();
        assert_eq!((info.name, idx), ("rxmac_cfg0_port", 2));
        let (info, idx) = RegisterInfo::at(0x1838).unwrap();
        assert_eq!((info.name, idx), ("bf_sw_reset", 0));

        assert!(RegisterInfo::at(0x4854).is_none());
        assert!(RegisterInfo::at(0x0048).is_none());
        assert!(RegisterInfo::at(MRPCIM_REG_SIZE).is_none());
        assert!(RegisterInfo::find("no_such_register").is_none());
    }

    #[test]
    fn decode_splits_fields() {
        let info = RegisterInfo::find("txmac_cfg0_port").unwrap();
        let value = fields::txmac_cfg0_port::TMAC_EN.mask()
            | fields::txmac_cfg0_port::PAD_BYTE.encode(0xaa);
        let decoded = decode(info, value);
        assert!(decoded.contains(&("TMAC_EN", 1)));
        assert!(decoded.contains(&("APPEND_PAD", 0)));
        assert!(decoded.contains(&("PAD_BYTE", 0xaa)));

        let info = RegisterInfo::find("lag_timer_cfg_1").unwrap();
        assert!(decode(info, u64::MAX).is_empty());
    }

    #[test]
    fn bar_rejects_short_mappings() {
        let mut words = vec![0u64; MRPCIM_REG_SIZE / 8];
        let virt = words.as_mut_ptr().cast::<u8>();
        assert!(unsafe { MrpcimBar::new(virt, MRPCIM_REG_SIZE - 8) }.is_err());
        assert!(unsafe { MrpcimBar::new(core::ptr::null_mut(), MRPCIM_REG_SIZE) }.is_err());

        let bar = unsafe { MrpcimBar::new(virt, MRPCIM_REG_SIZE) }.unwrap();
        assert_eq!(bar.sw_reset_status.read(), 0);
    }
}
