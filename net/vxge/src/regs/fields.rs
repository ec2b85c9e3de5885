//! Bitfields of the MRPCIM registers.
//!
//! One module per register, named after the register. Alarm registers come in
//! `_reg`/`_mask`/`_alarm` triplets and interrupt registers in `_int_status`/`_int_mask`
//! pairs sharing one layout, so only the first of each is listed here; [`lookup`]
//! resolves the others.

use crate::bits::Field;

macro_rules! register_fields {
    ($(
        $(#[$meta:meta])*
        $reg:ident {
            $($field:ident = $def:expr;)*
        } $({ $($extra:item)* })?
    )*) => {
        $(
            $(#[$meta])*
            pub mod $reg {
                use crate::bits::Field;

                $(pub const $field: Field = $def;)*

                /// Every field of the register, for decoding.
                pub const FIELDS: &[(&str, Field)] = &[$((stringify!($field), $field)),*];

                $($($extra)*)?
            }
        )*

        fn table(name: &str) -> Option<&'static [(&'static str, Field)]> {
            match name {
                $(stringify!($reg) => Some($reg::FIELDS),)*
                _ => None,
            }
        }
    };
}

/// Union of the masks of `fields`.
pub const fn all_bits(fields: &[(&str, Field)]) -> u64 {
    let mut bits = 0;
    let mut i = 0;
    while i < fields.len() {
        bits |= fields[i].1.mask();
        i += 1;
    }
    bits
}

/// Field table of register `name`.
pub fn lookup(name: &str) -> Option<&'static [(&'static str, Field)]> {
    if let Some(fields) = table(name) {
        return Some(fields);
    }
    if let Some(base) = name.strip_suffix("_int_mask") {
        return table(&format!("{base}_int_status"));
    }
    let base = name
        .strip_suffix("_mask")
        .or_else(|| name.strip_suffix("_alarm"))?;
    table(&format!("{base}_reg"))
}

register_fields! {
    g3fbct_int_status {
        ERR_G3IF_INT = Field::bit(3);
    }
    g3fbct_err_reg {
        G3IF_SM_ERR = Field::bit(4);
        G3IF_GDDR3_DECC = Field::bit(5);
        G3IF_GDDR3_U_DECC = Field::bit(6);
        G3IF_CTRL_FIFO_DECC = Field::bit(7);
        G3IF_GDDR3_SECC = Field::bit(29);
        G3IF_GDDR3_U_SECC = Field::bit(30);
        G3IF_CTRL_FIFO_SECC = Field::bit(31);
    }
    wrdma_int_status {
        RC_ALARM_RC_INT = Field::bit(3);
        RXDRM_SM_ERR_RXDRM_INT = Field::bit(7);
        RXDCM_SM_ERR_RXDCM_SM_INT = Field::bit(11);
        RXDWM_SM_ERR_RXDWM_INT = Field::bit(15);
        RDA_ERR_RDA_INT = Field::bit(19);
        RDA_ECC_DB_RDA_ECC_DB_INT = Field::bit(23);
        RDA_ECC_SG_RDA_ECC_SG_INT = Field::bit(27);
        FRF_ALARM_FRF_INT = Field::bit(31);
        ROCRC_ALARM_ROCRC_INT = Field::bit(35);
        WDE0_ALARM_WDE0_INT = Field::bit(39);
        WDE1_ALARM_WDE1_INT = Field::bit(43);
        WDE2_ALARM_WDE2_INT = Field::bit(47);
        WDE3_ALARM_WDE3_INT = Field::bit(51);
    }
    rc_alarm_reg {
        FTC_SM_ERR = Field::bit(0);
        FTC_SM_PHASE_ERR = Field::bit(1);
        BTDWM_SM_ERR = Field::bit(2);
        BTC_SM_ERR = Field::bit(3);
        BTDCM_SM_ERR = Field::bit(4);
        BTDRM_SM_ERR = Field::bit(5);
        RMM_RXD_RC_ECC_DB_ERR = Field::bit(6);
        RMM_RXD_RC_ECC_SG_ERR = Field::bit(7);
        RHS_RXD_RHS_ECC_DB_ERR = Field::bit(8);
        RHS_RXD_RHS_ECC_SG_ERR = Field::bit(9);
        RMM_SM_ERR = Field::bit(10);
        BTC_VPATH_MISMATCH_ERR = Field::bit(11);
    }
    rxdrm_sm_err_reg {
        PRC_VP = Field::new(0, 17);
    } {
        pub const fn prc_vp(i: u32) -> Field {
            Field::bit(i)
        }
    }
    rxdcm_sm_err_reg {
        PRC_VP = Field::new(0, 17);
    } {
        pub const fn prc_vp(i: u32) -> Field {
            Field::bit(i)
        }
    }
    rxdwm_sm_err_reg {
        PRC_VP = Field::new(0, 17);
    } {
        pub const fn prc_vp(i: u32) -> Field {
            Field::bit(i)
        }
    }
    rda_err_reg {
        RDA_SM0_ERR_ALARM = Field::bit(0);
        RDA_MISC_ERR = Field::bit(1);
        RDA_PCIX_ERR = Field::bit(2);
        RDA_RXD_ECC_DB_ERR = Field::bit(3);
        RDA_FRM_ECC_DB_ERR = Field::bit(4);
        RDA_UQM_ECC_DB_ERR = Field::bit(5);
        RDA_IMM_ECC_DB_ERR = Field::bit(6);
        RDA_TIM_ECC_DB_ERR = Field::bit(7);
    }
    rda_ecc_db_reg {
        RDA_RXD_ERR = Field::new(0, 17);
    } {
        pub const fn rda_rxd_err(i: u32) -> Field {
            Field::bit(i)
        }
    }
    rda_ecc_sg_reg {
        RDA_RXD_ERR = Field::new(0, 17);
    } {
        pub const fn rda_rxd_err(i: u32) -> Field {
            Field::bit(i)
        }
    }
    rqa_err_reg {
        RQA_SM_ERR_ALARM = Field::bit(0);
    }
    frf_alarm_reg {
        PRC_VP_FRF_SM_ERR = Field::new(0, 17);
    } {
        pub const fn prc_vp_frf_sm_err(i: u32) -> Field {
            Field::bit(i)
        }
    }
    rocrc_alarm_reg {
        QCQ_QCC_BYP_ECC_DB = Field::bit(0);
        QCQ_QCC_BYP_ECC_SG = Field::bit(1);
        NOA_NMA_SM_ERR = Field::bit(2);
        NOA_IMMM_ECC_DB = Field::bit(3);
        NOA_IMMM_ECC_SG = Field::bit(4);
        UDQ_UMQM_ECC_DB = Field::bit(5);
        UDQ_UMQM_ECC_SG = Field::bit(6);
        NOA_RCBM_ECC_DB = Field::bit(7);
        NOA_RCBM_ECC_SG = Field::bit(8);
        NOA_WCT_CMD_FIFO_ERR = Field::bit(9);
    }
    wde0_alarm_reg {
        WDE0_DCC_SM_ERR = Field::bit(0);
        WDE0_PRM_SM_ERR = Field::bit(1);
        WDE0_CP_SM_ERR = Field::bit(2);
        WDE0_CP_CMD_ERR = Field::bit(3);
        WDE0_PCR_SM_ERR = Field::bit(4);
    }
    wde1_alarm_reg {
        WDE1_DCC_SM_ERR = Field::bit(0);
        WDE1_PRM_SM_ERR = Field::bit(1);
        WDE1_CP_SM_ERR = Field::bit(2);
        WDE1_CP_CMD_ERR = Field::bit(3);
        WDE1_PCR_SM_ERR = Field::bit(4);
    }
    wde2_alarm_reg {
        WDE2_DCC_SM_ERR = Field::bit(0);
        WDE2_PRM_SM_ERR = Field::bit(1);
        WDE2_CP_SM_ERR = Field::bit(2);
        WDE2_CP_CMD_ERR = Field::bit(3);
        WDE2_PCR_SM_ERR = Field::bit(4);
    }
    wde3_alarm_reg {
        WDE3_DCC_SM_ERR = Field::bit(0);
        WDE3_PRM_SM_ERR = Field::bit(1);
        WDE3_CP_SM_ERR = Field::bit(2);
        WDE3_CP_CMD_ERR = Field::bit(3);
        WDE3_PCR_SM_ERR = Field::bit(4);
    }
    /// Weighted round-robin slots of the receive write arbiter, one vpath number per slot.
    rx_w_round_robin {
        RX_W_PRIORITY_SS_0 = Field::new(3, 5);
        RX_W_PRIORITY_SS_1 = Field::new(11, 5);
        RX_W_PRIORITY_SS_2 = Field::new(19, 5);
        RX_W_PRIORITY_SS_3 = Field::new(27, 5);
        RX_W_PRIORITY_SS_4 = Field::new(35, 5);
        RX_W_PRIORITY_SS_5 = Field::new(43, 5);
        RX_W_PRIORITY_SS_6 = Field::new(51, 5);
        RX_W_PRIORITY_SS_7 = Field::new(59, 5);
    }
    rx_queue_priority {
        RX_Q_NUMBER_0 = Field::new(3, 5);
        RX_Q_NUMBER_1 = Field::new(11, 5);
        RX_Q_NUMBER_2 = Field::new(19, 5);
        RX_Q_NUMBER_3 = Field::new(27, 5);
        RX_Q_NUMBER_4 = Field::new(35, 5);
        RX_Q_NUMBER_5 = Field::new(43, 5);
        RX_Q_NUMBER_6 = Field::new(51, 5);
        RX_Q_NUMBER_7 = Field::new(59, 5);
    }
    rx_queue_select {
        NUMBER = Field::new(0, 8);
        ENABLE_CODE = Field::new(8, 8);
        ENABLE_HIERARCHICAL_PRTY = Field::bit(23);
    }
    pcipif_int_status {
        DBECC_ERR_DBECC_ERR_INT = Field::bit(3);
        SBECC_ERR_SBECC_ERR_INT = Field::bit(7);
        GENERAL_ERR_GENERAL_ERR_INT = Field::bit(11);
        SRPCIM_MSG_SRPCIM_MSG_INT = Field::bit(15);
        MRPCIM_SPARE_R1_MRPCIM_SPARE_R1_INT = Field::bit(19);
    }
    dbecc_err_reg {
        PCI_RETRY_BUF_DB_ERR = Field::bit(0);
        PCI_RETRY_SOT_DB_ERR = Field::bit(1);
        PCI_P_HDR_DB_ERR = Field::bit(2);
        PCI_P_DATA_DB_ERR = Field::bit(3);
        PCI_NP_HDR_DB_ERR = Field::bit(4);
        PCI_NP_DATA_DB_ERR = Field::bit(5);
    }
    sbecc_err_reg {
        PCI_RETRY_BUF_SG_ERR = Field::bit(0);
        PCI_RETRY_SOT_SG_ERR = Field::bit(1);
        PCI_P_HDR_SG_ERR = Field::bit(2);
        PCI_P_DATA_SG_ERR = Field::bit(3);
        PCI_NP_HDR_SG_ERR = Field::bit(4);
        PCI_NP_DATA_SG_ERR = Field::bit(5);
    }
    general_err_reg {
        PCI_DROPPED_ILLEGAL_CFG = Field::bit(3);
        PCI_ILLEGAL_MEM_MAP_PROG = Field::bit(7);
        PCI_LINK_RST_FSM_ERR = Field::bit(11);
    }
    ini_errors_reg {
        DCPL_FSM_ERR = Field::bit(0);
        INI_BUF_DB_ERR = Field::bit(1);
        INI_DATA_OVERFLOW = Field::new(2, 4);
        INI_HDR_OVERFLOW = Field::new(6, 4);
    }
    dma_errors_reg {
        RDARB_FSM_ERR = Field::bit(0);
        WRARB_FSM_ERR = Field::bit(1);
        DMA_WRDMA_WR_HDR_OVERFLOW = Field::bit(2);
        DMA_WRDMA_WR_HDR_UNDERFLOW = Field::bit(3);
        DMA_WRDMA_WR_DATA_OVERFLOW = Field::bit(4);
        DMA_WRDMA_WR_DATA_UNDERFLOW = Field::bit(5);
        DMA_MSG_WR_HDR_OVERFLOW = Field::bit(6);
        DMA_MSG_WR_HDR_UNDERFLOW = Field::bit(7);
        DMA_MSG_WR_DATA_OVERFLOW = Field::bit(8);
        DMA_MSG_WR_DATA_UNDERFLOW = Field::bit(9);
        DMA_STATS_WR_HDR_OVERFLOW = Field::bit(10);
        DMA_STATS_WR_HDR_UNDERFLOW = Field::bit(11);
        DMA_STATS_WR_DATA_OVERFLOW = Field::bit(12);
        DMA_STATS_WR_DATA_UNDERFLOW = Field::bit(13);
        DMA_RTDMA_WR_HDR_OVERFLOW = Field::bit(14);
        DMA_RTDMA_WR_HDR_UNDERFLOW = Field::bit(15);
        DMA_RTDMA_WR_DATA_OVERFLOW = Field::bit(16);
        DMA_RTDMA_WR_DATA_UNDERFLOW = Field::bit(17);
        DMA_WRDMA_RD_HDR_OVERFLOW = Field::bit(18);
        DMA_WRDMA_RD_HDR_UNDERFLOW = Field::bit(19);
        DMA_RTDMA_RD_HDR_OVERFLOW = Field::bit(20);
        DMA_RTDMA_RD_HDR_UNDERFLOW = Field::bit(21);
        DBLGEN_FSM_ERR = Field::bit(22);
        DBLGEN_CREDIT_FSM_ERR = Field::bit(23);
        DBLGEN_DMA_WRR_SM_ERR = Field::bit(24);
    }
    tgt_errors_reg {
        TGT_REQ_FSM_ERR = Field::bit(0);
        TGT_CPL_FSM_ERR = Field::bit(1);
    }
    config_errors_reg {
        I2C_MAIN_FSM_ERR = Field::bit(0);
        I2C_REG_FSM_ERR = Field::bit(1);
        CFGM_I2C_TIMEOUT = Field::bit(2);
        RIC_I2C_TIMEOUT = Field::bit(3);
        CFGM_FSM_ERR = Field::bit(4);
        RIC_FSM_ERR = Field::bit(5);
        PIFM_TIMEOUT = Field::bit(6);
        PIFM_FSM_ERR = Field::bit(7);
        PIFM_TO_FSM_ERR = Field::bit(8);
        RIC_RIC_RD_TIMEOUT = Field::bit(9);
    }
    crdt_errors_reg {
        WRCRDTARB_FSM_ERR = Field::bit(0);
        WRCRDTARB_INTCTL_ILLEGAL_CRD_DEAL = Field::bit(4);
        WRCRDTARB_PDA_ILLEGAL_CRD_DEAL = Field::bit(8);
        WRCRDTARB_PCI_MSG_ILLEGAL_CRD_DEAL = Field::bit(12);
        RDCRDTARB_FSM_ERR = Field::bit(16);
        RDCRDTARB_RDA_ILLEGAL_CRD_DEAL = Field::bit(20);
        RDCRDTARB_PDA_ILLEGAL_CRD_DEAL = Field::bit(24);
        RDCRDTARB_DBLGEN_ILLEGAL_CRD_DEAL = Field::bit(28);
    }
    mrpcim_general_errors_reg {
        STATSB_FSM_ERR = Field::bit(0);
        XGEN_FSM_ERR = Field::bit(4);
        XMEM_FSM_ERR = Field::bit(8);
        KDFCCTL_FSM_ERR = Field::bit(12);
        MRIOVCTL_FSM_ERR = Field::bit(16);
        SPI_FLSH_ERR = Field::bit(20);
        SPI_IIC_ACK_ERR = Field::bit(24);
        SPI_IIC_CHKSUM_ERR = Field::bit(28);
        INI_SERR_DET = Field::bit(32);
        INTCTL_MSIX_FSM_ERR = Field::bit(36);
        INTCTL_MSI_OVERFLOW = Field::bit(40);
        PPIF_PCI_NOT_FLUSH_SW_RESET = Field::bit(44);
        PPIF_SW_RESET_FSM_ERR = Field::bit(48);
    }
    pll_errors_reg {
        CORE_CMG_PLL_OOL = Field::bit(0);
        CORE_FB_PLL_OOL = Field::bit(1);
        CORE_X_PLL_OOL = Field::bit(2);
    }
    mrpcim_ppif_int_status {
        INI_ERRORS_INI_INT = Field::bit(3);
        DMA_ERRORS_DMA_INT = Field::bit(7);
        TGT_ERRORS_TGT_INT = Field::bit(11);
        CONFIG_ERRORS_CONFIG_INT = Field::bit(15);
        CRDT_ERRORS_CRDT_INT = Field::bit(19);
        MRPCIM_GENERAL_ERRORS_GENERAL_INT = Field::bit(23);
        PLL_ERRORS_PLL_INT = Field::bit(27);
    }
    wrcrdtarb_cfg0 {
        WAIT_CNT = Field::new(48, 5);
    }
    /// Read credit arbiter. `MAX_OUTSTANDING_RDS` limits in-flight PCIe reads.
    rdcrdtarb_cfg0 {
        MAX_OUTSTANDING_RDS = Field::new(18, 6);
        WAIT_CNT = Field::new(48, 5);
    }
    mrpcim_general_int_status {
        PIC_INT = Field::bit(0);
        PCI_INT = Field::bit(1);
        RTDMA_INT = Field::bit(2);
        WRDMA_INT = Field::bit(3);
        G3CMCT_INT = Field::bit(4);
        GCMG1_INT = Field::bit(5);
        GCMG2_INT = Field::bit(6);
        GCMG3_INT = Field::bit(7);
        G3CMIFL_INT = Field::bit(8);
        G3CMIFU_INT = Field::bit(9);
        PCMG1_INT = Field::bit(10);
        PCMG2_INT = Field::bit(11);
        PCMG3_INT = Field::bit(12);
        XMAC_INT = Field::bit(13);
        RXMAC_INT = Field::bit(14);
        TMAC_INT = Field::bit(15);
        G3FBIF_INT = Field::bit(16);
        FBMC_INT = Field::bit(17);
        G3FBCT_INT = Field::bit(18);
        TPA_INT = Field::bit(19);
        DRBELL_INT = Field::bit(20);
        ONE_INT = Field::bit(21);
        MSG_INT = Field::bit(22);
    }
    mrpcim_general_cfg1 {
        CLEAR_SERR = Field::bit(7);
    }
    mrpcim_general_cfg2 {
        INS_TX_WR_TD = Field::bit(3);
        INS_TX_RD_TXD = Field::bit(7);
        INS_TX_WR_TXD = Field::bit(11);
        INS_TX_RD_TD = Field::bit(15);
        MRPCIM_STATS_ENABLE = Field::bit(23);
        MRPCIM_STATS_MAP_TO_VPATH = Field::new(27, 5);
    }
    mrpcim_general_cfg3 {
        PROTOCOL_AGNOSTIC = Field::bit(0);
        RTH_MULTI_IT_MODE = Field::bit(3);
        RTH_MULTI_IT_EN = Field::bit(7);
        RCV_FRM_ASSERT_DST = Field::bit(11);
    }
    sw_reset_cfg1 {
        TYPE = Field::bit(0);
    }
    sw_reset_status {
        RESET_CMPLT = Field::bit(7);
        INIT_CMPLT = Field::bit(15);
    }
    /// Writing [`bf_sw_reset::COMMAND`] into `DATA` resets the whole adapter.
    bf_sw_reset {
        DATA = Field::new(0, 8);
    } {
        pub const COMMAND: u64 = 0xa5;
    }
    mrpcim_stats_start_host_addr {
        MRPCIM_STATS_START_HOST_ADDR = Field::new(0, 57);
    }
    rxmac_authorize_all_addr {
        VP = Field::new(0, 17);
    }
    rxmac_authorize_all_vid {
        VP = Field::new(0, 17);
    }
    genstats_count01 {
        GENSTATS_COUNT1 = Field::new(0, 32);
        GENSTATS_COUNT0 = Field::new(32, 32);
    }
    genstats_count23 {
        GENSTATS_COUNT3 = Field::new(0, 32);
        GENSTATS_COUNT2 = Field::new(32, 32);
    }
    genstats_count4 {
        GENSTATS_COUNT4 = Field::new(32, 32);
    }
    genstats_count5 {
        GENSTATS_COUNT5 = Field::new(32, 32);
    }
    debug_stats0 {
        RSTDROP_MSG = Field::new(0, 32);
        RSTDROP_CPL = Field::new(32, 32);
    }
    debug_stats1 {
        RSTDROP_CLIENT0 = Field::new(0, 32);
        RSTDROP_CLIENT1 = Field::new(32, 32);
    }
    debug_stats2 {
        RSTDROP_CLIENT2 = Field::new(0, 32);
    }
    debug_stats3_vplane {
        VPLANE_DEPL_PH = Field::new(0, 16);
        VPLANE_DEPL_NPH = Field::new(16, 16);
        VPLANE_DEPL_CPLH = Field::new(32, 16);
    }
    debug_stats4_vplane {
        VPLANE_DEPL_PD = Field::new(0, 16);
        VPLANE_DEPL_NPD = Field::new(16, 16);
        VPLANE_DEPL_CPLD = Field::new(32, 16);
    }
    mrpcim_debug_stats0 {
        INI_WR_DROP = Field::new(0, 32);
        INI_RD_DROP = Field::new(32, 32);
    }
    mrpcim_debug_stats1_vplane {
        WRCRDTARB_PH_CRDT_DEPLETED = Field::new(32, 32);
    }
    mrpcim_debug_stats2_vplane {
        WRCRDTARB_PD_CRDT_DEPLETED = Field::new(32, 32);
    }
    mrpcim_debug_stats3_vplane {
        RDCRDTARB_NPH_CRDT_DEPLETED = Field::new(32, 32);
    }
    mrpcim_debug_stats4 {
        INI_WR_VPIN_DROP = Field::new(0, 32);
        INI_RD_VPIN_DROP = Field::new(32, 32);
    }
    dbg_stats_tpa_tx_path {
        TX_PERMITTED_FRMS = Field::new(32, 32);
    }
    /// Frames seen in the last interval, one byte per MAC port.
    dbg_stat_tx_any_frms {
        PORT0 = Field::new(0, 8);
        PORT1 = Field::new(8, 8);
        PORT2 = Field::new(16, 8);
    }
    dbg_stat_rx_any_frms {
        PORT0 = Field::new(0, 8);
        PORT1 = Field::new(8, 8);
        PORT2 = Field::new(16, 8);
    }
    orp_lro_events {
        ORP_LRO_EVENTS = Field::new(0, 64);
    }
    orp_bs_events {
        ORP_BS_EVENTS = Field::new(0, 64);
    }
    orp_iwarp_events {
        ORP_IWARP_EVENTS = Field::new(0, 64);
    }
    pcmg1_int_status {
        PSSCC_ERR_PSSCC_INT = Field::bit(3);
    }
    pcmg2_int_status {
        PXTMC_ERR_PXTMC_INT = Field::bit(3);
        CP_EXC_CP_XT_EXC_INT = Field::bit(7);
        CP_ERR_CP_ERR_INT = Field::bit(11);
    }
    pcmg3_int_status {
        DAM_ERR_DAM_INT = Field::bit(3);
    }
    gcmg1_int_status {
        GSSCC_ERR_GSSCC_INT = Field::bit(3);
        GSSC0_ERR0_GSSC0_0_INT = Field::bit(7);
        GSSC0_ERR1_GSSC0_1_INT = Field::bit(11);
        GSSC1_ERR0_GSSC1_0_INT = Field::bit(15);
        GSSC1_ERR1_GSSC1_1_INT = Field::bit(19);
        GSSC2_ERR0_GSSC2_0_INT = Field::bit(23);
        GSSC2_ERR1_GSSC2_1_INT = Field::bit(27);
    }
    gcmg2_int_status {
        GXTMC_ERR_GXTMC_INT = Field::bit(3);
        GCP_ERR_GCP_INT = Field::bit(7);
        CMC_ERR_CMC_INT = Field::bit(11);
    }
    msg_int_status {
        TIM_ERR_TIM_INT = Field::bit(3);
        MSG_EXC_MSG_XT_EXC_INT = Field::bit(7);
        MSG_ERR3_MSG_ERR3_INT = Field::bit(11);
        MSG_ERR2_MSG_ERR2_INT = Field::bit(15);
        MSG_ERR_MSG_ERR_INT = Field::bit(19);
    }
    msg_exc_reg {
        MP_MXP_CAUSE_INFO_INT = Field::bit(50);
        MP_MXP_CAUSE_CRIT_INT = Field::bit(51);
        UP_UXP_CAUSE_INFO_INT = Field::bit(54);
        UP_UXP_CAUSE_CRIT_INT = Field::bit(55);
        MP_MXP_SERR = Field::bit(62);
        UP_UXP_SERR = Field::bit(63);
    }
    msg_err_reg {
        UP_UXP_WAKE_FSM_INTEGRITY_ERR = Field::bit(0);
        MP_MXP_WAKE_FSM_INTEGRITY_ERR = Field::bit(1);
        MSG_QUE_DMQ_DMA_READ_CMD_FSM_INTEGRITY_ERR = Field::bit(2);
        MSG_QUE_DMQ_DMA_RESP_FSM_INTEGRITY_ERR = Field::bit(3);
        MSG_QUE_DMQ_OWN_FSM_INTEGRITY_ERR = Field::bit(4);
        MSG_QUE_PDA_ACC_FSM_INTEGRITY_ERR = Field::bit(5);
        MP_MXP_PMON_FSM_INTEGRITY_ERR = Field::bit(6);
        UP_UXP_PMON_FSM_INTEGRITY_ERR = Field::bit(7);
        MSG_XFMDQRY_FSM_INTEGRITY_ERR = Field::bit(8);
        MSG_FRMQRY_FSM_INTEGRITY_ERR = Field::bit(9);
        MSG_QUE_UMQ_WRITE_FSM_INTEGRITY_ERR = Field::bit(10);
        MSG_QUE_UMQ_BWR_PF_FSM_INTEGRITY_ERR = Field::bit(11);
        MSG_QUE_REG_RESP_FIFO_ERR = Field::bit(12);
        UP_UXP_DTAG_DB_ERR = Field::bit(13);
        UP_UXP_ITAG_DB_ERR = Field::bit(14);
        MP_MXP_DTAG_DB_ERR = Field::bit(15);
        MP_MXP_ITAG_DB_ERR = Field::bit(16);
        UP_UXP_TRACE_DB_ERR = Field::bit(17);
        MP_MXP_TRACE_DB_ERR = Field::bit(18);
        MSG_QUE_CMG2MSG_DB_ERR = Field::bit(19);
        MSG_QUE_TXPE2MSG_DB_ERR = Field::bit(20);
        MSG_QUE_RXPE2MSG_DB_ERR = Field::bit(21);
        MSG_QUE_RPE2MSG_DB_ERR = Field::bit(22);
        MSG_QUE_REG_READ_FIFO_ERR = Field::bit(23);
        MSG_QUE_MXP2UXP_FIFO_ERR = Field::bit(24);
        MSG_QUE_KDFC_SIF_FIFO_ERR = Field::bit(25);
        MSG_QUE_CXP2SWIF_FIFO_ERR = Field::bit(26);
        MSG_QUE_UMQ_DB_ERR = Field::bit(27);
        MSG_QUE_BWR_PF_DB_ERR = Field::bit(28);
        MSG_QUE_BWR_SIF_FIFO_ERR = Field::bit(29);
        MSG_QUE_DMQ_ECC_DB_ERR = Field::bit(30);
        MSG_QUE_DMA_READ_FIFO_ERR = Field::bit(31);
        MSG_QUE_DMA_RESP_ECC_DB_ERR = Field::bit(32);
        MSG_QUE_UXP2MXP_FIFO_ERR = Field::bit(33);
    }
    msg_err2_reg {
        MSG_QUE_CMG2MSG_DISPATCH_FSM_INTEGRITY_ERR = Field::bit(0);
        MSG_QUE_DMQ_DISPATCH_FSM_INTEGRITY_ERR = Field::bit(1);
        MSG_QUE_SWIF_DISPATCH_FSM_INTEGRITY_ERR = Field::bit(2);
        MSG_QUE_PIC_WRITE_FSM_INTEGRITY_ERR = Field::bit(3);
        MSG_QUE_SWIFREG_FSM_INTEGRITY_ERR = Field::bit(4);
        MSG_QUE_TIM_WRITE_FSM_INTEGRITY_ERR = Field::bit(5);
        MSG_QUE_UMQ_TA_FSM_INTEGRITY_ERR = Field::bit(6);
        MSG_QUE_TXPE_TA_FSM_INTEGRITY_ERR = Field::bit(7);
        MSG_QUE_RXPE_TA_FSM_INTEGRITY_ERR = Field::bit(8);
        MSG_QUE_SWIF_TA_FSM_INTEGRITY_ERR = Field::bit(9);
        MSG_QUE_DMA_TA_FSM_INTEGRITY_ERR = Field::bit(10);
        MSG_QUE_CP_TA_FSM_INTEGRITY_ERR = Field::bit(11);
        MSG_QUE_LONGTERMUMQ_TA_FSM_INTEGRITY_ERR = Field::new(12, 17);
        MSG_QUE_FBMC_OWN_FSM_INTEGRITY_ERR = Field::bit(29);
        MSG_QUE_TXPE2MSG_DISPATCH_FSM_INTEGRITY_ERR = Field::bit(30);
        MSG_QUE_RXPE2MSG_DISPATCH_FSM_INTEGRITY_ERR = Field::bit(31);
        MSG_QUE_RPE2MSG_DISPATCH_FSM_INTEGRITY_ERR = Field::bit(32);
        MP_MP_PIFT_IF_CREDIT_CNT_ERR = Field::bit(33);
        UP_UP_PIFT_IF_CREDIT_CNT_ERR = Field::bit(34);
        MSG_QUE_UMQ2PIC_CMD_FIFO_ERR = Field::bit(35);
        TIM_TIM2MSG_CMD_FIFO_ERR = Field::bit(36);
    }
    msg_err3_reg {
        UP_UXP_DCACHE_DB_ERR = Field::new(0, 8);
        UP_UXP_ICACHE_DB_ERR = Field::new(8, 2);
        MP_MXP_DCACHE_DB_ERR = Field::new(10, 8);
        MP_MXP_ICACHE_DB_ERR = Field::new(18, 2);
    }
    cp_exc_reg {
        CP_CP_CAUSE_INFO_INT = Field::bit(47);
        CP_CP_CAUSE_CRIT_INT = Field::bit(55);
        CP_CP_SERR = Field::bit(63);
    }
    cp_err_reg {
        CP_CP_DCACHE_DB_ERR = Field::new(0, 8);
        CP_CP_ICACHE_DB_ERR = Field::new(8, 2);
        CP_CP_DTAG_DB_ERR = Field::bit(10);
        CP_CP_ITAG_DB_ERR = Field::bit(11);
        CP_CP_TRACE_DB_ERR = Field::bit(12);
        CP_DMA2CP_DB_ERR = Field::bit(13);
        CP_MP2CP_DB_ERR = Field::bit(14);
        CP_QCC2CP_DB_ERR = Field::bit(15);
        CP_STC2CP_DB_ERR = Field::new(16, 2);
        CP_H2L2CP_FIFO_ERR = Field::bit(18);
        CP_STC2CP_FIFO_ERR = Field::bit(19);
        CP_STE2CP_FIFO_ERR = Field::bit(20);
        CP_TTE2CP_FIFO_ERR = Field::bit(21);
        CP_SWIF2CP_FIFO_ERR = Field::bit(22);
        CP_CP2DMA_FIFO_ERR = Field::bit(23);
        CP_DAM2CP_FIFO_ERR = Field::bit(24);
        CP_MP2CP_FIFO_ERR = Field::bit(25);
        CP_QCC2CP_FIFO_ERR = Field::bit(26);
        CP_DMA2CP_FIFO_ERR = Field::bit(27);
        CP_CP_WAKE_FSM_INTEGRITY_ERR = Field::bit(28);
        CP_CP_PMON_FSM_INTEGRITY_ERR = Field::bit(29);
        CP_DMA_RD_SHADOW_ERR = Field::bit(30);
        CP_PIFT_CREDIT_ERR = Field::bit(31);
    }
    gcp_err_reg {
        CP_H2L2CP_FIFO_ERR = Field::bit(0);
        CP_STC2CP_FIFO_ERR = Field::bit(8);
        CP_STE2CP_FIFO_ERR = Field::bit(16);
        CP_TTE2CP_FIFO_ERR = Field::bit(24);
    }
    psscc_err_reg {
        SSCC_CP2STE_OFLOW_ERR = Field::bit(0);
        SSCC_CP2TTE_OFLOW_ERR = Field::bit(1);
    }
    gsscc_err_reg {
        SSCC_SSR_DB_ERR = Field::new(0, 2);
        SSCC_TSR_DB_ERR = Field::new(2, 6);
        SSCC_CP2STE_UFLOW_ERR = Field::bit(8);
        SSCC_CP2TTE_UFLOW_ERR = Field::bit(9);
    }
    pxtmc_err_reg {
        XTMC_XT_PIF_SRAM_DB_ERR = Field::new(0, 2);
        XTMC_MPT_REQ_FIFO_ERR = Field::bit(2);
        XTMC_MPT_PRSP_FIFO_ERR = Field::bit(3);
        XTMC_MPT_WRSP_FIFO_ERR = Field::bit(4);
        XTMC_UPT_REQ_FIFO_ERR = Field::bit(5);
        XTMC_UPT_PRSP_FIFO_ERR = Field::bit(6);
        XTMC_UPT_WRSP_FIFO_ERR = Field::bit(7);
        XTMC_CPT_REQ_FIFO_ERR = Field::bit(8);
        XTMC_CPT_PRSP_FIFO_ERR = Field::bit(9);
        XTMC_CPT_WRSP_FIFO_ERR = Field::bit(10);
        XTMC_REQ_FIFO_ERR = Field::bit(11);
        XTMC_REQ_DATA_FIFO_ERR = Field::bit(12);
        XTMC_WR_RSP_FIFO_ERR = Field::bit(13);
        XTMC_RD_RSP_FIFO_ERR = Field::bit(14);
        XTMC_MPT_REQ_SHADOW_ERR = Field::bit(15);
        XTMC_MPT_RSP_SHADOW_ERR = Field::bit(16);
        XTMC_UPT_REQ_SHADOW_ERR = Field::bit(17);
        XTMC_UPT_RSP_SHADOW_ERR = Field::bit(18);
        XTMC_CPT_REQ_SHADOW_ERR = Field::bit(19);
        XTMC_CPT_RSP_SHADOW_ERR = Field::bit(20);
        XTMC_XIL_SHADOW_ERR = Field::bit(21);
        XTMC_ARB_SHADOW_ERR = Field::bit(22);
        XTMC_RAM_SHADOW_ERR = Field::bit(23);
        XTMC_CMW_SHADOW_ERR = Field::bit(24);
        XTMC_CMR_SHADOW_ERR = Field::bit(25);
        XTMC_MPT_REQ_FSM_ERR = Field::bit(26);
        XTMC_MPT_RSP_FSM_ERR = Field::bit(27);
        XTMC_UPT_REQ_FSM_ERR = Field::bit(28);
        XTMC_UPT_RSP_FSM_ERR = Field::bit(29);
        XTMC_CPT_REQ_FSM_ERR = Field::bit(30);
        XTMC_CPT_RSP_FSM_ERR = Field::bit(31);
        XTMC_XIL_FSM_ERR = Field::bit(32);
        XTMC_ARB_FSM_ERR = Field::bit(33);
        XTMC_CMW_FSM_ERR = Field::bit(34);
        XTMC_CMR_FSM_ERR = Field::bit(35);
        XTMC_MXP_RD_PROT_ERR = Field::bit(36);
        XTMC_UXP_RD_PROT_ERR = Field::bit(37);
        XTMC_CXP_RD_PROT_ERR = Field::bit(38);
        XTMC_MXP_WR_PROT_ERR = Field::bit(39);
        XTMC_UXP_WR_PROT_ERR = Field::bit(40);
        XTMC_CXP_WR_PROT_ERR = Field::bit(41);
        XTMC_MXP_INV_ADDR_ERR = Field::bit(42);
        XTMC_UXP_INV_ADDR_ERR = Field::bit(43);
        XTMC_CXP_INV_ADDR_ERR = Field::bit(44);
        XTMC_CP2BDT_DFIFO_PUSH_ERR = Field::bit(45);
        XTMC_CP2BDT_RFIFO_PUSH_ERR = Field::bit(46);
    }
    gxtmc_err_reg {
        XTMC_BDT_MEM_DB_ERR = Field::new(0, 4);
        XTMC_CMC_RD_DATA_DB_ERR = Field::bit(4);
        XTMC_REQ_FIFO_ERR = Field::bit(5);
        XTMC_REQ_DATA_FIFO_ERR = Field::bit(6);
        XTMC_WR_RSP_FIFO_ERR = Field::bit(7);
        XTMC_RD_RSP_FIFO_ERR = Field::bit(8);
        XTMC_CMI_WRP_FIFO_ERR = Field::bit(9);
        XTMC_CMI_WRP_ERR = Field::bit(10);
        XTMC_CMI_RRP_FIFO_ERR = Field::bit(11);
        XTMC_CMI_RRP_ERR = Field::bit(12);
        XTMC_CMI_DATA_SM_ERR = Field::bit(13);
        XTMC_CMI_CMC0_IF_ERR = Field::bit(14);
        XTMC_BDT_CMI_CFC_SM_ERR = Field::bit(15);
        XTMC_BDT_CMI_DFETCH_CREDIT_OVERFLOW = Field::bit(16);
        XTMC_BDT_CMI_DFETCH_CREDIT_UNDERFLOW = Field::bit(17);
        XTMC_BDT_CMI_DFETCH_SM_ERR = Field::bit(18);
        XTMC_BDT_CMI_RCTRL_CREDIT_OVERFLOW = Field::bit(19);
        XTMC_BDT_CMI_RCTRL_CREDIT_UNDERFLOW = Field::bit(20);
        XTMC_BDT_CMI_RCTRL_SM_ERR = Field::bit(21);
        XTMC_BDT_CMI_WCOMPL_SM_ERR = Field::bit(22);
        XTMC_BDT_CMI_WCOMPL_TAG_ERR = Field::bit(23);
        XTMC_BDT_CMI_WREQ_SM_ERR = Field::bit(24);
        XTMC_BDT_CMI_WREQ_FIFO_ERR = Field::bit(25);
        XTMC_CP2BDT_RFIFO_POP_ERR = Field::bit(26);
        XTMC_XTMC_BDT_CMI_OP_ERR = Field::bit(27);
        XTMC_XTMC_BDT_DFETCH_OP_ERR = Field::bit(28);
        XTMC_XTMC_BDT_DFIFO_ERR = Field::bit(29);
        XTMC_CMI_ARB_SM_ERR = Field::bit(30);
    }
    cmc_err_reg {
        CMC_CMC_SM_ERR = Field::bit(7);
    }
    lso_error_reg {
        PCC_LSO_ABORT = Field::new(0, 8);
        PCC_LSO_FSM_ERR_ALARM = Field::new(8, 8);
    } {
        pub const fn pcc_lso_abort(i: u32) -> Field {
            Field::bit(i)
        }
        pub const fn pcc_lso_fsm_err_alarm(i: u32) -> Field {
            Field::bit(8 + i)
        }
    }
    pda_alarm_reg {
        PDA_HSC_FIFO_ERR = Field::bit(0);
        PDA_SM_ERR = Field::bit(1);
    }
    ptm_alarm_reg {
        PTM_RDCTRL_SYNC_ERR = Field::bit(0);
        PTM_RDCTRL_FIFO_ERR = Field::bit(1);
        XFMD_RD_FIFO_ERR = Field::bit(2);
        WDE2MSR_WR_FIFO_ERR = Field::bit(3);
        PTM_FRMM_ECC_DB_ERR = Field::new(4, 2);
        PTM_FRMM_ECC_SG_ERR = Field::new(6, 2);
    }
    tpa_error_reg {
        TPA_FSM_ERR_ALARM = Field::bit(0);
        TPA_TPA_DA_LKUP_PRT0_SG_ERR = Field::bit(1);
        TPA_TPA_DA_LKUP_PRT0_DB_ERR = Field::bit(2);
    }
    tpa_int_status {
        ORP_ERR_ORP_INT = Field::bit(3);
        PTM_ALARM_PTM_INT = Field::bit(7);
        TPA_ERROR_TPA_INT = Field::bit(11);
    }
    sm_error_reg {
        SM_FSM_ERR_ALARM = Field::bit(3);
    }
    kdfc_err_reg {
        KDFC_KDFC_ECC_SG_ERR = Field::bit(7);
        KDFC_KDFC_ECC_DB_ERR = Field::bit(15);
        KDFC_KDFC_SM_ERR_ALARM = Field::bit(23);
        KDFC_KDFC_MISC_ERR_1 = Field::bit(32);
        KDFC_KDFC_PCIX_ERR = Field::bit(39);
    }
    doorbell_int_status {
        KDFC_ERR_REG_TXDMA_KDFC_INT = Field::bit(3);
    }
    tim_err_reg {
        TIM_VBLS_SG_ERR = Field::bit(0);
        TIM_VBLS_DB_ERR = Field::bit(1);
        TIM_BMAP_PA_SG_ERR = Field::bit(2);
        TIM_BMAP_PA_DB_ERR = Field::bit(3);
        TIM_BMAP_PB_SG_ERR = Field::bit(4);
        TIM_BMAP_PB_DB_ERR = Field::bit(5);
        TIM_BMAP_MSG_SG_ERR = Field::bit(6);
        TIM_BMAP_MSG_DB_ERR = Field::bit(7);
        TIM_BMAP_MEM_CNTRL_SM_ERR = Field::bit(8);
        TIM_BMAP_MSG_MEM_CNTRL_SM_ERR = Field::bit(9);
        TIM_MPIF_PCIWR_ERR = Field::bit(10);
        TIM_ROCRC_BMAP_UPDT_FIFO_ERR = Field::bit(11);
        TIM_CREATE_BMAPMSG_FIFO_ERR = Field::bit(12);
    }
    rtdma_int_status {
        PDA_ALARM_PDA_INT = Field::bit(3);
        PCC_ERROR_PCC_INT = Field::bit(7);
        LSO_ERROR_LSO_INT = Field::bit(11);
        SM_ERROR_SM_INT = Field::bit(15);
    }
    pcc_error_reg {
        PCC_PCC_FRM_BUF_SBE = Field::new(0, 8);
        PCC_PCC_TXDO_SBE = Field::new(8, 8);
        PCC_PCC_FRM_BUF_DBE = Field::new(16, 8);
        PCC_PCC_TXDO_DBE = Field::new(24, 8);
        PCC_PCC_FSM_ERR_ALARM = Field::new(32, 8);
        PCC_PCC_SERR = Field::new(40, 8);
    } {
        pub const fn pcc_frm_buf_sbe(i: u32) -> Field {
            Field::bit(i)
        }
        pub const fn pcc_txdo_sbe(i: u32) -> Field {
            Field::bit(8 + i)
        }
        pub const fn pcc_frm_buf_dbe(i: u32) -> Field {
            Field::bit(16 + i)
        }
        pub const fn pcc_txdo_dbe(i: u32) -> Field {
            Field::bit(24 + i)
        }
        pub const fn pcc_fsm_err_alarm(i: u32) -> Field {
            Field::bit(32 + i)
        }
        pub const fn pcc_serr(i: u32) -> Field {
            Field::bit(40 + i)
        }
    }
    dam_err_reg {
        DAM_RDSB_ECC_SG_ERR = Field::bit(0);
        DAM_WRSB_ECC_SG_ERR = Field::bit(1);
        DAM_HPPEDAT_ECC_SG_ERR = Field::bit(2);
        DAM_LPPEDAT_ECC_SG_ERR = Field::bit(3);
        DAM_WRRESP_ECC_SG_ERR = Field::bit(4);
        DAM_RDSB_ECC_DB_ERR = Field::bit(5);
        DAM_WRSB_ECC_DB_ERR = Field::bit(6);
        DAM_HPPEDAT_ECC_DB_ERR = Field::bit(7);
        DAM_LPPEDAT_ECC_DB_ERR = Field::bit(8);
        DAM_WRRESP_ECC_DB_ERR = Field::bit(9);
        DAM_HPRD_ERR = Field::bit(10);
        DAM_LPRD_0_ERR = Field::bit(11);
        DAM_LPRD_1_ERR = Field::bit(12);
        DAM_HPPEDAT_OVERFLOW_ERR = Field::bit(13);
        DAM_LPPEDAT_OVERFLOW_ERR = Field::bit(14);
        DAM_WRRESP_OVERFLOW_ERR = Field::bit(15);
        DAM_SM_ERR = Field::bit(16);
    }
    fau_ecc_err_reg {
        FAU_PORT0_FAU_MAC2F_N_SG_ERR = Field::bit(0);
        FAU_PORT0_FAU_MAC2F_N_DB_ERR = Field::bit(1);
        FAU_PORT0_FAU_MAC2F_W_SG_ERR = Field::new(2, 2);
        FAU_PORT0_FAU_MAC2F_W_DB_ERR = Field::new(4, 2);
        FAU_PORT1_FAU_MAC2F_N_SG_ERR = Field::bit(6);
        FAU_PORT1_FAU_MAC2F_N_DB_ERR = Field::bit(7);
        FAU_PORT1_FAU_MAC2F_W_SG_ERR = Field::new(8, 2);
        FAU_PORT1_FAU_MAC2F_W_DB_ERR = Field::new(10, 2);
        FAU_PORT2_FAU_MAC2F_N_SG_ERR = Field::bit(12);
        FAU_PORT2_FAU_MAC2F_N_DB_ERR = Field::bit(13);
        FAU_PORT2_FAU_MAC2F_W_SG_ERR = Field::new(14, 2);
        FAU_PORT2_FAU_MAC2F_W_DB_ERR = Field::new(16, 2);
        FAU_FAU_XFMD_INS_SG_ERR = Field::new(18, 2);
        FAU_FAU_XFMD_INS_DB_ERR = Field::new(20, 2);
        FAUJ_FAU_FSM_ERR = Field::bit(31);
    }
    orp_err_reg {
        ORP_FIFO_SG_ERR = Field::bit(0);
        ORP_FIFO_DB_ERR = Field::bit(1);
        ORP_XFMD_FIFO_UFLOW_ERR = Field::bit(2);
        ORP_FRM_FIFO_UFLOW_ERR = Field::bit(3);
        ORP_XFMD_RCV_FSM_ERR = Field::bit(4);
        ORP_OUTREAD_FSM_ERR = Field::bit(5);
        ORP_OUTQEM_FSM_ERR = Field::bit(6);
        ORP_XFMD_RCV_SHADOW_ERR = Field::bit(7);
        ORP_OUTREAD_SHADOW_ERR = Field::bit(8);
        ORP_OUTQEM_SHADOW_ERR = Field::bit(9);
        ORP_OUTFRM_SHADOW_ERR = Field::bit(10);
        ORP_OPTPRS_SHADOW_ERR = Field::bit(11);
    }
    mc_int_status {
        MC_ERR_MC_INT = Field::bit(3);
        GROCRC_ALARM_ROCRC_INT = Field::bit(7);
        FAU_ECC_ERR_FAU_ECC_INT = Field::bit(11);
    }
    mc_err_reg {
        MC_XFMD_MEM_ECC_SG_ERR_A = Field::bit(0);
        MC_XFMD_MEM_ECC_SG_ERR_B = Field::bit(2);
        MC_XFMD_MEM_ECC_DB_ERR_A = Field::bit(4);
        MC_XFMD_MEM_ECC_DB_ERR_B = Field::bit(6);
        MC_G3IF_RD_FIFO_ECC_SG_ERR = Field::bit(8);
        MC_G3IF_RD_FIFO_ECC_DB_ERR = Field::bit(10);
        MC_MIRI_ECC_SG_ERR_0 = Field::bit(12);
        MC_MIRI_ECC_SG_ERR_1 = Field::bit(14);
        MC_MIRI_ECC_DB_ERR_0 = Field::bit(16);
        MC_MIRI_ECC_DB_ERR_1 = Field::bit(18);
        MC_SM_ERR = Field::bit(20);
    }
    grocrc_alarm_reg {
        XFMD_WR_FIFO_ERR = Field::bit(3);
        WDE2MSR_RD_FIFO_ERR = Field::bit(7);
    }
    gssc_err0_reg {
        SSCC_STATE_DB_ERR = Field::new(0, 8);
        SSCC_CM_RESP_DB_ERR = Field::new(8, 4);
        SSCC_SSR_RESP_DB_ERR = Field::new(12, 2);
        SSCC_TSR_RESP_DB_ERR = Field::new(14, 6);
        SSCC_STATE_SG_ERR = Field::new(24, 8);
        SSCC_CM_RESP_SG_ERR = Field::new(32, 4);
        SSCC_SSR_RESP_SG_ERR = Field::new(36, 2);
        SSCC_TSR_RESP_SG_ERR = Field::new(38, 6);
    }
    gssc_err1_reg {
        SSCC_CM_RESP_DB_ERR = Field::bit(0);
        SSCC_SCREQ_ERR = Field::bit(1);
        SSCC_CM_RESP_OFLOW_ERR = Field::bit(2);
        SSCC_CM_RESP_R_WN_ERR = Field::bit(3);
        SSCC_CM_RESP_UFLOW_ERR = Field::bit(4);
        SSCC_CM_REQ_OFLOW_ERR = Field::bit(5);
        SSCC_CM_REQ_UFLOW_ERR = Field::bit(6);
        SSCC_FSM_OFLOW_ERR = Field::bit(7);
        SSCC_FSM_UFLOW_ERR = Field::bit(8);
        SSCC_SSR_REQ_OFLOW_ERR = Field::bit(9);
        SSCC_SSR_REQ_UFLOW_ERR = Field::bit(10);
        SSCC_SSR_RESP_OFLOW_ERR = Field::bit(11);
        SSCC_SSR_RESP_R_WN_ERR = Field::bit(12);
        SSCC_SSR_RESP_UFLOW_ERR = Field::bit(13);
        SSCC_TSR_REQ_OFLOW_ERR = Field::bit(14);
        SSCC_TSR_REQ_UFLOW_ERR = Field::bit(15);
        SSCC_TSR_RESP_OFLOW_ERR = Field::bit(16);
        SSCC_TSR_RESP_R_WN_ERR = Field::bit(17);
        SSCC_TSR_RESP_UFLOW_ERR = Field::bit(18);
        SSCC_SCRESP_ERR = Field::bit(19);
    }
    g3cmct_int_status {
        ERR_G3IF_INT = Field::bit(3);
    }
    g3cmct_err_reg {
        G3IF_SM_ERR = Field::bit(4);
        G3IF_GDDR3_DECC = Field::bit(5);
        G3IF_GDDR3_U_DECC = Field::bit(6);
        G3IF_CTRL_FIFO_DECC = Field::bit(7);
        G3IF_GDDR3_SECC = Field::bit(29);
        G3IF_GDDR3_U_SECC = Field::bit(30);
        G3IF_CTRL_FIFO_SECC = Field::bit(31);
    }
    g3ifcmd_fb_int_status {
        ERR_G3IF_INT = Field::bit(3);
    }
    g3ifcmd_fb_err_reg {
        G3IF_SM_ERR = Field::bit(7);
    }
    g3ifcmd_cmu_int_status {
        ERR_G3IF_INT = Field::bit(3);
    }
    g3ifcmd_cmu_err_reg {
        G3IF_SM_ERR = Field::bit(7);
    }
    g3ifcmd_cml_int_status {
        ERR_G3IF_INT = Field::bit(3);
    }
    g3ifcmd_cml_err_reg {
        G3IF_SM_ERR = Field::bit(7);
    }
    tpa_global_cfg {
        SUPPORT_SNAP_AB_N = Field::bit(7);
        ECC_ENABLE_N = Field::bit(35);
    }
    fau_pa_cfg {
        REPL_L4_COMP_CSUM = Field::bit(3);
        REPL_L3_INCL_CF = Field::bit(7);
        REPL_L3_COMP_CSUM = Field::bit(11);
    }
    xgmac_int_status {
        XMAC_GEN_ERR_XMAC_GEN_INT = Field::bit(3);
        XGXS_GEN_ERR_XGXS_GEN_INT = Field::bit(7);
        ASIC_NTWK_ERR_ASIC_NTWK_INT = Field::bit(11);
    }
    xmac_gen_err_reg {
        XSTATS_RMAC_STATS_TILE0_DB_ERR = Field::new(2, 2);
        XSTATS_RMAC_STATS_TILE0_SG_ERR = Field::new(6, 2);
        XSTATS_RMAC_STATS_TILE1_DB_ERR = Field::new(10, 2);
        XSTATS_RMAC_STATS_TILE1_SG_ERR = Field::new(14, 2);
        XSTATS_RMAC_STATS_TILE2_DB_ERR = Field::new(18, 2);
        XSTATS_RMAC_STATS_TILE2_SG_ERR = Field::new(22, 2);
        XSTATS_RMAC_STATS_TILE3_DB_ERR = Field::new(26, 2);
        XSTATS_RMAC_STATS_TILE3_SG_ERR = Field::new(30, 2);
        XSTATS_RMAC_STATS_TILE4_DB_ERR = Field::new(34, 2);
        XSTATS_RMAC_STATS_TILE4_SG_ERR = Field::new(38, 2);
        XMACJ_XMAC_FSM_ERR = Field::bit(47);
    }
    xgxs_gen_err_reg {
        XGXS_XGXS_FSM_ERR = Field::bit(63);
    }
    asic_ntwk_err_reg {
        XMACJ_NTWK_DOWN = Field::bit(3);
        XMACJ_NTWK_UP = Field::bit(7);
        XMACJ_NTWK_WENT_DOWN = Field::bit(11);
        XMACJ_NTWK_WENT_UP = Field::bit(15);
        XMACJ_NTWK_REAFFIRMED_FAULT = Field::bit(19);
        XMACJ_NTWK_REAFFIRMED_OK = Field::bit(23);
    }
    xgmac_main_cfg_port {
        PORT_EN = Field::bit(3);
    }
    xmac_gen_cfg {
        RATEMGMT_MAC_RATE_SEL = Field::new(2, 2);
        TX_HEAD_DROP_WHEN_FAULT = Field::bit(7);
        FAULT_BEHAVIOUR = Field::bit(27);
        PERIOD_NTWK_UP = Field::new(28, 4);
        PERIOD_NTWK_DOWN = Field::new(32, 4);
    }
    /// Statistics command: `OP` at `LOC_SEL`/`OFFSET_SEL`, `STROBE` until done.
    xmac_stats_sys_cmd {
        OP = Field::new(5, 3);
        STROBE = Field::bit(15);
        LOC_SEL = Field::new(27, 5);
        OFFSET_SEL = Field::new(32, 8);
    }
    xgxs_static_cfg_port {
        IGNORE_MDIO_DTE_PRTAD = Field::bit(51);
        MDIO_DTE_PRTAD = Field::new(59, 5);
    }
    mdio_gen_cfg_port {
        MDC_DIV_VALUE = Field::new(0, 8);
        MDIO_PHY_PRTAD = Field::new(27, 5);
        MDIO_DTE_PRTAD_USE = Field::bit(39);
    }
    /// MDIO management frame. Both strobes are set to start, the hardware clears them.
    mdio_mgr_access_port {
        STROBE_ONE = Field::bit(3);
        OP_TYPE = Field::new(5, 3);
        DEVAD = Field::new(11, 5);
        ADDR = Field::new(16, 16);
        DATA = Field::new(32, 16);
        ST_PATTERN = Field::new(49, 2);
        PREAMBLE = Field::bit(51);
        PRTAD = Field::new(55, 5);
        STROBE_TWO = Field::bit(63);
    }
    xgmac_debounce_port {
        PERIOD_LINK_UP = Field::new(0, 4);
        PERIOD_LINK_DOWN = Field::new(4, 4);
        PERIOD_PORT_UP = Field::new(8, 4);
        PERIOD_PORT_DOWN = Field::new(12, 4);
    }
    rxmac_int_status {
        RXMAC_ECC_ERR_RXMAC_ECC_INT = Field::bit(3);
        RXMAC_VARIOUS_ERR_RXMAC_VARIOUS_INT = Field::bit(7);
    }
    rxmac_ecc_err_reg {
        RMAC_PORT0_RMAC_RTS_PART_SG_ERR = Field::new(0, 4);
        RMAC_PORT0_RMAC_RTS_PART_DB_ERR = Field::new(4, 4);
        RMAC_PORT1_RMAC_RTS_PART_SG_ERR = Field::new(8, 4);
        RMAC_PORT1_RMAC_RTS_PART_DB_ERR = Field::new(12, 4);
        RMAC_PORT2_RMAC_RTS_PART_SG_ERR = Field::new(16, 4);
        RMAC_PORT2_RMAC_RTS_PART_DB_ERR = Field::new(20, 4);
        RTSJ_RMAC_DA_LKP_PRT0_SG_ERR = Field::new(24, 2);
        RTSJ_RMAC_DA_LKP_PRT0_DB_ERR = Field::new(26, 2);
        RTSJ_RMAC_DA_LKP_PRT1_SG_ERR = Field::new(28, 2);
        RTSJ_RMAC_DA_LKP_PRT1_DB_ERR = Field::new(30, 2);
        RTSJ_RMAC_VID_LKP_SG_ERR = Field::bit(32);
        RTSJ_RMAC_VID_LKP_DB_ERR = Field::bit(33);
        RTSJ_RMAC_PN_LKP_PRT0_SG_ERR = Field::bit(34);
        RTSJ_RMAC_PN_LKP_PRT0_DB_ERR = Field::bit(35);
        RTSJ_RMAC_PN_LKP_PRT1_SG_ERR = Field::bit(36);
        RTSJ_RMAC_PN_LKP_PRT1_DB_ERR = Field::bit(37);
        RTSJ_RMAC_PN_LKP_PRT2_SG_ERR = Field::bit(38);
        RTSJ_RMAC_PN_LKP_PRT2_DB_ERR = Field::bit(39);
        RTSJ_RMAC_RTH_MASK_SG_ERR = Field::new(40, 7);
        RTSJ_RMAC_RTH_MASK_DB_ERR = Field::new(47, 7);
        RTSJ_RMAC_RTH_LKP_SG_ERR = Field::new(54, 3);
        RTSJ_RMAC_RTH_LKP_DB_ERR = Field::new(57, 3);
        RTSJ_RMAC_DS_LKP_SG_ERR = Field::bit(60);
        RTSJ_RMAC_DS_LKP_DB_ERR = Field::bit(61);
    }
    rxmac_various_err_reg {
        RMAC_RMAC_PORT0_FSM_ERR = Field::bit(0);
        RMAC_RMAC_PORT1_FSM_ERR = Field::bit(1);
        RMAC_RMAC_PORT2_FSM_ERR = Field::bit(2);
        RMACJ_RMACJ_FSM_ERR = Field::bit(3);
    }
    rxmac_cfg0_port {
        RMAC_EN = Field::bit(3);
        STRIP_FCS = Field::bit(7);
        DISCARD_PFRM = Field::bit(11);
        IGNORE_FCS_ERR = Field::bit(15);
        IGNORE_LONG_ERR = Field::bit(19);
        IGNORE_USIZED_ERR = Field::bit(23);
        IGNORE_LEN_MISMATCH = Field::bit(27);
        MAX_PYLD_LEN = Field::new(50, 14);
    }
    rxmac_cfg2_port {
        PROM_EN = Field::bit(3);
    }
    rxmac_pause_cfg_port {
        GEN_EN = Field::bit(3);
        RCV_EN = Field::bit(7);
        ACCEL_SEND = Field::new(9, 3);
        DUAL_THR = Field::bit(15);
        HIGH_PTIME = Field::new(20, 16);
        IGNORE_PF_FCS_ERR = Field::bit(39);
        IGNORE_PF_LEN_ERR = Field::bit(43);
        LIMITER_EN = Field::bit(47);
        MAX_LIMIT = Field::new(48, 8);
        PERMIT_RATEMGMT_CTRL = Field::bit(59);
    }
    rxmac_link_util_port {
        RMAC_RMAC_UTILIZATION = Field::new(1, 7);
        RMAC_UTIL_CFG = Field::new(8, 4);
        RMAC_RMAC_FRAC_UTIL = Field::new(12, 4);
        RMAC_PKT_WEIGHT = Field::new(16, 4);
        RMAC_RMAC_SCALE_FACTOR = Field::bit(23);
    }
    rxmac_rx_pa_cfg0 {
        IGNORE_FRAME_ERR = Field::bit(3);
        SUPPORT_SNAP_AB_N = Field::bit(7);
        SEARCH_FOR_HAO = Field::bit(18);
        SUPPORT_MOBILE_IPV6_HDRS = Field::bit(19);
        IPV6_STOP_SEARCHING = Field::bit(23);
        NO_PS_IF_UNKNOWN = Field::bit(27);
        SEARCH_FOR_ETYPE = Field::bit(35);
        TOSS_ANY_FRM_IF_L3_CSUM_ERR = Field::bit(39);
        TOSS_OFFLD_FRM_IF_L3_CSUM_ERR = Field::bit(43);
        TOSS_ANY_FRM_IF_L4_CSUM_ERR = Field::bit(47);
        TOSS_OFFLD_FRM_IF_L4_CSUM_ERR = Field::bit(51);
        TOSS_ANY_FRM_IF_L2_ERR = Field::bit(55);
        TOSS_OFFLD_FRM_IF_L2_ERR = Field::bit(59);
    }
    rxmac_rx_pa_cfg1 {
        REPL_IPV4_TCP_INCL_PH = Field::bit(3);
        REPL_IPV6_TCP_INCL_PH = Field::bit(7);
        REPL_IPV4_UDP_INCL_PH = Field::bit(11);
        REPL_IPV6_UDP_INCL_PH = Field::bit(15);
        REPL_L4_INCL_CF = Field::bit(19);
        REPL_STRIP_VLAN_TAG = Field::bit(23);
    }
    /// Receive traffic steering table access.
    rts_mgr_steer_ctrl {
        RMACJ_STATUS = Field::bit(0);
        WE = Field::bit(7);
        DATA_STRUCT_SEL = Field::new(8, 4);
        STROBE = Field::bit(15);
        BEHAV_TBL_SEL = Field::bit(23);
        TABLE_SEL = Field::bit(27);
        OFFSET = Field::new(40, 13);
    } {
        pub const DATA_STRUCT_SEL_DA: u64 = 0;
        pub const DATA_STRUCT_SEL_VID: u64 = 1;
        pub const DATA_STRUCT_SEL_ETYPE: u64 = 2;
        pub const DATA_STRUCT_SEL_PN: u64 = 3;
        pub const DATA_STRUCT_SEL_RANGE_PN: u64 = 4;
        pub const DATA_STRUCT_SEL_RTH_GEN_CFG: u64 = 5;
        pub const DATA_STRUCT_SEL_RTH_SOLO_IT: u64 = 6;
        pub const DATA_STRUCT_SEL_RTH_JHASH_CFG: u64 = 7;
        pub const DATA_STRUCT_SEL_RTH_MASK: u64 = 8;
        pub const DATA_STRUCT_SEL_RTH_KEY: u64 = 9;
        pub const DATA_STRUCT_SEL_QOS: u64 = 10;
        pub const DATA_STRUCT_SEL_DS: u64 = 11;
        pub const DATA_STRUCT_SEL_RTH_MULTI_IT: u64 = 12;
    }
    rts_mgr_steer_data0 {
        DA_MAC_ADDR = Field::new(0, 48);
    }
    rts_mgr_steer_data1 {
        DA_MAC_ADDR_MASK = Field::new(0, 48);
        DA_MAC_ADDR_MODE = Field::new(62, 2);
    }
    rts_mgr_steer_vpath_vector {
        VPATH_VECTOR = Field::new(0, 17);
    }
    ratemgmt_cfg_port {
        MODE = Field::new(2, 2);
        RATE = Field::bit(7);
        FIXED_USE_FSM = Field::bit(11);
        ANTP_USE_FSM = Field::bit(15);
        ANBE_USE_FSM = Field::bit(19);
    }
    tmac_int_status {
        TXMAC_GEN_ERR_TXMAC_GEN_INT = Field::bit(3);
        TXMAC_ECC_ERR_TXMAC_ECC_INT = Field::bit(7);
    }
    txmac_gen_err_reg {
        TMACJ_PERMANENT_STOP = Field::bit(3);
        TMACJ_NO_VALID_VSPORT = Field::bit(7);
    }
    txmac_ecc_err_reg {
        TMACJ_TMAC_TPA2MAC_SG_ERR = Field::bit(0);
        TMACJ_TMAC_TPA2MAC_DB_ERR = Field::bit(1);
        TMACJ_TMAC_TPA2M_SB_SG_ERR = Field::bit(2);
        TMACJ_TMAC_TPA2M_SB_DB_ERR = Field::bit(3);
        TMACJ_TMAC_TPA2M_DA_SG_ERR = Field::bit(4);
        TMACJ_TMAC_TPA2M_DA_DB_ERR = Field::bit(5);
        TMAC_TMAC_PORT0_FSM_ERR = Field::bit(6);
        TMAC_TMAC_PORT1_FSM_ERR = Field::bit(7);
        TMAC_TMAC_PORT2_FSM_ERR = Field::bit(8);
        TMACJ_TMACJ_FSM_ERR = Field::bit(9);
    }
    txmac_gen_cfg1 {
        TX_SWITCH_DISABLE = Field::bit(7);
        LOSSY_SWITCH = Field::bit(11);
        LOSSY_WIRE = Field::bit(15);
        SCALE_TMAC_UTIL = Field::bit(27);
        HOST_APPEND_FCS = Field::bit(31);
        TMAC_PERMA_STOP_EN = Field::bit(35);
        BLOCK_BCAST_TO_WIRE = Field::bit(19);
        BLOCK_BCAST_TO_SWITCH = Field::bit(23);
    }
    txmac_cfg0_port {
        TMAC_EN = Field::bit(3);
        APPEND_PAD = Field::bit(7);
        PAD_BYTE = Field::new(8, 8);
    }
    txmac_link_util_port {
        TMAC_TMAC_UTILIZATION = Field::new(1, 7);
        TMAC_UTIL_CFG = Field::new(8, 4);
        TMAC_TMAC_FRAC_UTIL = Field::new(12, 4);
        TMAC_PKT_WEIGHT = Field::new(16, 4);
        TMAC_TMAC_SCALE_FACTOR = Field::bit(23);
    }
    lag_cfg {
        EN = Field::bit(3);
        MODE = Field::new(6, 2);
        TX_DISCARD_BEHAV = Field::bit(11);
        RX_DISCARD_BEHAV = Field::bit(15);
        PREF_INDIV_PORT_NUM = Field::bit(19);
    }
    lag_sys_cfg {
        MODE_802_3AD = Field::bit(3);
        LEGACY_MODE = Field::bit(7);
        BROADCAST_TO_ALL_PORTS = Field::bit(11);
    }
    lag_sys_id {
        ADDR = Field::new(0, 48);
        USE_PORT_ADDR = Field::bit(51);
        ADDR_SEL = Field::bit(55);
    }
    lag_port_cfg {
        EN = Field::bit(3);
        DISCARD_SLOW_PROTO = Field::bit(7);
        HOST_CHOSEN_AGGR = Field::bit(11);
        DISCARD_UNKNOWN_SLOW_PROTO = Field::bit(15);
    }
    lag_port_actor_admin_state {
        LACP_ACTIVITY = Field::bit(3);
        LACP_TIMEOUT = Field::bit(7);
        AGGREGATION = Field::bit(11);
        SYNCHRONIZATION = Field::bit(15);
        COLLECTING = Field::bit(19);
        DISTRIBUTING = Field::bit(23);
        DEFAULTED = Field::bit(27);
        EXPIRED = Field::bit(31);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{mbit, vbit};
    use crate::regs::REGISTERS;

    #[test]
    fn literal_bit_positions() {
        assert_eq!(rxmac_cfg0_port::RMAC_EN.mask(), 1 << 60);
        assert_eq!(rxmac_cfg0_port::MAX_PYLD_LEN.encode(9600), 9600);
        assert_eq!(xmac_stats_sys_cmd::OP.encode(5), 5 << 56);
        assert_eq!(xmac_stats_sys_cmd::STROBE.mask(), mbit(15));
        assert_eq!(xmac_stats_sys_cmd::LOC_SEL.encode(17), vbit(17, 27, 5));
        assert_eq!(mdio_mgr_access_port::STROBE_TWO.mask(), 1);
        assert_eq!(mrpcim_general_cfg2::MRPCIM_STATS_MAP_TO_VPATH.mask(), 0x1f << 32);
        assert_eq!(rxmac_authorize_all_addr::VP.mask(), vbit(u64::MAX, 0, 17));
        assert_eq!(rxdrm_sm_err_reg::prc_vp(16).mask(), mbit(16));
        assert_eq!(pcc_error_reg::pcc_serr(7).mask(), mbit(47));
        assert_eq!(mrpcim_debug_stats0::INI_RD_DROP.mask(), 0xffff_ffff);
        assert_eq!(dbg_stat_rx_any_frms::PORT1.mask(), 0xff << 48);
        assert_eq!(orp_bs_events::ORP_BS_EVENTS.mask(), u64::MAX);
    }

    #[test]
    fn triplets_share_a_layout() {
        assert_eq!(lookup("rc_alarm_mask"), Some(rc_alarm_reg::FIELDS));
        assert_eq!(lookup("rc_alarm_alarm"), Some(rc_alarm_reg::FIELDS));
        assert_eq!(lookup("gssc_err1_mask"), Some(gssc_err1_reg::FIELDS));
        assert_eq!(lookup("xgmac_int_mask"), Some(xgmac_int_status::FIELDS));
        assert_eq!(lookup("lag_timer_cfg_1"), None);
        assert_eq!(lookup("bogus_mask"), None);
    }

    #[test]
    fn every_table_belongs_to_a_register() {
        let known = REGISTERS.iter().filter(|info| lookup(info.name).is_some()).count();
        assert!(known > 100);
        for info in REGISTERS {
            let Some(fields) = lookup(info.name) else {
                continue;
            };
            let mut used = 0;
            for (name, field) in fields {
                assert_eq!(used & field.mask(), 0, "{}::{} overlaps", info.name, name);
                used |= field.mask();
            }
            assert_eq!(used, all_bits(fields));
        }
    }
}
