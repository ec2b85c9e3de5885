//! MRPCIM alarm tree.
//!
//! Leaf alarm registers feed a summary `_int_status` register per group, and the
//! groups feed `mrpcim_general_int_status`. Each leaf has a `_mask` register next to
//! it, each summary an `_int_mask`.

use super::Mrpcim;
use crate::access::{reg_offset, RegisterAccess};
use crate::bits::bval32;
use crate::error::Result;
use crate::regs::fields::{self, all_bits, mrpcim_general_int_status};

/// A leaf alarm register and the bits `intr_enable` unmasks in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlarmLeaf {
    pub name: &'static str,
    pub reg: usize,
    pub mask: usize,
    /// 0 for leaves left to the firmware. `alarm_process` still sweeps them, but
    /// `intr_enable` and `intr_disable` never touch their registers.
    pub unmask: u64,
}

impl AlarmLeaf {
    pub fn is_managed(&self) -> bool {
        self.unmask != 0
    }
}

/// A summary register, the leaves behind it and its bit in the general status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlarmGroup {
    pub name: &'static str,
    pub status: usize,
    pub mask: usize,
    pub summary: u64,
    pub general: u64,
    pub leaves: &'static [AlarmLeaf],
}

/// A pending alarm, as read and cleared by [`Mrpcim::alarm_process`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alarm {
    pub register: &'static str,
    pub bits: u64,
}

/// Union of the listed fields of `reg`, or all of its fields.
macro_rules! bits {
    ($reg:ident) => {
        all_bits(fields::$reg::FIELDS)
    };
    ($reg:ident: $($field:ident),+ $(,)?) => {
        0 $(| fields::$reg::$field.mask())+
    };
}

macro_rules! leaf {
    ($reg:ident, $mask:ident, $unmask:expr) => {
        AlarmLeaf {
            name: stringify!($reg),
            reg: reg_offset!($reg),
            mask: reg_offset!($mask),
            unmask: $unmask,
        }
    };
    ($reg:ident[$idx:literal], $mask:ident, $unmask:expr) => {
        AlarmLeaf {
            name: concat!(stringify!($reg), "[", $idx, "]"),
            reg: reg_offset!($reg[$idx]),
            mask: reg_offset!($mask[$idx]),
            unmask: $unmask,
        }
    };
}

macro_rules! group {
    ($status:ident, $mask:ident, $general:ident, $summary:expr, [$($leaf:expr),* $(,)?]) => {
        AlarmGroup {
            name: stringify!($status),
            status: reg_offset!($status),
            mask: reg_offset!($mask),
            summary: $summary,
            general: mrpcim_general_int_status::$general.mask(),
            leaves: &[$($leaf),*],
        }
    };
}

const GSSC_ERR0: u64 = bits!(gssc_err0_reg:
    SSCC_STATE_DB_ERR, SSCC_CM_RESP_DB_ERR, SSCC_SSR_RESP_DB_ERR, SSCC_TSR_RESP_DB_ERR);

const G3CMCT_ERR: u64 = bits!(g3cmct_err_reg:
    G3IF_SM_ERR, G3IF_GDDR3_DECC, G3IF_GDDR3_U_DECC, G3IF_CTRL_FIFO_DECC);

const G3FBCT_ERR: u64 = bits!(g3fbct_err_reg:
    G3IF_SM_ERR, G3IF_GDDR3_DECC, G3IF_GDDR3_U_DECC, G3IF_CTRL_FIFO_DECC);

// Only six of the seven RTH mask bits are unmasked.
const RXMAC_ECC_ERR: u64 = bits!(rxmac_ecc_err_reg:
    RMAC_PORT0_RMAC_RTS_PART_DB_ERR, RMAC_PORT1_RMAC_RTS_PART_DB_ERR,
    RMAC_PORT2_RMAC_RTS_PART_DB_ERR, RTSJ_RMAC_DA_LKP_PRT0_DB_ERR,
    RTSJ_RMAC_DA_LKP_PRT1_DB_ERR, RTSJ_RMAC_VID_LKP_DB_ERR,
    RTSJ_RMAC_PN_LKP_PRT0_DB_ERR, RTSJ_RMAC_PN_LKP_PRT1_DB_ERR,
    RTSJ_RMAC_PN_LKP_PRT2_DB_ERR, RTSJ_RMAC_RTH_LKP_DB_ERR, RTSJ_RMAC_DS_LKP_DB_ERR)
    | fields::rxmac_ecc_err_reg::RTSJ_RMAC_RTH_MASK_DB_ERR.encode(0x3f);

pub static ALARM_GROUPS: &[AlarmGroup] = &[
    group!(mrpcim_ppif_int_status, mrpcim_ppif_int_mask, PIC_INT, bits!(mrpcim_ppif_int_status), [
        leaf!(ini_errors_reg, ini_errors_mask, bits!(ini_errors_reg)),
        leaf!(dma_errors_reg, dma_errors_mask, bits!(dma_errors_reg)),
        leaf!(tgt_errors_reg, tgt_errors_mask, bits!(tgt_errors_reg)),
        leaf!(config_errors_reg, config_errors_mask, bits!(config_errors_reg)),
        leaf!(crdt_errors_reg, crdt_errors_mask, bits!(crdt_errors_reg)),
        leaf!(mrpcim_general_errors_reg, mrpcim_general_errors_mask, bits!(mrpcim_general_errors_reg)),
        leaf!(pll_errors_reg, pll_errors_mask, bits!(pll_errors_reg)),
    ]),
    // Single-bit ECC corrections stay with the firmware.
    group!(pcipif_int_status, pcipif_int_mask, PCI_INT,
        bits!(pcipif_int_status: DBECC_ERR_DBECC_ERR_INT, GENERAL_ERR_GENERAL_ERR_INT), [
        leaf!(dbecc_err_reg, dbecc_err_mask, bits!(dbecc_err_reg)),
        leaf!(sbecc_err_reg, sbecc_err_mask, 0),
        leaf!(general_err_reg, general_err_mask, bits!(general_err_reg: PCI_LINK_RST_FSM_ERR)),
    ]),
    group!(rtdma_int_status, rtdma_int_mask, RTDMA_INT, bits!(rtdma_int_status), [
        leaf!(pda_alarm_reg, pda_alarm_mask, bits!(pda_alarm_reg: PDA_SM_ERR)),
        leaf!(pcc_error_reg, pcc_error_mask, bits!(pcc_error_reg:
            PCC_PCC_FRM_BUF_DBE, PCC_PCC_TXDO_DBE, PCC_PCC_FSM_ERR_ALARM, PCC_PCC_SERR)),
        leaf!(lso_error_reg, lso_error_mask, bits!(lso_error_reg: PCC_LSO_FSM_ERR_ALARM)),
        leaf!(sm_error_reg, sm_error_mask, bits!(sm_error_reg)),
    ]),
    // rqa_err has no summary bit of its own and is swept with the rest of wrdma.
    group!(wrdma_int_status, wrdma_int_mask, WRDMA_INT, bits!(wrdma_int_status:
        RC_ALARM_RC_INT, RXDRM_SM_ERR_RXDRM_INT, RXDCM_SM_ERR_RXDCM_SM_INT,
        RXDWM_SM_ERR_RXDWM_INT, RDA_ERR_RDA_INT, RDA_ECC_DB_RDA_ECC_DB_INT,
        FRF_ALARM_FRF_INT, ROCRC_ALARM_ROCRC_INT, WDE0_ALARM_WDE0_INT,
        WDE1_ALARM_WDE1_INT, WDE2_ALARM_WDE2_INT, WDE3_ALARM_WDE3_INT), [
        leaf!(rc_alarm_reg, rc_alarm_mask, bits!(rc_alarm_reg:
            FTC_SM_ERR, FTC_SM_PHASE_ERR, BTDWM_SM_ERR, BTC_SM_ERR, BTDCM_SM_ERR,
            BTDRM_SM_ERR, RMM_RXD_RC_ECC_DB_ERR, RHS_RXD_RHS_ECC_DB_ERR, RMM_SM_ERR,
            BTC_VPATH_MISMATCH_ERR)),
        leaf!(rxdrm_sm_err_reg, rxdrm_sm_err_mask, bits!(rxdrm_sm_err_reg)),
        leaf!(rxdcm_sm_err_reg, rxdcm_sm_err_mask, bits!(rxdcm_sm_err_reg)),
        leaf!(rxdwm_sm_err_reg, rxdwm_sm_err_mask, bits!(rxdwm_sm_err_reg)),
        leaf!(rda_err_reg, rda_err_mask, bits!(rda_err_reg:
            RDA_SM0_ERR_ALARM, RDA_RXD_ECC_DB_ERR, RDA_FRM_ECC_DB_ERR,
            RDA_UQM_ECC_DB_ERR, RDA_IMM_ECC_DB_ERR, RDA_TIM_ECC_DB_ERR)),
        leaf!(rda_ecc_db_reg, rda_ecc_db_mask, bits!(rda_ecc_db_reg)),
        leaf!(rda_ecc_sg_reg, rda_ecc_sg_mask, 0),
        leaf!(rqa_err_reg, rqa_err_mask, bits!(rqa_err_reg)),
        leaf!(frf_alarm_reg, frf_alarm_mask, bits!(frf_alarm_reg)),
        leaf!(rocrc_alarm_reg, rocrc_alarm_mask, bits!(rocrc_alarm_reg:
            QCQ_QCC_BYP_ECC_DB, NOA_NMA_SM_ERR, NOA_IMMM_ECC_DB, UDQ_UMQM_ECC_DB,
            NOA_RCBM_ECC_DB, NOA_WCT_CMD_FIFO_ERR)),
        leaf!(wde0_alarm_reg, wde0_alarm_mask, bits!(wde0_alarm_reg)),
        leaf!(wde1_alarm_reg, wde1_alarm_mask, bits!(wde1_alarm_reg)),
        leaf!(wde2_alarm_reg, wde2_alarm_mask, bits!(wde2_alarm_reg)),
        leaf!(wde3_alarm_reg, wde3_alarm_mask, bits!(wde3_alarm_reg)),
    ]),
    group!(g3cmct_int_status, g3cmct_int_mask, G3CMCT_INT, bits!(g3cmct_int_status), [
        leaf!(g3cmct_err_reg, g3cmct_err_mask, G3CMCT_ERR),
    ]),
    group!(gcmg1_int_status, gcmg1_int_mask, GCMG1_INT, bits!(gcmg1_int_status), [
        leaf!(gsscc_err_reg, gsscc_err_mask, bits!(gsscc_err_reg)),
        leaf!(gssc_err0_reg[0], gssc_err0_mask, GSSC_ERR0),
        leaf!(gssc_err1_reg[0], gssc_err1_mask, bits!(gssc_err1_reg)),
        leaf!(gssc_err0_reg[1], gssc_err0_mask, GSSC_ERR0),
        leaf!(gssc_err1_reg[1], gssc_err1_mask, bits!(gssc_err1_reg)),
        leaf!(gssc_err0_reg[2], gssc_err0_mask, GSSC_ERR0),
        leaf!(gssc_err1_reg[2], gssc_err1_mask, bits!(gssc_err1_reg)),
    ]),
    group!(gcmg2_int_status, gcmg2_int_mask, GCMG2_INT, bits!(gcmg2_int_status), [
        leaf!(gxtmc_err_reg, gxtmc_err_mask, bits!(gxtmc_err_reg)),
        leaf!(gcp_err_reg, gcp_err_mask, bits!(gcp_err_reg)),
        leaf!(cmc_err_reg, cmc_err_mask, bits!(cmc_err_reg)),
    ]),
    group!(g3ifcmd_cml_int_status, g3ifcmd_cml_int_mask, G3CMIFL_INT, bits!(g3ifcmd_cml_int_status), [
        leaf!(g3ifcmd_cml_err_reg, g3ifcmd_cml_err_mask, bits!(g3ifcmd_cml_err_reg)),
    ]),
    group!(g3ifcmd_cmu_int_status, g3ifcmd_cmu_int_mask, G3CMIFU_INT, bits!(g3ifcmd_cmu_int_status), [
        leaf!(g3ifcmd_cmu_err_reg, g3ifcmd_cmu_err_mask, bits!(g3ifcmd_cmu_err_reg)),
    ]),
    group!(pcmg1_int_status, pcmg1_int_mask, PCMG1_INT, bits!(pcmg1_int_status), [
        leaf!(psscc_err_reg, psscc_err_mask, bits!(psscc_err_reg)),
    ]),
    group!(pcmg2_int_status, pcmg2_int_mask, PCMG2_INT, bits!(pcmg2_int_status), [
        leaf!(pxtmc_err_reg, pxtmc_err_mask, bits!(pxtmc_err_reg)),
        leaf!(cp_exc_reg, cp_exc_mask, bits!(cp_exc_reg: CP_CP_CAUSE_CRIT_INT, CP_CP_SERR)),
        leaf!(cp_err_reg, cp_err_mask, bits!(cp_err_reg)),
    ]),
    group!(pcmg3_int_status, pcmg3_int_mask, PCMG3_INT, bits!(pcmg3_int_status), [
        leaf!(dam_err_reg, dam_err_mask, bits!(dam_err_reg:
            DAM_RDSB_ECC_DB_ERR, DAM_WRSB_ECC_DB_ERR, DAM_HPPEDAT_ECC_DB_ERR,
            DAM_LPPEDAT_ECC_DB_ERR, DAM_WRRESP_ECC_DB_ERR, DAM_HPRD_ERR, DAM_LPRD_0_ERR,
            DAM_LPRD_1_ERR, DAM_HPPEDAT_OVERFLOW_ERR, DAM_LPPEDAT_OVERFLOW_ERR,
            DAM_WRRESP_OVERFLOW_ERR, DAM_SM_ERR)),
    ]),
    group!(xgmac_int_status, xgmac_int_mask, XMAC_INT, bits!(xgmac_int_status), [
        leaf!(xmac_gen_err_reg, xmac_gen_err_mask, bits!(xmac_gen_err_reg:
            XSTATS_RMAC_STATS_TILE0_DB_ERR, XSTATS_RMAC_STATS_TILE1_DB_ERR,
            XSTATS_RMAC_STATS_TILE2_DB_ERR, XSTATS_RMAC_STATS_TILE3_DB_ERR,
            XSTATS_RMAC_STATS_TILE4_DB_ERR, XMACJ_XMAC_FSM_ERR)),
        leaf!(xgxs_gen_err_reg, xgxs_gen_err_mask, bits!(xgxs_gen_err_reg)),
        leaf!(asic_ntwk_err_reg, asic_ntwk_err_mask, bits!(asic_ntwk_err_reg)),
    ]),
    group!(rxmac_int_status, rxmac_int_mask, RXMAC_INT, bits!(rxmac_int_status), [
        leaf!(rxmac_ecc_err_reg, rxmac_ecc_err_mask, RXMAC_ECC_ERR),
        leaf!(rxmac_various_err_reg, rxmac_various_err_mask, bits!(rxmac_various_err_reg)),
    ]),
    group!(tmac_int_status, tmac_int_mask, TMAC_INT, bits!(tmac_int_status), [
        leaf!(txmac_gen_err_reg, txmac_gen_err_mask, bits!(txmac_gen_err_reg: TMACJ_PERMANENT_STOP)),
        leaf!(txmac_ecc_err_reg, txmac_ecc_err_mask, bits!(txmac_ecc_err_reg:
            TMACJ_TMAC_TPA2MAC_DB_ERR, TMACJ_TMAC_TPA2M_SB_DB_ERR,
            TMACJ_TMAC_TPA2M_DA_DB_ERR, TMAC_TMAC_PORT0_FSM_ERR, TMAC_TMAC_PORT1_FSM_ERR,
            TMAC_TMAC_PORT2_FSM_ERR, TMACJ_TMACJ_FSM_ERR)),
    ]),
    group!(g3ifcmd_fb_int_status, g3ifcmd_fb_int_mask, G3FBIF_INT, bits!(g3ifcmd_fb_int_status), [
        leaf!(g3ifcmd_fb_err_reg, g3ifcmd_fb_err_mask, bits!(g3ifcmd_fb_err_reg)),
    ]),
    group!(mc_int_status, mc_int_mask, FBMC_INT, bits!(mc_int_status), [
        leaf!(mc_err_reg, mc_err_mask, bits!(mc_err_reg:
            MC_XFMD_MEM_ECC_DB_ERR_A, MC_XFMD_MEM_ECC_DB_ERR_B, MC_G3IF_RD_FIFO_ECC_DB_ERR,
            MC_MIRI_ECC_DB_ERR_0, MC_MIRI_ECC_DB_ERR_1, MC_SM_ERR)),
        leaf!(grocrc_alarm_reg, grocrc_alarm_mask, bits!(grocrc_alarm_reg)),
        leaf!(fau_ecc_err_reg, fau_ecc_err_mask, bits!(fau_ecc_err_reg:
            FAU_PORT0_FAU_MAC2F_N_DB_ERR, FAU_PORT0_FAU_MAC2F_W_DB_ERR,
            FAU_PORT1_FAU_MAC2F_N_DB_ERR, FAU_PORT1_FAU_MAC2F_W_DB_ERR,
            FAU_PORT2_FAU_MAC2F_N_DB_ERR, FAU_PORT2_FAU_MAC2F_W_DB_ERR,
            FAU_FAU_XFMD_INS_DB_ERR, FAUJ_FAU_FSM_ERR)),
    ]),
    group!(g3fbct_int_status, g3fbct_int_mask, G3FBCT_INT, bits!(g3fbct_int_status), [
        leaf!(g3fbct_err_reg, g3fbct_err_mask, G3FBCT_ERR),
    ]),
    group!(tpa_int_status, tpa_int_mask, TPA_INT, bits!(tpa_int_status), [
        leaf!(orp_err_reg, orp_err_mask,
            bits!(orp_err_reg) & !fields::orp_err_reg::ORP_FIFO_SG_ERR.mask()),
        leaf!(ptm_alarm_reg, ptm_alarm_mask, bits!(ptm_alarm_reg:
            PTM_RDCTRL_SYNC_ERR, PTM_RDCTRL_FIFO_ERR, XFMD_RD_FIFO_ERR,
            WDE2MSR_WR_FIFO_ERR, PTM_FRMM_ECC_DB_ERR)),
        leaf!(tpa_error_reg, tpa_error_mask, bits!(tpa_error_reg:
            TPA_FSM_ERR_ALARM, TPA_TPA_DA_LKUP_PRT0_DB_ERR)),
    ]),
    group!(doorbell_int_status, doorbell_int_mask, DRBELL_INT, bits!(doorbell_int_status), [
        leaf!(kdfc_err_reg, kdfc_err_mask, bits!(kdfc_err_reg:
            KDFC_KDFC_ECC_DB_ERR, KDFC_KDFC_SM_ERR_ALARM)),
    ]),
    group!(msg_int_status, msg_int_mask, MSG_INT, bits!(msg_int_status), [
        leaf!(tim_err_reg, tim_err_mask, bits!(tim_err_reg:
            TIM_VBLS_DB_ERR, TIM_BMAP_PA_DB_ERR, TIM_BMAP_PB_DB_ERR, TIM_BMAP_MSG_DB_ERR,
            TIM_BMAP_MEM_CNTRL_SM_ERR, TIM_BMAP_MSG_MEM_CNTRL_SM_ERR, TIM_MPIF_PCIWR_ERR,
            TIM_ROCRC_BMAP_UPDT_FIFO_ERR, TIM_CREATE_BMAPMSG_FIFO_ERR)),
        leaf!(msg_exc_reg, msg_exc_mask, bits!(msg_exc_reg:
            MP_MXP_CAUSE_CRIT_INT, UP_UXP_CAUSE_CRIT_INT, MP_MXP_SERR, UP_UXP_SERR)),
        leaf!(msg_err_reg, msg_err_mask, bits!(msg_err_reg)),
        leaf!(msg_err2_reg, msg_err2_mask, bits!(msg_err2_reg)),
        leaf!(msg_err3_reg, msg_err3_mask, bits!(msg_err3_reg)),
    ]),
];

/// General status bits that have a group behind them.
fn general_bits() -> u64 {
    ALARM_GROUPS.iter().fold(0, |bits, group| bits | group.general)
}

impl<R: RegisterAccess> Mrpcim<R> {
    /// Clears every latched alarm, then unmasks the leaves, the summaries and the
    /// general interrupt.
    pub fn intr_enable(&mut self) -> Result<()> {
        self.require_mrpcim()?;

        for group in ALARM_GROUPS {
            for leaf in group.leaves.iter().filter(|leaf| leaf.is_managed()) {
                self.regs.write64(leaf.reg, !0);
            }
            self.regs.write64(group.status, !0);
        }
        self.regs.write64(reg_offset!(mrpcim_general_int_status), !0);

        for group in ALARM_GROUPS {
            for leaf in group.leaves.iter().filter(|leaf| leaf.is_managed()) {
                self.regs.write64(leaf.mask, !leaf.unmask);
            }
            self.regs.write64(group.mask, !group.summary);
        }
        self.regs.write32_upper(
            reg_offset!(mrpcim_general_int_mask),
            bval32(!general_bits(), 0),
        );

        log::debug!("vxge: mrpcim alarms unmasked");
        Ok(())
    }

    /// Masks every alarm this driver unmasks.
    pub fn intr_disable(&mut self) -> Result<()> {
        self.require_mrpcim()?;

        for group in ALARM_GROUPS {
            for leaf in group.leaves.iter().filter(|leaf| leaf.is_managed()) {
                self.regs.write64(leaf.mask, !0);
            }
            self.regs.write64(group.mask, !0);
        }
        self.regs
            .write32_upper(reg_offset!(mrpcim_general_int_mask), !0);

        log::debug!("vxge: mrpcim alarms masked");
        Ok(())
    }

    /// Reads and clears the pending alarms of every group flagged in
    /// `mrpcim_general_int_status`.
    pub fn alarm_process(&mut self) -> Result<Vec<Alarm>> {
        self.require_mrpcim()?;

        let general = self.regs.read64(reg_offset!(mrpcim_general_int_status));
        let mut alarms = Vec::new();
        for group in ALARM_GROUPS {
            if general & group.general == 0 {
                continue;
            }
            for leaf in group.leaves {
                let bits = self.regs.read64(leaf.reg);
                if bits == 0 {
                    continue;
                }
                self.regs.write64(leaf.reg, bits);
                log::warn!("vxge: alarm {} = {:#018x}", leaf.name, bits);
                alarms.push(Alarm {
                    register: leaf.name,
                    bits,
                });
            }

            let status = self.regs.read64(group.status);
            if status != 0 {
                self.regs.write64(group.status, status);
            }
        }

        let handled = general & general_bits();
        if handled != 0 {
            self.regs
                .write64(reg_offset!(mrpcim_general_int_status), handled);
        }
        Ok(alarms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::mbit;
    use crate::error::MrpcimError;
    use crate::mrpcim::tests::{device, info};
    use crate::mrpcim::{AccessRights, DeviceInfo};
    use crate::regs::fields::asic_ntwk_err_reg;
    use crate::regs::RegisterInfo;
    use crate::testing::FakeRegs;

    fn name_at(offset: usize) -> &'static str {
        RegisterInfo::at(offset).unwrap().0.name
    }

    #[test]
    fn groups_point_at_their_registers() {
        let mut seen = std::collections::HashSet::new();
        for group in ALARM_GROUPS {
            assert!(name_at(group.status).ends_with("_int_status"), "{}", group.name);
            assert!(name_at(group.mask).ends_with("_int_mask"), "{}", group.name);
            assert_eq!(group.general.count_ones(), 1);
            for leaf in group.leaves {
                assert!(name_at(leaf.reg).ends_with("_reg"), "{}", leaf.name);
                assert!(name_at(leaf.mask).ends_with("_mask"), "{}", leaf.name);
                assert_eq!(leaf.unmask & !all_bits(lookup(leaf.name)), 0, "{}", leaf.name);
                assert!(seen.insert(leaf.reg), "{} listed twice", leaf.name);
            }
        }

        let swept: Vec<_> = ALARM_GROUPS
            .iter()
            .flat_map(|group| group.leaves)
            .filter(|leaf| !leaf.is_managed())
            .map(|leaf| leaf.name)
            .collect();
        assert_eq!(swept, ["sbecc_err_reg", "rda_ecc_sg_reg"]);

        let gcmg1 = ALARM_GROUPS
            .iter()
            .find(|group| group.name == "gcmg1_int_status")
            .unwrap();
        assert_eq!(gcmg1.leaves.len(), 7);
        assert_eq!(gcmg1.leaves[6].name, "gssc_err1_reg[2]");
        assert_eq!(gcmg1.leaves[6].reg, reg_offset!(gssc_err1_reg) + 16);
        assert_eq!(gcmg1.leaves[6].mask, reg_offset!(gssc_err1_mask) + 16);
    }

    fn lookup(name: &str) -> &'static [(&'static str, crate::bits::Field)] {
        let name = name.split('[').next().unwrap();
        fields::lookup(name).unwrap()
    }

    #[test]
    fn enable_clears_then_unmasks() {
        let mut mrpcim = device();
        mrpcim.regs_mut().clear_log();
        mrpcim.intr_enable().unwrap();

        let regs = mrpcim.regs();
        assert_eq!(regs.writes_to(reg_offset!(tgt_errors_reg)), vec![!0]);
        assert_eq!(regs.writes_to(reg_offset!(msg_int_status)), vec![!0]);
        assert_eq!(
            regs.get(reg_offset!(asic_ntwk_err_mask)),
            !(mbit(3) | mbit(7) | mbit(11) | mbit(15) | mbit(19) | mbit(23))
        );
        assert_eq!(regs.get(reg_offset!(doorbell_int_mask)), !mbit(3));

        let general = regs.get(reg_offset!(mrpcim_general_int_mask));
        assert!(!mrpcim_general_int_status::PIC_INT.is_set(general));
        assert!(!mrpcim_general_int_status::MSG_INT.is_set(general));
        assert!(mrpcim_general_int_status::ONE_INT.is_set(general));
        assert!(mrpcim_general_int_status::GCMG3_INT.is_set(general));
        assert_eq!(general & 0xffff_ffff, 0);
    }

    #[test]
    fn enable_unmasks_only_the_driver_handled_bits() {
        let mut mrpcim = device();
        mrpcim.intr_enable().unwrap();
        let regs = mrpcim.regs();

        assert_eq!(regs.get(reg_offset!(dbecc_err_mask)), !0xfc00_0000_0000_0000);
        assert_eq!(regs.get(reg_offset!(general_err_mask)), !mbit(11));
        assert_eq!(regs.get(reg_offset!(pcipif_int_mask)), !(mbit(3) | mbit(11)));
        assert_eq!(regs.get(reg_offset!(pda_alarm_mask)), !mbit(1));
        assert_eq!(regs.get(reg_offset!(txmac_gen_err_mask)), !mbit(3));
        assert_eq!(regs.get(reg_offset!(kdfc_err_mask)), !(mbit(15) | mbit(23)));
        assert_eq!(regs.get(reg_offset!(orp_err_mask)), mbit(0) | !(0xfff << 52));

        let wrdma = regs.get(reg_offset!(wrdma_int_mask));
        assert_ne!(wrdma & mbit(27), 0);
        assert_eq!(wrdma & (mbit(23) | mbit(31)), 0);

        // Bits 47..=53 hold the RTH mask errors, the first stays masked.
        let rxmac = regs.get(reg_offset!(rxmac_ecc_err_mask));
        assert_ne!(rxmac & mbit(47), 0);
        assert_eq!(rxmac & (mbit(48) | mbit(53)), 0);
        assert_ne!(rxmac & mbit(40), 0);

        let gssc = regs.get(reg_offset!(gssc_err0_mask) + 8);
        assert_eq!(gssc, !(0xfffff << 44));
    }

    #[test]
    fn single_bit_ecc_leaves_are_left_alone() {
        let mut mrpcim = device();
        mrpcim.regs_mut().clear_log();
        mrpcim.intr_enable().unwrap();
        mrpcim.intr_disable().unwrap();

        let regs = mrpcim.regs();
        for offset in [
            reg_offset!(sbecc_err_reg),
            reg_offset!(sbecc_err_mask),
            reg_offset!(rda_ecc_sg_reg),
            reg_offset!(rda_ecc_sg_mask),
        ] {
            assert!(!regs.written(offset), "{}", name_at(offset));
        }

        // They are still reported when their group fires.
        let mut mrpcim = device();
        let regs = mrpcim.regs_mut();
        regs.set(
            reg_offset!(mrpcim_general_int_status),
            mrpcim_general_int_status::WRDMA_INT.mask(),
        );
        regs.set(reg_offset!(rda_ecc_sg_reg), mbit(4));
        let alarms = mrpcim.alarm_process().unwrap();
        assert_eq!(
            alarms,
            vec![Alarm {
                register: "rda_ecc_sg_reg",
                bits: mbit(4),
            }]
        );
    }

    #[test]
    fn disable_masks_everything() {
        let mut mrpcim = device();
        mrpcim.intr_enable().unwrap();
        mrpcim.intr_disable().unwrap();

        let regs = mrpcim.regs();
        for group in ALARM_GROUPS {
            assert_eq!(regs.get(group.mask), !0);
            for leaf in group.leaves.iter().filter(|leaf| leaf.is_managed()) {
                assert_eq!(regs.get(leaf.mask), !0);
            }
        }
        assert_eq!(
            regs.get(reg_offset!(mrpcim_general_int_mask)) >> 32,
            0xffff_ffff
        );
    }

    #[test]
    fn process_reports_and_clears_flagged_groups() {
        let mut mrpcim = device();
        let general = mrpcim_general_int_status::PCI_INT.mask()
            | mrpcim_general_int_status::XMAC_INT.mask()
            | mrpcim_general_int_status::ONE_INT.mask();
        let down = asic_ntwk_err_reg::XMACJ_NTWK_DOWN.mask();
        let regs = mrpcim.regs_mut();
        regs.set(reg_offset!(mrpcim_general_int_status), general);
        regs.set(reg_offset!(dbecc_err_reg), mbit(2));
        regs.set(reg_offset!(asic_ntwk_err_reg), down);
        regs.set(reg_offset!(xgmac_int_status), mbit(11));
        // Not flagged in the general status.
        regs.set(reg_offset!(tgt_errors_reg), mbit(0));
        regs.clear_log();

        let alarms = mrpcim.alarm_process().unwrap();
        assert_eq!(
            alarms,
            vec![
                Alarm {
                    register: "dbecc_err_reg",
                    bits: mbit(2),
                },
                Alarm {
                    register: "asic_ntwk_err_reg",
                    bits: down,
                },
            ]
        );

        let regs = mrpcim.regs();
        assert_eq!(regs.writes_to(reg_offset!(dbecc_err_reg)), vec![mbit(2)]);
        assert_eq!(regs.writes_to(reg_offset!(xgmac_int_status)), vec![mbit(11)]);
        assert!(!regs.written(reg_offset!(tgt_errors_reg)));
        assert!(!regs.written(reg_offset!(pcipif_int_status)));
        assert_eq!(
            regs.writes_to(reg_offset!(mrpcim_general_int_status)),
            vec![general & !mrpcim_general_int_status::ONE_INT.mask()]
        );
    }

    #[test]
    fn quiet_device_reports_nothing() {
        let mut mrpcim = device();
        mrpcim.regs_mut().clear_log();
        assert!(mrpcim.alarm_process().unwrap().is_empty());
        assert_eq!(mrpcim.regs().write_count(), 0);
    }

    #[test]
    fn needs_mrpcim_rights() {
        let info = DeviceInfo {
            access_rights: AccessRights::SRPCIM,
            ..info()
        };
        let mut mrpcim = Mrpcim::attach(FakeRegs::new(), info);
        assert!(matches!(mrpcim.intr_enable(), Err(MrpcimError::PrivilegedOperation)));
        assert!(matches!(mrpcim.intr_disable(), Err(MrpcimError::PrivilegedOperation)));
        assert!(matches!(mrpcim.alarm_process(), Err(MrpcimError::PrivilegedOperation)));
        assert_eq!(mrpcim.regs().write_count(), 0);
    }
}
