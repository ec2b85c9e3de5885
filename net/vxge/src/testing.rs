//! In-memory register block for tests.
//!
//! Registers read as zero until written. Writes are logged, and the command registers
//! finish as soon as they are strobed: strobes clear, reads load data.

use std::collections::{HashMap, HashSet};

use crate::access::{reg_offset, RegisterAccess};
use crate::regs::fields::{mdio_mgr_access_port, rts_mgr_steer_ctrl, xmac_stats_sys_cmd};

pub struct FakeRegs {
    values: HashMap<usize, u64>,
    writes: Vec<(usize, u64)>,
    /// Registers whose strobes never clear.
    pub stuck: HashSet<usize>,
    /// Counter values by (location, offset).
    pub stats: HashMap<(u64, u64), u64>,
    /// MDIO registers by (port, device, address).
    pub mdio: HashMap<(usize, u64, u64), u16>,
    /// Steering table entries by (data structure, offset).
    pub rts: HashMap<(u64, u64), (u64, u64, u64)>,
    /// Whether steering table accesses report success.
    pub rts_ok: bool,
}

impl FakeRegs {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            writes: Vec::new(),
            stuck: HashSet::new(),
            stats: HashMap::new(),
            mdio: HashMap::new(),
            rts: HashMap::new(),
            rts_ok: true,
        }
    }

    /// Presets a register without logging a write.
    pub fn set(&mut self, offset: usize, value: u64) {
        self.values.insert(offset, value);
    }

    pub fn get(&self, offset: usize) -> u64 {
        self.values.get(&offset).copied().unwrap_or(0)
    }

    /// Every value written to `offset`, oldest first.
    pub fn writes_to(&self, offset: usize) -> Vec<u64> {
        self.writes
            .iter()
            .filter(|(at, _)| *at == offset)
            .map(|(_, value)| *value)
            .collect()
    }

    pub fn written(&self, offset: usize) -> bool {
        self.writes.iter().any(|(at, _)| *at == offset)
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
    }

    fn complete(&mut self, offset: usize, value: u64) -> u64 {
        if self.stuck.contains(&offset) {
            return value;
        }
        if offset == reg_offset!(xmac_stats_sys_cmd) && xmac_stats_sys_cmd::STROBE.is_set(value)
        {
            let key = (
                xmac_stats_sys_cmd::LOC_SEL.decode(value),
                xmac_stats_sys_cmd::OFFSET_SEL.decode(value),
            );
            let data = self.stats.get(&key).copied().unwrap_or(0);
            self.values.insert(reg_offset!(xmac_stats_sys_data), data);
            return value & !xmac_stats_sys_cmd::STROBE.mask();
        }
        for port in 0..2 {
            if offset == reg_offset!(mdio_mgr_access_port[port])
                && mdio_mgr_access_port::STROBE_ONE.is_set(value)
            {
                return self.complete_mdio(port, value);
            }
        }
        if offset == reg_offset!(rts_mgr_steer_ctrl) && rts_mgr_steer_ctrl::STROBE.is_set(value) {
            return self.complete_rts(value);
        }
        value
    }

    fn complete_mdio(&mut self, port: usize, value: u64) -> u64 {
        use mdio_mgr_access_port::*;

        let key = (port, DEVAD.decode(value), ADDR.decode(value));
        let data = match OP_TYPE.decode(value) {
            // Write and address-write.
            0 => 0,
            1 => {
                self.mdio.insert(key, DATA.decode(value) as u16);
                0
            }
            _ => self.mdio.get(&key).copied().unwrap_or(0),
        };
        let done = value & !(STROBE_ONE.mask() | STROBE_TWO.mask());
        DATA.replace(done, data.into())
    }

    fn complete_rts(&mut self, value: u64) -> u64 {
        use rts_mgr_steer_ctrl::*;

        let done = value & !STROBE.mask();
        if !self.rts_ok {
            return done & !RMACJ_STATUS.mask();
        }
        let key = (DATA_STRUCT_SEL.decode(value), OFFSET.decode(value));
        if WE.is_set(value) {
            let entry = (
                self.get(reg_offset!(rts_mgr_steer_data0)),
                self.get(reg_offset!(rts_mgr_steer_data1)),
                self.get(reg_offset!(rts_mgr_steer_vpath_vector)),
            );
            self.rts.insert(key, entry);
        } else {
            let (data0, data1, vector) = self.rts.get(&key).copied().unwrap_or_default();
            self.values.insert(reg_offset!(rts_mgr_steer_data0), data0);
            self.values.insert(reg_offset!(rts_mgr_steer_data1), data1);
            self.values
                .insert(reg_offset!(rts_mgr_steer_vpath_vector), vector);
        }
        done | RMACJ_STATUS.mask()
    }
}

impl RegisterAccess for FakeRegs {
    fn read64(&self, offset: usize) -> u64 {
        self.get(offset)
    }

    fn write64(&mut self, offset: usize, value: u64) {
        self.writes.push((offset, value));
        let value = self.complete(offset, value);
        self.values.insert(offset, value);
    }
}
