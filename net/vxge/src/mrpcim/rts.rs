//! Receive traffic steering tables.
//!
//! Entries are moved through `rts_mgr_steer_data0/1` and `rts_mgr_steer_vpath_vector`;
//! `rts_mgr_steer_ctrl` selects the table and offset and strobes the transfer.

use super::Mrpcim;
use crate::access::{poll, reg_offset, write64_split, PollUntil, RegisterAccess};
use crate::error::{MrpcimError, Result};
use crate::regs::fields::rts_mgr_steer_ctrl::{
    self, DATA_STRUCT_SEL, OFFSET, RMACJ_STATUS, STROBE, TABLE_SEL, WE,
};
use crate::regs::fields::{rts_mgr_steer_data0, rts_mgr_steer_data1};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RtsAction {
    Read,
    Write,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RtsEntry {
    pub data0: u64,
    pub data1: u64,
    pub vpath_vector: u64,
}

/// What the DA table does when an added address is already present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MacAddrMode {
    AddDuplicate = 0,
    DiscardDuplicate = 1,
    ReplaceDuplicate = 2,
}

/// One destination address table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MacAddrEntry {
    pub addr: [u8; 6],
    pub mask: [u8; 6],
    pub vpath_vector: u64,
}

fn mac_to_u64(mac: [u8; 6]) -> u64 {
    mac.iter().fold(0, |acc, byte| (acc << 8) | u64::from(*byte))
}

fn u64_to_mac(value: u64) -> [u8; 6] {
    let bytes = value.to_be_bytes();
    [bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]]
}

/// Tables whose entries are addressed per hash bucket rather than per data structure.
fn uses_table_sel(table: u64) -> bool {
    matches!(
        table,
        rts_mgr_steer_ctrl::DATA_STRUCT_SEL_RTH_SOLO_IT
            | rts_mgr_steer_ctrl::DATA_STRUCT_SEL_RTH_MULTI_IT
            | rts_mgr_steer_ctrl::DATA_STRUCT_SEL_RTH_MASK
            | rts_mgr_steer_ctrl::DATA_STRUCT_SEL_RTH_KEY
    )
}

impl<R: RegisterAccess> Mrpcim<R> {
    /// Reads or writes entry `offset` of steering data structure `table`. Writes
    /// return `entry` unchanged, reads return what the table holds.
    pub fn rts_table_access(
        &mut self,
        action: RtsAction,
        table: u32,
        offset: u32,
        entry: RtsEntry,
    ) -> Result<RtsEntry> {
        self.require_mrpcim()?;

        if action == RtsAction::Write {
            self.regs.write64(reg_offset!(rts_mgr_steer_data0), entry.data0);
            self.regs.write64(reg_offset!(rts_mgr_steer_data1), entry.data1);
            self.regs
                .write64(reg_offset!(rts_mgr_steer_vpath_vector), entry.vpath_vector);
        }

        let sel = u64::from(table);
        let mut cmd = DATA_STRUCT_SEL.encode(sel) | STROBE.mask() | OFFSET.encode(offset.into());
        if action == RtsAction::Write {
            cmd |= WE.mask();
        }
        if uses_table_sel(sel) {
            cmd |= TABLE_SEL.mask();
        }

        let at = reg_offset!(rts_mgr_steer_ctrl);
        write64_split(&mut self.regs, at, cmd);
        poll(&self.regs, at, STROBE.mask(), PollUntil::Clear, self.poll_millis())?;

        let status = self.regs.read64(at);
        if !RMACJ_STATUS.is_set(status) {
            log::warn!("vxge: steering table {table} offset {offset} rejected the access");
            return Err(MrpcimError::RtsTableAccess { table, offset });
        }

        match action {
            RtsAction::Write => Ok(entry),
            RtsAction::Read => Ok(RtsEntry {
                data0: self.regs.read64(reg_offset!(rts_mgr_steer_data0)),
                data1: self.regs.read64(reg_offset!(rts_mgr_steer_data1)),
                vpath_vector: self.regs.read64(reg_offset!(rts_mgr_steer_vpath_vector)),
            }),
        }
    }

    /// Stores `mac`/`mask` at `offset` of the destination address table, steering
    /// matching frames to the vpaths in `vpath_vector`.
    pub fn mac_addr_add(
        &mut self,
        offset: u32,
        mac: [u8; 6],
        mask: [u8; 6],
        vpath_vector: u64,
        mode: MacAddrMode,
    ) -> Result<()> {
        let entry = RtsEntry {
            data0: rts_mgr_steer_data0::DA_MAC_ADDR.encode(mac_to_u64(mac)),
            data1: rts_mgr_steer_data1::DA_MAC_ADDR_MASK.encode(mac_to_u64(mask))
                | rts_mgr_steer_data1::DA_MAC_ADDR_MODE.encode(mode as u64),
            vpath_vector,
        };
        self.rts_table_access(
            RtsAction::Write,
            rts_mgr_steer_ctrl::DATA_STRUCT_SEL_DA as u32,
            offset,
            entry,
        )?;
        Ok(())
    }

    pub fn mac_addr_get(&mut self, offset: u32) -> Result<MacAddrEntry> {
        let entry = self.rts_table_access(
            RtsAction::Read,
            rts_mgr_steer_ctrl::DATA_STRUCT_SEL_DA as u32,
            offset,
            RtsEntry::default(),
        )?;
        Ok(MacAddrEntry {
            addr: u64_to_mac(rts_mgr_steer_data0::DA_MAC_ADDR.decode(entry.data0)),
            mask: u64_to_mac(rts_mgr_steer_data1::DA_MAC_ADDR_MASK.decode(entry.data1)),
            vpath_vector: entry.vpath_vector,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::mbit;
    use crate::mrpcim::tests::device;

    const MAC: [u8; 6] = [0x00, 0x0c, 0xfc, 0x01, 0x02, 0x03];

    #[test]
    fn mac_bytes_pack_big_endian() {
        assert_eq!(mac_to_u64(MAC), 0x000c_fc01_0203);
        assert_eq!(u64_to_mac(0x000c_fc01_0203), MAC);
    }

    #[test]
    fn write_command_keeps_selector_and_offset() {
        let mut mrpcim = device();
        mrpcim
            .rts_table_access(
                RtsAction::Write,
                rts_mgr_steer_ctrl::DATA_STRUCT_SEL_RTH_KEY as u32,
                5,
                RtsEntry {
                    data0: 1,
                    data1: 2,
                    vpath_vector: 3,
                },
            )
            .unwrap();

        let writes = mrpcim.regs().writes_to(reg_offset!(rts_mgr_steer_ctrl));
        assert_eq!(writes.len(), 2);
        let cmd = writes[1];
        assert!(WE.is_set(cmd));
        assert!(STROBE.is_set(cmd));
        assert!(TABLE_SEL.is_set(cmd));
        assert_eq!(DATA_STRUCT_SEL.decode(cmd), 9);
        assert_eq!(OFFSET.decode(cmd), 5);
        assert_eq!(mrpcim.regs().rts.get(&(9, 5)), Some(&(1, 2, 3)));
    }

    #[test]
    fn read_command_has_no_write_enable() {
        let mut mrpcim = device();
        mrpcim.regs_mut().rts.insert((1, 40), (7, 8, 9));

        let entry = mrpcim
            .rts_table_access(RtsAction::Read, 1, 40, RtsEntry::default())
            .unwrap();
        assert_eq!(
            entry,
            RtsEntry {
                data0: 7,
                data1: 8,
                vpath_vector: 9,
            }
        );

        let cmd = *mrpcim
            .regs()
            .writes_to(reg_offset!(rts_mgr_steer_ctrl))
            .last()
            .unwrap();
        assert!(!WE.is_set(cmd));
        assert!(!TABLE_SEL.is_set(cmd));
        assert_eq!(OFFSET.decode(cmd), 40);
    }

    #[test]
    fn mac_address_round_trip() {
        let mut mrpcim = device();
        let mask = [0xff; 6];
        mrpcim
            .mac_addr_add(12, MAC, mask, mbit(2), MacAddrMode::ReplaceDuplicate)
            .unwrap();

        let data1 = mrpcim.regs().get(reg_offset!(rts_mgr_steer_data1));
        assert_eq!(rts_mgr_steer_data1::DA_MAC_ADDR_MODE.decode(data1), 2);

        let entry = mrpcim.mac_addr_get(12).unwrap();
        assert_eq!(entry.addr, MAC);
        assert_eq!(entry.mask, mask);
        assert_eq!(entry.vpath_vector, mbit(2));
    }

    #[test]
    fn rejected_access_is_an_error() {
        let mut mrpcim = device();
        mrpcim.regs_mut().rts_ok = false;
        match mrpcim.mac_addr_get(3) {
            Err(MrpcimError::RtsTableAccess { table, offset }) => {
                assert_eq!((table, offset), (0, 3))
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
