//! Clause 45 MDIO management frames through `mdio_mgr_access_port`.

use super::Mrpcim;
use crate::access::{poll, reg_offset, PollUntil, RegisterAccess};
use crate::error::{MrpcimError, Result};
use crate::regs::fields::mdio_mgr_access_port::{
    ADDR, DATA, DEVAD, OP_TYPE, PREAMBLE, PRTAD, STROBE_ONE, STROBE_TWO, ST_PATTERN,
};
use crate::regs::WIRE_PORT_COUNT;

/// MMD device addresses.
pub mod devad {
    pub const PMA_PMD: u32 = 1;
    pub const WIS: u32 = 2;
    pub const PCS: u32 = 3;
    pub const PHY_XS: u32 = 4;
    /// The adapter's own XGXS, addressed with the DTE port address.
    pub const DTE_XS: u32 = 5;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MdioOp {
    AddrWrite = 0,
    Write = 1,
    ReadIncr = 2,
    Read = 3,
    AddrReadIncr = 6,
    AddrRead = 7,
}

impl MdioOp {
    pub fn is_read(self) -> bool {
        matches!(
            self,
            MdioOp::ReadIncr | MdioOp::Read | MdioOp::AddrReadIncr | MdioOp::AddrRead
        )
    }
}

impl<R: RegisterAccess> Mrpcim<R> {
    /// Runs one management frame on wire port `port`. Read operations return the data
    /// the device answered with, the others return 0.
    pub fn mdio_access(
        &mut self,
        port: u32,
        op: MdioOp,
        device: u32,
        addr: u16,
        data: u16,
    ) -> Result<u16> {
        self.require_mrpcim()?;
        let idx = port as usize;
        if idx >= WIRE_PORT_COUNT {
            return Err(MrpcimError::InvalidPort(port));
        }

        let prtad = if device == devad::DTE_XS {
            self.dte_prtad[idx]
        } else {
            self.phy_prtad[idx]
        };

        // ST pattern 0 selects clause 45 framing.
        let cmd = STROBE_ONE.mask()
            | OP_TYPE.encode(op as u64)
            | DEVAD.encode(device.into())
            | ADDR.encode(addr.into())
            | DATA.encode(data.into())
            | ST_PATTERN.encode(0)
            | PREAMBLE.mask()
            | PRTAD.encode(prtad.into())
            | STROBE_TWO.mask();
        let at = reg_offset!(mdio_mgr_access_port[idx]);
        self.regs.write64(at, cmd);
        let done = poll(
            &self.regs,
            at,
            STROBE_ONE.mask() | STROBE_TWO.mask(),
            PollUntil::Clear,
            self.poll_millis(),
        )?;

        if op.is_read() {
            Ok(DATA.decode(done) as u16)
        } else {
            Ok(0)
        }
    }

    /// Reads register `addr` of MMD `device`.
    pub fn mdio_read(&mut self, port: u32, device: u32, addr: u16) -> Result<u16> {
        self.mdio_access(port, MdioOp::AddrWrite, device, addr, 0)?;
        self.mdio_access(port, MdioOp::AddrRead, device, addr, 0)
    }

    /// Writes `data` to register `addr` of MMD `device`.
    pub fn mdio_write(&mut self, port: u32, device: u32, addr: u16, data: u16) -> Result<()> {
        self.mdio_access(port, MdioOp::AddrWrite, device, addr, 0)?;
        self.mdio_access(port, MdioOp::Write, device, addr, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MrpcimConfig;
    use crate::mrpcim::tests::{device, info};
    use crate::regs::fields::{mdio_gen_cfg_port, xgxs_static_cfg_port};
    use crate::testing::FakeRegs;

    #[test]
    fn command_word_layout() {
        let mut regs = FakeRegs::new();
        regs.set(reg_offset!(mdio_gen_cfg_port[1]), mdio_gen_cfg_port::MDIO_PHY_PRTAD.encode(9));
        regs.set(
            reg_offset!(xgxs_static_cfg_port[1]),
            xgxs_static_cfg_port::MDIO_DTE_PRTAD.encode(0x15),
        );
        let mut mrpcim = Mrpcim::initialize(regs, MrpcimConfig::default(), info()).unwrap();

        mrpcim
            .mdio_access(1, MdioOp::Write, devad::PCS, 0x20, 0xbeef)
            .unwrap();
        let cmd = mrpcim.regs().writes_to(reg_offset!(mdio_mgr_access_port[1]))[0];
        assert!(STROBE_ONE.is_set(cmd) && STROBE_TWO.is_set(cmd) && PREAMBLE.is_set(cmd));
        assert_eq!(OP_TYPE.decode(cmd), 1);
        assert_eq!(DEVAD.decode(cmd), 3);
        assert_eq!(ADDR.decode(cmd), 0x20);
        assert_eq!(DATA.decode(cmd), 0xbeef);
        assert_eq!(ST_PATTERN.decode(cmd), 0);
        assert_eq!(PRTAD.decode(cmd), 9);

        mrpcim
            .mdio_access(1, MdioOp::AddrWrite, devad::DTE_XS, 0, 0)
            .unwrap();
        let cmd = *mrpcim
            .regs()
            .writes_to(reg_offset!(mdio_mgr_access_port[1]))
            .last()
            .unwrap();
        assert_eq!(PRTAD.decode(cmd), 0x15);
    }

    #[test]
    fn read_returns_device_data() {
        let mut mrpcim = device();
        mrpcim.regs_mut().mdio.insert((0, 1, 0xa070), 0x1234);

        assert_eq!(mrpcim.mdio_read(0, devad::PMA_PMD, 0xa070).unwrap(), 0x1234);
        // Writes never report data.
        assert_eq!(
            mrpcim
                .mdio_access(0, MdioOp::Write, devad::PMA_PMD, 0xa070, 0x5678)
                .unwrap(),
            0
        );
        assert_eq!(mrpcim.mdio_read(0, devad::PMA_PMD, 0xa070).unwrap(), 0x5678);

        mrpcim.mdio_write(0, devad::PCS, 7, 0x42).unwrap();
        assert_eq!(mrpcim.regs().mdio.get(&(0, 3, 7)), Some(&0x42));
        assert_eq!(mrpcim.mdio_read(1, devad::PCS, 7).unwrap(), 0);
    }

    #[test]
    fn rejects_bad_port_and_stuck_strobes() {
        let mut mrpcim = device();
        assert!(matches!(
            mrpcim.mdio_access(2, MdioOp::Read, devad::PCS, 0, 0),
            Err(MrpcimError::InvalidPort(2))
        ));

        let mut regs = FakeRegs::new();
        regs.stuck.insert(reg_offset!(mdio_mgr_access_port[0]));
        let config = MrpcimConfig {
            device_poll_millis: 1,
            ..MrpcimConfig::default()
        };
        let mut mrpcim = Mrpcim::initialize(regs, config, info()).unwrap();
        assert!(matches!(
            mrpcim.mdio_read(0, devad::PCS, 0),
            Err(MrpcimError::Timeout { .. })
        ));
    }

    #[test]
    fn read_ops() {
        assert!(MdioOp::AddrRead.is_read());
        assert!(MdioOp::ReadIncr.is_read());
        assert!(!MdioOp::Write.is_read());
        assert!(!MdioOp::AddrWrite.is_read());
    }
}
