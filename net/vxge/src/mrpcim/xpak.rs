//! Digital optical monitoring of the XPAK transceivers, read over MDIO.

use bitflags::bitflags;

use super::{devad, Mrpcim};
use crate::access::RegisterAccess;
use crate::error::{MrpcimError, Result};
use crate::regs::WIRE_PORT_COUNT;

/// PMA/PMD register that latches the DOM values.
pub const DOM_CMD_STAT: u16 = 0xa100;
pub const DOM_TX_ALARM_FLAG: u16 = 0xa070;
pub const DOM_TX_WARN_FLAG: u16 = 0xa074;

/// Consecutive polls an alarm must stay raised before it is reported.
const EXCESS_POLLS: u32 = 3;

bitflags! {
    /// Layout shared by the DOM alarm and warning flag registers.
    pub struct DomFlags: u16 {
        const TEMP_HIGH = 0x80;
        const TEMP_LOW = 0x40;
        const CUR_HIGH = 0x08;
        const CUR_LOW = 0x04;
        const PWR_HIGH = 0x02;
        const PWR_LOW = 0x01;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XpakAlarm {
    ExcessTemp,
    ExcessBiasCurrent,
    ExcessLaserOutput,
}

/// Flag counters of one transceiver, kept across polls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XpakStats {
    pub alarm_transceiver_temp_high: u64,
    pub alarm_transceiver_temp_low: u64,
    pub alarm_laser_bias_current_high: u64,
    pub alarm_laser_bias_current_low: u64,
    pub alarm_laser_output_power_high: u64,
    pub alarm_laser_output_power_low: u64,
    pub warn_transceiver_temp_high: u64,
    pub warn_transceiver_temp_low: u64,
    pub warn_laser_bias_current_high: u64,
    pub warn_laser_bias_current_low: u64,
    pub warn_laser_output_power_high: u64,
    pub warn_laser_output_power_low: u64,
    /// Consecutive polls with the high alarm raised.
    pub excess_temp: u32,
    pub excess_bias_current: u32,
    pub excess_laser_output: u32,
}

/// Counts one more poll with the alarm `raised`. Returns true on the poll that
/// completes a run of [`EXCESS_POLLS`], which starts the count again.
fn excess(count: &mut u32, raised: bool) -> bool {
    if !raised {
        *count = 0;
        return false;
    }
    *count += 1;
    if *count == EXCESS_POLLS {
        *count = 0;
        true
    } else {
        false
    }
}

fn bump(counter: &mut u64, flags: DomFlags, flag: DomFlags) {
    if flags.contains(flag) {
        *counter += 1;
    }
}

impl XpakStats {
    fn record_alarms(&mut self, flags: DomFlags) -> Vec<XpakAlarm> {
        bump(&mut self.alarm_transceiver_temp_high, flags, DomFlags::TEMP_HIGH);
        bump(&mut self.alarm_transceiver_temp_low, flags, DomFlags::TEMP_LOW);
        bump(&mut self.alarm_laser_bias_current_high, flags, DomFlags::CUR_HIGH);
        bump(&mut self.alarm_laser_bias_current_low, flags, DomFlags::CUR_LOW);
        bump(&mut self.alarm_laser_output_power_high, flags, DomFlags::PWR_HIGH);
        bump(&mut self.alarm_laser_output_power_low, flags, DomFlags::PWR_LOW);

        let mut raised = Vec::new();
        if excess(&mut self.excess_temp, flags.contains(DomFlags::TEMP_HIGH)) {
            raised.push(XpakAlarm::ExcessTemp);
        }
        if excess(&mut self.excess_bias_current, flags.contains(DomFlags::CUR_HIGH)) {
            raised.push(XpakAlarm::ExcessBiasCurrent);
        }
        if excess(&mut self.excess_laser_output, flags.contains(DomFlags::PWR_HIGH)) {
            raised.push(XpakAlarm::ExcessLaserOutput);
        }
        raised
    }

    fn record_warnings(&mut self, flags: DomFlags) {
        bump(&mut self.warn_transceiver_temp_high, flags, DomFlags::TEMP_HIGH);
        bump(&mut self.warn_transceiver_temp_low, flags, DomFlags::TEMP_LOW);
        bump(&mut self.warn_laser_bias_current_high, flags, DomFlags::CUR_HIGH);
        bump(&mut self.warn_laser_bias_current_low, flags, DomFlags::CUR_LOW);
        bump(&mut self.warn_laser_output_power_high, flags, DomFlags::PWR_HIGH);
        bump(&mut self.warn_laser_output_power_low, flags, DomFlags::PWR_LOW);
    }
}

impl<R: RegisterAccess> Mrpcim<R> {
    /// Reads the DOM alarm and warning flags of wire port `port` and updates its
    /// counters. Returns the alarms that have now stayed high for three polls.
    pub fn xpak_stats_poll(&mut self, port: u32) -> Result<Vec<XpakAlarm>> {
        self.require_mrpcim()?;
        let idx = port as usize;
        if idx >= WIRE_PORT_COUNT {
            return Err(MrpcimError::InvalidPort(port));
        }

        self.mdio_read(port, devad::PMA_PMD, DOM_CMD_STAT)?;

        let flags = self.mdio_read(port, devad::PMA_PMD, DOM_TX_ALARM_FLAG)?;
        let raised = self.xpak[idx].record_alarms(DomFlags::from_bits_truncate(flags));
        for alarm in &raised {
            log::warn!("vxge: xpak port {port}: {alarm:?}");
        }

        let flags = self.mdio_read(port, devad::PMA_PMD, DOM_TX_WARN_FLAG)?;
        self.xpak[idx].record_warnings(DomFlags::from_bits_truncate(flags));

        Ok(raised)
    }

    pub fn xpak_stats(&self, port: u32) -> Option<XpakStats> {
        self.xpak.get(port as usize).copied()
    }
}
