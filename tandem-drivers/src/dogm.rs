//! Dual DOGM163WA (ST7036 controller) SPI driver
//!
//! Drives the two 3x16 modules over a shared SPI bus, with one chip-select
//! and one register-select line per module, SPI mode 3, MSB first. Command
//! processing times come from the datasheet: ordinary commands settle in
//! ~26.3 us, switching the voltage follower on needs 200 ms, and the
//! controller wants 40 ms after power-up before it accepts anything.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use tandem_core::{DisplayTransport, Side};

/// Settle time after power-up or reset
const POWER_UP_DELAY_MS: u32 = 40;

/// Settle time after ordinary commands and data bytes
const COMMAND_DELAY_US: u32 = 30;

/// Settle time after enabling the voltage follower
const FOLLOWER_DELAY_MS: u32 = 200;

/// ST7036 command bytes for the 3.3 V DOGM163 wiring
mod cmd {
    /// 8 bit bus, 3-line display, extended instruction table
    pub const FUNCTION_SET: u8 = 0x39;
    /// Bias 1/5 for a 3-line module
    pub const BIAS_SET: u8 = 0x1E;
    /// Booster on, contrast high bits (3.3 V)
    pub const POWER_CONTROL: u8 = 0x55;
    /// Follower on, amplification ratio (3.3 V)
    pub const FOLLOWER_CONTROL: u8 = 0x6C;
    /// Contrast low bits (3.3 V)
    pub const CONTRAST_SET: u8 = 0x7F;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Clear display, cursor home
    pub const CLEAR_DISPLAY: u8 = 0x01;
    /// Increment cursor, no display shift
    pub const ENTRY_MODE: u8 = 0x06;
}

/// Driver failures, wrapping the underlying bus and pin errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<SpiE, PinE> {
    /// SPI bus error
    Spi(SpiE),
    /// Chip-select or register-select pin error
    Pin(PinE),
}

/// Two DOGM163WA modules on one SPI bus
///
/// `ss0`/`rs0` belong to the left module, `ss1`/`rs1` to the right one.
/// Chip selects idle high; the register-select level picks command (low)
/// or data (high) mode for the byte being clocked out.
pub struct DualDogm<SPI, SS0, SS1, RS0, RS1, D> {
    spi: SPI,
    ss0: SS0,
    ss1: SS1,
    rs0: RS0,
    rs1: RS1,
    delay: D,
}

impl<SPI, SS0, SS1, RS0, RS1, D, PinE> DualDogm<SPI, SS0, SS1, RS0, RS1, D>
where
    SPI: SpiBus,
    SS0: OutputPin<Error = PinE>,
    SS1: OutputPin<Error = PinE>,
    RS0: OutputPin<Error = PinE>,
    RS1: OutputPin<Error = PinE>,
    D: DelayNs,
{
    /// Take ownership of the bus, the four control pins and a delay source
    pub fn new(spi: SPI, ss0: SS0, ss1: SS1, rs0: RS0, rs1: RS1, delay: D) -> Self {
        Self {
            spi,
            ss0,
            ss1,
            rs0,
            rs1,
            delay,
        }
    }

    /// Release the bus, pins and delay source
    pub fn release(self) -> (SPI, SS0, SS1, RS0, RS1, D) {
        (self.spi, self.ss0, self.ss1, self.rs0, self.rs1, self.delay)
    }

    /// Select the module, clock one byte out, deselect
    fn send(
        &mut self,
        side: Side,
        byte: u8,
        data: bool,
    ) -> Result<(), DriverError<SPI::Error, PinE>> {
        match side {
            Side::Left => {
                self.ss0.set_low().map_err(DriverError::Pin)?;
                self.rs0.set_state(data.into()).map_err(DriverError::Pin)?;
            }
            Side::Right => {
                self.ss1.set_low().map_err(DriverError::Pin)?;
                self.rs1.set_state(data.into()).map_err(DriverError::Pin)?;
            }
        }

        let transfer = self
            .spi
            .write(&[byte])
            .and_then(|_| self.spi.flush())
            .map_err(DriverError::Spi);

        // Deselect even when the transfer failed
        let deselect = match side {
            Side::Left => self.ss0.set_high(),
            Side::Right => self.ss1.set_high(),
        }
        .map_err(DriverError::Pin);

        transfer.and(deselect)
    }

    fn command_settled(
        &mut self,
        side: Side,
        byte: u8,
    ) -> Result<(), DriverError<SPI::Error, PinE>> {
        self.send(side, byte, false)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }
}

impl<SPI, SS0, SS1, RS0, RS1, D, PinE> DisplayTransport for DualDogm<SPI, SS0, SS1, RS0, RS1, D>
where
    SPI: SpiBus,
    SS0: OutputPin<Error = PinE>,
    SS1: OutputPin<Error = PinE>,
    RS0: OutputPin<Error = PinE>,
    RS1: OutputPin<Error = PinE>,
    D: DelayNs,
{
    type Error = DriverError<SPI::Error, PinE>;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        // Idle both chip selects high, register selects in command mode
        self.ss0.set_high().map_err(DriverError::Pin)?;
        self.ss1.set_high().map_err(DriverError::Pin)?;
        self.rs0.set_low().map_err(DriverError::Pin)?;
        self.rs1.set_low().map_err(DriverError::Pin)?;

        for side in [Side::Left, Side::Right] {
            self.delay.delay_ms(POWER_UP_DELAY_MS);

            // Function set twice: the second write lands once the extended
            // instruction table is active
            self.command_settled(side, cmd::FUNCTION_SET)?;
            self.command_settled(side, cmd::FUNCTION_SET)?;
            self.command_settled(side, cmd::BIAS_SET)?;
            self.command_settled(side, cmd::POWER_CONTROL)?;

            // The follower charges its capacitors before it is stable
            self.send(side, cmd::FOLLOWER_CONTROL, false)?;
            self.delay.delay_ms(FOLLOWER_DELAY_MS);

            self.command_settled(side, cmd::CONTRAST_SET)?;
            self.command_settled(side, cmd::DISPLAY_ON)?;
            self.command_settled(side, cmd::CLEAR_DISPLAY)?;
            self.command_settled(side, cmd::ENTRY_MODE)?;
        }

        Ok(())
    }

    fn transmit_command(&mut self, side: Side, byte: u8) -> Result<(), Self::Error> {
        self.command_settled(side, byte)
    }

    fn transmit_data(&mut self, side: Side, byte: u8) -> Result<(), Self::Error> {
        self.send(side, byte, true)?;
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use heapless::Vec;
    use tandem_core::{flush_open_lines, paint_line, split_message, LineBufferStore};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Pin {
        Ss0,
        Ss1,
        Rs0,
        Rs1,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        PinLow(Pin),
        PinHigh(Pin),
        Byte(u8),
        DelayUs(u32),
    }

    type Log = RefCell<Vec<Event, 512>>;

    struct MockSpi<'a> {
        log: &'a Log,
    }

    impl embedded_hal::spi::ErrorType for MockSpi<'_> {
        type Error = Infallible;
    }

    impl SpiBus for MockSpi<'_> {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            for &b in words {
                self.log.borrow_mut().push(Event::Byte(b)).unwrap();
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    struct MockPin<'a> {
        id: Pin,
        log: &'a Log,
    }

    impl embedded_hal::digital::ErrorType for MockPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::PinLow(self.id)).unwrap();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::PinHigh(self.id)).unwrap();
            Ok(())
        }
    }

    struct MockDelay<'a> {
        log: &'a Log,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.log
                .borrow_mut()
                .push(Event::DelayUs(ns / 1_000))
                .unwrap();
        }
    }

    type MockDogm<'a> =
        DualDogm<MockSpi<'a>, MockPin<'a>, MockPin<'a>, MockPin<'a>, MockPin<'a>, MockDelay<'a>>;

    fn mock_board(log: &Log) -> MockDogm<'_> {
        DualDogm::new(
            MockSpi { log },
            MockPin { id: Pin::Ss0, log },
            MockPin { id: Pin::Ss1, log },
            MockPin { id: Pin::Rs0, log },
            MockPin { id: Pin::Rs1, log },
            MockDelay { log },
        )
    }

    #[test]
    fn test_data_byte_framing() {
        let log = Log::new(Vec::new());
        let mut board = mock_board(&log);
        board.transmit_data(Side::Right, b'A').unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::PinLow(Pin::Ss1),
                Event::PinHigh(Pin::Rs1),
                Event::Byte(b'A'),
                Event::PinHigh(Pin::Ss1),
                Event::DelayUs(COMMAND_DELAY_US),
            ][..]
        );
    }

    #[test]
    fn test_command_byte_framing() {
        let log = Log::new(Vec::new());
        let mut board = mock_board(&log);
        board.transmit_command(Side::Left, 0x80).unwrap();
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Event::PinLow(Pin::Ss0),
                Event::PinLow(Pin::Rs0),
                Event::Byte(0x80),
                Event::PinHigh(Pin::Ss0),
                Event::DelayUs(COMMAND_DELAY_US),
            ][..]
        );
    }

    #[test]
    fn test_init_sequence_bytes_and_delays() {
        let log = Log::new(Vec::new());
        let mut board = mock_board(&log);
        board.initialize().unwrap();
        let events = log.borrow();

        let mut bytes: Vec<u8, 32> = Vec::new();
        for event in events.iter() {
            if let Event::Byte(b) = event {
                bytes.push(*b).unwrap();
            }
        }
        let per_side = [0x39, 0x39, 0x1E, 0x55, 0x6C, 0x7F, 0x0C, 0x01, 0x06];
        assert_eq!(bytes.len(), 2 * per_side.len());
        assert_eq!(&bytes[..9], &per_side[..]);
        assert_eq!(&bytes[9..], &per_side[..]);

        // 40 ms power-up delay leads each side's sequence
        let power_ups = events
            .iter()
            .filter(|e| **e == Event::DelayUs(40_000))
            .count();
        assert_eq!(power_ups, 2);

        // The follower command is given 200 ms to settle
        let follower = events
            .iter()
            .position(|e| *e == Event::Byte(cmd::FOLLOWER_CONTROL))
            .unwrap();
        assert_eq!(events[follower + 2], Event::DelayUs(200_000));
    }

    #[test]
    fn test_paint_through_driver() {
        let mut store = LineBufferStore::new();
        split_message(&mut store, "Hi").unwrap();
        flush_open_lines(&mut store).unwrap();

        let log = Log::new(Vec::new());
        let mut board = mock_board(&log);
        paint_line(&mut board, &store, Side::Left, 0, 0).unwrap();

        let mut bytes: Vec<u8, 32> = Vec::new();
        for event in log.borrow().iter() {
            if let Event::Byte(b) = event {
                bytes.push(*b).unwrap();
            }
        }
        assert_eq!(bytes[0], 0x80);
        assert_eq!(&bytes[1..], b"Hi              ");
    }
}
