//! Recording I2C double for unit tests.

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
use std::vec::Vec;

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

/// Logs every write and can be told to fail one of them.
#[derive(Default)]
pub(crate) struct RecordingI2c {
    /// `(7-bit address, bytes)` for every successful write, in order.
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Zero-based index of the write attempt that should fail.
    fail_at: Option<usize>,
    /// Every write hangs forever when set.
    stall: bool,
    attempts: usize,
}

impl RecordingI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(attempt: usize) -> Self {
        Self {
            fail_at: Some(attempt),
            ..Self::default()
        }
    }

    /// A bus whose writes never complete (clock stretched forever).
    #[cfg(feature = "time")]
    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::default()
        }
    }

    /// Command bytes, in order, unwrapped from their `[0x80, cmd]` frames.
    pub fn commands(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, w)| w.len() == 2 && w[0] == CONTROL_COMMAND)
            .map(|(_, w)| w[1])
            .collect()
    }

    /// Payloads of data transactions, marker stripped.
    pub fn data_frames(&self) -> Vec<&[u8]> {
        self.writes
            .iter()
            .filter(|(_, w)| w.first() == Some(&CONTROL_DATA))
            .map(|(_, w)| &w[1..])
            .collect()
    }

    /// All data payload bytes concatenated.
    pub fn data(&self) -> Vec<u8> {
        self.data_frames().concat()
    }
}

impl ErrorType for RecordingI2c {
    type Error = ErrorKind;
}

impl I2c for RecordingI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.stall {
            core::future::pending::<()>().await;
        }
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let attempt = self.attempts;
                    self.attempts += 1;
                    if self.fail_at == Some(attempt) {
                        return Err(ErrorKind::Other);
                    }
                    self.writes.push((address, bytes.to_vec()));
                }
                Operation::Read(buf) => buf.fill(0),
            }
        }
        Ok(())
    }
}

/// Waker that does nothing; tests poll by hand.
pub(crate) fn noop_waker() -> Waker {
    fn clone(_: *const ()) -> RawWaker {
        RawWaker::new(core::ptr::null(), &VTABLE)
    }
    fn noop(_: *const ()) {}
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);

    // SAFETY: every vtable entry ignores the data pointer.
    unsafe { Waker::from_raw(RawWaker::new(core::ptr::null(), &VTABLE)) }
}

/// Poll `fut` to completion, returning its output and how many times it
/// returned `Pending` (i.e. yielded to the executor).
pub(crate) fn run_counting_yields<F: Future>(fut: F) -> (F::Output, usize) {
    let waker = noop_waker();
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    let mut yields = 0;
    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(output) => return (output, yields),
            Poll::Pending => yields += 1,
        }
    }
}
