//! Asynchronous timer abstraction providing the scheduler cadence of the
//! bridge runner.

/// Timer trait abstraction; must remain thread-safe when applicable.
pub trait BridgeTimer {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms<'a>(
        &'a mut self,
        millis: u32,
    ) -> impl core::future::Future<Output = ()> + 'a;
}

/// Timer backed by the embassy time driver.
pub struct EmbassyTimer;

impl BridgeTimer for EmbassyTimer {
    #[inline]
    async fn delay_ms(&mut self, millis: u32) {
        embassy_time::Timer::after(embassy_time::Duration::from_millis(millis as u64)).await;
    }
}
