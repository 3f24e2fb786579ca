//! Stream adapter configuration

use rjtag_core::ByteOrder;

/// Options shared by the stream adapters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Byte order for 16 and 32-bit values on the stream
    pub order: ByteOrder,
    /// Draw a progress bar on the terminal
    pub progress: bool,
    /// Report throughput when the adapter is closed
    pub show_rate: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            order: ByteOrder::Little,
            progress: true,
            show_rate: false,
        }
    }
}

impl StreamConfig {
    /// Set the stream byte order
    pub fn with_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Enable or disable the throughput report on close
    pub fn with_rate(mut self, show_rate: bool) -> Self {
        self.show_rate = show_rate;
        self
    }

    /// Config with the progress bar hidden
    pub fn quiet() -> Self {
        Self::default().with_progress(false)
    }
}
