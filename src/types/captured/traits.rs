use super::{Captured, Cause};
use core::fmt::Display;

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

impl Display for Captured {
    /// Plain formatting prints the message; alternate (`{:#}`) formatting
    /// prints the message followed by each cause on its own line.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return f.write_str(self.message());
        }
        f.write_str(self.message())?;
        for cause in self.causes() {
            write!(f, "\n  caused by: {}", cause.message())?;
        }
        Ok(())
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for Captured {
    /// Exposes the most recent cause; the full flattened chain is available
    /// through [`Captured::causes`].
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.causes.first().map(|cause| cause as &(dyn core::error::Error + 'static))
    }
}

impl core::error::Error for Cause {}

impl From<String> for Captured {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&'static str> for Captured {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}
