//! Session-related types.
//!
//! The session holds the visitor's cart and any notices waiting to be shown.

use serde::{Deserialize, Serialize};
use simple_market_core::{CartNotice, NoticeLevel};

/// A one-shot message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Severity, used for styling.
    pub level: NoticeLevel,
    /// Message text.
    pub message: String,
}

impl Flash {
    /// CSS modifier class for the toast.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "toast--success",
            NoticeLevel::Info => "toast--info",
        }
    }
}

impl From<&CartNotice> for Flash {
    fn from(notice: &CartNotice) -> Self {
        Self {
            level: notice.level(),
            message: notice.to_string(),
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for queued flash messages.
    pub const FLASHES: &str = "flashes";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_from_notice() {
        let flash = Flash::from(&CartNotice::Removed {
            name: "Smart Watch".to_string(),
        });
        assert_eq!(flash.message, "Removed Smart Watch from your cart");
        assert_eq!(flash.css_class(), "toast--info");

        let flash = Flash::from(&CartNotice::Added {
            name: "Smart Watch".to_string(),
        });
        assert_eq!(flash.css_class(), "toast--success");
    }
}
