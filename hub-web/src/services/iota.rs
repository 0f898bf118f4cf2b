//! IOTA Demo Adapter
//!
//! No real IOTA SDK is wired up. Connect synthesizes a fresh pseudo-address
//! per call so the rest of the app can exercise the full session lifecycle;
//! callers must treat every "chain" result from this network as fake.

use hub_core::Result;
use uuid::Uuid;

/// The demo provider is always present.
pub fn detect() -> bool {
    true
}

/// A plausible-looking 32-byte hex address, different on every call.
pub fn demo_address() -> String {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    format!("0x{}{}", a.simple(), b.simple())
}

pub async fn connect() -> Result<Vec<String>> {
    Ok(vec![demo_address()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_address_shape() {
        let addr = demo_address();
        assert!(addr.starts_with("0x"));
        assert_eq!(addr.len(), 2 + 64);
        assert!(addr[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_demo_addresses_are_unique_per_call() {
        assert_ne!(demo_address(), demo_address());
    }
}
