//! Network selection.

/// Network type: Mainnet or Testnet.
///
/// Selects which hard-coded checkpoint dataset is active. Chosen once from
/// node startup configuration and threaded through every call that consults
/// checkpoints; there is no process-wide network global in this subsystem.
///
/// # Examples
///
/// ```
/// use lode_core::constants::NetworkKind;
/// let net = NetworkKind::default();
/// assert_eq!(net, NetworkKind::Mainnet);
/// assert!(!net.is_test());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NetworkKind {
    /// Production network. Checkpoints are enforced here.
    #[default]
    Mainnet,
    /// Public test network. Has calibration data for progress estimation
    /// but no enforced checkpoints.
    Testnet,
}

impl NetworkKind {
    /// Whether this is the test network.
    ///
    /// Checkpoint enforcement, the total-blocks estimate, and the deepest
    /// checkpoint search are all disabled on the test network.
    pub fn is_test(&self) -> bool {
        matches!(self, Self::Testnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_mainnet() {
        assert_eq!(NetworkKind::default(), NetworkKind::Mainnet);
    }

    #[test]
    fn only_testnet_is_test() {
        assert!(!NetworkKind::Mainnet.is_test());
        assert!(NetworkKind::Testnet.is_test());
    }
}
