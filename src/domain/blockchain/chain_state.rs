/// Snapshot of the chain tip as last seen by the synchronization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainState {
    pub latest_block: u64,
}

impl ChainState {
    pub fn new(latest_block: u64) -> Self {
        Self { latest_block }
    }

    /// Blocks mined on top of `block`. `None` when the block is unknown or ahead of the tip.
    pub fn confirmations(&self, block: Option<u64>) -> Option<u64> {
        self.latest_block.checked_sub(block?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmations_same_block() {
        assert_eq!(ChainState::new(100).confirmations(Some(100)), Some(0));
    }

    #[test]
    fn test_confirmations_older_block() {
        assert_eq!(ChainState::new(100).confirmations(Some(99)), Some(1));
        assert_eq!(ChainState::new(100).confirmations(Some(0)), Some(100));
    }

    #[test]
    fn test_confirmations_unknown_block() {
        assert_eq!(ChainState::new(100).confirmations(None), None);
    }

    #[test]
    fn test_confirmations_block_ahead_of_tip() {
        assert_eq!(ChainState::new(100).confirmations(Some(101)), None);
    }
}
