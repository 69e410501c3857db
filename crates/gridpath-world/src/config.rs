use crate::error::WorldError;

/// Board and episode parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct WorldConfig {
    /// Side length of the square board.
    pub size: i32,
    /// Steps after which an episode is truncated.
    pub max_steps: u32,
    /// Number of random obstacle draws per reset. Draws may repeat and draws
    /// landing on the start or goal are discarded, so fewer cells can end up
    /// blocked.
    pub obstacles: usize,
    /// Seed for obstacle placement; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            size: 10,
            max_steps: 200,
            obstacles: 15,
            seed: None,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.size < 1 {
            return Err(WorldError::InvalidConfig(format!(
                "size must be at least 1, got {}",
                self.size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = WorldConfig::default();
        assert_eq!(cfg.size, 10);
        assert_eq!(cfg.max_steps, 200);
        assert_eq!(cfg.obstacles, 15);
        assert_eq!(cfg.seed, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_empty_board() {
        let cfg = WorldConfig {
            size: 0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(WorldError::InvalidConfig(_))));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let cfg: WorldConfig = serde_json::from_str(r#"{"size": 6, "seed": 3}"#).unwrap();
        assert_eq!(cfg.size, 6);
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.max_steps, 200);
    }

    #[test]
    fn unknown_field_rejected() {
        assert!(serde_json::from_str::<WorldConfig>(r#"{"walls": 3}"#).is_err());
    }
}
