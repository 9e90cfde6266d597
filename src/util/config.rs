use serde::{Deserialize, Serialize};

use crate::error::{HashError, Result};

use super::types::{Seed, Variant};

///Engine settings as they arrive from a caller's config file. The seed is
/// read wide so out-of-range values are reported instead of truncated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HashConfig {
    #[serde(default)]
    pub seed: i64,
    #[serde(default)]
    pub variant: Variant,
}

impl HashConfig {
    pub fn new(seed: Seed, variant: Variant) -> Self {
        Self {
            seed: seed.into(),
            variant,
        }
    }

    pub fn validate(&self) -> Result<Seed> {
        Seed::try_from(self.seed).map_err(|_| {
            HashError::InvalidArgument(format!(
                "seed {} does not fit in a 32-bit signed integer",
                self.seed
            ))
        })
    }
}
