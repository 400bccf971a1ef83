//! Chemical species shown by the explainer and their data keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four molecules of the reaction sequence, in step order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// NaNO₂, the food preservative.
    SodiumNitrite,
    /// HNO₂, formed in stomach acid.
    NitrousAcid,
    /// NO⁺, the nitrosating agent left after nitrous acid decomposes.
    Nitrosonium,
    /// R₂N–N=O, the product of nitrosating a secondary amine.
    Nitrosamine,
}

impl Species {
    /// Every species, indexed by step.
    pub const ALL: [Species; 4] = [
        Species::SodiumNitrite,
        Species::NitrousAcid,
        Species::Nitrosonium,
        Species::Nitrosamine,
    ];

    /// Stable identifier used for scene lookups and DOM ids.
    #[must_use]
    pub fn data_key(self) -> &'static str {
        match self {
            Species::SodiumNitrite => "sodium_nitrite",
            Species::NitrousAcid => "nitrous_acid",
            Species::Nitrosonium => "nitrosonium",
            Species::Nitrosamine => "nitrosamine",
        }
    }

    /// Reverse of [`data_key`](Self::data_key).
    #[must_use]
    pub fn from_data_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.data_key() == key)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(super::data::record(*self).name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_keys_round_trip() {
        for species in Species::ALL {
            assert_eq!(Species::from_data_key(species.data_key()), Some(species));
        }
        assert_eq!(Species::from_data_key("stomach"), None);
    }

    #[test]
    fn serde_uses_data_keys() {
        let json = serde_json::to_string(&Species::NitrousAcid).unwrap();
        assert_eq!(json, "\"nitrous_acid\"");
    }
}
