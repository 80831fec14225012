use crate::constants::module_names::{CREDIT, DTC, IDENTITY, TASK};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Selects a subset of protocol modules when assembling a registry.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct ModuleSet: u32 {
        const DTC = 1 << 0;
        const CREDIT = 1 << 1;
        const IDENTITY = 1 << 2;
        const TASK = 1 << 3;

        const ALL = Self::DTC.bits()
            | Self::CREDIT.bits()
            | Self::IDENTITY.bits()
            | Self::TASK.bits();
    }
}

impl From<&str> for ModuleSet {
    fn from(s: &str) -> Self {
        match s {
            DTC => Self::DTC,
            CREDIT => Self::CREDIT,
            IDENTITY => Self::IDENTITY,
            TASK => Self::TASK,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl From<u32> for ModuleSet {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

impl Serialize for ModuleSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModuleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_to_flags() {
        assert_eq!(ModuleSet::from("credit"), ModuleSet::CREDIT);
        assert_eq!(ModuleSet::from("*"), ModuleSet::ALL);
        assert_eq!(ModuleSet::from("staking"), ModuleSet::empty());
    }

    #[test]
    fn serde_round_trips_bits() {
        let json = serde_json::to_string(&ModuleSet::ALL).unwrap();
        let back: ModuleSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ModuleSet::ALL);
    }
}
