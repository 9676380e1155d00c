//! Snapshot definitions as reported by the controller.
//!
//! The wire model carries names, participating nodes, volume sizes, and a
//! set of named state flags. Presentation-level concerns such as the single
//! display state live in [`view`].

pub mod commands;
pub mod view;

use serde::de::{Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
    /// Snapshot state flags, carried on the wire as an array of flag names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SnapshotFlags: u32 {
        const DELETE = 1 << 0;
        const SUCCESSFUL = 1 << 1;
        const FAILED_DEPLOYMENT = 1 << 2;
        const FAILED_DISCONNECT = 1 << 3;
    }
}

const FLAG_NAMES: &[(SnapshotFlags, &str)] = &[
    (SnapshotFlags::DELETE, "DELETE"),
    (SnapshotFlags::SUCCESSFUL, "SUCCESSFUL"),
    (SnapshotFlags::FAILED_DEPLOYMENT, "FAILED_DEPLOYMENT"),
    (SnapshotFlags::FAILED_DISCONNECT, "FAILED_DISCONNECT"),
];

impl SnapshotFlags {
    /// Parse wire flag names. Names from newer controllers are ignored.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut flags = SnapshotFlags::empty();
        for name in names {
            if let Some((flag, _)) = FLAG_NAMES.iter().find(|(_, n)| *n == name) {
                flags |= *flag;
            }
        }
        flags
    }

    /// Wire names of the set flags, in declaration order.
    pub fn names(self) -> Vec<&'static str> {
        FLAG_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl Serialize for SnapshotFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let names = self.names();
        let mut seq = serializer.serialize_seq(Some(names.len()))?;
        for name in names {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SnapshotFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagsVisitor;

        impl<'de> Visitor<'de> for FlagsVisitor {
            type Value = SnapshotFlags;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of flag names")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut flags = SnapshotFlags::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    flags |= SnapshotFlags::from_names([name.as_str()]);
                }
                Ok(flags)
            }
        }

        deserializer.deserialize_seq(FlagsVisitor)
    }
}

/// Size of one volume captured by a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotVolumeDefinition {
    pub volume_number: u32,
    pub size_bytes: u64,
}

/// One snapshot definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDfn {
    pub resource_name: String,
    pub snapshot_name: String,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub volume_definitions: Vec<SnapshotVolumeDefinition>,
    #[serde(default)]
    pub flags: SnapshotFlags,
}
