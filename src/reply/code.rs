//! Bitmask-encoded controller return codes.
//!
//! A single `u64` carries three independent classification axes: outcome
//! class, operation class, and target object kind, plus a controller-assigned
//! cause number in the low bits. Call sites never look at raw integers; the
//! named predicates below centralize the decoding rules, including the
//! fail-closed handling of reserved bit patterns.

use serde::{Deserialize, Serialize};
use std::fmt;

bitflags::bitflags! {
    /// Named mask bits layered into a [`ReturnCode`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CodeMask: u64 {
        // Outcome class. An all-clear outcome field means success.
        const ERROR = 1 << 63;
        const WARNING = 1 << 62;
        const INFO = 1 << 61;

        // Operation class.
        const CREATE = 1 << 35;
        const MODIFY = 1 << 34;
        const DELETE = 1 << 33;

        // Target object kind.
        const NODE = 1 << 26;
        const STORAGE_POOL = 1 << 25;
        const STORAGE_POOL_DFN = 1 << 24;
        const RESOURCE_DFN = 1 << 23;
        const VOLUME_DFN = 1 << 22;
        const RESOURCE = 1 << 21;
        const SNAPSHOT = 1 << 20;
    }
}

impl CodeMask {
    /// All outcome-class bits.
    pub const OUTCOME: CodeMask = CodeMask::ERROR
        .union(CodeMask::WARNING)
        .union(CodeMask::INFO);
}

/// Outcome class of a single reply.
///
/// Variant order is significant: `Error > Warning > Success`, so the
/// worst-case status of a reply set is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Warning,
    Error,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "success"),
            Outcome::Warning => write!(f, "warning"),
            Outcome::Error => write!(f, "error"),
        }
    }
}

/// A controller return code. Reserved bits are preserved verbatim; only the
/// named masks are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnCode(u64);

impl ReturnCode {
    pub const fn new(raw: u64) -> Self {
        ReturnCode(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Classify the outcome field. Total over all `u64` values: reserved
    /// combinations (more than one outcome bit set) classify as Error.
    pub fn outcome(self) -> Outcome {
        let field = self.0 & CodeMask::OUTCOME.bits();
        if field == 0 || field == CodeMask::INFO.bits() {
            Outcome::Success
        } else if field == CodeMask::WARNING.bits() {
            Outcome::Warning
        } else {
            Outcome::Error
        }
    }

    /// True when any of the given mask bits are set.
    pub fn has(self, mask: CodeMask) -> bool {
        self.0 & mask.bits() != 0
    }

    pub fn is_error(self) -> bool {
        self.outcome() == Outcome::Error
    }

    pub fn is_warning(self) -> bool {
        self.outcome() == Outcome::Warning
    }

    /// True for informational replies. Informational replies still classify
    /// as [`Outcome::Success`]; this only drives display labeling.
    pub fn is_info(self) -> bool {
        self.0 & CodeMask::OUTCOME.bits() == CodeMask::INFO.bits()
    }

    pub fn is_success(self) -> bool {
        self.outcome() == Outcome::Success
    }

    /// Controller-assigned cause number (low 16 bits), opaque to the client.
    pub fn cause_number(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }
}

impl From<CodeMask> for ReturnCode {
    fn from(mask: CodeMask) -> Self {
        ReturnCode(mask.bits())
    }
}

impl fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}
