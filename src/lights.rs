//! The pattern board shared by every controller.
//!
//! `Lights` owns the active pattern and, once intake is complete, the
//! pattern table. Controllers differ only in how inputs reach it.

use crate::observability::messages::{IndexOutOfBounds, IntakeComplete, SwitchingLights};
use crate::observability::StructuredLog;
use serde::{Deserialize, Serialize};

/// Pattern active before any index has been selected.
pub const OFF: u32 = 0;

/// Upper bound on capacity reserved up front for a declared table.
///
/// The table still grows to the declared count; this only caps the
/// initial allocation for absurd counts.
pub const RESERVE_LIMIT: usize = 1024;

/// Allocate storage for a table of `len` declared patterns.
pub fn reserve_table(len: u32) -> Vec<u32> {
    Vec::with_capacity((len as usize).min(RESERVE_LIMIT))
}

/// An index that did not name a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfBounds {
    pub index: u32,
    pub len: usize,
}

/// Outcome of a running-phase input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Active pattern replaced (possibly by the same value)
    Switched { from: u32, to: u32 },

    /// Index was not below the table length; nothing changed
    OutOfBounds(OutOfBounds),
}

/// Counters of what the running phase has done so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Successful selections, including ones that re-selected the same pattern
    pub switches: u64,
    /// Rejected selections
    pub out_of_bounds: u64,
    /// Most recent rejected selection
    pub last_out_of_bounds: Option<OutOfBounds>,
}

/// Active pattern plus the installed pattern table.
#[derive(Clone, Debug, Default)]
pub struct Lights {
    current: u32,
    table: Option<Vec<u32>>,
    activity: Activity,
}

impl Lights {
    pub fn new() -> Self {
        Self {
            current: OFF,
            table: None,
            activity: Activity::default(),
        }
    }

    /// Currently active pattern.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Installed table, or `None` while intake is still running.
    pub fn patterns(&self) -> Option<&[u32]> {
        self.table.as_deref()
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Install the table collected during intake.
    ///
    /// Called exactly once per controller; the table is immutable afterwards.
    pub fn install(&mut self, table: Vec<u32>) {
        debug_assert!(self.table.is_none(), "pattern table installed twice");
        IntakeComplete {
            patterns: table.len(),
        }
        .log();
        self.table = Some(table);
    }

    /// Interpret `index` as a running-phase input.
    ///
    /// Before a table is installed every index is out of range.
    pub fn select(&mut self, index: u32) -> Selection {
        let table = self.table.as_deref().unwrap_or(&[]);
        match table.get(index as usize) {
            Some(&pattern) => {
                let from = self.current;
                SwitchingLights { from, to: pattern }.log();
                self.current = pattern;
                self.activity.switches += 1;
                Selection::Switched { from, to: pattern }
            }
            None => {
                let report = OutOfBounds {
                    index,
                    len: table.len(),
                };
                IndexOutOfBounds {
                    index,
                    len: report.len,
                }
                .log();
                self.activity.out_of_bounds += 1;
                self.activity.last_out_of_bounds = Some(report);
                Selection::OutOfBounds(report)
            }
        }
    }
}
