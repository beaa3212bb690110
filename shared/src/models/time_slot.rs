//! Delivery time-slot table
//!
//! The table order is the sort priority for every slot-ordered listing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    Morning,
    Evening,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: u32,
    /// Display label, e.g. `"5-6 PM"`
    pub range: String,
    #[serde(rename = "type")]
    pub kind: SlotKind,
    /// 24h hour the slot starts at
    pub start_hour: u32,
}

impl TimeSlot {
    fn new(id: u32, range: &str, kind: SlotKind, start_hour: u32) -> Self {
        Self {
            id,
            range: range.to_string(),
            kind,
            start_hour,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TimeSlotTable {
    slots: Vec<TimeSlot>,
}

impl Default for TimeSlotTable {
    fn default() -> Self {
        use SlotKind::*;
        Self {
            slots: vec![
                TimeSlot::new(1, "7-8 AM", Morning, 7),
                TimeSlot::new(2, "8-9 AM", Morning, 8),
                TimeSlot::new(3, "9-10 AM", Morning, 9),
                TimeSlot::new(4, "10-11 AM", Morning, 10),
                TimeSlot::new(5, "11-12 PM", Morning, 11),
                TimeSlot::new(6, "3-4 PM", Evening, 15),
                TimeSlot::new(7, "4-5 PM", Evening, 16),
                TimeSlot::new(8, "5-6 PM", Evening, 17),
                TimeSlot::new(9, "6-7 PM", Evening, 18),
                TimeSlot::new(10, "7-8 PM", Evening, 19),
                TimeSlot::new(11, "8-9 PM", Evening, 20),
            ],
        }
    }
}

impl TimeSlotTable {
    pub fn new(slots: Vec<TimeSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot whose start hour equals `hour`
    pub fn starting_at(&self, hour: u32) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.start_hour == hour)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.slots.iter().any(|s| s.range == label)
    }

    /// Sort priority of a label; unknown labels rank after every known slot
    pub fn rank(&self, label: Option<&str>) -> usize {
        label
            .and_then(|l| self.slots.iter().position(|s| s.range == l))
            .unwrap_or(usize::MAX)
    }
}
