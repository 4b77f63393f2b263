use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::CatalogStore;
use crate::models::Course;

/// One held position in the cart. `course` is a snapshot taken when the
/// entry was created; the live seat count stays on the catalog record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub course: Course,
    pub qty: u32,
}

/// Result of a single cart mutation. Exhaustion and unknown ids are named
/// outcomes rather than silent no-ops so a caller can surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    Added { qty: u32 },
    Updated { qty: u32 },
    Removed,
    InventoryExhausted,
    NotInCart,
    UnknownCourse,
}

/// What a post-refresh reconcile did to the held entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    pub dropped: Vec<String>,
    pub clamped: Vec<(String, u32)>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.clamped.is_empty()
    }
}

/// Mapping from course id to held quantity. Every unit held here has been
/// taken out of the catalog's seat count, and every unit released goes back,
/// so `seats_remaining + held qty` stays constant per course.
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    entries: BTreeMap<String, CartEntry>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| e.qty > 0)
            .map(|e| (e.course.id.clone(), e))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    pub fn get(&self, course_id: &str) -> Option<&CartEntry> {
        self.entries.get(course_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_count(&self) -> u32 {
        self.entries.values().map(|e| e.qty).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.entries
            .values()
            .map(|e| e.course.price * f64::from(e.qty))
            .sum()
    }

    /// Takes one seat of `course_id` into the cart. The seat decrement and
    /// the entry update happen together; nothing changes on rejection.
    pub fn add(&mut self, catalog: &mut CatalogStore, course_id: &str) -> CartOutcome {
        let Some(course) = catalog.find_by_id(course_id) else {
            return CartOutcome::UnknownCourse;
        };
        if !course.has_seats() {
            return CartOutcome::InventoryExhausted;
        }
        let snapshot = course.clone();

        if catalog.adjust_seats(course_id, -1).is_err() {
            return CartOutcome::InventoryExhausted;
        }
        let entry = self
            .entries
            .entry(course_id.to_string())
            .or_insert(CartEntry {
                course: snapshot,
                qty: 0,
            });
        entry.qty += 1;
        CartOutcome::Added { qty: entry.qty }
    }

    /// Changes a held quantity by `delta`, releasing or taking seats one
    /// unit at a time. Decreases past zero remove the entry; increases stop
    /// at seat exhaustion.
    pub fn change_qty(
        &mut self,
        catalog: &mut CatalogStore,
        course_id: &str,
        delta: i64,
    ) -> CartOutcome {
        let Some(entry) = self.entries.get_mut(course_id) else {
            return CartOutcome::NotInCart;
        };

        if delta < 0 {
            let units = u32::try_from(delta.unsigned_abs().min(u64::from(entry.qty)))
                .unwrap_or(entry.qty);
            // A course that vanished in an authoritative refresh has no seats
            // to give back; the held units are simply released.
            if let Err(err) = catalog.adjust_seats(course_id, i64::from(units)) {
                warn!("seat restore skipped for {}: {}", course_id, err);
            }
            entry.qty -= units;
            if entry.qty == 0 {
                self.entries.remove(course_id);
                return CartOutcome::Removed;
            }
            return CartOutcome::Updated { qty: entry.qty };
        }

        let mut taken = 0;
        for _ in 0..delta {
            if catalog.adjust_seats(course_id, -1).is_err() {
                break;
            }
            taken += 1;
        }
        if taken == 0 {
            return CartOutcome::InventoryExhausted;
        }
        entry.qty += taken;
        CartOutcome::Updated { qty: entry.qty }
    }

    /// Cancels the cart: every held seat goes back to its course, then the
    /// ledger empties.
    pub fn clear(&mut self, catalog: &mut CatalogStore) {
        for (id, entry) in std::mem::take(&mut self.entries) {
            if let Err(err) = catalog.adjust_seats(&id, i64::from(entry.qty)) {
                warn!("seat restore skipped for {}: {}", id, err);
            }
        }
    }

    /// Empties the ledger without touching seat counts. Used after a
    /// successful checkout, when the held seats are sold rather than
    /// returned.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Re-applies held quantities after the catalog was replaced wholesale.
    /// The fresh catalog wins: entries for vanished ids are dropped and
    /// oversubscribed entries are clamped to what is still available.
    pub fn reconcile(&mut self, catalog: &mut CatalogStore) -> ReconcileReport {
        let mut report = ReconcileReport::default();

        for (id, entry) in std::mem::take(&mut self.entries) {
            let Some(course) = catalog.find_by_id(&id) else {
                warn!("dropping cart entry for vanished course {}", id);
                report.dropped.push(id);
                continue;
            };
            let held = entry.qty.min(course.seats_remaining);
            let snapshot = course.clone();
            if held == 0 {
                warn!("dropping oversubscribed cart entry for {}", id);
                report.dropped.push(id);
                continue;
            }
            // Pre-checked against seats_remaining, cannot go negative.
            if catalog.adjust_seats(&id, -i64::from(held)).is_err() {
                report.dropped.push(id);
                continue;
            }
            if held < entry.qty {
                warn!("clamping cart entry for {} from {} to {}", id, entry.qty, held);
                report.clamped.push((id.clone(), held));
            }
            self.entries.insert(
                id,
                CartEntry {
                    course: snapshot,
                    qty: held,
                },
            );
        }
        report
    }
}
