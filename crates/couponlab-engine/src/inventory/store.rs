//! In-memory coupon inventory.
//!
//! Each coupon's remaining count lives in its own atomic cell. The safe path
//! updates a cell with a single compare-and-swap; the racy path reads and
//! writes it in two unrelated steps. The map of cells sits behind a lock only
//! so that [`InventoryStore::reset`] can swap the whole map at once.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard};

use tracing::{debug, info};

use couponlab_core::error::AppError;
use couponlab_core::result::AppResult;
use couponlab_core::types::{Coupon, RemainingUses};

/// Result of a single atomic check-and-decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeRedeem {
    /// Whether a use was granted.
    pub granted: bool,
    /// Remaining uses after the operation.
    pub remaining: RemainingUses,
}

/// Owner of every coupon's remaining-use count.
#[derive(Debug)]
pub struct InventoryStore {
    /// Initial snapshot, keyed by code. Never mutated after construction.
    catalog: BTreeMap<String, Coupon>,
    /// Live counts, one atomic cell per code.
    cells: RwLock<HashMap<String, AtomicI64>>,
}

impl InventoryStore {
    /// Builds an inventory seeded from `coupons`.
    ///
    /// Rejects empty or duplicate codes and zero discounts.
    pub fn from_catalog(coupons: Vec<Coupon>) -> AppResult<Self> {
        let mut catalog = BTreeMap::new();
        for coupon in coupons {
            if coupon.code.trim().is_empty() {
                return Err(AppError::configuration("Coupon code must not be empty"));
            }
            if coupon.discount == 0 {
                return Err(AppError::configuration(format!(
                    "Coupon '{}' must grant a positive discount",
                    coupon.code
                )));
            }
            let code = coupon.code.clone();
            if catalog.insert(code.clone(), coupon).is_some() {
                return Err(AppError::configuration(format!(
                    "Duplicate coupon code '{code}'"
                )));
            }
        }

        let cells = RwLock::new(fresh_cells(&catalog));
        info!(coupons = catalog.len(), "Coupon inventory initialized");
        Ok(Self { catalog, cells })
    }

    /// The initial catalog in code order.
    pub fn catalog(&self) -> impl Iterator<Item = &Coupon> {
        self.catalog.values()
    }

    /// Looks up a coupon with its live remaining count.
    pub fn get(&self, code: &str) -> AppResult<Coupon> {
        let coupon = self.catalog.get(code).ok_or_else(AppError::coupon_not_found)?;
        let remaining = self.with_cell(code, |cell| cell.load(Ordering::Acquire))?;
        Ok(coupon.with_uses(RemainingUses::from_raw(remaining)))
    }

    /// Atomically checks and decrements the count for `code`.
    ///
    /// Finite counts above zero drop by exactly one; zero is left alone and
    /// reported as not granted; unlimited coupons are granted unchanged.
    pub fn try_safe_redeem(&self, code: &str) -> AppResult<SafeRedeem> {
        self.with_cell(code, |cell| {
            match cell.fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                (raw > 0).then(|| raw - 1)
            }) {
                Ok(previous) => SafeRedeem {
                    granted: true,
                    remaining: RemainingUses::from_raw(previous - 1),
                },
                Err(raw) => {
                    let current = RemainingUses::from_raw(raw);
                    SafeRedeem {
                        granted: !current.is_exhausted(),
                        remaining: current,
                    }
                }
            }
        })
    }

    /// First half of the check-then-act sequence: a plain read.
    pub fn racy_read(&self, code: &str) -> AppResult<RemainingUses> {
        self.with_cell(code, |cell| RemainingUses::from_raw(cell.load(Ordering::Acquire)))
    }

    /// Second half of the check-then-act sequence: writes
    /// `observed_initial - 1` regardless of what the cell holds now.
    pub fn racy_commit(&self, code: &str, observed_initial: u32) -> AppResult<RemainingUses> {
        let written = observed_initial.saturating_sub(1);
        self.with_cell(code, |cell| {
            let overwritten = cell.swap(i64::from(written), Ordering::AcqRel);
            debug!(
                code,
                observed_initial,
                overwritten,
                written,
                "Racy commit"
            );
        })?;
        Ok(RemainingUses::Finite(written))
    }

    /// Restores every count to the initial snapshot in one step.
    pub fn reset(&self) -> AppResult<()> {
        let mut cells = self
            .cells
            .write()
            .map_err(|_| AppError::internal("Inventory lock poisoned"))?;
        *cells = fresh_cells(&self.catalog);
        info!("Coupon inventory reset to initial snapshot");
        Ok(())
    }

    /// Current remaining count for every coupon.
    pub fn snapshot(&self) -> AppResult<BTreeMap<String, RemainingUses>> {
        let cells = self.read_cells()?;
        Ok(self
            .catalog
            .keys()
            .filter_map(|code| {
                cells.get(code).map(|cell| {
                    (
                        code.clone(),
                        RemainingUses::from_raw(cell.load(Ordering::Acquire)),
                    )
                })
            })
            .collect())
    }

    fn read_cells(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, AtomicI64>>> {
        self.cells
            .read()
            .map_err(|_| AppError::internal("Inventory lock poisoned"))
    }

    fn with_cell<T>(&self, code: &str, f: impl FnOnce(&AtomicI64) -> T) -> AppResult<T> {
        let cells = self.read_cells()?;
        let cell = cells.get(code).ok_or_else(AppError::coupon_not_found)?;
        Ok(f(cell))
    }
}

fn fresh_cells(catalog: &BTreeMap<String, Coupon>) -> HashMap<String, AtomicI64> {
    catalog
        .iter()
        .map(|(code, coupon)| (code.clone(), AtomicI64::new(coupon.uses.to_raw())))
        .collect()
}
