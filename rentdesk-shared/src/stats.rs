//! Payment totals shown on the dashboards.

use std::rc::Rc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Payment, PaymentStatus};

/// Sums of payment amounts bucketed by status.
///
/// `total_due` covers every payment; statuses other than paid, pending and
/// late only show up there. Sums saturate at [`Decimal::MAX`] instead of
/// overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatistics {
    pub total_due: Decimal,
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub total_late: Decimal,
    pub count: usize,
    pub paid_count: usize,
    pub pending_count: usize,
    pub late_count: usize,
}

impl PaymentStatistics {
    #[must_use]
    pub fn from_payments<'a, I>(payments: I) -> Self
    where
        I: IntoIterator<Item = &'a Payment>,
    {
        payments
            .into_iter()
            .fold(Self::default(), |mut stats, payment| {
                stats.total_due = stats.total_due.saturating_add(payment.amount);
                stats.count += 1;
                match payment.status {
                    PaymentStatus::Paid => {
                        stats.total_paid = stats.total_paid.saturating_add(payment.amount);
                        stats.paid_count += 1;
                    }
                    PaymentStatus::Pending => {
                        stats.total_pending = stats.total_pending.saturating_add(payment.amount);
                        stats.pending_count += 1;
                    }
                    PaymentStatus::Late => {
                        stats.total_late = stats.total_late.saturating_add(payment.amount);
                        stats.late_count += 1;
                    }
                    PaymentStatus::Partial | PaymentStatus::Cancelled | PaymentStatus::Other(_) => {}
                }
                stats
            })
    }

    /// Amount due that falls in none of the three tracked buckets.
    #[must_use]
    pub fn total_other(&self) -> Decimal {
        self.total_due
            .saturating_sub(self.total_paid)
            .saturating_sub(self.total_pending)
            .saturating_sub(self.total_late)
    }

    /// Paid share of the amount due, `None` when nothing is due.
    #[must_use]
    pub fn collection_rate(&self) -> Option<Decimal> {
        if self.total_due.is_zero() {
            None
        } else {
            self.total_paid.checked_div(self.total_due)
        }
    }
}

/// Memoizes [`PaymentStatistics`] by identity of the payment slice.
///
/// A recomputation happens only when a different `Rc` is passed in, even if
/// its contents are equal.
#[derive(Debug, Default)]
pub struct StatisticsCache {
    source: Option<Rc<[Payment]>>,
    stats: PaymentStatistics,
    computations: usize,
}

impl StatisticsCache {
    pub fn get(&mut self, payments: &Rc<[Payment]>) -> PaymentStatistics {
        let hit = self
            .source
            .as_ref()
            .is_some_and(|source| Rc::ptr_eq(source, payments));
        if !hit {
            self.stats = PaymentStatistics::from_payments(payments.iter());
            self.source = Some(Rc::clone(payments));
            self.computations += 1;
        }
        self.stats
    }

    /// Number of times the statistics were actually computed.
    #[must_use]
    pub const fn computations(&self) -> usize {
        self.computations
    }
}
