//! Metrics Use Case
//!
//! Row counts across the three tables plus the latest payslips.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entity::Payslip;
use crate::domain::repository::{EmployeeRepository, PayslipRepository, UserRepository};
use crate::error::PayrollResult;

/// Length of `recent_activity.payslips`
pub const RECENT_PAYSLIPS: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct TableCounts {
    pub users: u64,
    pub employees: u64,
    pub payslips: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentActivity {
    pub payslips: Vec<Payslip>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub timestamp: DateTime<Utc>,
    pub counts: TableCounts,
    pub recent_activity: RecentActivity,
}

pub struct MetricsUseCase<U, E, P>
where
    U: UserRepository,
    E: EmployeeRepository,
    P: PayslipRepository,
{
    users: Arc<U>,
    employees: Arc<E>,
    payslips: Arc<P>,
}

impl<U, E, P> MetricsUseCase<U, E, P>
where
    U: UserRepository,
    E: EmployeeRepository,
    P: PayslipRepository,
{
    pub fn new(users: Arc<U>, employees: Arc<E>, payslips: Arc<P>) -> Self {
        Self {
            users,
            employees,
            payslips,
        }
    }

    pub async fn collect(&self) -> PayrollResult<MetricsReport> {
        let (users, employees, payslips, mut recent) = tokio::try_join!(
            self.users.count(),
            self.employees.count(),
            self.payslips.count(),
            self.payslips.recent(RECENT_PAYSLIPS),
        )?;

        recent.truncate(RECENT_PAYSLIPS);

        Ok(MetricsReport {
            timestamp: Utc::now(),
            counts: TableCounts {
                users,
                employees,
                payslips,
            },
            recent_activity: RecentActivity { payslips: recent },
        })
    }
}
