//! Payslip Use Case

use std::sync::Arc;

use chrono::Utc;
use kernel::id::EmployeeId;
use serde_json::{Map, Number, Value};

use crate::domain::entity::payslip::SERVER_STAMPED_FIELDS;
use crate::domain::entity::{NewPayslip, Payslip, SessionUser};
use crate::domain::repository::PayslipRepository;
use crate::error::{BackendError, PayrollError, PayrollResult};

/// Validated create request
pub struct CreatePayslipInput {
    pub employee_id: EmployeeId,
    pub amount: Number,
    pub fields: Map<String, Value>,
}

pub struct PayslipUseCase<P>
where
    P: PayslipRepository,
{
    payslips: Arc<P>,
}

impl<P> PayslipUseCase<P>
where
    P: PayslipRepository,
{
    pub fn new(payslips: Arc<P>) -> Self {
        Self { payslips }
    }

    pub async fn list(&self) -> PayrollResult<Vec<Payslip>> {
        Ok(self.payslips.list().await?)
    }

    /// Insert one payslip dated now and return the stored row
    pub async fn create(
        &self,
        actor: &SessionUser,
        input: CreatePayslipInput,
    ) -> PayrollResult<Payslip> {
        if input.employee_id.as_str().trim().is_empty() {
            return Err(PayrollError::InvalidInput(
                "Employee id is required".to_string(),
            ));
        }
        if !input.amount.as_f64().is_some_and(|a| a.is_finite() && a >= 0.0) {
            return Err(PayrollError::InvalidInput(
                "Amount must be a non-negative number".to_string(),
            ));
        }

        let mut fields = input.fields;
        for key in SERVER_STAMPED_FIELDS {
            fields.remove(key);
        }

        let payslip = NewPayslip {
            employee_id: input.employee_id.clone(),
            amount: input.amount,
            date: Utc::now(),
            fields,
        };

        let created = self
            .payslips
            .create(&payslip)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode("insert returned no rows".to_string()))?;

        tracing::info!(
            actor = %actor.id,
            payslip_id = ?created.get("id"),
            employee_id = %input.employee_id,
            "Payslip created"
        );
        Ok(created)
    }
}
