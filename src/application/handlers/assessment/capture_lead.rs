//! CaptureLeadHandler - Command handler for storing contact details before results.

use std::sync::Arc;

use tracing::info;

use super::AssessmentError;
use crate::domain::assessment::LeadDetails;
use crate::domain::foundation::AssessmentId;
use crate::ports::ResponseStore;

/// Command to capture lead details. `None` means the respondent skipped the form.
#[derive(Debug, Clone)]
pub struct CaptureLeadCommand {
    pub assessment_id: AssessmentId,
    pub lead: Option<LeadDetails>,
}

/// Result of capturing a lead.
#[derive(Debug, Clone)]
pub struct CaptureLeadResult {
    pub lead: LeadDetails,
}

/// Handler for capturing leads.
pub struct CaptureLeadHandler {
    store: Arc<dyn ResponseStore>,
}

impl CaptureLeadHandler {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CaptureLeadCommand) -> Result<CaptureLeadResult, AssessmentError> {
        if !self.store.exists(cmd.assessment_id).await? {
            return Err(AssessmentError::NotFound(cmd.assessment_id));
        }

        let lead = cmd.lead.unwrap_or_else(LeadDetails::anonymous);
        self.store.save_lead(cmd.assessment_id, &lead).await?;

        info!(
            assessment_id = %cmd.assessment_id,
            anonymous = lead.is_anonymous(),
            "Lead captured"
        );

        Ok(CaptureLeadResult { lead })
    }
}
