//! Add-job form
//!
//! Machine, state and stage are dropdowns; the product id is free text and
//! is not validated.

use crate::core::dropdown::Dropdown;
use crate::core::types::{Job, Machine, PowerState, Stage};
use crate::error::AppError;

pub(crate) const DEFAULT_MACHINE: &str = "Cutting MC/1";
pub(crate) const DEFAULT_PRODUCT: &str = "Product A";

/// Raw field values as typed by the user; `None` keeps the form default
#[derive(Debug, Clone, Default)]
pub(crate) struct JobRequest {
    pub(crate) machine: Option<String>,
    pub(crate) product: Option<String>,
    pub(crate) state: Option<String>,
    pub(crate) stage: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct JobForm {
    machine: Dropdown<String>,
    product: String,
    state: Dropdown<PowerState>,
    stage: Dropdown<Stage>,
}

impl JobForm {
    pub(crate) fn new(machines: &[Machine]) -> Self {
        let options: Vec<String> = machines.iter().map(|m| m.name.clone()).collect();
        let initial = options
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_MACHINE.to_string());
        Self {
            machine: Dropdown::new("machine", options, initial),
            product: DEFAULT_PRODUCT.to_string(),
            state: Dropdown::new("state", PowerState::ALL.to_vec(), PowerState::On),
            stage: Dropdown::new("stage", Stage::ALL.to_vec(), Stage::Milling),
        }
    }

    pub(crate) fn fill(&mut self, request: &JobRequest) -> Result<(), AppError> {
        if let Some(machine) = &request.machine {
            self.machine.choose(machine)?;
        }
        if let Some(product) = &request.product {
            self.product = product.clone();
        }
        if let Some(state) = &request.state {
            self.state.choose(state)?;
        }
        if let Some(stage) = &request.stage {
            self.stage.choose(stage)?;
        }
        Ok(())
    }

    pub(crate) fn submit(&self) -> Job {
        Job {
            machine: self.machine.value().clone(),
            product: self.product.clone(),
            state: *self.state.value(),
            stage: *self.stage.value(),
        }
    }
}
