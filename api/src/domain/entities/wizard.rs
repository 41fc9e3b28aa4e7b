//! Step-wizard engine
//!
//! A bounded, linear sequence of form steps collecting pieces of one logical
//! submission. The state is either an active step in `1..=N` or one of the two
//! terminal outcomes:
//!
//! - advancing past the last step submits and hands the value bag out
//! - retreating before the first step cancels and discards the bag
//!
//! Values live in one bag for the whole wizard, so going back never loses
//! anything already typed. Validation only looks at the current step's fields.

use std::sync::Arc;

use serde::Serialize;

use super::fields::{FieldBag, FieldIssue, FieldKind, FieldRule, FieldValue, UploadMeta};
use crate::error::WizardError;

/// Declaration of one input on a step
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub rules: Vec<FieldRule>,
}

impl FieldDef {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
            rules: Vec::new(),
        }
    }

    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            required: false,
            ..Self::required(name, label, kind)
        }
    }

    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// One screen of a wizard
#[derive(Debug, Clone)]
pub struct StepDef {
    pub title: &'static str,
    pub fields: Vec<FieldDef>,
}

impl StepDef {
    pub fn new(title: &'static str, fields: Vec<FieldDef>) -> Self {
        Self { title, fields }
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect()
    }
}

/// Static definition of a wizard: its ordered steps
#[derive(Debug, Clone)]
pub struct WizardDef {
    steps: Vec<StepDef>,
}

impl WizardDef {
    /// Build a wizard definition. A wizard needs at least one step.
    pub fn new(steps: Vec<StepDef>) -> Option<Self> {
        if steps.is_empty() || steps.len() > u8::MAX as usize {
            return None;
        }
        Some(Self { steps })
    }

    pub fn total_steps(&self) -> u8 {
        self.steps.len() as u8
    }

    pub fn step(&self, step: Step) -> &StepDef {
        &self.steps[step.index()]
    }

    pub fn steps(&self) -> &[StepDef] {
        &self.steps
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }
}

/// A 1-based step number. Only the wizard creates these, so an out-of-range
/// step cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Step(u8);

impl Step {
    fn first() -> Self {
        Step(1)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    fn index(&self) -> usize {
        (self.0 - 1) as usize
    }

    fn next(self, total: u8) -> Option<Step> {
        if self.0 < total {
            Some(Step(self.0 + 1))
        } else {
            None
        }
    }

    fn prev(self) -> Option<Step> {
        if self.0 > 1 {
            Some(Step(self.0 - 1))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a wizard is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WizardState {
    Active { step: Step },
    Submitted,
    Cancelled,
}

/// Outcome of a navigation call
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Moved(Step),
    /// The completed bag, handed to whoever delivers the submission
    Submitted(FieldBag),
    Cancelled,
}

/// A running wizard
#[derive(Debug, Clone)]
pub struct Wizard {
    def: Arc<WizardDef>,
    state: WizardState,
    values: FieldBag,
    upload_limit: u64,
}

impl Wizard {
    pub fn new(def: Arc<WizardDef>, upload_limit: u64) -> Self {
        Self {
            def,
            state: WizardState::Active { step: Step::first() },
            values: FieldBag::new(),
            upload_limit,
        }
    }

    pub fn def(&self) -> &WizardDef {
        &self.def
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn values(&self) -> &FieldBag {
        &self.values
    }

    pub fn current_step(&self) -> Option<Step> {
        match self.state {
            WizardState::Active { step } => Some(step),
            _ => None,
        }
    }

    pub fn current_step_def(&self) -> Option<&StepDef> {
        self.current_step().map(|step| self.def.step(step))
    }

    /// Percentage of steps already passed; a single-step wizard reads 100
    pub fn progress_percent(&self) -> u8 {
        let total = self.def.total_steps() as u32;
        match self.state {
            WizardState::Active { step } if total > 1 => {
                ((step.number() as u32 - 1) * 100 / (total - 1)) as u8
            }
            WizardState::Cancelled => 0,
            _ => 100,
        }
    }

    /// Write a value into the bag. Works on any step; never moves the step.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), WizardError> {
        self.ensure_active()?;
        let field = self
            .def
            .field(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;

        if value.kind() != field.kind {
            return Err(WizardError::WrongKind {
                field: name.to_string(),
                expected: field.kind,
            });
        }

        if let FieldValue::Upload(meta) = &value {
            self.check_upload(name, meta)?;
        }

        self.values.insert(name, value);
        Ok(())
    }

    /// Attach a document. Oversized files are rejected and the field keeps
    /// whatever it held before.
    pub fn attach_upload(&mut self, name: &str, meta: UploadMeta) -> Result<(), WizardError> {
        self.set_field(name, FieldValue::Upload(meta))
    }

    /// Toggle an item in a multi-select field. Returns whether the item is
    /// selected afterwards.
    pub fn toggle(&mut self, name: &str, item: &str) -> Result<bool, WizardError> {
        self.ensure_active()?;
        let field = self
            .def
            .field(name)
            .ok_or_else(|| WizardError::UnknownField(name.to_string()))?;
        if field.kind != FieldKind::List {
            return Err(WizardError::WrongKind {
                field: name.to_string(),
                expected: FieldKind::List,
            });
        }

        let items = self
            .values
            .entry_list(name)
            .ok_or_else(|| WizardError::WrongKind {
                field: name.to_string(),
                expected: FieldKind::List,
            })?;

        if let Some(pos) = items.iter().position(|i| i == item) {
            items.remove(pos);
            Ok(false)
        } else {
            items.push(item.to_string());
            Ok(true)
        }
    }

    /// Whether the next successful advance submits
    pub fn on_last_step(&self) -> bool {
        matches!(self.state, WizardState::Active { step } if step.number() == self.def.total_steps())
    }

    /// Check the current step's fields without moving
    pub fn validate_current(&self) -> Result<(), WizardError> {
        let step = self.ensure_active()?;
        let def = self.def.step(step);

        let mut missing = Vec::new();
        let mut invalid = Vec::new();

        for field in &def.fields {
            match self.values.get(field.name) {
                Some(value) if value.is_present() => {
                    for rule in &field.rules {
                        if let Err(message) = rule.check(value) {
                            invalid.push(FieldIssue {
                                field: field.name.to_string(),
                                message,
                            });
                            break;
                        }
                    }
                }
                _ if field.required => missing.push(field.name.to_string()),
                _ => {}
            }
        }

        if missing.is_empty() && invalid.is_empty() {
            Ok(())
        } else {
            Err(WizardError::StepIncomplete { missing, invalid })
        }
    }

    /// Move forward, or submit from the last step.
    ///
    /// On a validation failure nothing changes.
    pub fn advance(&mut self) -> Result<Transition, WizardError> {
        let step = self.ensure_active()?;
        self.validate_current()?;

        match step.next(self.def.total_steps()) {
            Some(next) => {
                self.state = WizardState::Active { step: next };
                Ok(Transition::Moved(next))
            }
            None => {
                self.state = WizardState::Submitted;
                Ok(Transition::Submitted(std::mem::take(&mut self.values)))
            }
        }
    }

    /// Move back, or cancel from the first step. Going back keeps every value.
    pub fn retreat(&mut self) -> Result<Transition, WizardError> {
        let step = self.ensure_active()?;

        match step.prev() {
            Some(prev) => {
                self.state = WizardState::Active { step: prev };
                Ok(Transition::Moved(prev))
            }
            None => {
                self.state = WizardState::Cancelled;
                self.values = FieldBag::new();
                Ok(Transition::Cancelled)
            }
        }
    }

    fn ensure_active(&self) -> Result<Step, WizardError> {
        match self.state {
            WizardState::Active { step } => Ok(step),
            _ => Err(WizardError::SessionEnded),
        }
    }

    fn check_upload(&self, name: &str, meta: &UploadMeta) -> Result<(), WizardError> {
        if meta.size_bytes > self.upload_limit {
            return Err(WizardError::UploadTooLarge {
                field: name.to_string(),
                size: meta.size_bytes,
                limit: self.upload_limit,
            });
        }
        Ok(())
    }
}
