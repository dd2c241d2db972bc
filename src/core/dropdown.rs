//! Open/closed selector used by the form screens
//!
//! Each instance owns its own open flag; nothing stops two dropdowns from
//! being open at the same time.

use std::fmt;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum DropdownState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone)]
pub(crate) struct Dropdown<T> {
    label: &'static str,
    options: Vec<T>,
    value: T,
    state: DropdownState,
}

impl<T: Clone + PartialEq + fmt::Display> Dropdown<T> {
    pub(crate) fn new(label: &'static str, options: Vec<T>, value: T) -> Self {
        Self {
            label,
            options,
            value,
            state: DropdownState::Closed,
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn state(&self) -> DropdownState {
        self.state
    }

    /// Activating the toggle flips between open and closed
    pub(crate) fn toggle(&mut self) {
        self.state = match self.state {
            DropdownState::Closed => DropdownState::Open,
            DropdownState::Open => DropdownState::Closed,
        };
    }

    /// Pick one of the listed options. Only possible while open; sets the
    /// value and closes in one step.
    pub(crate) fn select(&mut self, option: &T) -> Result<(), AppError> {
        if self.state != DropdownState::Open {
            return Err(AppError::DropdownClosed { label: self.label });
        }
        let chosen = self
            .options
            .iter()
            .find(|o| *o == option)
            .cloned()
            .ok_or_else(|| self.unknown(&option.to_string()))?;
        self.value = chosen;
        self.state = DropdownState::Closed;
        Ok(())
    }

    /// Open the dropdown and pick the option whose label matches `label`
    /// (case-insensitive). On failure the dropdown is left as it was.
    pub(crate) fn choose(&mut self, label: &str) -> Result<(), AppError> {
        let wanted = label.trim();
        let option = self
            .options
            .iter()
            .find(|o| o.to_string().eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| self.unknown(wanted))?;
        if self.state() == DropdownState::Closed {
            self.toggle();
        }
        self.select(&option)
    }

    fn unknown(&self, value: &str) -> AppError {
        AppError::UnknownOption {
            label: self.label,
            value: value.to_string(),
            options: self
                .options
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
