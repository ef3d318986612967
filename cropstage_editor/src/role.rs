// Copyright 2025 the Cropstage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// The box that currently accepts pointer input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveRole {
    /// The crop box. Its edge drags zoom the image.
    #[default]
    Crop,
    /// The image box, dragged and resized behind a fixed crop.
    Image,
}

impl ActiveRole {
    /// The other role.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Crop => Self::Image,
            Self::Image => Self::Crop,
        }
    }

    /// Lowercase name of the role.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Crop => "crop",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ActiveRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed role toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleChange {
    /// Role before the toggle.
    pub from: ActiveRole,
    /// Role after the toggle.
    pub to: ActiveRole,
}

/// Two-state machine deciding which box is active.
///
/// Starts on [`ActiveRole::Crop`] and flips on every toggle. There is no
/// terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleState {
    active: ActiveRole,
    toggles: u64,
}

impl RoleState {
    /// Creates the machine in the crop state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active role.
    #[must_use]
    pub fn active(&self) -> ActiveRole {
        self.active
    }

    /// Number of toggles since creation.
    #[must_use]
    pub fn toggles(&self) -> u64 {
        self.toggles
    }

    /// Flips the active role.
    pub fn toggle(&mut self) -> RoleChange {
        let from = self.active;
        self.active = from.other();
        self.toggles = self.toggles.wrapping_add(1);
        RoleChange {
            from,
            to: self.active,
        }
    }
}
