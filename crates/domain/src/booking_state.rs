// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking lifecycle states and transition logic.
//!
//! This module defines the booking states and the actions that move a
//! booking between them. Transitions are caller-initiated only; the system
//! never advances a booking based on time alone.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a booking.
///
/// Bookings in `Pending`, `Confirmed`, or `InProgress` occupy time on the
/// board and participate in overlap checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    /// Initial state. Not yet validated against the board.
    #[default]
    Draft,
    /// Awaiting confirmation. Occupies time on the board.
    Pending,
    /// Confirmed by an operator. Occupies time on the board.
    Confirmed,
    /// The reservation is currently being used.
    InProgress,
    /// The reservation finished normally. Terminal.
    Completed,
    /// The reservation was cancelled. Terminal.
    Cancelled,
}

impl BookingState {
    /// Returns the string representation of the state.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a state from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingState` if the string is not a
    /// valid state.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidBookingState(s.to_string())),
        }
    }

    /// Returns true if this state is terminal.
    ///
    /// Terminal states accept no transition except the unconstrained
    /// reset to draft.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Returns true if a booking in this state counts toward overlap checks.
    #[must_use]
    pub const fn counts_for_conflicts(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::InProgress)
    }

    /// Returns true if board validation is skipped for this state.
    ///
    /// Draft bookings are not yet validated against the board; cancellation
    /// is always allowed to persist past validity.
    #[must_use]
    pub const fn skips_validation(&self) -> bool {
        matches!(self, Self::Draft | Self::Cancelled)
    }
}

impl FromStr for BookingState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-initiated actions that move a booking between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionAction {
    /// Confirm a draft or pending booking.
    Confirm,
    /// Move a booking to pending. Unconstrained.
    SetPending,
    /// Start a confirmed booking.
    Start,
    /// Complete an in-progress booking.
    Complete,
    /// Cancel any booking that is not already terminal.
    Cancel,
    /// Reset a booking to draft. Unconstrained.
    ResetToDraft,
}

impl TransitionAction {
    /// Returns the string representation of the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confirm => "confirm",
            Self::SetPending => "set_pending",
            Self::Start => "start",
            Self::Complete => "complete",
            Self::Cancel => "cancel",
            Self::ResetToDraft => "reset_to_draft",
        }
    }

    /// Parses an action from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransitionAction` if the string is not
    /// a valid action.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "confirm" => Ok(Self::Confirm),
            "set_pending" => Ok(Self::SetPending),
            "start" => Ok(Self::Start),
            "complete" => Ok(Self::Complete),
            "cancel" => Ok(Self::Cancel),
            "reset_to_draft" => Ok(Self::ResetToDraft),
            _ => Err(DomainError::InvalidTransitionAction(s.to_string())),
        }
    }
}

impl FromStr for TransitionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for TransitionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves the state an action leads to from the given state.
///
/// # Arguments
///
/// * `current` - The booking's current state
/// * `action` - The attempted action
///
/// # Returns
///
/// The new state on success. The caller is responsible for re-validating
/// the booking against the board when the new state participates in
/// overlap checks.
///
/// # Errors
///
/// Returns `DomainError::InvalidTransition` if the action is not permitted
/// from the current state.
pub fn apply_action(
    current: BookingState,
    action: TransitionAction,
) -> Result<BookingState, DomainError> {
    match action {
        TransitionAction::Confirm => match current {
            BookingState::Draft | BookingState::Pending => Ok(BookingState::Confirmed),
            _ => Err(invalid(current, action, "only draft or pending bookings can be confirmed")),
        },
        TransitionAction::SetPending => Ok(BookingState::Pending),
        TransitionAction::Start => match current {
            BookingState::Confirmed => Ok(BookingState::InProgress),
            _ => Err(invalid(current, action, "booking must be confirmed to start")),
        },
        TransitionAction::Complete => match current {
            BookingState::InProgress => Ok(BookingState::Completed),
            _ => Err(invalid(current, action, "booking must be in progress to complete")),
        },
        TransitionAction::Cancel => {
            if current.is_terminal() {
                Err(invalid(
                    current,
                    action,
                    "completed or cancelled bookings cannot be cancelled",
                ))
            } else {
                Ok(BookingState::Cancelled)
            }
        }
        TransitionAction::ResetToDraft => Ok(BookingState::Draft),
    }
}

fn invalid(from: BookingState, action: TransitionAction, reason: &'static str) -> DomainError {
    DomainError::InvalidTransition {
        from: from.as_str().to_string(),
        action: action.as_str().to_string(),
        reason,
    }
}
