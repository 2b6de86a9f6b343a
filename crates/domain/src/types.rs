// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_state::BookingState;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// Represents a field's unique code.
///
/// Codes are the human-facing identifier for a field and must be unique
/// across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldCode {
    /// The code value.
    value: String,
}

impl FieldCode {
    /// Creates a new `FieldCode`.
    ///
    /// Codes are normalized to uppercase to ensure case-insensitive uniqueness.
    ///
    /// # Arguments
    ///
    /// * `value` - The code value (will be normalized to uppercase)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for FieldCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Represents the sport a field is configured for.
///
/// Sport categories are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SportCategory {
    /// Football on a full-size pitch.
    Football,
    /// Five-a-side football.
    #[serde(rename = "football_5")]
    FootballFive,
    /// Seven-a-side football.
    #[serde(rename = "football_7")]
    FootballSeven,
    /// Eleven-a-side football.
    #[serde(rename = "football_11")]
    FootballEleven,
    /// Volleyball.
    Volleyball,
    /// Basketball.
    Basketball,
    /// Tennis.
    Tennis,
    /// Padel.
    Padel,
    /// Any other sport.
    Other,
}

impl SportCategory {
    /// Parses a sport category from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known category.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "football" => Ok(Self::Football),
            "football_5" => Ok(Self::FootballFive),
            "football_7" => Ok(Self::FootballSeven),
            "football_11" => Ok(Self::FootballEleven),
            "volleyball" => Ok(Self::Volleyball),
            "basketball" => Ok(Self::Basketball),
            "tennis" => Ok(Self::Tennis),
            "padel" => Ok(Self::Padel),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidSportCategory(s.to_string())),
        }
    }

    /// Returns the string representation of this sport category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::FootballFive => "football_5",
            Self::FootballSeven => "football_7",
            Self::FootballEleven => "football_11",
            Self::Volleyball => "volleyball",
            Self::Basketball => "basketball",
            Self::Tennis => "tennis",
            Self::Padel => "padel",
            Self::Other => "other",
        }
    }
}

/// Represents the playing surface of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceType {
    /// Natural grass.
    NaturalGrass,
    /// Synthetic grass.
    SyntheticGrass,
    /// Concrete.
    Concrete,
    /// Parquet.
    Parquet,
    /// Clay.
    Clay,
}

impl SurfaceType {
    /// Parses a surface type from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a known surface type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "natural_grass" => Ok(Self::NaturalGrass),
            "synthetic_grass" => Ok(Self::SyntheticGrass),
            "concrete" => Ok(Self::Concrete),
            "parquet" => Ok(Self::Parquet),
            "clay" => Ok(Self::Clay),
            _ => Err(DomainError::InvalidSurfaceType(s.to_string())),
        }
    }

    /// Returns the string representation of this surface type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NaturalGrass => "natural_grass",
            Self::SyntheticGrass => "synthetic_grass",
            Self::Concrete => "concrete",
            Self::Parquet => "parquet",
            Self::Clay => "clay",
        }
    }
}

/// Weekday availability flags for a field.
///
/// A booking may only be placed on a weekday whose flag is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct WeekAvailability {
    /// Monday flag.
    pub monday: bool,
    /// Tuesday flag.
    pub tuesday: bool,
    /// Wednesday flag.
    pub wednesday: bool,
    /// Thursday flag.
    pub thursday: bool,
    /// Friday flag.
    pub friday: bool,
    /// Saturday flag.
    pub saturday: bool,
    /// Sunday flag.
    pub sunday: bool,
}

impl WeekAvailability {
    /// Creates an availability with every weekday enabled.
    #[must_use]
    pub const fn open_every_day() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
            saturday: true,
            sunday: true,
        }
    }

    /// Returns whether the field is open on the given weekday.
    #[must_use]
    pub const fn is_open(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Monday => self.monday,
            Weekday::Tuesday => self.tuesday,
            Weekday::Wednesday => self.wednesday,
            Weekday::Thursday => self.thursday,
            Weekday::Friday => self.friday,
            Weekday::Saturday => self.saturday,
            Weekday::Sunday => self.sunday,
        }
    }
}

impl Default for WeekAvailability {
    fn default() -> Self {
        Self::open_every_day()
    }
}

/// Operating hours and slot granularity for a field.
///
/// Times are fractional hours in 24-hour form (e.g. 6.5 = 06:30).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingHours {
    /// The opening time.
    opening: f64,
    /// The closing time.
    closing: f64,
    /// The width of a bookable slot in hours.
    slot_duration: f64,
}

impl OperatingHours {
    /// Creates new `OperatingHours`.
    ///
    /// # Arguments
    ///
    /// * `opening` - The opening time (0-24, must be before `closing`)
    /// * `closing` - The closing time (0-24)
    /// * `slot_duration` - The bookable slot width in hours (0 exclusive to 8 inclusive)
    ///
    /// # Errors
    ///
    /// Returns an error if either hour is outside 0-24, the opening time is
    /// not before the closing time, or the slot duration is outside (0, 8].
    pub fn new(opening: f64, closing: f64, slot_duration: f64) -> Result<Self, DomainError> {
        if !(0.0..=24.0).contains(&opening) {
            return Err(DomainError::HourOutOfRange { value: opening });
        }
        if !(0.0..=24.0).contains(&closing) {
            return Err(DomainError::HourOutOfRange { value: closing });
        }
        if opening >= closing {
            return Err(DomainError::InvalidOperatingHours { opening, closing });
        }
        if slot_duration <= 0.0 || slot_duration > 8.0 {
            return Err(DomainError::InvalidSlotDuration {
                duration: slot_duration,
            });
        }
        Ok(Self {
            opening,
            closing,
            slot_duration,
        })
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn opening(&self) -> f64 {
        self.opening
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn closing(&self) -> f64 {
        self.closing
    }

    /// Returns the slot duration in hours.
    #[must_use]
    pub const fn slot_duration(&self) -> f64 {
        self.slot_duration
    }
}

/// The three pricing tiers of a field.
///
/// The base rate always exists; weekend and night rates are optional
/// overrides selected by the pricing engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateCard {
    /// The default hourly rate.
    base_rate: f64,
    /// The hourly rate applied on Saturdays and Sundays, when set.
    weekend_rate: Option<f64>,
    /// The hourly rate applied to evening starts, when set.
    night_rate: Option<f64>,
}

impl RateCard {
    /// Creates a new `RateCard`.
    ///
    /// # Errors
    ///
    /// Returns an error if any provided rate is negative.
    pub fn new(
        base_rate: f64,
        weekend_rate: Option<f64>,
        night_rate: Option<f64>,
    ) -> Result<Self, DomainError> {
        if base_rate < 0.0 {
            return Err(DomainError::InvalidRate {
                tier: "base",
                rate: base_rate,
            });
        }
        if let Some(rate) = weekend_rate
            && rate < 0.0
        {
            return Err(DomainError::InvalidRate {
                tier: "weekend",
                rate,
            });
        }
        if let Some(rate) = night_rate
            && rate < 0.0
        {
            return Err(DomainError::InvalidRate {
                tier: "night",
                rate,
            });
        }
        Ok(Self {
            base_rate,
            weekend_rate,
            night_rate,
        })
    }

    /// Returns the base hourly rate.
    #[must_use]
    pub const fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Returns the weekend hourly rate if set.
    #[must_use]
    pub const fn weekend_rate(&self) -> Option<f64> {
        self.weekend_rate
    }

    /// Returns the night hourly rate if set.
    #[must_use]
    pub const fn night_rate(&self) -> Option<f64> {
        self.night_rate
    }
}

/// Optional physical characteristics of a field.
///
/// These are informational only and never participate in validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAmenities {
    /// The playing surface.
    pub surface: Option<SurfaceType>,
    /// Free-text description.
    pub description: Option<String>,
    /// Whether the field has lighting.
    pub has_lighting: bool,
    /// Whether the field is roofed.
    pub has_roof: bool,
    /// Maximum player capacity.
    pub max_players: Option<u32>,
}

/// A bookable sports field and its static configuration.
///
/// `field_id` is the canonical internal identifier assigned by the
/// persistence layer; `None` indicates the field has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Canonical internal identifier (opaque, stable, immutable).
    pub field_id: Option<i64>,
    /// The unique field code.
    pub code: FieldCode,
    /// The field's display name.
    pub name: String,
    /// The sport this field is configured for.
    pub sport: SportCategory,
    /// Operating hours and slot granularity.
    pub hours: OperatingHours,
    /// Weekday availability flags.
    pub week: WeekAvailability,
    /// The field's pricing tiers.
    pub rates: RateCard,
    /// Physical characteristics.
    pub amenities: FieldAmenities,
    /// Whether the field accepts new bookings and appears in listings.
    pub active: bool,
}

impl Field {
    /// Creates a new active `Field` without a persisted ID.
    ///
    /// The `field_id` will be assigned by the persistence layer upon first save.
    ///
    /// # Arguments
    ///
    /// * `code` - The unique field code (will be normalized to uppercase)
    /// * `name` - The field's display name
    /// * `sport` - The sport category
    /// * `hours` - Operating hours and slot granularity
    /// * `week` - Weekday availability flags
    /// * `rates` - The field's pricing tiers
    #[must_use]
    pub fn new(
        code: &str,
        name: String,
        sport: SportCategory,
        hours: OperatingHours,
        week: WeekAvailability,
        rates: RateCard,
    ) -> Self {
        Self {
            field_id: None,
            code: FieldCode::new(code),
            name,
            sport,
            hours,
            week,
            rates,
            amenities: FieldAmenities::default(),
            active: true,
        }
    }

    /// Creates a `Field` with an existing `field_id` (from persistence).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        field_id: i64,
        code: &str,
        name: String,
        sport: SportCategory,
        hours: OperatingHours,
        week: WeekAvailability,
        rates: RateCard,
        amenities: FieldAmenities,
        active: bool,
    ) -> Self {
        Self {
            field_id: Some(field_id),
            code: FieldCode::new(code),
            name,
            sport,
            hours,
            week,
            rates,
            amenities,
            active,
        }
    }
}

/// A reservation of a field for a time range on a date.
///
/// `booking_id` is the canonical internal identifier; the generated
/// `reference` is the stable human-readable identity used in conflict
/// reporting and the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical internal identifier (opaque, stable, immutable).
    pub booking_id: Option<i64>,
    /// The generated human-readable reference code.
    pub reference: String,
    /// The owning customer.
    pub customer_id: i64,
    /// The reserved field.
    pub field_id: i64,
    /// The calendar date of the reservation.
    pub date: Date,
    /// Start time in fractional hours.
    pub start_time: f64,
    /// End time in fractional hours (always after `start_time`).
    pub end_time: f64,
    /// The derived total price.
    pub total_price: f64,
    /// The lifecycle state.
    pub state: BookingState,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Number of players.
    pub players_count: Option<u32>,
    /// Creation timestamp (RFC 3339).
    pub created_at: Option<String>,
    /// Confirmation timestamp (RFC 3339), stamped by the confirm transition.
    pub confirmed_at: Option<String>,
    /// The responsible staff member, if any.
    pub staff_id: Option<i64>,
}

impl Booking {
    /// Creates a new `Booking` in the given initial state, without a
    /// persisted ID or derived price.
    ///
    /// The price is computed by the pricing engine when the booking is
    /// applied; timestamps are stamped at the same point.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        reference: String,
        customer_id: i64,
        field_id: i64,
        date: Date,
        start_time: f64,
        end_time: f64,
        state: BookingState,
    ) -> Self {
        Self {
            booking_id: None,
            reference,
            customer_id,
            field_id,
            date,
            start_time,
            end_time,
            total_price: 0.0,
            state,
            notes: None,
            players_count: None,
            created_at: None,
            confirmed_at: None,
            staff_id: None,
        }
    }

    /// Returns the booking duration in hours.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Returns whether this booking counts toward overlap checks.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.counts_for_conflicts()
    }
}
