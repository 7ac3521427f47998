//! Domain types for the Bioskop ticketing client.
//!
//! Value objects shared across the feature modules: identifiers, money,
//! seat labels, the cart, and order drafts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Persisted user identity (the backend keys users by username).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Create a `UserId` from a username
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Get the username as a string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a showtime schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(pub u64);

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a movie
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a cinema branch
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchId(pub u64);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a cafe product
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a persisted order
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money (whole rupiah; ticket and product prices carry no fractional part)
// ============================================================================

/// Money amount in whole Indonesian rupiah.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(pub i64);

impl Rupiah {
    /// Zero rupiah
    pub const ZERO: Self = Self(0);

    /// Create a `Rupiah` amount
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies by a quantity, saturating on overflow
    #[must_use]
    pub const fn multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as i64))
    }

    /// Adds two amounts, saturating on overflow
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rp {}", self.0)
    }
}

// ============================================================================
// Seats
// ============================================================================

/// A seat position in the fixed auditorium layout, displayed as `"A1"`.
///
/// Rows run `A` through `F` and columns `1` through `5`; every auditorium
/// uses the same rectangular plan with no partial rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatLabel {
    /// Row letter, `A..=F`
    pub row: char,
    /// Column number, `1..=5`
    pub col: u8,
}

impl SeatLabel {
    /// Create a seat label, validating it against the auditorium plan.
    ///
    /// Returns `None` for positions outside rows `A..=F` or columns `1..=5`.
    #[must_use]
    pub const fn new(row: char, col: u8) -> Option<Self> {
        if row >= SeatPlan::FIRST_ROW && row <= SeatPlan::LAST_ROW && col >= 1 && col <= SeatPlan::COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Parse a label like `"B3"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let row = chars.next()?;
        let col: u8 = chars.as_str().parse().ok()?;
        Self::new(row, col)
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

impl Serialize for SeatLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid seat label: {s}")))
    }
}

/// The fixed auditorium seat plan.
#[derive(Clone, Copy, Debug, Default)]
pub struct SeatPlan;

impl SeatPlan {
    /// First row letter
    pub const FIRST_ROW: char = 'A';
    /// Last row letter
    pub const LAST_ROW: char = 'F';
    /// Columns per row
    pub const COLS: u8 = 5;

    /// Iterate every seat label in row-major order (`A1`, `A2`, ... `F5`).
    pub fn labels() -> impl Iterator<Item = SeatLabel> {
        (Self::FIRST_ROW..=Self::LAST_ROW)
            .flat_map(|row| (1..=Self::COLS).map(move |col| SeatLabel { row, col }))
    }

    /// Whether a label belongs to the plan
    #[must_use]
    pub const fn contains(label: SeatLabel) -> bool {
        SeatLabel::new(label.row, label.col).is_some()
    }
}

// ============================================================================
// Cart
// ============================================================================

/// One cart entry. Present entries always have `quantity >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Units of the product
    pub quantity: u32,
    /// Price per unit at the time the product was added
    pub unit_price: Rupiah,
}

/// The cafe shopping cart.
///
/// Quantities never persist at zero: an adjustment that would take a line to
/// `<= 0` deletes the entry instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    /// Creates an empty cart
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: BTreeMap::new(),
        }
    }

    /// Adjust a product's quantity by `delta` (negative to remove units).
    ///
    /// A missing product counts as quantity 0. If the resulting quantity is
    /// `<= 0` the entry is deleted.
    pub fn adjust(&mut self, product_id: ProductId, unit_price: Rupiah, delta: i32) {
        let current = self.lines.get(&product_id).map_or(0_i64, |l| i64::from(l.quantity));
        let next = current + i64::from(delta);
        if next <= 0 {
            self.lines.remove(&product_id);
        } else {
            // Quantities stay well below u32::MAX in practice; clamp anyway.
            let quantity = u32::try_from(next).unwrap_or(u32::MAX);
            self.lines.insert(
                product_id,
                CartLine {
                    quantity,
                    unit_price,
                },
            );
        }
    }

    /// Total price across all lines
    #[must_use]
    pub fn total(&self) -> Rupiah {
        self.lines
            .values()
            .fold(Rupiah::ZERO, |acc, line| acc.add(line.unit_price.multiply(line.quantity)))
    }

    /// Total number of units across all lines
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|l| l.quantity).sum()
    }

    /// Quantity for a product (0 if absent)
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.lines.get(&product_id).map_or(0, |l| l.quantity)
    }

    /// Whether the cart has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate the cart lines in product-id order
    pub fn lines(&self) -> impl Iterator<Item = (ProductId, CartLine)> + '_ {
        self.lines.iter().map(|(id, line)| (*id, *line))
    }
}

// ============================================================================
// Order drafts
// ============================================================================

/// One product line in a cafe order payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product being ordered
    pub product_id: ProductId,
    /// Units ordered
    pub qty: u32,
    /// Unit price at order time
    pub price: Rupiah,
}

/// A client-composed order, built at submit time and dropped after the
/// request. The backend distinguishes the two shapes by the presence of
/// `seats` versus `products` in the JSON body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderDraft {
    /// Seat booking order for one showtime
    Seats {
        /// Ordering user
        user_id: UserId,
        /// Showtime being booked
        schedule_id: ScheduleId,
        /// Client-quoted total: seat count times ticket price
        total_amount: Rupiah,
        /// Selected seat labels
        seats: Vec<SeatLabel>,
        /// Per-seat ticket price
        ticket_price: Rupiah,
    },
    /// Cafe food-and-beverage order
    Cafe {
        /// Ordering user
        user_id: UserId,
        /// Client-quoted total across all lines
        total_amount: Rupiah,
        /// Ordered product lines
        products: Vec<OrderLine>,
    },
}

impl OrderDraft {
    /// The draft's client-quoted total
    #[must_use]
    pub const fn total(&self) -> Rupiah {
        match self {
            Self::Seats { total_amount, .. } | Self::Cafe { total_amount, .. } => *total_amount,
        }
    }
}

/// Immutable context for one seat-booking session.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowtimeContext {
    /// The showtime being booked
    pub schedule_id: ScheduleId,
    /// Per-seat ticket price for this showtime
    pub unit_price: Rupiah,
    /// Movie title for the ticket header
    pub movie_title: String,
    /// Branch name for the ticket header
    pub branch_name: String,
    /// Showtime start, backend-formatted
    pub start_time: String,
}
