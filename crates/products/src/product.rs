use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult, Entity, RecordId};

/// Maximum product name length, in characters.
pub const NAME_MAX_LENGTH: usize = 100;

/// Maximum product description length, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 500;

/// Smallest price a product may be listed at when it is created (0.01).
pub const MINIMUM_LISTING_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Number of fractional digits a price may carry.
pub const PRICE_SCALE: u32 = 2;

/// Largest representable price (`9999999999999999.99`, i.e. `NUMERIC(18, 2)`).
pub const MAX_PRICE: Decimal = Decimal::from_parts(2_808_348_671, 232_830_643, 0, false, PRICE_SCALE);

/// Largest accepted relative price change on update, in percent.
pub const MAX_PRICE_CHANGE_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Product identifier (store-assigned integer identity).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub RecordId);

impl ProductId {
    pub const UNASSIGNED: Self = Self(RecordId::UNASSIGNED);

    /// Identifier as supplied by a caller; must be strictly positive.
    pub fn parse(raw: i64) -> DomainResult<Self> {
        RecordId::parse_positive(raw, "product id").map(Self)
    }

    pub const fn from_raw(raw: i64) -> Self {
        Self(RecordId::from_raw(raw))
    }

    pub const fn get(self) -> i64 {
        self.0.get()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Catalog product.
///
/// All field invariants live here: constructors and mutators share
/// [`Product::validate`], so a `Product` value is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    stock: i32,
}

impl Product {
    /// Create a product that has not been persisted yet (id unassigned).
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> DomainResult<Self> {
        Self::with_id(ProductId::UNASSIGNED, name, description, price, stock)
    }

    /// Rebuild a product with a known identity (e.g. loaded from storage).
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();
        Self::validate(&name, &description, price, stock)?;

        Ok(Self {
            id,
            name,
            description,
            price,
            stock,
        })
    }

    /// Field-level checks shared by construction and update.
    pub fn validate(name: &str, description: &str, price: Decimal, stock: i32) -> DomainResult<()> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(DomainError::validation(format!(
                "name cannot exceed {NAME_MAX_LENGTH} characters"
            )));
        }
        if description.chars().count() > DESCRIPTION_MAX_LENGTH {
            return Err(DomainError::validation(format!(
                "description cannot exceed {DESCRIPTION_MAX_LENGTH} characters"
            )));
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if price.round_dp(PRICE_SCALE) != price {
            return Err(DomainError::validation(format!(
                "price cannot have more than {PRICE_SCALE} decimal places"
            )));
        }
        if price > MAX_PRICE {
            return Err(DomainError::validation(format!("price cannot exceed {MAX_PRICE}")));
        }
        Self::validate_stock(stock)
    }

    /// Creation-time rule: a new listing needs a strictly positive price.
    pub fn ensure_listing_price(price: Decimal) -> DomainResult<()> {
        if price < MINIMUM_LISTING_PRICE {
            return Err(DomainError::validation("price must be greater than 0"));
        }
        Ok(())
    }

    pub fn validate_stock(stock: i32) -> DomainResult<()> {
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        Ok(())
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> i32 {
        self.stock
    }

    /// Record the identity the store assigned on insertion.
    pub fn assign_id(&mut self, id: ProductId) {
        self.id = id;
    }

    /// Replace name, description, price and stock. The id is left untouched.
    ///
    /// On error nothing is modified.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        stock: i32,
    ) -> DomainResult<()> {
        let name = name.into();
        let description = description.into();
        Self::validate(&name, &description, price, stock)?;

        self.name = name;
        self.description = description;
        self.price = price;
        self.stock = stock;
        Ok(())
    }

    /// Whether moving to `new_price` stays within the allowed change band.
    ///
    /// A zero current price has no baseline, so any new price is allowed.
    /// Changes too large to represent are treated as out of band.
    pub fn can_update_price(&self, new_price: Decimal) -> bool {
        if self.price.is_zero() {
            return true;
        }

        new_price
            .checked_sub(self.price)
            .and_then(|delta| delta.checked_div(self.price))
            .and_then(|ratio| ratio.abs().checked_mul(Decimal::ONE_HUNDRED))
            .is_some_and(|percent| percent <= MAX_PRICE_CHANGE_PERCENT)
    }

    pub fn update_stock(&mut self, new_stock: i32) -> DomainResult<()> {
        Self::validate_stock(new_stock)?;
        self.stock = new_stock;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn is_persisted(&self) -> bool {
        self.id.0.is_assigned()
    }
}
