use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};

use crate::domain::errors::DomainError;
use crate::domain::menu::{FoodItem, NewFoodItem};
use crate::domain::ports::MenuRepository;

/// Menu operations with boundary validation: raw form values come in, typed
/// domain values go to the repository.
pub struct MenuService<R> {
    repo: Arc<R>,
}

impl<R: MenuRepository> MenuService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn list_items(&self) -> Vec<FoodItem> {
        self.repo.list()
    }

    pub fn get_item(&self, id: u32) -> Option<FoodItem> {
        self.repo.find(id)
    }

    pub fn add_item(
        &self,
        name: &str,
        description: &str,
        price: &str,
        category: &str,
    ) -> Result<FoodItem, DomainError> {
        let name = required_field("name", name)?;
        let description = required_field("description", description)?;
        let category = required_field("category", category)?;
        let price = parse_price(price)?;

        Ok(self.repo.insert(NewFoodItem {
            name,
            description,
            price,
            category,
        }))
    }

    /// Returns false when the id is unknown; the caller treats that as a
    /// successful no-op.
    pub fn set_availability(&self, id: u32, available: bool) -> bool {
        self.repo.set_availability(id, available)
    }

    pub fn remove_item(&self, id: u32) -> bool {
        self.repo.remove(id)
    }

    pub fn item_count(&self) -> usize {
        self.repo.count()
    }
}

fn required_field(field: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::InvalidInput(format!(
            "'{field}' must not be empty"
        )));
    }
    Ok(value.to_string())
}

fn parse_price(raw: &str) -> Result<BigDecimal, DomainError> {
    let price = BigDecimal::from_str(raw.trim())
        .map_err(|_| DomainError::InvalidInput(format!("invalid price '{raw}'")))?;
    if price < BigDecimal::zero() {
        return Err(DomainError::InvalidInput(format!(
            "price must not be negative, got '{raw}'"
        )));
    }
    Ok(price)
}
