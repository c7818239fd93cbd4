//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; adapters convert them into domain
//! types and report rows that break a domain invariant.

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::{
    Category, EmailAddress, NewProduct, Price, ProductCatalogEntry, ProductId, ProductName,
    Quantity, Role, User, UserId, UserName,
};

use super::schema::{products, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = String;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            id,
            name,
            email,
            role,
        } = row;
        let name = UserName::new(name).map_err(|err| err.to_string())?;
        let email = EmailAddress::new(email).map_err(|err| err.to_string())?;
        let role: Role = role
            .parse()
            .map_err(|err: crate::domain::RoleParseError| err.to_string())?;
        Ok(User::new(UserId::from(id), name, email, role))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().as_str(),
            email: user.email().as_str(),
            role: user.role().as_str(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price_minor: i64,
    pub category: String,
    pub quantity: i32,
}

impl TryFrom<ProductRow> for ProductCatalogEntry {
    type Error = String;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let ProductRow {
            id,
            name,
            price_minor,
            category,
            quantity,
        } = row;
        let invalid = |err: &dyn std::fmt::Display| format!("product {id}: {err}");
        let draft = NewProduct {
            name: ProductName::new(name).map_err(|err| invalid(&err))?,
            price: Price::from_minor_units(price_minor).map_err(|err| invalid(&err))?,
            category: Category::new(category).map_err(|err| invalid(&err))?,
            quantity: Quantity::try_from(quantity).map_err(|err| invalid(&err))?,
        };
        let id = ProductId::new(id).map_err(|err| invalid(&err))?;
        Ok(draft.into_entry(id))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow<'a> {
    pub name: &'a str,
    pub price_minor: i64,
    pub category: &'a str,
    pub quantity: i32,
}

impl<'a> TryFrom<&'a NewProduct> for NewProductRow<'a> {
    type Error = String;

    fn try_from(product: &'a NewProduct) -> Result<Self, Self::Error> {
        let quantity = i32::try_from(product.quantity.get()).map_err(|_| {
            format!(
                "quantity {} of `{}` exceeds the column range",
                product.quantity.get(),
                product.name.as_str()
            )
        })?;
        Ok(Self {
            name: product.name.as_str(),
            price_minor: product.price.minor_units(),
            category: product.category.as_str(),
            quantity,
        })
    }
}
