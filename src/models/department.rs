use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::uuid_v7;
use crate::utils::validation::not_blank;

/// Tenant assigned to records created without one.
pub const DEFAULT_TENANT_ID: Uuid = Uuid::nil();

/// Request fields in declaration order, for reporting the first validation
/// failure. Keep in step with `DepartmentCreateReq` and `DepartmentUpdateReq`.
pub const DEPARTMENT_FIELDS: [&str; 9] = [
    "name",
    "english_name",
    "short_name",
    "org_code",
    "phone",
    "fax",
    "email",
    "address",
    "postal_code",
];

/// A row of the `org_department` table.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub english_name: Option<String>,
    pub short_name: Option<String>,
    pub org_code: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub tenant_id: Uuid,
}

impl Department {
    /// Builds a fresh record: new v7 id, both timestamps set to now and the
    /// default tenant.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Department {
            id: uuid_v7::generate(),
            name: name.into(),
            english_name: None,
            short_name: None,
            org_code: None,
            phone: None,
            fax: None,
            email: None,
            address: None,
            postal_code: None,
            create_time: now,
            update_time: now,
            tenant_id: DEFAULT_TENANT_ID,
        }
    }
}

// An explicit `null` name is left for validation to reject, like a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Serialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreateReq {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom = "not_blank",
        length(max = 255, message = "department name must not exceed 255 characters")
    )]
    pub name: String,
    #[validate(length(max = 255, message = "english name must not exceed 255 characters"))]
    pub english_name: Option<String>,
    #[validate(length(max = 100, message = "short name must not exceed 100 characters"))]
    pub short_name: Option<String>,
    #[validate(length(max = 50, message = "organization code must not exceed 50 characters"))]
    pub org_code: Option<String>,
    #[validate(length(max = 50, message = "phone must not exceed 50 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 50, message = "fax must not exceed 50 characters"))]
    pub fax: Option<String>,
    #[validate(length(max = 100, message = "email must not exceed 100 characters"))]
    pub email: Option<String>,
    #[validate(length(max = 500, message = "address must not exceed 500 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 20, message = "postal code must not exceed 20 characters"))]
    pub postal_code: Option<String>,
}

/// Partial update: `None` leaves the stored value untouched.
#[derive(Deserialize, Serialize, Validate, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdateReq {
    #[validate(
        custom = "not_blank",
        length(max = 255, message = "department name must not exceed 255 characters")
    )]
    pub name: Option<String>,
    #[validate(length(max = 255, message = "english name must not exceed 255 characters"))]
    pub english_name: Option<String>,
    #[validate(length(max = 100, message = "short name must not exceed 100 characters"))]
    pub short_name: Option<String>,
    #[validate(length(max = 50, message = "organization code must not exceed 50 characters"))]
    pub org_code: Option<String>,
    #[validate(length(max = 50, message = "phone must not exceed 50 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 50, message = "fax must not exceed 50 characters"))]
    pub fax: Option<String>,
    #[validate(length(max = 100, message = "email must not exceed 100 characters"))]
    pub email: Option<String>,
    #[validate(length(max = 500, message = "address must not exceed 500 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 20, message = "postal code must not exceed 20 characters"))]
    pub postal_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRsp {
    pub id: Uuid,
    pub name: String,
    pub english_name: Option<String>,
    pub short_name: Option<String>,
    pub org_code: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
    pub tenant_id: Uuid,
}
