//! 姓名值对象
//!
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 姓名（名 + 姓），两部分均不得为空白
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    /// 校验并创建姓名，首尾空白会被剔除
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> DomainResult<Self> {
        let full_name = Self {
            first_name: first_name.into().trim().to_string(),
            last_name: last_name.into().trim().to_string(),
        };
        full_name.validate()?;
        Ok(full_name)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl ValueObject for FullName {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.first_name.is_empty() {
            return Err(DomainError::InvalidFullName {
                reason: "first name must not be blank".to_string(),
            });
        }
        if self.last_name.is_empty() {
            return Err(DomainError::InvalidFullName {
                reason: "last name must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
