//! 电话号码值对象
//!
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

// 数字开头（可带 +），允许数字、横线、空格与括号作为分隔
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9(][0-9\-\s()]{5,19}$").unwrap());

/// 电话号码，构造时校验格式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phone(String);

impl Phone {
    /// 校验并创建电话号码
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let phone = Self(value.into());
        phone.validate()?;
        Ok(phone)
    }

    /// 获取号码字符串
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Phone {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if PHONE_PATTERN.is_match(&self.0) {
            Ok(())
        } else {
            Err(DomainError::InvalidPhone {
                value: self.0.clone(),
            })
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
