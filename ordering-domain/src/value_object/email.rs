//! 邮箱地址值对象
//!
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

// 本地部分 + @ + 含点号的域名；跨客户唯一性由应用层负责
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").unwrap());

/// 邮箱地址，构造时校验格式
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// 校验并创建邮箱地址
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let email = Self(value.into());
        email.validate()?;
        Ok(email)
    }

    /// 获取邮箱字符串
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if EMAIL_PATTERN.is_match(&self.0) {
            Ok(())
        } else {
            Err(DomainError::InvalidEmail {
                value: self.0.clone(),
            })
        }
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
