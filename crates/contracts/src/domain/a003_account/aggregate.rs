use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Chart-of-accounts entry identifier
    AccountId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AccountType {
    #[default]
    Goods,
    Service,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Goods => "Goods",
            AccountType::Service => "Service",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "service" => AccountType::Service,
            _ => AccountType::Goods,
        }
    }
}

/// Purchasing account that products are booked against.
///
/// `code` mirrors `account_no` so lists and pickers can show it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(flatten)]
    pub base: BaseAggregate<AccountId>,

    pub account_no: i64,
    pub account_type: AccountType,
    pub alias: Option<String>,
    /// Reference to a004_account_parent (Kanban column)
    pub parent_ref: Option<String>,
}

impl Account {
    pub fn new_for_insert(account_no: i64, name: &str, account_type: AccountType) -> Self {
        let base = BaseAggregate::new(
            AccountId::new_v4(),
            account_no.to_string(),
            name.trim().to_string(),
        );
        Self {
            base,
            account_no,
            account_type,
            alias: None,
            parent_ref: None,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &AccountDto) {
        self.account_no = dto.account_no;
        self.base.code = dto.account_no.to_string();
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.account_type = dto.account_type;
        self.alias = dto.alias.clone().filter(|a| !a.trim().is_empty());
        self.parent_ref = dto.parent_ref.clone().filter(|p| !p.is_empty());
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Account name is required".into());
        }
        if self.account_no <= 0 {
            return Err("Account number must be a positive number".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

crate::impl_aggregate_root!(Account, AccountId, "a003", "account", "Account", "Accounts");

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccountDto {
    pub id: Option<String>,
    pub account_no: i64,
    /// Account name
    pub description: String,
    pub account_type: AccountType,
    pub alias: Option<String>,
    pub parent_ref: Option<String>,
    pub comment: Option<String>,
}

impl From<&Account> for AccountDto {
    fn from(a: &Account) -> Self {
        Self {
            id: Some(a.to_string_id()),
            account_no: a.account_no,
            description: a.base.description.clone(),
            account_type: a.account_type,
            alias: a.alias.clone(),
            parent_ref: a.parent_ref.clone(),
            comment: a.base.comment.clone(),
        }
    }
}

/// Body of the "move card" call on the categorization board
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SetAccountParentRequest {
    pub parent_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_code_follows_number() {
        let mut a = Account::new_for_insert(1101, "Chemicals", AccountType::Goods);
        assert_eq!(a.base.code, "1101");
        a.update(&AccountDto {
            account_no: 1102,
            description: "Chemicals".into(),
            ..Default::default()
        });
        assert_eq!(a.base.code, "1102");
    }

    #[test]
    fn test_account_number_must_be_positive() {
        let a = Account::new_for_insert(0, "X", AccountType::Service);
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_account_type_parse() {
        assert_eq!(AccountType::parse("service"), AccountType::Service);
        assert_eq!(AccountType::parse("anything"), AccountType::Goods);
    }
}
