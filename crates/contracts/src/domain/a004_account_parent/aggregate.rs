use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};

crate::uuid_aggregate_id!(
    /// Account group identifier
    AccountParentId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    #[default]
    Chemical,
    Sparepart,
}

impl AccountCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountCategory::Chemical => "chemical",
            AccountCategory::Sparepart => "sparepart",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "sparepart" => AccountCategory::Sparepart,
            _ => AccountCategory::Chemical,
        }
    }
}

/// Group of accounts: one column of the categorization board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountParent {
    #[serde(flatten)]
    pub base: BaseAggregate<AccountParentId>,

    pub account_no: i64,
    pub category: AccountCategory,
}

impl AccountParent {
    pub fn new_for_insert(account_no: i64, name: &str, category: AccountCategory) -> Self {
        let base = BaseAggregate::new(
            AccountParentId::new_v4(),
            account_no.to_string(),
            name.trim().to_string(),
        );
        Self {
            base,
            account_no,
            category,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &AccountParentDto) {
        self.account_no = dto.account_no;
        self.base.code = dto.account_no.to_string();
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.category = dto.category;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Group name is required".into());
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

crate::impl_aggregate_root!(
    AccountParent,
    AccountParentId,
    "a004",
    "account_parent",
    "Account group",
    "Account groups"
);

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AccountParentDto {
    pub id: Option<String>,
    pub account_no: i64,
    pub description: String,
    pub category: AccountCategory,
    pub comment: Option<String>,
}

impl From<&AccountParent> for AccountParentDto {
    fn from(p: &AccountParent) -> Self {
        Self {
            id: Some(p.to_string_id()),
            account_no: p.account_no,
            description: p.base.description.clone(),
            category: p.category,
            comment: p.base.comment.clone(),
        }
    }
}

/// Card on the categorization board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountCard {
    pub id: String,
    pub account_no: i64,
    pub name: String,
    pub product_count: u64,
}

/// Board column; `parent_ref` is `None` for the "unassigned" column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardColumn {
    pub parent_ref: Option<String>,
    pub title: String,
    pub category: Option<AccountCategory>,
    pub accounts: Vec<AccountCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategorizationBoard {
    pub columns: Vec<BoardColumn>,
}

impl CategorizationBoard {
    /// Moves a card between columns locally, mirroring the server update.
    /// Returns false when the card is not on the board.
    pub fn move_card(&mut self, account_id: &str, target: Option<&str>) -> bool {
        let mut card = None;
        for column in self.columns.iter_mut() {
            if let Some(pos) = column.accounts.iter().position(|a| a.id == account_id) {
                card = Some(column.accounts.remove(pos));
                break;
            }
        }
        let Some(card) = card else {
            return false;
        };
        match self
            .columns
            .iter_mut()
            .find(|c| c.parent_ref.as_deref() == target)
        {
            Some(column) => {
                column.accounts.push(card);
                column.accounts.sort_by_key(|a| a.account_no);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, no: i64) -> AccountCard {
        AccountCard {
            id: id.into(),
            account_no: no,
            name: id.into(),
            product_count: 0,
        }
    }

    #[test]
    fn test_move_card_between_columns() {
        let mut board = CategorizationBoard {
            columns: vec![
                BoardColumn {
                    parent_ref: None,
                    title: "Unassigned".into(),
                    category: None,
                    accounts: vec![card("a", 2), card("b", 1)],
                },
                BoardColumn {
                    parent_ref: Some("p1".into()),
                    title: "Dyes".into(),
                    category: Some(AccountCategory::Chemical),
                    accounts: vec![card("c", 3)],
                },
            ],
        };
        assert!(board.move_card("a", Some("p1")));
        assert_eq!(board.columns[0].accounts.len(), 1);
        let ids: Vec<_> = board.columns[1].accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(!board.move_card("zzz", None));
    }

    #[test]
    fn test_category_roundtrip_names() {
        assert_eq!(AccountCategory::parse("SPAREPART"), AccountCategory::Sparepart);
        assert_eq!(AccountCategory::Chemical.as_str(), "chemical");
    }
}
