use super::repository;
use crate::shared::audit;
use crate::shared::error::{ServiceError, ServiceResult};
use contracts::domain::a003_account::Account;
use contracts::domain::a004_account_parent::{
    AccountCard, AccountParent, AccountParentDto, BoardColumn, CategorizationBoard,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::audit::AuditAction;
use contracts::shared::list::{ListQuery, ListResponse, PageMeta};
use std::collections::HashMap;
use uuid::Uuid;

async fn ensure_no_free(account_no: i64, own_id: Option<Uuid>) -> ServiceResult<()> {
    if let Some(existing) = repository::find_by_no(account_no).await? {
        if Some(existing.base.id.value()) != own_id {
            return Err(ServiceError::Conflict(format!(
                "Account group number {} already exists",
                account_no
            )));
        }
    }
    Ok(())
}

pub async fn create(dto: AccountParentDto) -> ServiceResult<Uuid> {
    let mut aggregate = AccountParent::new_for_insert(dto.account_no, &dto.description, dto.category);
    aggregate.base.set_comment(dto.comment);

    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_no_free(aggregate.account_no, None).await?;
    aggregate.before_write();

    Ok(repository::insert(&aggregate).await?)
}

pub async fn update(dto: AccountParentDto) -> ServiceResult<()> {
    let id = dto
        .id
        .as_deref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| ServiceError::Validation("Invalid ID".into()))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account group", id))?;
    let old = aggregate.clone();

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_no_free(aggregate.account_no, Some(id)).await?;
    aggregate.before_write();
    aggregate.base.metadata.increment_version();

    repository::update(&aggregate).await?;
    audit::record(
        &AccountParent::full_name(),
        &id.to_string(),
        AuditAction::Update,
        Some(&old),
        Some(&aggregate),
    )
    .await;
    Ok(())
}

/// Refused while products are booked on accounts of this group
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let existing = repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account group", id))?;

    let accounts: Vec<String> =
        crate::domain::a003_account::repository::list_by_parent(&id.to_string())
            .await?
            .iter()
            .map(Account::to_string_id)
            .collect();
    let used = crate::domain::a002_product::repository::count_by_accounts(&accounts).await?;
    if used > 0 {
        return Err(ServiceError::Conflict(format!(
            "Account group is used by {} products",
            used
        )));
    }

    repository::soft_delete(id).await?;
    audit::record(
        &AccountParent::full_name(),
        &id.to_string(),
        AuditAction::Delete,
        Some(&existing),
        None,
    )
    .await;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> ServiceResult<AccountParent> {
    repository::get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Account group", id))
}

pub async fn list_all() -> anyhow::Result<Vec<AccountParent>> {
    repository::list_all().await
}

pub async fn list_paginated(query: ListQuery) -> anyhow::Result<ListResponse<AccountParent>> {
    let query = query.normalized();
    let (items, total) = repository::list_paginated(&query).await?;
    Ok(ListResponse::new(items, PageMeta::for_query(&query, total)))
}

/// Columns of the categorization board: "Unassigned" first, then one per group
pub fn build_board(
    parents: &[AccountParent],
    accounts: &[Account],
    product_counts: &HashMap<String, u64>,
) -> CategorizationBoard {
    let card = |a: &Account| AccountCard {
        id: a.to_string_id(),
        account_no: a.account_no,
        name: a.base.description.clone(),
        product_count: product_counts.get(&a.to_string_id()).copied().unwrap_or(0),
    };
    let known: Vec<String> = parents.iter().map(AccountParent::to_string_id).collect();

    let mut unassigned: Vec<AccountCard> = accounts
        .iter()
        .filter(|a| {
            a.parent_ref
                .as_ref()
                .map_or(true, |p| !known.contains(p))
        })
        .map(card)
        .collect();
    unassigned.sort_by_key(|c| c.account_no);

    let mut columns = vec![BoardColumn {
        parent_ref: None,
        title: "Unassigned".to_string(),
        category: None,
        accounts: unassigned,
    }];

    for parent in parents {
        let id = parent.to_string_id();
        let mut cards: Vec<AccountCard> = accounts
            .iter()
            .filter(|a| a.parent_ref.as_deref() == Some(id.as_str()))
            .map(card)
            .collect();
        cards.sort_by_key(|c| c.account_no);
        columns.push(BoardColumn {
            parent_ref: Some(id),
            title: format!("{} {}", parent.account_no, parent.base.description),
            category: Some(parent.category),
            accounts: cards,
        });
    }

    CategorizationBoard { columns }
}

pub async fn get_board() -> anyhow::Result<CategorizationBoard> {
    let parents = repository::list_all().await?;
    let accounts = crate::domain::a003_account::repository::list_all().await?;
    let counts = crate::domain::a002_product::repository::count_per_account().await?;
    Ok(build_board(&parents, &accounts, &counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_account::AccountType;
    use contracts::domain::a004_account_parent::AccountCategory;

    #[test]
    fn test_board_puts_orphans_in_unassigned() {
        let dyes = AccountParent::new_for_insert(5100, "Dyes", AccountCategory::Chemical);
        let mut a1 = Account::new_for_insert(5102, "Reactive", AccountType::Goods);
        a1.parent_ref = Some(dyes.to_string_id());
        let a2 = Account::new_for_insert(5101, "Misc", AccountType::Goods);
        let mut a3 = Account::new_for_insert(5103, "Lost", AccountType::Goods);
        a3.parent_ref = Some("deleted-parent".into());

        let mut counts = HashMap::new();
        counts.insert(a1.to_string_id(), 4);

        let board = build_board(&[dyes], &[a1, a2, a3], &counts);
        assert_eq!(board.columns.len(), 2);
        let unassigned: Vec<i64> = board.columns[0]
            .accounts
            .iter()
            .map(|c| c.account_no)
            .collect();
        assert_eq!(unassigned, vec![5101, 5103]);
        assert_eq!(board.columns[1].title, "5100 Dyes");
        assert_eq!(board.columns[1].accounts[0].product_count, 4);
    }
}
