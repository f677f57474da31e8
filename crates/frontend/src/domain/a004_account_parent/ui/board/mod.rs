//! Account categorization board: one column per account group plus
//! "Unassigned". Cards are moved with HTML5 drag and drop.

use crate::shared::api_utils::{get_json, post_unit};
use crate::shared::icons::icon;
use contracts::domain::a003_account::SetAccountParentRequest;
use contracts::domain::a004_account_parent::CategorizationBoard;
use leptos::ev::DragEvent;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Column (by parent_ref) currently holding `account_id`
fn column_of(board: &CategorizationBoard, account_id: &str) -> Option<Option<String>> {
    board
        .columns
        .iter()
        .find(|c| c.accounts.iter().any(|a| a.id == account_id))
        .map(|c| c.parent_ref.clone())
}

#[component]
pub fn AccountBoard() -> impl IntoView {
    let board = RwSignal::new(CategorizationBoard::default());
    let error = RwSignal::new(None::<String>);
    let dragging = RwSignal::new(None::<String>);
    let over_column = RwSignal::new(None::<Option<String>>);

    let load = move || {
        spawn_local(async move {
            match get_json::<CategorizationBoard>("/api/a004_account_parent/board").await {
                Ok(b) => {
                    board.set(b);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        })
    };

    // Moves the card locally first; a failed request reloads the board.
    let drop_on = move |target: Option<String>| {
        over_column.set(None);
        let Some(account_id) = dragging.get_untracked() else {
            return;
        };
        dragging.set(None);
        if board.with_untracked(|b| column_of(b, &account_id)) == Some(target.clone()) {
            return;
        }
        let mut moved = false;
        board.update(|b| moved = b.move_card(&account_id, target.as_deref()));
        if !moved {
            return;
        }
        spawn_local(async move {
            let body = SetAccountParentRequest { parent_ref: target };
            let path = format!("/api/a003_account/{}/parent", account_id);
            if let Err(e) = post_unit(&path, &body).await {
                log::error!("failed to move account {}: {}", account_id, e);
                error.set(Some(e));
                load();
            }
        });
    };

    load();

    view! {
        <div class="page">
            <div class="header">
                <h2>"Account categorization"</h2>
                <div class="header__actions">
                    <Button on_click=move |_| load()>
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="board">
                {move || {
                    board
                        .get()
                        .columns
                        .into_iter()
                        .map(|column| {
                            let target_class = column.parent_ref.clone();
                            let target_over = column.parent_ref.clone();
                            let target_drop = column.parent_ref.clone();
                            let count = column.accounts.len();
                            view! {
                                <div
                                    class=move || {
                                        if over_column.get().as_ref() == Some(&target_class) {
                                            "board__column board__column--over"
                                        } else {
                                            "board__column"
                                        }
                                    }
                                    on:dragover=move |ev: DragEvent| {
                                        ev.prevent_default();
                                        over_column.set(Some(target_over.clone()));
                                    }
                                    on:drop=move |ev: DragEvent| {
                                        ev.prevent_default();
                                        drop_on(target_drop.clone());
                                    }
                                >
                                    <div class="board__column-title">
                                        <span>{column.title}</span>
                                        <span class="muted">{count}</span>
                                    </div>
                                    {column
                                        .accounts
                                        .into_iter()
                                        .map(|card| {
                                            let id = card.id.clone();
                                            view! {
                                                <div
                                                    class="board__card"
                                                    draggable="true"
                                                    on:dragstart=move |ev: DragEvent| {
                                                        if let Some(dt) = ev.data_transfer() {
                                                            let _ = dt.set_data("text/plain", &id);
                                                        }
                                                        dragging.set(Some(id.clone()));
                                                    }
                                                    on:dragend=move |_| over_column.set(None)
                                                >
                                                    <div>{format!("{} {}", card.account_no, card.name)}</div>
                                                    <div class="board__card-meta">
                                                        {format!("{} products", card.product_count)}
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_account_parent::{AccountCard, BoardColumn};

    #[test]
    fn test_column_of_finds_card() {
        let board = CategorizationBoard {
            columns: vec![
                BoardColumn {
                    parent_ref: None,
                    title: "Unassigned".into(),
                    category: None,
                    accounts: vec![],
                },
                BoardColumn {
                    parent_ref: Some("p1".into()),
                    title: "Dyes".into(),
                    category: None,
                    accounts: vec![AccountCard {
                        id: "a1".into(),
                        account_no: 1101,
                        name: "Reactive".into(),
                        product_count: 3,
                    }],
                },
            ],
        };
        assert_eq!(column_of(&board, "a1"), Some(Some("p1".into())));
        assert_eq!(column_of(&board, "zz"), None);
    }
}
