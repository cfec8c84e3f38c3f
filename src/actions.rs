//! Mutation Actions
//!
//! Item writes triggered from the list. A successful write invalidates the
//! list; every outcome is reported as a transient notice.

use std::fmt;

use crate::api::ApiError;
use crate::context::AppContext;
use crate::models::{ItemStatus, NewItem};
use crate::store::{store_notify, Notice, UiStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Toggle,
    Remove,
}

impl Mutation {
    fn success_text(self) -> &'static str {
        match self {
            Mutation::Create => "Item added",
            Mutation::Toggle => "Item updated",
            Mutation::Remove => "Item removed",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mutation::Create => "create",
            Mutation::Toggle => "toggle",
            Mutation::Remove => "remove",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub notice: Notice,
    pub invalidate: bool,
}

/// Only a successful write makes the list stale
pub fn outcome<T>(mutation: Mutation, result: &Result<T, ApiError>) -> MutationOutcome {
    match result {
        Ok(_) => MutationOutcome {
            notice: Notice::success(mutation.success_text()),
            invalidate: true,
        },
        Err(err) => MutationOutcome {
            notice: Notice::error(err.user_message()),
            invalidate: false,
        },
    }
}

pub async fn create_item(ctx: AppContext, store: UiStore, task: String) -> bool {
    let result = ctx.api().create(&NewItem::pending(task)).await;
    finish(&ctx, &store, Mutation::Create, result)
}

pub async fn toggle_item(ctx: AppContext, store: UiStore, id: String, current: ItemStatus) -> bool {
    let result = ctx.api().set_status(&id, current).await;
    finish(&ctx, &store, Mutation::Toggle, result)
}

pub async fn remove_item(ctx: AppContext, store: UiStore, id: String) -> bool {
    let result = ctx.api().remove(&id).await;
    finish(&ctx, &store, Mutation::Remove, result)
}

fn finish<T>(ctx: &AppContext, store: &UiStore, mutation: Mutation, result: Result<T, ApiError>) -> bool {
    match &result {
        Ok(_) => log::info!("[ACTION] {} succeeded", mutation),
        Err(err) => log::warn!("[ACTION] {} failed: {}", mutation, err),
    }
    let MutationOutcome { notice, invalidate } = outcome(mutation, &result);
    if invalidate {
        ctx.invalidate();
    }
    store_notify(store, notice);
    result.is_ok()
}
