//! User data repository.
//!
//! Handles account creation, credential lookup, profile and balance updates,
//! and the account-deletion cascade. Email uniqueness checks run inside the
//! same transaction as the write that depends on them.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    model::user::{CreateUserParams, UpdateProfileParams, WithdrawParams},
    util::time::format_now,
};

const DEFAULT_ROLE: &str = "member";

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account if the email is not already registered.
    ///
    /// The uniqueness check and the insert share one transaction, so two
    /// concurrent sign-ups with the same email cannot both succeed.
    ///
    /// # Arguments
    /// - `params` - Validated sign-up fields (email, plaintext password is
    ///   NOT accepted here; `password_hash` must already be hashed)
    /// - `password_hash` - Hash to store for the new account
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The created user
    /// - `Ok(None)` - The email is already registered
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        params: &CreateUserParams,
        password_hash: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let taken = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(&params.email))
            .count(&txn)
            .await?
            > 0;

        if taken {
            txn.rollback().await?;
            return Ok(None);
        }

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email.clone()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            username: ActiveValue::Set(params.username.clone()),
            role: ActiveValue::Set(DEFAULT_ROLE.to_string()),
            point: ActiveValue::Set(0),
            created_time: ActiveValue::Set(format_now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(user))
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email is already registered.
    pub async fn email_taken(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates a user's email and username.
    ///
    /// # Returns
    /// - `Ok(true)` - Profile updated
    /// - `Ok(false)` - The new email belongs to a different user
    /// - `Err(DbErr)` - Database error
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: &UpdateProfileParams,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let conflicting = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(&params.email))
            .filter(entity::user::Column::Id.ne(user_id))
            .count(&txn)
            .await?
            > 0;

        if conflicting {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(entity::user::Column::Email, Expr::value(&params.email))
            .col_expr(
                entity::user::Column::Username,
                Expr::value(&params.username),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Replaces a user's stored password hash.
    pub async fn update_password(&self, user_id: i32, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::PasswordHash,
                Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies a signed delta to a user's point balance.
    pub async fn adjust_point(&self, user_id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Point,
                Expr::col(entity::user::Column::Point).add(delta),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes an account and everything it owns.
    ///
    /// One transaction removes the user's bookmarks and search histories,
    /// records the withdrawal reason, and deletes the user row. Headcount
    /// readings and places are community data and survive.
    ///
    /// # Arguments
    /// - `user_id` - Account to delete
    /// - `params` - Withdrawal reason and optional feedback
    pub async fn delete_account(
        &self,
        user_id: i32,
        params: &WithdrawParams,
    ) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Bookmark::delete_many()
            .filter(entity::bookmark::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::prelude::SearchHistory::delete_many()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .exec(&txn)
            .await?;

        entity::withdrawal_reason::ActiveModel {
            withdrawal_reason: ActiveValue::Set(params.withdrawal_reason.clone()),
            feedback: ActiveValue::Set(params.feedback.clone()),
            created_time: ActiveValue::Set(format_now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::User::delete_by_id(user_id).exec(&txn).await?;

        txn.commit().await?;

        Ok(())
    }
}
