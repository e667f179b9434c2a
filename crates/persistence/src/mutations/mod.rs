// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations.
//!
//! Mutations use Diesel DSL throughout; the only raw SQL is the
//! `last_insert_rowid()` helper exposed by `PersistenceBackend`.

pub mod employees;
pub mod reports;
pub mod sessions;
pub mod tasks;

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::sql_types::Text;

/// The database's current UTC timestamp, as written to `created_at` columns.
pub(crate) fn current_timestamp() -> SqlLiteral<Text> {
    sql::<Text>("CURRENT_TIMESTAMP")
}
